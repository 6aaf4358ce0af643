//! Client-facing failure messages

pub const USER_NOT_FOUND: &str = "User not found.";
pub const INCORRECT_RECIPE_ID: &str = "Incorrect recipe Id.";
pub const ID_NOT_FOUND: &str = "Id not found.";
pub const NOTE_ID_INVALID: &str = "NoteId is invalid.";
pub const USER_OR_RECIPE_NOT_FOUND: &str = "User or recipe not found.";
pub const TITLE_REQUIRED: &str = "Title is required.";

/// Message for an ingredient or instruction that cannot be stored
pub fn step_not_storable(step: &str) -> String {
    format!(
        "Step '{}' must not be empty or contain '{}'.",
        step,
        crate::domain::entities::STEP_SEPARATOR
    )
}

/// Conflict message for a recipe the user already saved
pub fn already_in_favourites(user_id: impl std::fmt::Display) -> String {
    format!("Item already in favourites for user {}.", user_id)
}
