//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod note;
pub mod recipe;
pub mod user;

pub use note::{NewNote, Note, NoteId};
pub use recipe::{
    is_storable_step, FavouriteRecipe, NewFavourite, Recipe, RecipeId, STEP_SEPARATOR,
};
pub use user::{NewUser, User, UserId};
