//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{
    FavouriteRecipe, NewFavourite, NewNote, NewUser, Note, NoteId, Recipe, RecipeId, User, UserId,
};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Create a test user with default values
pub fn test_user() -> User {
    User {
        id: UserId(1),
        name: "Jason".to_string(),
        email: "jason@gmail.com".to_string(),
        image_url: Some("www.google.com".to_string()),
    }
}

/// Create a test user with a specific id, name and derived email
pub fn test_user_named(id: i32, name: &str) -> User {
    User {
        id: UserId(id),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        image_url: None,
    }
}

/// Sign-in payload matching `test_user`
pub fn new_user() -> NewUser {
    NewUser {
        name: "Jason".to_string(),
        email: "jason@gmail.com".to_string(),
        image_url: Some("www.google.com".to_string()),
    }
}

/// Create a test recipe with default values
pub fn test_recipe() -> Recipe {
    Recipe {
        id: RecipeId(1),
        title: "Lekker eten".to_string(),
        ingredients: owned(&["Ei", "spek", "pistolet"]),
        instructions: owned(&["Bak in pan", "Snijd broodje open", "Doe ei op broodje"]),
    }
}

/// Create a test recipe with a specific id and title
pub fn test_recipe_titled(id: i32, title: &str) -> Recipe {
    Recipe {
        id: RecipeId(id),
        title: title.to_string(),
        ingredients: owned(&["Egg", "Bacon", "Little baguette"]),
        instructions: owned(&["Fry in pan", "Cut open bread", "Put egg on bread"]),
    }
}

/// Favourite payload for a title nobody has saved yet
pub fn new_favourite(user_id: UserId) -> NewFavourite {
    NewFavourite {
        user_id,
        title: "Niet bestaand recept".to_string(),
        ingredients: owned(&["Toverbal", "Feeënstof"]),
        instructions: owned(&["Geloof in magie", "gebruik je fantasie"]),
    }
}

/// Favourite read model for a recipe owned by a user
pub fn test_favourite(recipe: &Recipe, user_id: UserId) -> FavouriteRecipe {
    FavouriteRecipe::from_recipe(recipe.clone(), Some(user_id))
}

/// Note payload for a user and recipe
pub fn new_note(user_id: UserId, recipe_id: RecipeId) -> NewNote {
    NewNote {
        note_text: "Hello".to_string(),
        user_id,
        recipe_id,
    }
}

/// Create a test note with default values
pub fn test_note(id: i32, user_id: UserId, recipe_id: RecipeId) -> Note {
    Note {
        id: NoteId(id),
        note_text: "Test note.".to_string(),
        user_id,
        recipe_id,
    }
}
