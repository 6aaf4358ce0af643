//! Note domain entity

use serde::{Deserialize, Serialize};

use super::recipe::RecipeId;
use super::user::UserId;

/// Unique identifier for a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoteId(pub i32);

impl From<i32> for NoteId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free text attached to one (user, recipe) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub note_text: String,
    pub user_id: UserId,
    pub recipe_id: RecipeId,
}

/// Data needed to create a note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub note_text: String,
    pub user_id: UserId,
    pub recipe_id: RecipeId,
}
