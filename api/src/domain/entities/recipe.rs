//! Recipe and favourite domain entities
//!
//! Recipes are shared between users and deduplicated by title. A favourite
//! links a user to a recipe.

use serde::{Deserialize, Serialize};

use super::user::UserId;

/// Separator between steps when a step list is stored as one string
pub const STEP_SEPARATOR: &str = "|";

/// Whether a step survives being joined with [`STEP_SEPARATOR`] and split again
pub fn is_storable_step(step: &str) -> bool {
    !step.is_empty() && !step.contains(STEP_SEPARATOR)
}

/// Unique identifier for a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecipeId(pub i32);

impl From<i32> for RecipeId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// Read model of a recipe as seen from a user's favourites
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavouriteRecipe {
    /// Owner of the favourite, when the lookup was scoped to a user
    pub user_id: Option<UserId>,
    pub recipe_id: RecipeId,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl FavouriteRecipe {
    /// Project a recipe into the favourite read model
    pub fn from_recipe(recipe: Recipe, user_id: Option<UserId>) -> Self {
        Self {
            user_id,
            recipe_id: recipe.id,
            title: recipe.title,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
        }
    }
}

/// Data needed to favourite a recipe, creating it if the title is new
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFavourite {
    pub user_id: UserId,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl NewFavourite {
    /// First ingredient or instruction that cannot be stored
    pub fn invalid_step(&self) -> Option<&str> {
        self.ingredients
            .iter()
            .chain(&self.instructions)
            .map(String::as_str)
            .find(|step| !is_storable_step(step))
    }
}
