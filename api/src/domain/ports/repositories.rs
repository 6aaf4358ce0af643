//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{
    FavouriteRecipe, NewFavourite, NewNote, NewUser, Note, NoteId, Recipe, RecipeId, User, UserId,
};
use crate::error::DomainError;

/// Repository for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check whether a user with this ID exists
    async fn user_exists(&self, id: UserId) -> Result<bool, DomainError>;

    /// Find a user by email
    async fn user_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by ID
    async fn get_user(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Create a new user
    async fn add_new_user(&self, user: &NewUser) -> Result<User, DomainError>;
}

/// Repository for recipes and the favourite links pointing at them
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Find the ID of the recipe with this title
    async fn recipe_id_by_title(&self, title: &str) -> Result<Option<RecipeId>, DomainError>;

    /// Check whether the user already has a recipe with this title in favourites
    async fn recipe_exists_in_fav(&self, title: &str, user_id: UserId)
        -> Result<bool, DomainError>;

    /// Create a recipe and favourite it for `favourite.user_id` in one transaction
    async fn add_recipe(&self, favourite: &NewFavourite) -> Result<FavouriteRecipe, DomainError>;

    /// Favourite an existing recipe, found by title, for a user
    async fn add_recipe_to_user(&self, user: &User, title: &str) -> Result<(), DomainError>;

    /// Get a recipe in its favourite read model
    async fn get_favourite_recipe(
        &self,
        id: RecipeId,
    ) -> Result<Option<FavouriteRecipe>, DomainError>;

    /// List a user's favourites, ordered by recipe ID
    async fn get_favs_by_user_id(&self, user_id: UserId)
        -> Result<Vec<FavouriteRecipe>, DomainError>;

    /// Remove a favourite link. Returns false if there was nothing to remove.
    async fn delete_favourite(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
    ) -> Result<bool, DomainError>;

    /// Find a recipe by ID
    async fn get_recipe(&self, id: RecipeId) -> Result<Option<Recipe>, DomainError>;
}

/// Repository for Note entities
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// List the notes a user wrote on a recipe, ordered by note ID
    async fn get_notes(&self, user_id: UserId, recipe_id: RecipeId)
        -> Result<Vec<Note>, DomainError>;

    /// Find a note by ID
    async fn get_note(&self, id: NoteId) -> Result<Option<Note>, DomainError>;

    /// Check whether a note with this ID exists
    async fn note_exists_by_id(&self, id: NoteId) -> Result<bool, DomainError>;

    /// Create a note for an existing user and recipe
    async fn add_note(
        &self,
        note: &NewNote,
        user: &User,
        recipe: &Recipe,
    ) -> Result<Note, DomainError>;

    /// Delete a note. Returns false if there was nothing to delete.
    async fn delete_note(&self, id: NoteId) -> Result<bool, DomainError>;
}
