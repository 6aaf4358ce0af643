//! Note service
//!
//! Notes belong to one (user, recipe) pair; both must exist when notes are
//! listed or created.

use std::sync::Arc;

use super::messages::{ID_NOT_FOUND, NOTE_ID_INVALID, USER_OR_RECIPE_NOT_FOUND};
use crate::domain::entities::{NewNote, Note, NoteId, Recipe, RecipeId, User, UserId};
use crate::domain::ports::{NoteRepository, RecipeRepository, UserRepository};
use crate::error::AppError;

/// Service for managing notes on recipes
pub struct NoteService<UR, RR, NR>
where
    UR: UserRepository + ?Sized,
    RR: RecipeRepository + ?Sized,
    NR: NoteRepository + ?Sized,
{
    users: Arc<UR>,
    recipes: Arc<RR>,
    notes: Arc<NR>,
}

impl<UR, RR, NR> NoteService<UR, RR, NR>
where
    UR: UserRepository + ?Sized,
    RR: RecipeRepository + ?Sized,
    NR: NoteRepository + ?Sized,
{
    pub fn new(users: Arc<UR>, recipes: Arc<RR>, notes: Arc<NR>) -> Self {
        Self {
            users,
            recipes,
            notes,
        }
    }

    /// Load the user and recipe a note refers to, or fail with a bad request
    async fn owner_and_recipe(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
    ) -> Result<(User, Recipe), AppError> {
        let user = self.users.get_user(user_id).await?;
        let recipe = self.recipes.get_recipe(recipe_id).await?;

        match (user, recipe) {
            (Some(user), Some(recipe)) => Ok((user, recipe)),
            _ => {
                tracing::debug!(%user_id, %recipe_id, "Unknown user or recipe for notes");
                Err(AppError::BadRequest(USER_OR_RECIPE_NOT_FOUND.to_string()))
            }
        }
    }

    /// List the notes a user wrote on a recipe
    pub async fn get_notes(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
    ) -> Result<Vec<Note>, AppError> {
        let (user, recipe) = self.owner_and_recipe(user_id, recipe_id).await?;
        Ok(self.notes.get_notes(user.id, recipe.id).await?)
    }

    /// Get a single note
    pub async fn get_note(&self, id: NoteId) -> Result<Note, AppError> {
        if !self.notes.note_exists_by_id(id).await? {
            return Err(AppError::BadRequest(NOTE_ID_INVALID.to_string()));
        }

        self.notes
            .get_note(id)
            .await?
            .ok_or_else(|| AppError::BadRequest(NOTE_ID_INVALID.to_string()))
    }

    /// Attach a note to a user's recipe
    pub async fn add_note(&self, note: &NewNote) -> Result<Note, AppError> {
        let (user, recipe) = self.owner_and_recipe(note.user_id, note.recipe_id).await?;

        let created = self.notes.add_note(note, &user, &recipe).await?;
        tracing::info!(
            note_id = %created.id,
            user_id = %user.id,
            recipe_id = %recipe.id,
            "Added note"
        );

        Ok(created)
    }

    /// Delete a note
    pub async fn remove_note(&self, id: NoteId) -> Result<(), AppError> {
        if !self.notes.delete_note(id).await? {
            return Err(AppError::BadRequest(ID_NOT_FOUND.to_string()));
        }

        tracing::info!(note_id = %id, "Removed note");
        Ok(())
    }
}
