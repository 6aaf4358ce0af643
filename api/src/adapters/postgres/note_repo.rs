//! PostgreSQL adapter for NoteRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::entities::{NewNote, Note, NoteId, Recipe, RecipeId, User, UserId};
use crate::domain::ports::NoteRepository;
use crate::entity::notes;
use crate::error::DomainError;

/// PostgreSQL implementation of NoteRepository
pub struct PostgresNoteRepository {
    db: DatabaseConnection,
}

impl PostgresNoteRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NoteRepository for PostgresNoteRepository {
    async fn get_notes(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
    ) -> Result<Vec<Note>, DomainError> {
        let results = notes::Entity::find()
            .filter(notes::Column::UserId.eq(user_id.0))
            .filter(notes::Column::RecipeId.eq(recipe_id.0))
            .order_by_asc(notes::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn get_note(&self, id: NoteId) -> Result<Option<Note>, DomainError> {
        let result = notes::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn note_exists_by_id(&self, id: NoteId) -> Result<bool, DomainError> {
        let count = notes::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    async fn add_note(
        &self,
        note: &NewNote,
        user: &User,
        recipe: &Recipe,
    ) -> Result<Note, DomainError> {
        let model = notes::ActiveModel {
            note_text: Set(note.note_text.clone()),
            user_id: Set(user.id.0),
            recipe_id: Set(recipe.id.0),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn delete_note(&self, id: NoteId) -> Result<bool, DomainError> {
        let result = notes::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

/// Convert SeaORM model to domain entity
impl From<notes::Model> for Note {
    fn from(model: notes::Model) -> Self {
        Note {
            id: NoteId(model.id),
            note_text: model.note_text,
            user_id: UserId(model.user_id),
            recipe_id: RecipeId(model.recipe_id),
        }
    }
}
