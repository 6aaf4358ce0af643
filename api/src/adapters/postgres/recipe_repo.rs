//! PostgreSQL adapter for RecipeRepository
//!
//! Covers the `recipes` and `favourites` tables.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use super::steps::{flatten_steps, split_steps};
use crate::domain::entities::{FavouriteRecipe, NewFavourite, Recipe, RecipeId, User, UserId};
use crate::domain::ports::RecipeRepository;
use crate::entity::{favourites, recipes};
use crate::error::DomainError;

/// PostgreSQL implementation of RecipeRepository
pub struct PostgresRecipeRepository {
    db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecipeRepository for PostgresRecipeRepository {
    async fn recipe_id_by_title(&self, title: &str) -> Result<Option<RecipeId>, DomainError> {
        let result = recipes::Entity::find()
            .filter(recipes::Column::Title.eq(title))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| RecipeId(m.id)))
    }

    async fn recipe_exists_in_fav(
        &self,
        title: &str,
        user_id: UserId,
    ) -> Result<bool, DomainError> {
        let count = favourites::Entity::find()
            .inner_join(recipes::Entity)
            .filter(favourites::Column::UserId.eq(user_id.0))
            .filter(recipes::Column::Title.eq(title))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    async fn add_recipe(&self, favourite: &NewFavourite) -> Result<FavouriteRecipe, DomainError> {
        let ingredients = flatten_steps(&favourite.ingredients)?;
        let instructions = flatten_steps(&favourite.instructions)?;

        // Recipe and favourite link commit together; dropping `txn` on error rolls back
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let recipe = recipes::ActiveModel {
            title: Set(favourite.title.clone()),
            ingredients: Set(ingredients),
            instructions: Set(instructions),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        favourites::ActiveModel {
            user_id: Set(favourite.user_id.0),
            recipe_id: Set(recipe.id),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(FavouriteRecipe::from_recipe(
            recipe.into(),
            Some(favourite.user_id),
        ))
    }

    async fn add_recipe_to_user(&self, user: &User, title: &str) -> Result<(), DomainError> {
        let recipe_id = self
            .recipe_id_by_title(title)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Recipe '{}'", title)))?;

        favourites::ActiveModel {
            user_id: Set(user.id.0),
            recipe_id: Set(recipe_id.0),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn get_favourite_recipe(
        &self,
        id: RecipeId,
    ) -> Result<Option<FavouriteRecipe>, DomainError> {
        let result = recipes::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| FavouriteRecipe::from_recipe(m.into(), None)))
    }

    async fn get_favs_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Vec<FavouriteRecipe>, DomainError> {
        let results = recipes::Entity::find()
            .inner_join(favourites::Entity)
            .filter(favourites::Column::UserId.eq(user_id.0))
            .order_by_asc(recipes::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results
            .into_iter()
            .map(|m| FavouriteRecipe::from_recipe(m.into(), Some(user_id)))
            .collect())
    }

    async fn delete_favourite(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
    ) -> Result<bool, DomainError> {
        let result = favourites::Entity::delete_many()
            .filter(favourites::Column::UserId.eq(user_id.0))
            .filter(favourites::Column::RecipeId.eq(recipe_id.0))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }

    async fn get_recipe(&self, id: RecipeId) -> Result<Option<Recipe>, DomainError> {
        let result = recipes::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }
}

/// Convert SeaORM model to domain entity
impl From<recipes::Model> for Recipe {
    fn from(model: recipes::Model) -> Self {
        Recipe {
            id: RecipeId(model.id),
            title: model.title,
            ingredients: split_steps(&model.ingredients),
            instructions: split_steps(&model.instructions),
        }
    }
}
