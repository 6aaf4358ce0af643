//! Favourite service
//!
//! Saving, listing and removing a user's favourite recipes. Recipes are
//! shared: favouriting a title that already exists links the existing
//! recipe instead of creating a second one.

use std::sync::Arc;

use super::messages::{
    already_in_favourites, step_not_storable, ID_NOT_FOUND, INCORRECT_RECIPE_ID, TITLE_REQUIRED,
    USER_NOT_FOUND,
};
use crate::domain::entities::{FavouriteRecipe, NewFavourite, RecipeId, UserId};
use crate::domain::ports::{RecipeRepository, UserRepository};
use crate::error::AppError;

/// Result of saving a favourite
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddFavouriteOutcome {
    /// The title was new: a recipe and the favourite link were created
    Created(FavouriteRecipe),
    /// The recipe already existed and was linked to the user
    Linked(FavouriteRecipe),
}

/// Service for managing favourite recipes
pub struct FavouriteService<UR, RR>
where
    UR: UserRepository + ?Sized,
    RR: RecipeRepository + ?Sized,
{
    users: Arc<UR>,
    recipes: Arc<RR>,
}

impl<UR, RR> FavouriteService<UR, RR>
where
    UR: UserRepository + ?Sized,
    RR: RecipeRepository + ?Sized,
{
    pub fn new(users: Arc<UR>, recipes: Arc<RR>) -> Self {
        Self { users, recipes }
    }

    /// Get a recipe by ID
    pub async fn get_favourite(&self, recipe_id: RecipeId) -> Result<FavouriteRecipe, AppError> {
        self.recipes
            .get_favourite_recipe(recipe_id)
            .await?
            .ok_or_else(|| AppError::NotFound(INCORRECT_RECIPE_ID.to_string()))
    }

    /// List a user's favourites
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<FavouriteRecipe>, AppError> {
        if !self.users.user_exists(user_id).await? {
            tracing::debug!(%user_id, "Listing favourites for unknown user");
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        Ok(self.recipes.get_favs_by_user_id(user_id).await?)
    }

    /// Save a recipe to a user's favourites
    ///
    /// 1. Unknown user: not found
    /// 2. Title already in the user's favourites: conflict
    /// 3. Unknown title: create recipe and link ([`AddFavouriteOutcome::Created`])
    /// 4. Known title: link the existing recipe ([`AddFavouriteOutcome::Linked`])
    pub async fn add_favourite(
        &self,
        favourite: &NewFavourite,
    ) -> Result<AddFavouriteOutcome, AppError> {
        if favourite.title.trim().is_empty() {
            return Err(AppError::BadRequest(TITLE_REQUIRED.to_string()));
        }

        if let Some(step) = favourite.invalid_step() {
            return Err(AppError::BadRequest(step_not_storable(step)));
        }

        let user_id = favourite.user_id;

        if !self.users.user_exists(user_id).await? {
            tracing::debug!(%user_id, "Favourite for unknown user");
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        if self
            .recipes
            .recipe_exists_in_fav(&favourite.title, user_id)
            .await?
        {
            tracing::debug!(%user_id, title = %favourite.title, "Duplicate favourite");
            return Err(AppError::Conflict(already_in_favourites(user_id)));
        }

        let Some(recipe_id) = self.recipes.recipe_id_by_title(&favourite.title).await? else {
            let created = self.recipes.add_recipe(favourite).await?;
            tracing::info!(%user_id, recipe_id = %created.recipe_id, "Created favourite recipe");
            return Ok(AddFavouriteOutcome::Created(created));
        };

        let user = self
            .users
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        self.recipes
            .add_recipe_to_user(&user, &favourite.title)
            .await?;
        tracing::info!(%user_id, %recipe_id, "Linked existing recipe to favourites");

        let mut recipe = self
            .recipes
            .get_favourite_recipe(recipe_id)
            .await?
            .ok_or_else(|| AppError::NotFound(INCORRECT_RECIPE_ID.to_string()))?;
        recipe.user_id = Some(user.id);

        Ok(AddFavouriteOutcome::Linked(recipe))
    }

    /// Remove a recipe from a user's favourites
    pub async fn remove_favourite(
        &self,
        user_id: UserId,
        recipe_id: RecipeId,
    ) -> Result<(), AppError> {
        if !self.recipes.delete_favourite(user_id, recipe_id).await? {
            return Err(AppError::BadRequest(ID_NOT_FOUND.to_string()));
        }

        tracing::info!(%user_id, %recipe_id, "Removed favourite");
        Ok(())
    }
}
