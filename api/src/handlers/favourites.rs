//! Favourite handlers
//!
//! Endpoints for saving, listing and removing favourite recipes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::created;
use crate::app::AddFavouriteOutcome;
use crate::domain::entities::{FavouriteRecipe, NewFavourite, RecipeId, UserId};
use crate::error::AppError;
use crate::AppState;

/// Request body for saving a favourite
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavouriteRequest {
    pub user_id: i32,
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl From<AddFavouriteRequest> for NewFavourite {
    fn from(request: AddFavouriteRequest) -> Self {
        NewFavourite {
            user_id: UserId(request.user_id),
            title: request.title,
            ingredients: request.ingredients,
            instructions: request.instructions,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
    pub recipe_id: i32,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl From<FavouriteRecipe> for RecipeResponse {
    fn from(recipe: FavouriteRecipe) -> Self {
        RecipeResponse {
            user_id: recipe.user_id.map(|id| id.0),
            recipe_id: recipe.recipe_id.0,
            title: recipe.title,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
        }
    }
}

/// GET /favourites/:recipe_id
pub async fn get_favourite(
    State(state): State<AppState>,
    Path(recipe_id): Path<i32>,
) -> Result<Json<RecipeResponse>, AppError> {
    let recipe = state
        .favourite_service
        .get_favourite(RecipeId(recipe_id))
        .await?;

    Ok(Json(recipe.into()))
}

/// GET /users/:user_id/favourites
pub async fn list_favourites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<RecipeResponse>>, AppError> {
    let favourites = state
        .favourite_service
        .list_for_user(UserId(user_id))
        .await?;

    Ok(Json(favourites.into_iter().map(Into::into).collect()))
}

/// POST /favourites
///
/// Save a recipe to the user's favourites. Answers 201 when the recipe
/// was new, 200 when an existing recipe was linked.
pub async fn add_favourite(
    State(state): State<AppState>,
    Json(request): Json<AddFavouriteRequest>,
) -> Result<Response, AppError> {
    let outcome = state
        .favourite_service
        .add_favourite(&request.into())
        .await?;

    let response = match outcome {
        AddFavouriteOutcome::Created(recipe) => created(
            format!("/favourites/{}", recipe.recipe_id),
            RecipeResponse::from(recipe),
        ),
        AddFavouriteOutcome::Linked(recipe) => Json(RecipeResponse::from(recipe)).into_response(),
    };

    Ok(response)
}

/// DELETE /users/:user_id/favourites/:recipe_id
pub async fn remove_favourite(
    State(state): State<AppState>,
    Path((user_id, recipe_id)): Path<(i32, i32)>,
) -> Result<StatusCode, AppError> {
    state
        .favourite_service
        .remove_favourite(UserId(user_id), RecipeId(recipe_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
