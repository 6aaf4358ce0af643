//! User handlers
//!
//! Sign-in style registration.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use crate::AppState;

/// Request body for adding a user
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserRequest {
    pub name: String,
    /// Users are matched on email
    pub email: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<AddUserRequest> for NewUser {
    fn from(request: AddUserRequest) -> Self {
        NewUser {
            name: request.name,
            email: request.email,
            image_url: request.image_url,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id.0,
            name: user.name,
            email: user.email,
            image_url: user.image_url,
        }
    }
}

/// POST /users
///
/// Sign a user in. Returns the existing user for a known email,
/// otherwise creates one. Both cases answer 200.
pub async fn add_user(
    State(state): State<AppState>,
    Json(request): Json<AddUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.add_user(&request.into()).await?;
    Ok(Json(user.into()))
}
