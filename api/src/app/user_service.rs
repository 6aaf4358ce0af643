//! User service
//!
//! Sign-in style user creation: a user is created the first time their
//! email is seen and returned unchanged afterwards.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::ports::UserRepository;
use crate::error::AppError;

/// Service for managing users
pub struct UserService<UR>
where
    UR: UserRepository + ?Sized,
{
    users: Arc<UR>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository + ?Sized,
{
    pub fn new(users: Arc<UR>) -> Self {
        Self { users }
    }

    /// Return the user with this email, creating it if none exists
    pub async fn add_user(&self, new_user: &NewUser) -> Result<User, AppError> {
        if let Some(existing) = self.users.user_by_email(&new_user.email).await? {
            tracing::debug!(user_id = %existing.id, "User already registered");
            return Ok(existing);
        }

        let user = self.users.add_new_user(new_user).await?;
        tracing::info!(user_id = %user.id, "Created user");

        Ok(user)
    }
}
