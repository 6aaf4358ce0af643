//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod note_repo;
pub mod recipe_repo;
pub mod steps;
pub mod user_repo;


pub use note_repo::PostgresNoteRepository;
pub use recipe_repo::PostgresRecipeRepository;
pub use user_repo::PostgresUserRepository;
