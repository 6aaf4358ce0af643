//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services check preconditions against the repository ports and turn
//! domain outcomes into `AppError`s the handlers can report.

pub mod favourite_service;
pub mod messages;
pub mod note_service;
pub mod user_service;

pub use favourite_service::{AddFavouriteOutcome, FavouriteService};
pub use note_service::NoteService;
pub use user_service::UserService;
