//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub mod favourites;
pub mod notes;
pub mod users;

pub use favourites::{add_favourite, get_favourite, list_favourites, remove_favourite};
pub use notes::{add_note, get_note, get_notes, remove_note};
pub use users::add_user;

/// 201 Created with a Location header for the new resource
fn created<T: Serialize>(location: String, body: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
        .into_response()
}
