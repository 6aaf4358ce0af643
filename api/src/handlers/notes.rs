//! Note handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};

use super::created;
use crate::domain::entities::{NewNote, Note, NoteId, RecipeId, UserId};
use crate::error::AppError;
use crate::AppState;

/// Request body for adding a note
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddNoteRequest {
    pub note_text: String,
    pub user_id: i32,
    pub recipe_id: i32,
}

impl From<AddNoteRequest> for NewNote {
    fn from(request: AddNoteRequest) -> Self {
        NewNote {
            note_text: request.note_text,
            user_id: UserId(request.user_id),
            recipe_id: RecipeId(request.recipe_id),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub note_id: i32,
    pub note_text: String,
    pub user_id: i32,
    pub recipe_id: i32,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        NoteResponse {
            note_id: note.id.0,
            note_text: note.note_text,
            user_id: note.user_id.0,
            recipe_id: note.recipe_id.0,
        }
    }
}

/// GET /users/:user_id/recipes/:recipe_id/notes
pub async fn get_notes(
    State(state): State<AppState>,
    Path((user_id, recipe_id)): Path<(i32, i32)>,
) -> Result<Json<Vec<NoteResponse>>, AppError> {
    let notes = state
        .note_service
        .get_notes(UserId(user_id), RecipeId(recipe_id))
        .await?;

    Ok(Json(notes.into_iter().map(Into::into).collect()))
}

/// GET /notes/:note_id
pub async fn get_note(
    State(state): State<AppState>,
    Path(note_id): Path<i32>,
) -> Result<Json<NoteResponse>, AppError> {
    let note = state.note_service.get_note(NoteId(note_id)).await?;
    Ok(Json(note.into()))
}

/// POST /notes
pub async fn add_note(
    State(state): State<AppState>,
    Json(request): Json<AddNoteRequest>,
) -> Result<Response, AppError> {
    let note = state.note_service.add_note(&request.into()).await?;

    Ok(created(
        format!("/notes/{}", note.id),
        NoteResponse::from(note),
    ))
}

/// DELETE /notes/:note_id
pub async fn remove_note(
    State(state): State<AppState>,
    Path(note_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.note_service.remove_note(NoteId(note_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
