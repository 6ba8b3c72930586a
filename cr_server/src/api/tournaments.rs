//! Tournament JSON API handlers.
//!
//! Thin wrappers over [`ContentProvider`](chess_registry::ContentProvider);
//! every mutation goes through the shared store, so pages and the snapshot
//! feed see it immediately.
//!
//! # Examples
//!
//! Add a tournament:
//! ```bash
//! curl -X POST http://localhost:8080/api/v1/tournaments \
//!   -H "Content-Type: application/json" \
//!   -d '{"name":"Penang Open","location":"George Town","dates":"Jul 3-7, 2026"}'
//! ```

use super::{AppState, content_error_status, error_response};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chess_registry::{NewTournament, TournamentId, TournamentPatch, TournamentRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: TournamentId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EditModeBody {
    pub enabled: bool,
}

/// List every tournament in insertion order.
///
/// # Response
///
/// `200 OK` with an array of tournament records.
pub async fn list_tournaments(State(state): State<AppState>) -> Json<Vec<TournamentRecord>> {
    Json(state.provider.tournaments().await)
}

/// Add a tournament.
///
/// # Response
///
/// - `201 Created` with `{"id": <id>}`
/// - `422 Unprocessable Entity` if a required field is blank
pub async fn create_tournament(
    State(state): State<AppState>,
    Json(data): Json<NewTournament>,
) -> Response {
    match state.provider.add_tournament(data).await {
        Ok(id) => (StatusCode::CREATED, Json(CreatedResponse { id })).into_response(),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected tournament");
            error_response(content_error_status(&e), e)
        }
    }
}

/// Fetch one tournament.
///
/// # Response
///
/// - `200 OK` with the record
/// - `404 Not Found` if no tournament has this ID
pub async fn get_tournament(
    State(state): State<AppState>,
    Path(tournament_id): Path<TournamentId>,
) -> Response {
    match state.provider.get_tournament(tournament_id).await {
        Ok(record) => Json(record).into_response(),
        Err(e) => error_response(content_error_status(&e), e),
    }
}

/// Apply a partial update.
///
/// # Response
///
/// - `200 OK` with the updated record
/// - `404 Not Found` if no tournament has this ID
/// - `422 Unprocessable Entity` if the patch blanks a required field
pub async fn update_tournament(
    State(state): State<AppState>,
    Path(tournament_id): Path<TournamentId>,
    Json(patch): Json<TournamentPatch>,
) -> Response {
    match state
        .provider
        .update_tournament(tournament_id, &patch)
        .await
    {
        Ok(record) => Json(record).into_response(),
        Err(e) => error_response(content_error_status(&e), e),
    }
}

/// Remove a tournament.
///
/// # Response
///
/// - `204 No Content`
/// - `404 Not Found` if no tournament has this ID
pub async fn remove_tournament(
    State(state): State<AppState>,
    Path(tournament_id): Path<TournamentId>,
) -> Response {
    match state.provider.remove_tournament(tournament_id).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(content_error_status(&e), e),
    }
}

pub async fn get_edit_mode(State(state): State<AppState>) -> Json<EditModeBody> {
    Json(EditModeBody {
        enabled: state.provider.is_editing().await,
    })
}

/// Set admin edit mode; returns the new value
pub async fn set_edit_mode(
    State(state): State<AppState>,
    Json(body): Json<EditModeBody>,
) -> Json<EditModeBody> {
    state.provider.set_editing(body.enabled).await;
    tracing::info!(enabled = body.enabled, "Edit mode set via API");
    Json(body)
}
