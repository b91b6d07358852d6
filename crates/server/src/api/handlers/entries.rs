use axum::{
    extract::State,
    http::HeaderMap,
    Json,
};

use crate::error::{AppError, AppResult};
use crate::models::{MediaEntry, UpsertEntry};
use crate::services::EntryError;
use crate::state::AppState;

/// Stand-in for the external identity collaborator.
const USER_ID_HEADER: &str = "x-user-id";

fn user_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
}

impl From<EntryError> for AppError {
    fn from(e: EntryError) -> Self {
        match e {
            EntryError::Unauthorized => AppError::unauthorized(e.to_string()),
            EntryError::InvalidKind(_) => AppError::bad_request(e.to_string()),
            EntryError::Database(e) => AppError::Database(e),
        }
    }
}

/// Save or replace the caller's entry for a media work.
#[utoipa::path(
    put,
    path = "/api/entries",
    tag = "entries",
    request_body = UpsertEntry,
    responses(
        (status = 200, description = "Stored entry", body = MediaEntry),
        (status = 400, description = "Unknown media kind"),
        (status = 401, description = "No X-User-Id header")
    )
)]
pub async fn upsert_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpsertEntry>,
) -> AppResult<Json<MediaEntry>> {
    let entry = state.entries.upsert(user_id(&headers), &payload).await?;
    Ok(Json(entry))
}

/// List the caller's entries, most recently touched first.
#[utoipa::path(
    get,
    path = "/api/entries",
    tag = "entries",
    responses(
        (status = 200, description = "The caller's entries", body = Vec<MediaEntry>),
        (status = 401, description = "No X-User-Id header")
    )
)]
pub async fn list_entries(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<Vec<MediaEntry>>> {
    let entries = state.entries.entries_for_user(user_id(&headers)).await?;
    Ok(Json(entries))
}
