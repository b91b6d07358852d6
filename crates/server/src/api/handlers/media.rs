use axum::{
    extract::{Path, State},
    Json,
};
use catalog::{MediaNamespace, ScriptLink};

use crate::error::{AppError, AppResult};
use crate::models::DeepDetail;
use crate::services::DeepDataError;
use crate::state::AppState;

fn parse_source(source: &str) -> AppResult<MediaNamespace> {
    MediaNamespace::parse(source)
        .ok_or_else(|| AppError::bad_request(format!("unknown media source '{}'", source)))
}

impl From<DeepDataError> for AppError {
    fn from(e: DeepDataError) -> Self {
        match e {
            DeepDataError::Tmdb(e) => e.into(),
            DeepDataError::Anilist(e) => e.into(),
        }
    }
}

/// Full detail payload with trivia, script links and technical specs.
///
/// `source` is the namespace the id came from (the listing that surfaced
/// it), not the display kind: a documentary series is fetched as
/// `series`.
#[utoipa::path(
    get,
    path = "/api/media/{source}/{id}",
    tag = "media",
    params(
        ("source" = String, Path, description = "Source namespace: film, series or anime"),
        ("id" = i64, Path, description = "Provider id within the source namespace")
    ),
    responses(
        (status = 200, description = "Aggregated media detail", body = DeepDetail),
        (status = 400, description = "Unknown media source"),
        (status = 404, description = "Title not found upstream"),
        (status = 502, description = "Upstream provider failure")
    )
)]
pub async fn media_detail(
    State(state): State<AppState>,
    Path((source, id)): Path<(String, i64)>,
) -> AppResult<Json<DeepDetail>> {
    let source = parse_source(&source)?;
    let detail = state.deep.deep_details(source, id).await?;
    Ok(Json(detail))
}

/// Predicted screenplay locations for one title.
#[utoipa::path(
    get,
    path = "/api/media/{source}/{id}/scripts",
    tag = "media",
    params(
        ("source" = String, Path, description = "Source namespace: film, series or anime"),
        ("id" = i64, Path, description = "Provider id within the source namespace")
    ),
    responses(
        (status = 200, description = "Script link predictions", body = Vec<ScriptLink>),
        (status = 400, description = "Unknown media source"),
        (status = 404, description = "Title not found upstream"),
        (status = 502, description = "Upstream provider failure")
    )
)]
pub async fn media_scripts(
    State(state): State<AppState>,
    Path((source, id)): Path<(String, i64)>,
) -> AppResult<Json<Vec<ScriptLink>>> {
    let source = parse_source(&source)?;
    let links = state.deep.script_links(source, id).await?;
    Ok(Json(links))
}
