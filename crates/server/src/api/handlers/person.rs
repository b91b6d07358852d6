use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::models::PersonProfile;
use crate::state::AppState;

/// Person profile with their cross-referenced works.
#[utoipa::path(
    get,
    path = "/api/person/{id}",
    tag = "media",
    params(
        ("id" = i64, Path, description = "TMDB person id")
    ),
    responses(
        (status = 200, description = "Person profile", body = PersonProfile),
        (status = 404, description = "Person not found upstream"),
        (status = 502, description = "Upstream provider failure")
    )
)]
pub async fn person_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PersonProfile>> {
    let profile = state.deep.person_profile(id).await?;
    Ok(Json(profile))
}
