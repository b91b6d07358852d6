use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::{AppError, AppResult};
use crate::models::FeedResponse;
use crate::services::FeedCategory;
use crate::state::AppState;

use super::FeedQuery;

/// One page of a trending feed.
///
/// Categories: `film`, `series`, `anime`, `western_animation`.
#[utoipa::path(
    get,
    path = "/api/feed/{category}",
    tag = "feed",
    params(
        ("category" = String, Path, description = "Feed category"),
        FeedQuery
    ),
    responses(
        (status = 200, description = "Feed page; `error` is set when the upstream failed", body = FeedResponse),
        (status = 400, description = "Unknown category")
    )
)]
pub async fn feed(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<FeedQuery>,
) -> AppResult<Json<FeedResponse>> {
    let category = FeedCategory::parse(&category)
        .ok_or_else(|| AppError::bad_request(format!("unknown feed category '{}'", category)))?;
    let page = query.page.unwrap_or(1).max(1);

    match state.feed.trending(category, page).await {
        Ok(feed_page) => Ok(Json(FeedResponse {
            results: feed_page.results,
            next_page: feed_page.next_page,
            error: false,
        })),
        Err(e) => {
            tracing::warn!("Feed {:?} page {} failed: {}", category, page, e);
            Ok(Json(FeedResponse::degraded()))
        }
    }
}
