use axum::{
    extract::{Query, State},
    Json,
};

use crate::models::SearchResponse;
use crate::services::SearchFilters;
use crate::state::AppState;

use super::SearchQuery;

/// Search films, series and people in one call.
#[utoipa::path(
    get,
    path = "/api/search",
    tag = "search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Partitioned search results; `error` is set when the upstream failed", body = SearchResponse)
    )
)]
pub async fn global_search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let filters = SearchFilters {
        mood: query.mood,
        hidden_gems: query.hidden_gems.unwrap_or(false),
    };

    match state.search.global_search(&query.q, &filters).await {
        Ok(response) => Json(response),
        Err(e) => {
            // Degrade to an empty flagged envelope, never a 5xx.
            tracing::warn!("Search failed for '{}': {}", query.q, e);
            Json(SearchResponse::degraded())
        }
    }
}
