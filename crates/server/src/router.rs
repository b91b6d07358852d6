use axum::{
    routing::{get, put},
    Router,
};

use crate::api::handlers;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/search", get(handlers::global_search))
        .route("/api/feed/:category", get(handlers::feed))
        .route("/api/media/:source/:id", get(handlers::media_detail))
        .route("/api/media/:source/:id/scripts", get(handlers::media_scripts))
        .route("/api/person/:id", get(handlers::person_detail))
        .route(
            "/api/entries",
            put(handlers::upsert_entry).get(handlers::list_entries),
        )
        .with_state(state)
}
