use catalog::{DetailedMedia, Person, ScriptLink, TechnicalSpecs, UnifiedMedia};
use imdb::TriviaItem;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Global search envelope. `error` marks a degraded (empty) response
/// caused by an upstream failure; the HTTP status stays 200.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct SearchResponse {
    pub films: Vec<UnifiedMedia>,
    pub series: Vec<UnifiedMedia>,
    pub people: Vec<Person>,
    pub error: bool,
}

impl SearchResponse {
    pub fn degraded() -> Self {
        Self {
            error: true,
            ..Self::default()
        }
    }
}

/// Feed envelope, same degradation convention as [`SearchResponse`].
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FeedResponse {
    pub results: Vec<DetailedMedia>,
    pub next_page: Option<i64>,
    pub error: bool,
}

impl FeedResponse {
    pub fn degraded() -> Self {
        Self {
            results: Vec::new(),
            next_page: None,
            error: true,
        }
    }
}

/// Aggregate detail payload: the detail record plus every best-effort
/// enrichment facet.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeepDetail {
    pub media: DetailedMedia,
    pub trivia: Vec<TriviaItem>,
    pub script_links: Vec<ScriptLink>,
    pub specs: TechnicalSpecs,
}

/// Person profile with their cross-referenced works.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PersonProfile {
    pub person: Person,
    pub biography: String,
    /// De-duplicated, most popular first.
    pub known_works: Vec<UnifiedMedia>,
}

/// One persisted per-user media entry.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct MediaEntry {
    pub user_id: String,
    pub media_id: String,
    pub kind: String,
    pub classification: Option<String>,
    pub note: Option<String>,
    pub rating: Option<f64>,
    pub updated_at: i64,
}

/// Upsert payload for a media entry. Absent fields clear the stored
/// value (full replacement, no partial merge).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpsertEntry {
    pub media_id: String,
    pub kind: String,
    pub classification: Option<String>,
    pub note: Option<String>,
    pub rating: Option<f64>,
}
