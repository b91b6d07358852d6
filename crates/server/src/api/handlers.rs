use serde::Deserialize;
use utoipa::IntoParams;

pub mod entries;
pub mod feed;
pub mod media;
pub mod person;
pub mod search;

pub use entries::{list_entries, upsert_entry};
pub use feed::feed;
pub use media::{media_detail, media_scripts};
pub use person::person_detail;
pub use search::global_search;

/// Query parameters for global search.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Search text. Queries shorter than 2 characters return empty.
    pub q: String,
    /// Mood tag to filter films and series by.
    pub mood: Option<String>,
    /// Keep only obscure but well-rated results.
    pub hidden_gems: Option<bool>,
}

/// Query parameters for feed pagination.
#[derive(Debug, Deserialize, IntoParams)]
pub struct FeedQuery {
    /// 1-based page cursor; defaults to the first page.
    pub page: Option<i64>,
}
