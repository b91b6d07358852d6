use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::Classification;

/// Content kind of a canonical media record.
///
/// Set at construction and never mutated. Ids are only unique within one
/// `(provider, kind)` namespace, so the kind travels with the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Film,
    Series,
    Documentary,
    Anime,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Film => "film",
            MediaKind::Series => "series",
            MediaKind::Documentary => "documentary",
            MediaKind::Anime => "anime",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "film" => Some(MediaKind::Film),
            "series" => Some(MediaKind::Series),
            "documentary" => Some(MediaKind::Documentary),
            "anime" => Some(MediaKind::Anime),
            _ => None,
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider namespace an id belongs to, i.e. the endpoint it came from.
///
/// Distinct from [`MediaKind`]: a documentary series displays as
/// `Documentary` but its id still lives in the series namespace, and a
/// detail fetch must go back to the same endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaNamespace {
    Film,
    Series,
    Anime,
}

impl MediaNamespace {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaNamespace::Film => "film",
            MediaNamespace::Series => "series",
            MediaNamespace::Anime => "anime",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "film" => Some(MediaNamespace::Film),
            "series" => Some(MediaNamespace::Series),
            "anime" => Some(MediaNamespace::Anime),
            _ => None,
        }
    }
}

impl std::fmt::Display for MediaNamespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Rating {
    pub average: f64,
    pub count: i64,
    /// Whether the sample is large enough to surface the score.
    pub show_badge: bool,
}

impl Rating {
    const BADGE_THRESHOLD: i64 = 100;

    pub fn from_votes(average: f64, count: i64) -> Self {
        Self {
            average,
            count,
            show_badge: count > Self::BADGE_THRESHOLD,
        }
    }
}

/// Summary projection of one media work, shared by every provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UnifiedMedia {
    pub id: String,
    pub title: String,
    pub kind: MediaKind,
    pub poster_url: Option<String>,
    pub year: Option<i32>,
    pub classification: Classification,
    pub rating: Rating,
    pub genres: Vec<String>,
    /// Upstream popularity score, kept for post-fetch filtering.
    pub popularity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CastMember {
    pub person_id: String,
    pub name: String,
    pub character: String,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CrewMember {
    pub person_id: String,
    pub name: String,
    pub job: String,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Financials {
    pub budget: i64,
    pub revenue: i64,
}

/// One streaming/purchase offering, deduplicated across offer types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct StreamingProvider {
    pub provider_id: i64,
    pub name: String,
    pub logo_url: Option<String>,
}

/// Compact pointer to a related work from the recommendation list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct RelatedTitle {
    pub id: String,
    pub title: String,
    pub poster_url: Option<String>,
    pub kind: MediaKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SoundtrackEntry {
    pub title: String,
    pub artist: String,
    pub scene: Option<String>,
}

/// Full projection built on demand for a detail view; never persisted as
/// a whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct DetailedMedia {
    pub summary: UnifiedMedia,
    pub overview: String,
    pub backdrop_url: Option<String>,
    pub runtime_label: Option<String>,
    pub status_label: Option<String>,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
    pub composers: Vec<CrewMember>,
    pub soundtrack: Vec<SoundtrackEntry>,
    pub trailer_url: Option<String>,
    pub financials: Option<Financials>,
    pub providers: Vec<StreamingProvider>,
    pub recommendations: Vec<RelatedTitle>,
    pub imdb_id: Option<String>,
    pub keywords: Vec<String>,
}

/// Person record from the people partition of a search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Person {
    pub id: String,
    pub name: String,
    pub photo_url: Option<String>,
    pub known_for: Option<String>,
}

/// One page of a cursor-paginated feed.
///
/// `next_page` is `None` exactly when the upstream reports no further
/// pages; result order is upstream order minus dropped items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct FeedPage<T> {
    pub results: Vec<T>,
    pub next_page: Option<i64>,
}

impl<T> FeedPage<T> {
    /// Compute the cursor for the following page.
    pub fn cursor(page: i64, total_pages: i64) -> Option<i64> {
        if page < total_pages {
            Some(page + 1)
        } else {
            None
        }
    }
}
