use std::collections::HashMap;

use serde::{Deserialize, Serialize};
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Media type accepted by the trending endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Movie {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    #[serde(default)]
    pub original_language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TvShow {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    #[serde(default)]
    pub original_language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PersonSummary {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub profile_path: Option<String>,
    pub known_for_department: Option<String>,
}

/// Search result from the multi search endpoint.
///
/// Unknown media types are discarded at the decode boundary, so downstream
/// code only ever sees these three validated shapes.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(tag = "media_type", rename_all = "snake_case")]
pub enum SearchMultiResult {
    Movie(Movie),
    Tv(TvShow),
    Person(PersonSummary),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub page: i64,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: i64,
    #[serde(default)]
    pub total_results: i64,
}

// ============ Appended sub-resources ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Genre {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CastCredit {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub character: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CrewCredit {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub job: String,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastCredit>,
    #[serde(default)]
    pub crew: Vec<CrewCredit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Video {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub site: String,
    #[serde(rename = "type", default)]
    pub video_type: String,
    #[serde(default)]
    pub official: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct VideoList {
    #[serde(default)]
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Keyword {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Keyword container; movies nest under `keywords`, TV under `results`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct KeywordList {
    #[serde(default)]
    pub keywords: Vec<Keyword>,
    #[serde(default)]
    pub results: Vec<Keyword>,
}

impl KeywordList {
    pub fn items(&self) -> &[Keyword] {
        if self.keywords.is_empty() {
            &self.results
        } else {
            &self.keywords
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ExternalIds {
    pub imdb_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct WatchProvider {
    pub provider_id: i64,
    #[serde(default)]
    pub provider_name: String,
    pub logo_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ProviderOfferings {
    #[serde(default)]
    pub flatrate: Vec<WatchProvider>,
    #[serde(default)]
    pub buy: Vec<WatchProvider>,
    #[serde(default)]
    pub rent: Vec<WatchProvider>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct WatchProviders {
    #[serde(default)]
    pub results: HashMap<String, ProviderOfferings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Recommendation {
    pub id: i64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub poster_path: Option<String>,
    pub media_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreatedBy {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub profile_path: Option<String>,
}

// ============ Movie Details ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct MovieDetails {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub runtime: Option<i64>,
    pub status: Option<String>,
    #[serde(default)]
    pub budget: i64,
    #[serde(default)]
    pub revenue: i64,
    pub imdb_id: Option<String>,
    pub credits: Option<Credits>,
    pub videos: Option<VideoList>,
    pub keywords: Option<KeywordList>,
    pub recommendations: Option<PaginatedResponse<Recommendation>>,
    #[serde(rename = "watch/providers")]
    pub watch_providers: Option<WatchProviders>,
    pub external_ids: Option<ExternalIds>,
}

// ============ TV Show Details ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TvShowDetails {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub number_of_seasons: i64,
    pub status: Option<String>,
    #[serde(default)]
    pub created_by: Vec<CreatedBy>,
    pub credits: Option<Credits>,
    pub videos: Option<VideoList>,
    pub keywords: Option<KeywordList>,
    pub recommendations: Option<PaginatedResponse<Recommendation>>,
    #[serde(rename = "watch/providers")]
    pub watch_providers: Option<WatchProviders>,
    pub external_ids: Option<ExternalIds>,
}

// ============ Person Details ============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PersonCredit {
    pub id: i64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub media_type: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    pub character: Option<String>,
    pub job: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CombinedCredits {
    #[serde(default)]
    pub cast: Vec<PersonCredit>,
    #[serde(default)]
    pub crew: Vec<PersonCredit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PersonDetails {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub profile_path: Option<String>,
    pub known_for_department: Option<String>,
    #[serde(default)]
    pub biography: String,
    pub combined_credits: Option<CombinedCredits>,
    pub external_ids: Option<ExternalIds>,
}
