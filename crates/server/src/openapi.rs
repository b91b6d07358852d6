use utoipa::OpenApi;

use crate::models::{
    DeepDetail, FeedResponse, MediaEntry, PersonProfile, SearchResponse, UpsertEntry,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CineChive API",
        version = "1.0.0"
    ),
    paths(
        crate::api::handlers::search::global_search,
        crate::api::handlers::feed::feed,
        crate::api::handlers::media::media_detail,
        crate::api::handlers::media::media_scripts,
        crate::api::handlers::person::person_detail,
        crate::api::handlers::entries::upsert_entry,
        crate::api::handlers::entries::list_entries,
    ),
    tags(
        (name = "search", description = "Global search across films, series and people"),
        (name = "feed", description = "Trending feeds per category"),
        (name = "media", description = "Aggregated media detail and enrichment"),
        (name = "entries", description = "Per-user media entries")
    ),
    components(schemas(
        SearchResponse,
        FeedResponse,
        DeepDetail,
        PersonProfile,
        MediaEntry,
        UpsertEntry,
        catalog::UnifiedMedia,
        catalog::DetailedMedia,
        catalog::Classification,
        catalog::MediaKind,
        catalog::Rating,
        catalog::CastMember,
        catalog::CrewMember,
        catalog::Financials,
        catalog::StreamingProvider,
        catalog::RelatedTitle,
        catalog::SoundtrackEntry,
        catalog::Person,
        catalog::ScriptLink,
        catalog::TechnicalSpecs,
        imdb::TriviaItem,
        imdb::TriviaCategory,
    ))
)]
pub struct ApiDoc;
