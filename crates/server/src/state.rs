use std::sync::Arc;
use std::time::Duration;

use anilist::AnilistClient;
use imdb::ImdbClient;
use ratelimit::RateLimiter;
use reqwest::Client;
use sqlx::SqlitePool;
use tmdb::TmdbClient;

use crate::config::Config;
use crate::services::{CacheService, DeepDataService, EntryService, FeedService, SearchService};

// Per-host request budgets. TMDB's documented limit is 40/10s; stay
// under it. IMDb is scraped, keep that trickle slow.
const TMDB_RATE: (usize, Duration) = (38, Duration::from_secs(10));
const ANILIST_RATE: (usize, Duration) = (90, Duration::from_secs(60));
const IMDB_RATE: (usize, Duration) = (10, Duration::from_secs(60));

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
    pub http_client: Client,
    pub tmdb: Arc<TmdbClient>,
    pub anilist: Arc<AnilistClient>,
    pub imdb: Arc<ImdbClient>,
    pub cache: Arc<CacheService>,
    pub feed: Arc<FeedService>,
    pub search: Arc<SearchService>,
    pub deep: Arc<DeepDataService>,
    pub entries: Arc<EntryService>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Config) -> Self {
        let http_client = Client::new();

        // One limiter per upstream host, injected into every client that
        // talks to it.
        let tmdb_limiter = Arc::new(RateLimiter::new(TMDB_RATE.0, TMDB_RATE.1));
        let anilist_limiter = Arc::new(RateLimiter::new(ANILIST_RATE.0, ANILIST_RATE.1));
        let imdb_limiter = Arc::new(RateLimiter::new(IMDB_RATE.0, IMDB_RATE.1));

        let tmdb = Arc::new(TmdbClient::new(
            http_client.clone(),
            config.tmdb_api_key.clone(),
            tmdb_limiter,
        ));
        let anilist = Arc::new(AnilistClient::new(http_client.clone(), anilist_limiter));
        let imdb = Arc::new(ImdbClient::new(http_client.clone(), imdb_limiter));

        let cache = Arc::new(CacheService::new(db.clone()));
        let feed = Arc::new(FeedService::new(Arc::clone(&tmdb), Arc::clone(&anilist)));
        let search = Arc::new(SearchService::new(Arc::clone(&tmdb)));
        let deep = Arc::new(DeepDataService::new(
            Arc::clone(&tmdb),
            Arc::clone(&anilist),
            Arc::clone(&imdb),
            Arc::clone(&cache),
        ));
        let entries = Arc::new(EntryService::new(db.clone()));

        Self {
            db,
            config: Arc::new(config),
            http_client,
            tmdb,
            anilist,
            imdb,
            cache,
            feed,
            search,
            deep,
            entries,
        }
    }
}
