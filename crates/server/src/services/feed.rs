use std::sync::Arc;

use anilist::AnilistClient;
use catalog::{
    detailed_from_anilist, detailed_from_movie, detailed_from_tv, DetailedMedia, FeedPage,
};
use futures::future::join_all;
use thiserror::Error;
use tmdb::{DiscoverMovieParams, TmdbClient};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("TMDB error: {0}")]
    Tmdb(#[from] tmdb::TmdbError),
    #[error("AniList error: {0}")]
    Anilist(#[from] anilist::AnilistError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedCategory {
    Film,
    Series,
    Anime,
    WesternAnimation,
}

impl FeedCategory {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "film" => Some(FeedCategory::Film),
            "series" => Some(FeedCategory::Series),
            "anime" => Some(FeedCategory::Anime),
            "western_animation" => Some(FeedCategory::WesternAnimation),
            _ => None,
        }
    }
}

const ANIME_PER_PAGE: i64 = 20;

/// Assembles one page of a trending feed per category.
///
/// Listing pages come from one upstream call; TMDB categories then fan
/// out into concurrent per-item detail fetches. A failed item is dropped
/// and logged, the page survives. Abandoned requests cancel naturally
/// when the handler future is dropped.
pub struct FeedService {
    tmdb: Arc<TmdbClient>,
    anilist: Arc<AnilistClient>,
}

impl FeedService {
    pub fn new(tmdb: Arc<TmdbClient>, anilist: Arc<AnilistClient>) -> Self {
        Self { tmdb, anilist }
    }

    pub async fn trending(
        &self,
        category: FeedCategory,
        page: i64,
    ) -> Result<FeedPage<DetailedMedia>, FeedError> {
        match category {
            FeedCategory::Film => self.trending_films(page).await,
            FeedCategory::Series => self.trending_series(page).await,
            FeedCategory::Anime => self.trending_anime(page).await,
            FeedCategory::WesternAnimation => self.western_animation(page).await,
        }
    }

    async fn trending_films(&self, page: i64) -> Result<FeedPage<DetailedMedia>, FeedError> {
        let listing = self.tmdb.trending_movies(page).await?;
        let results = self
            .movie_fanout(listing.results.iter().map(|movie| movie.id))
            .await;
        Ok(FeedPage {
            results,
            next_page: FeedPage::<DetailedMedia>::cursor(listing.page, listing.total_pages),
        })
    }

    async fn trending_series(&self, page: i64) -> Result<FeedPage<DetailedMedia>, FeedError> {
        let listing = self.tmdb.trending_tv(page).await?;
        let fetches = listing.results.iter().map(|show| async move {
            (show.id, self.tmdb.tv_details(show.id).await)
        });
        let results = keep_successes(
            join_all(fetches)
                .await
                .into_iter()
                .map(|(id, outcome)| (id, outcome.map(|d| detailed_from_tv(&d))))
                .collect(),
        );
        Ok(FeedPage {
            results,
            next_page: FeedPage::<DetailedMedia>::cursor(listing.page, listing.total_pages),
        })
    }

    async fn western_animation(&self, page: i64) -> Result<FeedPage<DetailedMedia>, FeedError> {
        let params = DiscoverMovieParams {
            with_genres: Some("16".to_string()),
            without_original_language: Some("ja".to_string()),
            sort_by: Some("popularity.desc".to_string()),
            page,
        };
        let listing = self.tmdb.discover_movies(params).await?;
        let results = self
            .movie_fanout(listing.results.iter().map(|movie| movie.id))
            .await;
        Ok(FeedPage {
            results,
            next_page: FeedPage::<DetailedMedia>::cursor(listing.page, listing.total_pages),
        })
    }

    async fn trending_anime(&self, page: i64) -> Result<FeedPage<DetailedMedia>, FeedError> {
        let listing = self.anilist.trending_anime(page, ANIME_PER_PAGE).await?;
        let results = listing.media.iter().map(detailed_from_anilist).collect();
        let next_page = if listing.page_info.has_next_page {
            Some(listing.page_info.current_page + 1)
        } else {
            None
        };
        Ok(FeedPage { results, next_page })
    }

    async fn movie_fanout(
        &self,
        ids: impl Iterator<Item = i64>,
    ) -> Vec<DetailedMedia> {
        let fetches = ids.map(|id| async move {
            (id, self.tmdb.movie_details(id).await)
        });
        keep_successes(
            join_all(fetches)
                .await
                .into_iter()
                .map(|(id, outcome)| (id, outcome.map(|d| detailed_from_movie(&d))))
                .collect(),
        )
    }
}

/// Drop failed items, keep listing order for the rest.
fn keep_successes<T, E: std::fmt::Display>(fetched: Vec<(i64, Result<T, E>)>) -> Vec<T> {
    fetched
        .into_iter()
        .filter_map(|(id, outcome)| match outcome {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("Dropping item {} from feed: {}", id, e);
                None
            }
        })
        .collect()
}
