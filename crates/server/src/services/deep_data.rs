use std::sync::Arc;

use anilist::AnilistClient;
use catalog::{
    detailed_from_anilist, detailed_from_movie, detailed_from_tv, extract_technical_specs,
    predict_script_links, DetailedMedia, MediaNamespace, ScriptLink,
};
use imdb::{ImdbClient, TriviaItem};
use thiserror::Error;
use tmdb::TmdbClient;

use catalog::{dedup_by_key, unified_from_person_credit, Person, UnifiedMedia};
use tmdb::models::CombinedCredits;
use tmdb::profile_url;

use crate::models::{DeepDetail, PersonProfile};
use crate::services::CacheService;

#[derive(Debug, Error)]
pub enum DeepDataError {
    #[error("TMDB error: {0}")]
    Tmdb(#[from] tmdb::TmdbError),
    #[error("AniList error: {0}")]
    Anilist(#[from] anilist::AnilistError),
}

/// Aggregates the detail record with its enrichment facets.
///
/// The detail fetch is load-bearing; everything layered on top of it is
/// best-effort. A failed facet comes back empty, the rest still return.
pub struct DeepDataService {
    tmdb: Arc<TmdbClient>,
    anilist: Arc<AnilistClient>,
    imdb: Arc<ImdbClient>,
    cache: Arc<CacheService>,
}

impl DeepDataService {
    pub fn new(
        tmdb: Arc<TmdbClient>,
        anilist: Arc<AnilistClient>,
        imdb: Arc<ImdbClient>,
        cache: Arc<CacheService>,
    ) -> Self {
        Self {
            tmdb,
            anilist,
            imdb,
            cache,
        }
    }

    pub async fn deep_details(
        &self,
        source: MediaNamespace,
        id: i64,
    ) -> Result<DeepDetail, DeepDataError> {
        let media = self.detail(source, id).await?;

        // Composers were already extracted from the crew during
        // normalization; the remaining facets are computed here.
        let trivia = self.trivia(source, id, media.imdb_id.as_deref()).await;
        let script_links = predict_script_links(&media.summary.title);
        let specs = extract_technical_specs(&media.keywords, &media.overview);

        Ok(DeepDetail {
            media,
            trivia,
            script_links,
            specs,
        })
    }

    /// Script-link predictions for one title.
    pub async fn script_links(
        &self,
        source: MediaNamespace,
        id: i64,
    ) -> Result<Vec<ScriptLink>, DeepDataError> {
        let media = self.detail(source, id).await?;
        Ok(predict_script_links(&media.summary.title))
    }

    /// Person profile with their cross-referenced works.
    pub async fn person_profile(&self, id: i64) -> Result<PersonProfile, DeepDataError> {
        let details = self.tmdb.person_details(id).await?;

        let known_works = details
            .combined_credits
            .as_ref()
            .map(known_works)
            .unwrap_or_default();

        Ok(PersonProfile {
            person: Person {
                id: details.id.to_string(),
                name: details.name,
                photo_url: profile_url(details.profile_path.as_deref()),
                known_for: details.known_for_department,
            },
            biography: details.biography,
            known_works,
        })
    }

    /// Ids are only unique within their source namespace, so the fetch
    /// goes back to the endpoint the id came from. A documentary keeps
    /// its listing's namespace (film or series); its display kind plays
    /// no part in routing.
    async fn detail(&self, source: MediaNamespace, id: i64) -> Result<DetailedMedia, DeepDataError> {
        match source {
            MediaNamespace::Film => Ok(detailed_from_movie(&self.tmdb.movie_details(id).await?)),
            MediaNamespace::Series => Ok(detailed_from_tv(&self.tmdb.tv_details(id).await?)),
            MediaNamespace::Anime => {
                Ok(detailed_from_anilist(&self.anilist.anime_details(id).await?))
            }
        }
    }

    /// Trivia for one title, cache-or-scrape-then-cache.
    ///
    /// Without an IMDb id there is nothing to scrape and the answer is
    /// immediately empty. A scrape failure is logged and degrades to
    /// empty, never fails the aggregate.
    async fn trivia(
        &self,
        source: MediaNamespace,
        id: i64,
        imdb_id: Option<&str>,
    ) -> Vec<TriviaItem> {
        let Some(imdb_id) = imdb_id else {
            return Vec::new();
        };

        let key = format!("trivia:{}:{}", source, id);
        match self
            .cache
            .get_or_fetch(&key, || self.imdb.fetch_trivia(imdb_id))
            .await
        {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Trivia fetch failed for {}: {}", key, e);
                Vec::new()
            }
        }
    }
}

const KNOWN_WORKS_CAP: usize = 20;

/// Collapse a person's cast and crew credits into one ranked work list.
///
/// The same title often appears once per job; de-dup keyed on the
/// `(id, kind)` namespace keeps the first occurrence.
fn known_works(credits: &CombinedCredits) -> Vec<UnifiedMedia> {
    let combined: Vec<UnifiedMedia> = credits
        .cast
        .iter()
        .chain(credits.crew.iter())
        .map(unified_from_person_credit)
        .collect();

    let mut works = dedup_by_key(combined, |work| (work.id.clone(), work.kind));
    works.sort_by(|a, b| {
        b.popularity
            .partial_cmp(&a.popularity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    works.truncate(KNOWN_WORKS_CAP);
    works
}
