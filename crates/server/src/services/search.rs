use std::sync::Arc;

use catalog::{is_hidden_gem, unified_from_movie, unified_from_tv, Person, UnifiedMedia};
use tmdb::{models::SearchMultiResult, profile_url, TmdbClient};

use crate::models::SearchResponse;

/// Queries shorter than this never reach the network.
pub const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    /// Case-insensitive mood tag to match on the derived classification.
    pub mood: Option<String>,
    pub hidden_gems: bool,
}

/// One multi-search call, partitioned by kind, then post-fetch filters.
pub struct SearchService {
    tmdb: Arc<TmdbClient>,
}

impl SearchService {
    pub fn new(tmdb: Arc<TmdbClient>) -> Self {
        Self { tmdb }
    }

    pub async fn global_search(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<SearchResponse, tmdb::TmdbError> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Ok(SearchResponse::default());
        }

        let page = self.tmdb.search_multi(query, 1).await?;

        let mut films = Vec::new();
        let mut series = Vec::new();
        let mut people = Vec::new();
        for result in &page.results {
            match result {
                SearchMultiResult::Movie(movie) => films.push(unified_from_movie(movie)),
                SearchMultiResult::Tv(show) => series.push(unified_from_tv(show)),
                SearchMultiResult::Person(person) => people.push(Person {
                    id: person.id.to_string(),
                    name: person.name.clone(),
                    photo_url: profile_url(person.profile_path.as_deref()),
                    known_for: person.known_for_department.clone(),
                }),
            }
        }

        apply_filters(&mut films, filters);
        apply_filters(&mut series, filters);

        Ok(SearchResponse {
            films,
            series,
            people,
            error: false,
        })
    }
}

/// Mood filter, then hidden-gems filter; the filters AND-compose.
fn apply_filters(items: &mut Vec<UnifiedMedia>, filters: &SearchFilters) {
    if let Some(mood) = &filters.mood {
        items.retain(|item| item.classification.as_str().eq_ignore_ascii_case(mood));
    }
    if filters.hidden_gems {
        items.retain(|item| is_hidden_gem(item.popularity, item.rating.average));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use catalog::{Classification, MediaKind, Rating};
    use ratelimit::RateLimiter;

    fn media(classification: Classification, popularity: f64, average: f64) -> UnifiedMedia {
        UnifiedMedia {
            id: "1".to_string(),
            title: "t".to_string(),
            kind: MediaKind::Film,
            poster_url: None,
            year: None,
            classification,
            rating: Rating::from_votes(average, 500),
            genres: Vec::new(),
            popularity,
        }
    }

    #[tokio::test]
    async fn short_queries_never_touch_the_upstream() {
        // A keyless client fails any request it actually makes, so an Ok
        // here proves the network was never reached.
        let limiter = Arc::new(RateLimiter::new(1, Duration::from_secs(1)));
        let tmdb = Arc::new(TmdbClient::new(reqwest::Client::new(), None, limiter));
        let service = SearchService::new(tmdb);

        let response = service
            .global_search("a", &SearchFilters::default())
            .await
            .unwrap();
        assert!(response.films.is_empty());
        assert!(response.series.is_empty());
        assert!(response.people.is_empty());
        assert!(!response.error);

        // Whitespace padding does not rescue a short query.
        let response = service
            .global_search("  a  ", &SearchFilters::default())
            .await
            .unwrap();
        assert!(response.films.is_empty());
    }

    #[test]
    fn mood_filter_matches_case_insensitively() {
        let mut items = vec![
            media(Classification::Noir, 10.0, 8.0),
            media(Classification::Visceral, 10.0, 8.0),
        ];
        let filters = SearchFilters {
            mood: Some("noir".to_string()),
            hidden_gems: false,
        };
        apply_filters(&mut items, &filters);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].classification, Classification::Noir);
    }

    #[test]
    fn hidden_gems_filter_uses_policy_thresholds() {
        let mut items = vec![
            media(Classification::Noir, 10.0, 8.5), // gem
            media(Classification::Noir, 80.0, 9.0), // too popular
            media(Classification::Noir, 10.0, 6.0), // rated too low
        ];
        let filters = SearchFilters {
            mood: None,
            hidden_gems: true,
        };
        apply_filters(&mut items, &filters);
        assert_eq!(items.len(), 1);
        assert!((items[0].popularity - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn filters_and_compose() {
        let mut items = vec![
            media(Classification::Noir, 10.0, 8.5),
            media(Classification::Noir, 80.0, 9.0),
            media(Classification::Visceral, 10.0, 8.5),
        ];
        let filters = SearchFilters {
            mood: Some("Noir".to_string()),
            hidden_gems: true,
        };
        apply_filters(&mut items, &filters);
        assert_eq!(items.len(), 1);
    }
}
