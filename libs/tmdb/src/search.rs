use serde::Deserialize;

use crate::{
    models::{Movie, PaginatedResponse, PersonSummary, SearchMultiResult, TvShow},
    TmdbClient,
};

#[derive(Debug, Deserialize)]
struct RawPaginatedResponse {
    #[serde(default)]
    page: i64,
    #[serde(default)]
    results: Vec<serde_json::Value>,
    #[serde(default)]
    total_pages: i64,
    #[serde(default)]
    total_results: i64,
}

impl TmdbClient {
    /// Search movies, TV shows and people with the multi search endpoint.
    ///
    /// Results of unknown `media_type` are dropped during decoding.
    pub async fn search_multi(
        &self,
        query: &str,
        page: i64,
    ) -> crate::Result<PaginatedResponse<SearchMultiResult>> {
        let url = self.url("/search/multi");
        let api_key = self.api_key()?.to_string();
        let page = page.to_string();

        self.throttle().await;
        let response = self
            .client()
            .get(&url)
            .query(&[
                ("api_key", api_key.as_str()),
                ("language", self.lang.as_str()),
                ("query", query),
                ("page", page.as_str()),
                ("include_adult", "false"),
            ])
            .send()
            .await?;

        let raw: RawPaginatedResponse = self.handle_response(response).await?;

        let results: Vec<SearchMultiResult> = raw
            .results
            .into_iter()
            .filter_map(|value| {
                let media_type = value.get("media_type")?.as_str()?;
                match media_type {
                    "movie" => {
                        let movie: Movie = serde_json::from_value(value).ok()?;
                        Some(SearchMultiResult::Movie(movie))
                    }
                    "tv" => {
                        let tv: TvShow = serde_json::from_value(value).ok()?;
                        Some(SearchMultiResult::Tv(tv))
                    }
                    "person" => {
                        let person: PersonSummary = serde_json::from_value(value).ok()?;
                        Some(SearchMultiResult::Person(person))
                    }
                    _ => None,
                }
            })
            .collect();

        Ok(PaginatedResponse {
            page: raw.page,
            results,
            total_pages: raw.total_pages,
            total_results: raw.total_results,
        })
    }
}
