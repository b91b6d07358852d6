use crate::{
    models::{Movie, PaginatedResponse},
    TmdbClient,
};

/// Parameters for the movie discover endpoint.
#[derive(Debug, Clone, Default)]
pub struct DiscoverMovieParams {
    pub with_genres: Option<String>,
    pub without_original_language: Option<String>,
    pub sort_by: Option<String>,
    pub page: i64,
}

impl TmdbClient {
    /// Discover movies with the given filters.
    ///
    /// Used for the western-animation feed: genre 16 locked, Japanese
    /// original language excluded, sorted by popularity.
    pub async fn discover_movies(
        &self,
        params: DiscoverMovieParams,
    ) -> crate::Result<PaginatedResponse<Movie>> {
        let url = self.url("/discover/movie");
        let api_key = self.api_key()?.to_string();

        let page = if params.page > 0 { params.page } else { 1 };
        let mut query: Vec<(&str, String)> = vec![
            ("api_key", api_key),
            ("language", self.lang.clone()),
            ("include_adult", "false".to_string()),
            ("page", page.to_string()),
        ];
        if let Some(genres) = params.with_genres {
            query.push(("with_genres", genres));
        }
        if let Some(lang) = params.without_original_language {
            query.push(("without_original_language", lang));
        }
        if let Some(sort) = params.sort_by {
            query.push(("sort_by", sort));
        }

        self.throttle().await;
        let response = self.client().get(&url).query(&query).send().await?;
        self.handle_response(response).await
    }
}
