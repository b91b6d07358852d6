use serde::de::DeserializeOwned;

use crate::{
    models::{MediaType, Movie, PaginatedResponse, TvShow},
    TmdbClient,
};

impl TmdbClient {
    /// Get today's trending movies.
    pub async fn trending_movies(&self, page: i64) -> crate::Result<PaginatedResponse<Movie>> {
        self.trending(MediaType::Movie, page).await
    }

    /// Get today's trending TV shows.
    pub async fn trending_tv(&self, page: i64) -> crate::Result<PaginatedResponse<TvShow>> {
        self.trending(MediaType::Tv, page).await
    }

    async fn trending<T: DeserializeOwned>(
        &self,
        media_type: MediaType,
        page: i64,
    ) -> crate::Result<PaginatedResponse<T>> {
        let url = self.url(&format!("/trending/{}/day", media_type.as_str()));
        let api_key = self.api_key()?.to_string();
        let page = page.to_string();

        self.throttle().await;
        let response = self
            .client()
            .get(&url)
            .query(&[
                ("api_key", api_key.as_str()),
                ("language", self.lang.as_str()),
                ("page", page.as_str()),
            ])
            .send()
            .await?;

        self.handle_response(response).await
    }
}
