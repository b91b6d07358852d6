use crate::{
    models::{MovieDetails, TvShowDetails},
    TmdbClient,
};

const MOVIE_APPEND: &str = "credits,videos,keywords,recommendations,watch/providers,external_ids";
const TV_APPEND: &str = "credits,videos,keywords,recommendations,watch/providers,external_ids";

impl TmdbClient {
    /// Get the details of a movie, with credits, videos, keywords,
    /// recommendations, watch providers and external ids appended.
    pub async fn movie_details(&self, movie_id: i64) -> crate::Result<MovieDetails> {
        let url = self.url(&format!("/movie/{}", movie_id));
        let api_key = self.api_key()?.to_string();

        self.throttle().await;
        let response = self
            .client()
            .get(&url)
            .query(&[
                ("api_key", api_key.as_str()),
                ("language", self.lang.as_str()),
                ("append_to_response", MOVIE_APPEND),
            ])
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Get the details of a TV show, with the same appended sub-resources.
    pub async fn tv_details(&self, series_id: i64) -> crate::Result<TvShowDetails> {
        let url = self.url(&format!("/tv/{}", series_id));
        let api_key = self.api_key()?.to_string();

        self.throttle().await;
        let response = self
            .client()
            .get(&url)
            .query(&[
                ("api_key", api_key.as_str()),
                ("language", self.lang.as_str()),
                ("append_to_response", TV_APPEND),
            ])
            .send()
            .await?;

        self.handle_response(response).await
    }
}
