use std::sync::Arc;

use ratelimit::RateLimiter;
use reqwest::Client;

use crate::error::TmdbError;

const BASE_URL: &str = "https://api.themoviedb.org/3";

pub struct TmdbClient {
    client: Client,
    api_key: Option<String>,
    limiter: Arc<RateLimiter>,
    pub(crate) lang: String,
}

impl TmdbClient {
    /// Create a TmdbClient with a reqwest Client and a shared host limiter.
    ///
    /// `api_key` may be absent; every call then fails with
    /// [`TmdbError::MissingApiKey`] before reaching the network.
    pub fn new(client: Client, api_key: Option<String>, limiter: Arc<RateLimiter>) -> Self {
        Self {
            client,
            api_key: api_key.filter(|key| !key.is_empty()),
            limiter,
            lang: "en-US".to_string(),
        }
    }

    /// Get the configured API key, or a configuration error.
    pub(crate) fn api_key(&self) -> crate::Result<&str> {
        self.api_key.as_deref().ok_or(TmdbError::MissingApiKey)
    }

    /// Get the HTTP client for making requests.
    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", BASE_URL, path)
    }

    /// Wait for the host's rate-limit token. Called before every request.
    pub(crate) async fn throttle(&self) {
        self.limiter.acquire().await;
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TmdbError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| TmdbError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
