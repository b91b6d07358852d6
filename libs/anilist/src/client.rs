use std::sync::Arc;

use ratelimit::RateLimiter;
use reqwest::Client;
use serde::Deserialize;

use crate::error::AnilistError;

const ENDPOINT: &str = "https://graphql.anilist.co";

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    #[serde(default)]
    message: String,
}

pub struct AnilistClient {
    client: Client,
    limiter: Arc<RateLimiter>,
}

impl AnilistClient {
    /// Create an AnilistClient with a reqwest Client and a shared host
    /// limiter. AniList requires no API key.
    pub fn new(client: Client, limiter: Arc<RateLimiter>) -> Self {
        Self { client, limiter }
    }

    /// Execute one GraphQL query and decode the `data` payload.
    pub(crate) async fn graphql<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> crate::Result<T> {
        self.limiter.acquire().await;

        let response = self
            .client
            .post(ENDPOINT)
            .json(&serde_json::json!({
                "query": query,
                "variables": variables,
            }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(AnilistError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }

        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        let envelope: GraphqlResponse<T> = serde_path_to_error::deserialize(deserializer)
            .map_err(|e| AnilistError::Json {
                path: e.path().to_string(),
                source: e.into_inner(),
            })?;

        if let Some(error) = envelope.errors.first() {
            return Err(AnilistError::Api {
                status_code: status.as_u16(),
                message: error.message.clone(),
            });
        }

        envelope.data.ok_or_else(|| AnilistError::Api {
            status_code: status.as_u16(),
            message: "GraphQL response without data".to_string(),
        })
    }
}
