use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnilistError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse JSON response at {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("API error: {status_code} - {message}")]
    Api { status_code: u16, message: String },
}
