use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImdbError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    HttpStatus(u16),
}
