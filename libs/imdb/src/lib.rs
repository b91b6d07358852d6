mod client;
mod error;
mod models;

pub use client::ImdbClient;
pub use error::ImdbError;
pub use models::{categorize_trivia, TriviaCategory, TriviaItem};

pub type Result<T> = std::result::Result<T, ImdbError>;
