mod client;
mod error;
mod media;
pub mod models;

pub use client::AnilistClient;
pub use error::AnilistError;
pub use models::{AnilistMedia, AnimePage, PageInfo};

pub type Result<T> = std::result::Result<T, AnilistError>;
