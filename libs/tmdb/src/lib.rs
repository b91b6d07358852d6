mod client;
mod details;
mod discover;
mod error;
mod images;
mod person;
mod search;
mod trending;
pub mod models;

pub use client::TmdbClient;
pub use discover::DiscoverMovieParams;
pub use error::TmdbError;
pub use images::{backdrop_url, logo_url, poster_url, profile_url};
pub use models::{
    MediaType, Movie, MovieDetails, PaginatedResponse, PersonDetails, PersonSummary,
    SearchMultiResult, TvShow, TvShowDetails,
};

pub type Result<T> = std::result::Result<T, TmdbError>;
