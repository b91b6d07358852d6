/// Application configuration.
///
/// A missing TMDB API key does not abort startup; the TMDB client then
/// fails each call with a configuration error and the affected features
/// degrade to empty results.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub tmdb_api_key: Option<String>,
}

impl Config {
    pub fn new(database_url: String, tmdb_api_key: Option<String>) -> Self {
        Self {
            database_url,
            max_connections: 5,
            tmdb_api_key: tmdb_api_key.filter(|key| !key.is_empty()),
        }
    }

    /// Read the TMDB API key from the environment.
    pub fn from_env(database_url: String) -> Self {
        Self::new(database_url, std::env::var("TMDB_API_KEY").ok())
    }
}
