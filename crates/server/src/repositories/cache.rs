use std::time::{SystemTime, UNIX_EPOCH};

use serde::{de::DeserializeOwned, Serialize};
use sqlx::SqlitePool;

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

pub struct CacheRepository;

impl CacheRepository {
    /// Get the cached payload for a key, regardless of age.
    ///
    /// Staleness is the owner system's concern; the core never evicts on
    /// read. See [`CacheRepository::cleanup`].
    pub async fn get<T: DeserializeOwned>(
        db: &SqlitePool,
        key: &str,
    ) -> Result<Option<T>, sqlx::Error> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT payload FROM cache WHERE cache_key = ?")
                .bind(key)
                .fetch_optional(db)
                .await?;

        match row {
            Some((payload,)) => {
                let parsed: T = serde_json::from_str(&payload)
                    .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    /// Store a payload under a key. Full replacement, no partial merge.
    pub async fn set<T: Serialize>(
        db: &SqlitePool,
        key: &str,
        payload: &T,
    ) -> Result<(), sqlx::Error> {
        let json = serde_json::to_string(payload)
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        sqlx::query(
            "INSERT OR REPLACE INTO cache (cache_key, payload, fetched_at) VALUES (?, ?, ?)",
        )
        .bind(key)
        .bind(json)
        .bind(unix_now())
        .execute(db)
        .await?;

        Ok(())
    }

    /// Delete entries older than `max_age_secs`. Maintenance call for the
    /// owner system.
    pub async fn cleanup(db: &SqlitePool, max_age_secs: i64) -> Result<u64, sqlx::Error> {
        let min_time = unix_now() - max_age_secs;

        let result = sqlx::query("DELETE FROM cache WHERE fetched_at < ?")
            .bind(min_time)
            .execute(db)
            .await?;

        Ok(result.rows_affected())
    }
}
