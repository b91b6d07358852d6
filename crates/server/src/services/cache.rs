use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};
use sqlx::SqlitePool;
use tokio::sync::Mutex;

use crate::repositories::CacheRepository;

/// Cache-aside facade over the sqlite `cache` table.
///
/// Concurrent misses for one key are single-flighted: they serialize on a
/// per-key mutex, so only the first caller runs the fetcher and everyone
/// behind it hits the freshly written row.
pub struct CacheService {
    db: SqlitePool,
    in_flight: DashMap<String, Arc<Mutex<()>>>,
}

impl CacheService {
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            in_flight: DashMap::new(),
        }
    }

    /// Return the cached value for `key`, or run `fetcher` and persist
    /// its result. Empty results are returned but never persisted, so a
    /// later call can retry the upstream.
    pub async fn get_or_fetch<T, E, F, Fut>(&self, key: &str, fetcher: F) -> Result<Vec<T>, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
    {
        if let Some(hit) = self.load(key).await {
            return Ok(hit);
        }

        let lock = self
            .in_flight
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = lock.lock().await;

        // A caller ahead of us in the queue may have filled the cache.
        if let Some(hit) = self.load(key).await {
            drop(guard);
            self.in_flight.remove(key);
            return Ok(hit);
        }

        let outcome = fetcher().await;

        if let Ok(fresh) = &outcome {
            if !fresh.is_empty() {
                if let Err(e) = CacheRepository::set(&self.db, key, fresh).await {
                    tracing::warn!("Failed to cache {}: {}", key, e);
                }
            }
        }

        drop(guard);
        self.in_flight.remove(key);
        outcome
    }

    async fn load<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        match CacheRepository::get::<Vec<T>>(&self.db, key).await {
            Ok(Some(cached)) if !cached.is_empty() => Some(cached),
            Ok(_) => None,
            Err(e) => {
                // A broken cache row is a miss, not a failure.
                tracing::warn!("Cache read failed for {}: {}", key, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_service() -> CacheService {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::migrate(&pool).await.unwrap();
        CacheService::new(pool)
    }

    #[tokio::test]
    async fn hit_never_invokes_the_fetcher() {
        let service = test_service().await;
        let calls = AtomicUsize::new(0);

        let first: Vec<String> = service
            .get_or_fetch("k", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, sqlx::Error>(vec!["cached".to_string()])
            })
            .await
            .unwrap();
        assert_eq!(first, vec!["cached"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let second: Vec<String> = service
            .get_or_fetch("k", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, sqlx::Error>(vec!["fresh".to_string()])
            })
            .await
            .unwrap();
        assert_eq!(second, vec!["cached"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_results_are_not_persisted() {
        let service = test_service().await;
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let got: Vec<String> = service
                .get_or_fetch("k", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, sqlx::Error>(Vec::new())
                })
                .await
                .unwrap();
            assert!(got.is_empty());
        }
        // Each miss retried the upstream.
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn concurrent_misses_fetch_once() {
        let service = Arc::new(test_service().await);
        let calls = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..4 {
            let service = Arc::clone(&service);
            let calls = Arc::clone(&calls);
            handles.push(tokio::spawn(async move {
                service
                    .get_or_fetch("k", move || async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(50)).await;
                        Ok::<_, sqlx::Error>(vec!["value".to_string()])
                    })
                    .await
                    .unwrap()
            }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap(), vec!["value"]);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn fetcher_errors_propagate() {
        let service = test_service().await;

        let outcome: Result<Vec<String>, sqlx::Error> = service
            .get_or_fetch("k", || async { Err(sqlx::Error::RowNotFound) })
            .await;
        assert!(outcome.is_err());
    }
}
