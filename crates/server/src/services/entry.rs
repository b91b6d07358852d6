use catalog::MediaKind;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::models::{MediaEntry, UpsertEntry};
use crate::repositories::EntryRepository;

#[derive(Debug, Error)]
pub enum EntryError {
    /// No user id supplied; persistence requires a signed-in user.
    #[error("sign in to save entries")]
    Unauthorized,
    #[error("unknown media kind '{0}'")]
    InvalidKind(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Per-user media entries. Identity itself is external; the caller hands
/// in an already resolved user id, or nothing.
pub struct EntryService {
    db: SqlitePool,
}

impl EntryService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn upsert(
        &self,
        user_id: Option<&str>,
        input: &UpsertEntry,
    ) -> Result<MediaEntry, EntryError> {
        let user_id = user_id.ok_or(EntryError::Unauthorized)?;
        if MediaKind::parse(&input.kind).is_none() {
            return Err(EntryError::InvalidKind(input.kind.clone()));
        }
        Ok(EntryRepository::upsert(&self.db, user_id, input).await?)
    }

    pub async fn entries_for_user(
        &self,
        user_id: Option<&str>,
    ) -> Result<Vec<MediaEntry>, EntryError> {
        let user_id = user_id.ok_or(EntryError::Unauthorized)?;
        Ok(EntryRepository::list_for_user(&self.db, user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_service() -> EntryService {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::migrate(&pool).await.unwrap();
        EntryService::new(pool)
    }

    #[tokio::test]
    async fn anonymous_writes_are_rejected() {
        let service = test_service().await;
        let input = UpsertEntry {
            media_id: "603".to_string(),
            kind: "film".to_string(),
            classification: None,
            note: None,
            rating: None,
        };

        let outcome = service.upsert(None, &input).await;
        assert!(matches!(outcome, Err(EntryError::Unauthorized)));

        let outcome = service.entries_for_user(None).await;
        assert!(matches!(outcome, Err(EntryError::Unauthorized)));
    }

    #[tokio::test]
    async fn unknown_kinds_are_rejected() {
        let service = test_service().await;
        let input = UpsertEntry {
            media_id: "603".to_string(),
            kind: "vhs".to_string(),
            classification: None,
            note: None,
            rating: None,
        };

        let outcome = service.upsert(Some("user-1"), &input).await;
        assert!(matches!(outcome, Err(EntryError::InvalidKind(_))));
    }

    #[tokio::test]
    async fn signed_in_writes_round_trip() {
        let service = test_service().await;
        let input = UpsertEntry {
            media_id: "603".to_string(),
            kind: "film".to_string(),
            classification: Some("Visceral".to_string()),
            note: None,
            rating: Some(5.0),
        };

        service.upsert(Some("user-1"), &input).await.unwrap();
        let entries = service.entries_for_user(Some("user-1")).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].classification.as_deref(), Some("Visceral"));
    }
}
