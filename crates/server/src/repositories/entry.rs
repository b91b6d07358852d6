use std::time::{SystemTime, UNIX_EPOCH};

use sqlx::SqlitePool;

use crate::models::{MediaEntry, UpsertEntry};

pub struct EntryRepository;

impl EntryRepository {
    /// Insert or fully replace one user's entry for a media work.
    pub async fn upsert(
        db: &SqlitePool,
        user_id: &str,
        input: &UpsertEntry,
    ) -> Result<MediaEntry, sqlx::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);

        sqlx::query(
            r#"
            INSERT INTO media_entries (user_id, media_id, kind, classification, note, rating, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (user_id, media_id, kind) DO UPDATE SET
                classification = excluded.classification,
                note = excluded.note,
                rating = excluded.rating,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(user_id)
        .bind(&input.media_id)
        .bind(&input.kind)
        .bind(&input.classification)
        .bind(&input.note)
        .bind(input.rating)
        .bind(now)
        .execute(db)
        .await?;

        sqlx::query_as::<_, MediaEntry>(
            "SELECT user_id, media_id, kind, classification, note, rating, updated_at
             FROM media_entries WHERE user_id = ? AND media_id = ? AND kind = ?",
        )
        .bind(user_id)
        .bind(&input.media_id)
        .bind(&input.kind)
        .fetch_one(db)
        .await
    }

    /// List one user's entries, most recently touched first.
    pub async fn list_for_user(
        db: &SqlitePool,
        user_id: &str,
    ) -> Result<Vec<MediaEntry>, sqlx::Error> {
        sqlx::query_as::<_, MediaEntry>(
            "SELECT user_id, media_id, kind, classification, note, rating, updated_at
             FROM media_entries WHERE user_id = ? ORDER BY updated_at DESC",
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::migrate(&pool).await.unwrap();
        pool
    }

    fn entry(media_id: &str) -> UpsertEntry {
        UpsertEntry {
            media_id: media_id.to_string(),
            kind: "film".to_string(),
            classification: Some("Noir".to_string()),
            note: Some("rewatch".to_string()),
            rating: Some(4.5),
        }
    }

    #[tokio::test]
    async fn upsert_round_trips() {
        let pool = test_pool().await;

        let stored = EntryRepository::upsert(&pool, "user-1", &entry("603"))
            .await
            .unwrap();
        assert_eq!(stored.media_id, "603");
        assert_eq!(stored.classification.as_deref(), Some("Noir"));
        assert_eq!(stored.rating, Some(4.5));
    }

    #[tokio::test]
    async fn second_upsert_replaces_all_fields() {
        let pool = test_pool().await;

        EntryRepository::upsert(&pool, "user-1", &entry("603"))
            .await
            .unwrap();

        let replacement = UpsertEntry {
            note: None,
            rating: Some(2.0),
            ..entry("603")
        };
        let stored = EntryRepository::upsert(&pool, "user-1", &replacement)
            .await
            .unwrap();

        // Full replacement: the absent note clears the stored value.
        assert_eq!(stored.note, None);
        assert_eq!(stored.rating, Some(2.0));

        let all = EntryRepository::list_for_user(&pool, "user-1").await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn listing_is_scoped_to_the_user() {
        let pool = test_pool().await;

        EntryRepository::upsert(&pool, "user-1", &entry("603"))
            .await
            .unwrap();
        EntryRepository::upsert(&pool, "user-2", &entry("604"))
            .await
            .unwrap();

        let mine = EntryRepository::list_for_user(&pool, "user-1").await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].media_id, "603");
    }
}
