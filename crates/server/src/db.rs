use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    migrate(&pool).await?;

    Ok(pool)
}

/// Idempotent schema creation, run at every pool creation.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cache (
            cache_key TEXT PRIMARY KEY,
            payload TEXT NOT NULL,
            fetched_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS media_entries (
            user_id TEXT NOT NULL,
            media_id TEXT NOT NULL,
            kind TEXT NOT NULL,
            classification TEXT,
            note TEXT,
            rating REAL,
            updated_at INTEGER NOT NULL,
            PRIMARY KEY (user_id, media_id, kind)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
