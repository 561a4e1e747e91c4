use async_trait::async_trait;
use sqlx::{migrate::MigrateDatabase, query, query_scalar, Pool, Sqlite, SqlitePool};

use crate::KeyValueStore;

/// Backend that keeps every key in one table of a SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    /// Opens the database at `url`, creating the file and table when missing.
    pub async fn open(url: &str) -> sqlx::Result<Self> {
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?;
        }
        let pool = SqlitePool::connect(url).await?;
        query(
            "CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await?;
        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Option<String> {
        let value = query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await;
        match value {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(key, %error, "failed to read from storage");
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str) {
        let result = query(
            "INSERT INTO kv_store(key, value) VALUES(?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await;
        if let Err(error) = result {
            tracing::warn!(key, %error, "failed to write to storage, value dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn database_url(dir: &tempfile::TempDir) -> String {
        format!("sqlite://{}", dir.path().join("lexicon.db").display())
    }

    #[tokio::test]
    async fn creates_missing_database() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::open(&database_url(&dir)).await.unwrap();
        assert_eq!(store.get("missing").await, None);
        assert!(dir.path().join("lexicon.db").exists());
    }

    #[tokio::test]
    async fn overwrites_existing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::open(&database_url(&dir)).await.unwrap();
        store.set("key", "first").await;
        store.set("key", "second").await;
        assert_eq!(store.get("key").await.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let url = database_url(&dir);
        let store = SqliteStore::open(&url).await.unwrap();
        store.set("lexicon.recent-searches", r#"["cat","dog"]"#).await;
        store.close().await;

        let reopened = SqliteStore::open(&url).await.unwrap();
        assert_eq!(
            reopened.get("lexicon.recent-searches").await.as_deref(),
            Some(r#"["cat","dog"]"#)
        );
    }
}
