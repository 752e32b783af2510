//! SQLite-backed [`MemoryStore`].

use std::path::Path;

use {
    async_trait::async_trait,
    sqlx::{SqlitePool, sqlite::SqliteConnectOptions},
    tracing::{debug, info},
};

use crate::{
    error::MemoryError,
    schema::{MemoryRecord, run_migrations},
    store::{MemoryStore, validate_text},
};

pub struct SqliteMemoryStore {
    pool: SqlitePool,
}

impl SqliteMemoryStore {
    /// Wrap an existing pool. The caller is responsible for running migrations.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) the database file at `path` and migrate it.
    pub async fn open(path: &Path) -> Result<Self, MemoryError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Pass the path as a filename, not a URL, so `?` and `%` stay literal.
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;
        run_migrations(&pool).await?;
        info!(path = %path.display(), "opened memory database");

        Ok(Self::new(pool))
    }

    /// Close every pooled connection, waiting for in-flight queries.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl MemoryStore for SqliteMemoryStore {
    async fn insert(&self, text: &str) -> Result<MemoryRecord, MemoryError> {
        validate_text(text)?;

        let created_at = chrono::Utc::now().timestamp_millis();
        let record = sqlx::query_as::<_, MemoryRecord>(
            "INSERT INTO memories (text, created_at) VALUES (?, ?) \
             RETURNING id, text, created_at",
        )
        .bind(text)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        debug!(id = record.id, text = %record.text, "inserted memory");
        Ok(record)
    }

    async fn all_records(&self) -> Result<Vec<MemoryRecord>, MemoryError> {
        let rows = sqlx::query_as::<_, MemoryRecord>(
            "SELECT id, text, created_at FROM memories ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<MemoryRecord>, MemoryError> {
        let row = sqlx::query_as::<_, MemoryRecord>(
            "SELECT id, text, created_at FROM memories WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn count(&self) -> Result<usize, MemoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM memories")
            .fetch_one(&self.pool)
            .await?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use {super::*, std::sync::Arc, tempfile::TempDir};

    async fn setup() -> (SqliteMemoryStore, TempDir) {
        let tmp = TempDir::new().unwrap();
        let store = SqliteMemoryStore::open(&tmp.path().join("memory.db"))
            .await
            .unwrap();
        (store, tmp)
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let (store, _tmp) = setup().await;

        let first = store.insert("I saw a cat").await.unwrap();
        let second = store.insert("I saw a dog").await.unwrap();
        assert!(second.id > first.id);
        assert!(second.created_at >= first.created_at);
        assert_eq!(first.text, "I saw a cat");
    }

    #[tokio::test]
    async fn test_text_is_stored_verbatim() {
        let (store, _tmp) = setup().await;

        let record = store.insert("  The Cat, she SAID!  ").await.unwrap();
        let loaded = store.get(record.id).await.unwrap().unwrap();
        assert_eq!(loaded.text, "  The Cat, she SAID!  ");
        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn test_blank_insert_creates_nothing() {
        let (store, _tmp) = setup().await;

        assert!(matches!(
            store.insert("").await,
            Err(MemoryError::InvalidInput)
        ));
        assert!(matches!(
            store.insert("   ").await,
            Err(MemoryError::InvalidInput)
        ));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_all_records_in_insertion_order() {
        let (store, _tmp) = setup().await;

        for text in ["first", "second", "third"] {
            store.insert(text).await.unwrap();
        }
        let texts: Vec<String> = store
            .all_records()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.text)
            .collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let (store, _tmp) = setup().await;
        assert!(store.get(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_records_survive_reopen() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("memory.db");

        let store = SqliteMemoryStore::open(&path).await.unwrap();
        let saved = store.insert("parked on level three").await.unwrap();
        store.close().await;
        drop(store);

        let reopened = SqliteMemoryStore::open(&path).await.unwrap();
        let records = reopened.all_records().await.unwrap();
        assert_eq!(records, vec![saved.clone()]);

        let next = reopened.insert("bought milk").await.unwrap();
        assert!(next.id > saved.id);
    }

    #[tokio::test]
    async fn test_open_path_with_url_metacharacters() {
        let tmp = TempDir::new().unwrap();

        for dir in ["what?now", "pct%41dir", "hash#dir"] {
            let path = tmp.path().join(dir).join("memory.db");
            let store = SqliteMemoryStore::open(&path).await.unwrap();
            let saved = store.insert("odd directory names").await.unwrap();
            store.close().await;

            assert!(path.is_file(), "database should be created at {}", path.display());
            let reopened = SqliteMemoryStore::open(&path).await.unwrap();
            assert_eq!(reopened.all_records().await.unwrap(), vec![saved]);
        }
    }

    #[tokio::test]
    async fn test_concurrent_inserts_get_unique_ids() {
        let (store, _tmp) = setup().await;
        let store = Arc::new(store);

        let mut handles = Vec::new();
        for i in 0..20 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.insert(&format!("memory number {i}")).await
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
        assert_eq!(store.count().await.unwrap(), 20);
    }

    #[tokio::test]
    async fn test_read_after_write() {
        let (store, _tmp) = setup().await;

        for i in 0..5 {
            let record = store.insert(&format!("note {i}")).await.unwrap();
            let all = store.all_records().await.unwrap();
            assert_eq!(all.last(), Some(&record));
        }
    }

    #[tokio::test]
    async fn test_closed_pool_reports_storage_unavailable() {
        let (store, _tmp) = setup().await;
        store.close().await;

        let err = store.insert("too late").await.unwrap_err();
        assert!(matches!(err, MemoryError::StorageUnavailable(_)));
        assert!(matches!(
            store.all_records().await,
            Err(MemoryError::StorageUnavailable(_))
        ));
    }
}
