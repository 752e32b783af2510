/// Memory manager: the single entry point for remembering and recalling phrases.
use std::path::PathBuf;

use {
    serde::Serialize,
    tracing::{debug, info, warn},
};

use crate::{
    config::MemoryConfig,
    error::MemoryError,
    schema::MemoryRecord,
    search,
    store::MemoryStore,
    store_sqlite::SqliteMemoryStore,
    tokenizer::tokenize,
};

pub struct MemoryManager {
    config: MemoryConfig,
    store: Box<dyn MemoryStore>,
}

/// Status info about the memory system.
#[derive(Debug, Clone, Serialize)]
pub struct MemoryStatus {
    pub total_memories: usize,
    pub db_path: PathBuf,
}

impl MemoryManager {
    pub fn new(config: MemoryConfig, store: Box<dyn MemoryStore>) -> Self {
        Self { config, store }
    }

    /// Open the SQLite store at `config.db_path`.
    pub async fn open(config: MemoryConfig) -> Result<Self, MemoryError> {
        let store = SqliteMemoryStore::open(&config.db_path).await?;
        Ok(Self::new(config, Box::new(store)))
    }

    /// Store a spoken phrase. Blank text is declined with [`MemoryError::InvalidInput`].
    pub async fn remember(&self, text: &str) -> Result<MemoryRecord, MemoryError> {
        match self.store.insert(text).await {
            Ok(record) => {
                info!(id = record.id, "stored memory");
                Ok(record)
            },
            Err(MemoryError::InvalidInput) => {
                debug!("declined to store blank memory");
                Err(MemoryError::InvalidInput)
            },
            Err(e) => {
                warn!(error = %e, "failed to store memory");
                Err(e)
            },
        }
    }

    /// Find every memory sharing a keyword with `text`, oldest first.
    ///
    /// Blank or stop-word-only queries return an empty list without touching the store.
    /// The only error is [`MemoryError::StorageUnavailable`].
    pub async fn recall(&self, text: &str) -> Result<Vec<MemoryRecord>, MemoryError> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            debug!("recall query has no keywords");
            return Ok(Vec::new());
        }

        let records = self.store.all_records().await.inspect_err(|e| {
            warn!(error = %e, "failed to load memories for recall");
        })?;
        let results = search::search(&tokens, &records);
        debug!(
            tokens = ?tokens,
            scanned = records.len(),
            matched = results.len(),
            "recall complete"
        );
        Ok(results)
    }

    /// All memories, oldest first.
    pub async fn list(&self) -> Result<Vec<MemoryRecord>, MemoryError> {
        self.store.all_records().await
    }

    pub async fn get(&self, id: i64) -> Result<Option<MemoryRecord>, MemoryError> {
        self.store.get(id).await
    }

    /// Get status information about the memory system.
    pub async fn status(&self) -> Result<MemoryStatus, MemoryError> {
        Ok(MemoryStatus {
            total_memories: self.store.count().await?,
            db_path: self.config.db_path.clone(),
        })
    }
}
