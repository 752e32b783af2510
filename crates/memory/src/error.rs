/// Errors surfaced by the memory store and the recall facade.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// The text to remember was empty or whitespace-only. Nothing was stored.
    #[error("memory text must not be empty")]
    InvalidInput,
    /// The database could not be opened, read or written.
    #[error("memory storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl From<sqlx::Error> for MemoryError {
    fn from(e: sqlx::Error) -> Self {
        Self::StorageUnavailable(e.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for MemoryError {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        Self::StorageUnavailable(format!("migration failed: {e}"))
    }
}

impl From<std::io::Error> for MemoryError {
    fn from(e: std::io::Error) -> Self {
        Self::StorageUnavailable(e.to_string())
    }
}

impl MemoryError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput)
    }
}
