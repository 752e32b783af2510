//! Row types and schema migrations for the memory database.

use serde::{Deserialize, Serialize};

/// One stored spoken phrase.
///
/// `text` is kept verbatim, with its original casing and punctuation, for display.
/// `id` comes from an `AUTOINCREMENT` column and is never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MemoryRecord {
    pub id: i64,
    pub text: String,
    /// Insertion time in Unix milliseconds (UTC).
    pub created_at: i64,
}

/// Apply the embedded migrations to `pool`.
pub async fn run_migrations(pool: &sqlx::SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
