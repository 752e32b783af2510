use async_trait::async_trait;

use crate::{error::MemoryError, schema::MemoryRecord};

/// Durable, append-only collection of memory records.
#[async_trait]
pub trait MemoryStore: Send + Sync {
    /// Persist `text` verbatim and return the new record.
    ///
    /// Fails with [`MemoryError::InvalidInput`] for empty or whitespace-only text,
    /// in which case nothing is written.
    async fn insert(&self, text: &str) -> Result<MemoryRecord, MemoryError>;

    /// Every record, oldest first.
    async fn all_records(&self) -> Result<Vec<MemoryRecord>, MemoryError>;

    async fn get(&self, id: i64) -> Result<Option<MemoryRecord>, MemoryError>;

    async fn count(&self) -> Result<usize, MemoryError>;
}

/// Reject text that would produce an empty memory.
pub fn validate_text(text: &str) -> Result<(), MemoryError> {
    if text.trim().is_empty() {
        return Err(MemoryError::InvalidInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_blank_text_is_rejected() {
        assert!(validate_text("").unwrap_err().is_invalid_input());
        assert!(validate_text("   ").unwrap_err().is_invalid_input());
        assert!(validate_text("\t\n").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_stop_word_text_is_still_storable() {
        assert!(validate_text("the and but").is_ok());
        assert!(validate_text(" cat ").is_ok());
    }
}
