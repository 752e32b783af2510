//! Spoken memories: free text → SQLite rows → keyword recall.

pub mod config;
pub mod error;
pub mod manager;
pub mod schema;
pub mod search;
pub mod store;
pub mod store_sqlite;
pub mod tokenizer;

pub use {
    config::MemoryConfig,
    error::MemoryError,
    manager::{MemoryManager, MemoryStatus},
    schema::MemoryRecord,
};
