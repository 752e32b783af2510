use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level contents of `memorybox.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryBoxConfig {
    pub memory: MemorySection,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemorySection {
    /// SQLite database file. Defaults to `<data_dir>/memory.db`.
    pub db_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `memorybox_memory=debug`.
    pub level: Option<String>,
    /// Emit JSON log lines instead of human-readable ones.
    pub json: bool,
}
