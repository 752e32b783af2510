//! Configuration discovery and loading for memorybox.
//!
//! Settings live in `memorybox.toml` under the platform config directory.
//! Every field is optional; a missing file means defaults.

pub mod loader;
pub mod schema;

pub use {
    loader::{
        CONFIG_FILE_NAME, ConfigError, config_dir, data_dir, default_db_path, discover_and_load,
        load_from_path,
    },
    schema::{LoggingConfig, MemoryBoxConfig, MemorySection},
};
