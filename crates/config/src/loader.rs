use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::schema::MemoryBoxConfig;

pub const CONFIG_FILE_NAME: &str = "memorybox.toml";

const CONFIG_DIR_ENV: &str = "MEMORYBOX_CONFIG_DIR";
const DATA_DIR_ENV: &str = "MEMORYBOX_DATA_DIR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "memorybox")
}

fn env_dir(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Directory holding `memorybox.toml`.
///
/// `MEMORYBOX_CONFIG_DIR` wins, then the platform config dir, then `.memorybox`.
pub fn config_dir() -> PathBuf {
    env_dir(CONFIG_DIR_ENV)
        .or_else(|| project_dirs().map(|d| d.config_dir().to_path_buf()))
        .unwrap_or_else(|| PathBuf::from(".memorybox"))
}

/// Directory holding the memory database.
///
/// `MEMORYBOX_DATA_DIR` wins, then the platform data dir, then `.memorybox`.
pub fn data_dir() -> PathBuf {
    env_dir(DATA_DIR_ENV)
        .or_else(|| project_dirs().map(|d| d.data_dir().to_path_buf()))
        .unwrap_or_else(|| PathBuf::from(".memorybox"))
}

pub fn default_db_path() -> PathBuf {
    data_dir().join("memory.db")
}

/// Load and parse a config file that must exist.
pub fn load_from_path(path: &Path) -> Result<MemoryBoxConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load `explicit` if given, else `<config_dir>/memorybox.toml` if present, else defaults.
pub fn discover_and_load(explicit: Option<&Path>) -> Result<MemoryBoxConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }

    let path = config_dir().join(CONFIG_FILE_NAME);
    if path.is_file() {
        return load_from_path(&path);
    }

    debug!(path = %path.display(), "no config file found, using defaults");
    Ok(MemoryBoxConfig::default())
}
