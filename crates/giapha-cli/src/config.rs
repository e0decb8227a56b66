//! Workspace configuration stored in `.giapha/config.json`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory holding the configuration, relative to the working directory.
pub const CONFIG_DIR: &str = ".giapha";
pub const CONFIG_FILE: &str = "config.json";

/// CLI settings. Command-line flags take precedence over these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: String,

    /// Backup file read when `--data` is not given.
    pub data_file: PathBuf,

    /// Rows the lineage preview prints without `--all`.
    pub preview_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            data_file: PathBuf::from("giapha-backup.json"),
            preview_limit: 20,
        }
    }
}

impl Config {
    pub fn path_in(root: &Path) -> PathBuf {
        root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Loads the configuration under `root`, or defaults when there is none.
    pub fn load(root: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path_in(root);
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let config: Config = serde_json::from_str(&fs::read_to_string(&path)?)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Writes the configuration under `root`, creating `.giapha/` if needed.
    pub fn save(&self, root: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = Self::path_in(root);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }
}
