/// Game configuration, read from an optional RON file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::pool::POOL_FILES;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Settings for a game session. Every field has a default, so a config
/// file only needs the fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Story directory used when the player just presses Enter.
    pub default_dir: String,
    /// Word list files to load; these names are also the placeholder keys.
    pub pool_files: Vec<String>,
    /// Fixed RNG seed for reproducible stories.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_dir: default_dir().to_string(),
            pool_files: POOL_FILES.iter().map(|s| s.to_string()).collect(),
            seed: None,
        }
    }
}

fn default_dir() -> &'static str {
    if cfg!(windows) {
        r"c:\temp\ml"
    } else {
        "/tmp/ml"
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    pub fn parse_ron(input: &str) -> Result<Config, ConfigError> {
        Ok(ron::from_str(input)?)
    }
}
