//! Persistence configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for the persistence layer.
///
/// The autosave file lives at a fixed well-known name in the working
/// directory: written unconditionally on normal exit, read (if present) on
/// startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistConfig {
    /// File name for the exit autosave, relative to the working directory
    pub autosave_file: PathBuf,
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self {
            autosave_file: PathBuf::from("autosave.json"),
        }
    }
}

impl PersistConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
