use serde::{Deserialize, Serialize};

use super::defaults;

/// Persistent store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Prefix prepended to every store key owned by the engine.
    pub key_prefix: String,
    /// SQLite database file, or a directory to hold `locus.db`. `None` = in-memory.
    pub sqlite_path: Option<String>,
}

impl StorageConfig {
    /// Full store key for a suffix from [`crate::constants::keys`].
    pub fn key(&self, suffix: &str) -> String {
        format!("{}{}", self.key_prefix, suffix)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key_prefix: defaults::DEFAULT_KEY_PREFIX.to_string(),
            sqlite_path: None,
        }
    }
}
