//! Local blob storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the blob files. Empty means the platform data dir.
    #[serde(default)]
    pub data_dir: String,
}

impl StorageConfig {
    /// Resolve the data directory, falling back to `<data_dir>/veille`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when no directory is set and the
    /// platform has no data directory.
    pub fn resolve_data_dir(&self) -> Result<PathBuf, ConfigError> {
        if !self.data_dir.trim().is_empty() {
            return Ok(PathBuf::from(self.data_dir.trim()));
        }
        dirs::data_dir()
            .map(|dir| dir.join("veille"))
            .ok_or_else(|| ConfigError::NotConfigured {
                section: String::from("storage"),
            })
    }
}
