//! Store error types for veille-store.

use thiserror::Error;
use veille_core::errors::CoreError;

/// Errors from blob persistence and record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The blob could not be read or written.
    #[error("Storage error for '{key}': {source}")]
    Storage {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The blob key contains characters that cannot name a file.
    #[error("Invalid blob key '{0}'")]
    InvalidKey(String),

    /// Persisted data could not be encoded or decoded.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Validation or lookup failure from the domain layer.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    pub(crate) fn storage(key: &str, source: std::io::Error) -> Self {
        Self::Storage {
            key: key.to_string(),
            source,
        }
    }

    /// Whether this is a lookup miss.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Core(CoreError::NotFound { .. }))
    }
}
