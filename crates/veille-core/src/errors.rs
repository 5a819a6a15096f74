//! Cross-cutting error types for Veille.
//!
//! Domain-specific errors (e.g., `StoreError`, `GatewayError`) are defined in
//! their respective crates. They converge into `anyhow::Error` in `veille-cli`.

use thiserror::Error;

/// Errors that can be raised by any Veille crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A required field is empty or malformed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a project lookup miss.
    #[must_use]
    pub fn project_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: String::from("project"),
            id: id.to_string(),
        }
    }

    /// Shorthand for a finding lookup miss.
    #[must_use]
    pub fn finding_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: String::from("finding"),
            id: id.to_string(),
        }
    }
}
