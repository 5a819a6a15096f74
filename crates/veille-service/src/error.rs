//! Service error types.

use thiserror::Error;
use veille_core::errors::CoreError;
use veille_gateway::GatewayError;
use veille_store::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("research request failed: {0}")]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// A refresh for this project has not completed yet.
    #[error("a refresh is already running for project {project_id}")]
    Busy { project_id: String },

    /// No project id was given and none is selected.
    #[error("no project selected; run `veille project use <id>` or pass --project-id")]
    NoSelection,
}

impl ServiceError {
    /// Whether this is a lookup miss, however it was wrapped.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        match self {
            Self::Core(CoreError::NotFound { .. }) => true,
            Self::Store(store) => store.is_not_found(),
            _ => false,
        }
    }
}
