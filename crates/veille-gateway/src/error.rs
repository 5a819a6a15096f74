//! Gateway error types.

use thiserror::Error;

/// Errors that can occur when calling the generative-language backend.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The prompt was refused by the model's safety filters.
    #[error("request blocked by the model: {0}")]
    Blocked(String),

    /// The response carried no usable text.
    #[error("empty response from model")]
    EmptyResponse,

    /// Failed to parse a response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The client is missing required settings (e.g. API key).
    #[error("gateway not configured: {0}")]
    NotConfigured(String),
}
