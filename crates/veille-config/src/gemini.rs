//! Gemini generative-language API configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_model() -> String {
    String::from("gemini-3-pro-preview")
}

fn default_base_url() -> String {
    String::from("https://generativelanguage.googleapis.com/v1beta")
}

/// Grounded reports can take well over a minute.
const fn default_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`.
    #[serde(default)]
    pub api_key: String,

    /// Model used for both strategy and trends requests.
    #[serde(default = "default_model")]
    pub model: String,

    /// API root, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Check if the Gemini config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Fail unless the gateway can actually be called.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] without an API key, and
    /// [`ConfigError::InvalidValue`] for an empty model or a zero timeout.
    pub fn require(&self) -> Result<&Self, ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: String::from("gemini"),
            });
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: String::from("gemini.model"),
                reason: String::from("must not be empty"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: String::from("gemini.timeout_secs"),
                reason: String::from("must be greater than zero"),
            });
        }
        Ok(self)
    }
}
