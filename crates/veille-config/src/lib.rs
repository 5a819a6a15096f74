//! # veille-config
//!
//! Layered configuration loading for Veille using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VEILLE_*` prefix, `__` as separator)
//! 2. `GEMINI_API_KEY`, as a fallback for `gemini.api_key`
//! 3. Project-level `.veille/config.toml`
//! 4. User-level `~/.config/veille/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VEILLE_GEMINI__API_KEY` -> `gemini.api_key`,
//! `VEILLE_STORAGE__DATA_DIR` -> `storage.data_dir`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use veille_config::VeilleConfig;
//!
//! let config = VeilleConfig::load_with_dotenv().expect("config");
//!
//! if config.gemini.is_configured() {
//!     println!("Model: {}", config.gemini.model);
//! }
//! ```

mod error;
mod gemini;
mod general;
mod storage;

pub use error::ConfigError;
pub use gemini::GeminiConfig;
pub use general::{DateLocale, GeneralConfig};
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Conventional variable name used by Google's own SDKs.
const GEMINI_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VeilleConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl VeilleConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".veille/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: SDK-style API key variable
        figment = figment.merge(
            Env::raw()
                .only(&[GEMINI_KEY_VAR])
                .map(|_| "gemini.api_key".into()),
        );

        // Layer 4: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("VEILLE_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("veille").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = VeilleConfig::default();
        assert!(!config.gemini.is_configured());
        assert!(config.storage.data_dir.is_empty());
        assert_eq!(config.general.locale, DateLocale::Fr);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: VeilleConfig = VeilleConfig::figment().extract()?;
            assert_eq!(config.gemini.timeout_secs, 120);
            assert_eq!(config.general.report_language, "French");
            Ok(())
        });
    }
}
