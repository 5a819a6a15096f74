use thiserror::Error;

/// Failure to load or validate a [`VeilleConfig`](crate::VeilleConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider (TOML file, `VEILLE_*` env) could not be merged or extracted.
    #[error("failed to load veille config: {0}")]
    Figment(#[from] figment::Error),

    /// The `[section]` lacks what its consumer needs, e.g. `[gemini]` without a key.
    #[error("[{section}] is not configured")]
    NotConfigured { section: String },

    #[error("{field} {reason}")]
    InvalidValue { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn messages_name_the_offending_key() {
        let missing = ConfigError::NotConfigured {
            section: String::from("gemini"),
        };
        assert_eq!(missing.to_string(), "[gemini] is not configured");

        let invalid = ConfigError::InvalidValue {
            field: String::from("gemini.timeout_secs"),
            reason: String::from("must be greater than zero"),
        };
        assert_eq!(
            invalid.to_string(),
            "gemini.timeout_secs must be greater than zero"
        );
    }
}
