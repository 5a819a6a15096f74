//! General application configuration.

use serde::{Deserialize, Serialize};

/// Locale used to format finding timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateLocale {
    #[default]
    Fr,
    En,
}

fn default_report_language() -> String {
    String::from("French")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Locale for finding timestamps.
    #[serde(default)]
    pub locale: DateLocale,

    /// Language the gateway is asked to write reports in.
    #[serde(default = "default_report_language")]
    pub report_language: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            locale: DateLocale::default(),
            report_language: default_report_language(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.locale, DateLocale::Fr);
        assert_eq!(config.report_language, "French");
    }
}
