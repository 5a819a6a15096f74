use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::format::{Block, format_content};

/// One timestamped research report produced by a trends request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub id: String,
    /// Locale-formatted display timestamp. Not a sort key.
    #[serde(alias = "date")]
    pub created_at: String,
    #[serde(alias = "content")]
    pub raw_content: String,
    #[serde(default, alias = "sources")]
    pub citations: Vec<Citation>,
}

impl Finding {
    /// Format the raw report for display.
    #[must_use]
    pub fn blocks(&self) -> Vec<Block> {
        format_content(&self.raw_content)
    }
}

/// A grounding reference backing a claim in a finding.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Citation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub uri: String,
}

impl Citation {
    /// Title when present and non-blank, otherwise the uri.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|title| !title.trim().is_empty())
            .unwrap_or(&self.uri)
    }
}
