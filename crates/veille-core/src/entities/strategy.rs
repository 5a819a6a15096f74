use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Citation;

/// Initial monitoring strategy returned by the gateway for a topic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Strategy {
    pub advice: String,
    /// Ranked by relevance.
    pub keywords: Vec<String>,
    pub sources: Vec<String>,
}

/// Grounded report of recent developments returned by the gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TrendsReport {
    pub report_text: String,
    pub citations: Vec<Citation>,
}
