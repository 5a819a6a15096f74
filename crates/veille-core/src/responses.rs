//! CLI response types returned as JSON by `veille` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `veille project create`, `veille refresh`, and `veille render`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Finding, Project};
use crate::format::Block;

/// Row of `veille project list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub location: Option<String>,
    pub keywords: usize,
    pub sources: usize,
    pub findings: usize,
    pub last_refresh: Option<String>,
    pub selected: bool,
}

impl ProjectSummary {
    #[must_use]
    pub fn from_project(project: &Project, selected: Option<&str>) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            location: project.location.clone(),
            keywords: project.keywords.len(),
            sources: project.source_names.len(),
            findings: project.findings.len(),
            last_refresh: project.latest_finding().map(|f| f.created_at.clone()),
            selected: selected == Some(project.id.as_str()),
        }
    }
}

/// Response from `veille project create`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectCreateResponse {
    pub project: Project,
    pub selected: bool,
    /// Set when the in-memory change could not be persisted.
    pub storage_warning: Option<String>,
}

/// Response from `veille refresh`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RefreshResponse {
    pub project_id: String,
    pub finding: Finding,
    pub total_findings: usize,
    pub storage_warning: Option<String>,
}

/// One failed project of `veille refresh --all`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RefreshFailure {
    pub project_id: String,
    pub error: String,
}

/// Response from `veille refresh --all`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RefreshAllResponse {
    pub refreshed: Vec<RefreshResponse>,
    pub failed: Vec<RefreshFailure>,
}

/// Response from `veille project delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub id: String,
    pub deleted: bool,
    pub selection_cleared: bool,
    pub storage_warning: Option<String>,
}

/// Response from `veille finding get`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FindingDetail {
    pub project_id: String,
    pub finding: Finding,
    pub blocks: Vec<Block>,
}

/// Response from `veille render`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenderResponse {
    pub blocks: Vec<Block>,
}
