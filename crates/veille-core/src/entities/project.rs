use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Finding, Strategy};
use crate::errors::CoreError;

/// A research project: a monitored topic with its strategy and findings.
///
/// Only `findings` changes after creation, and only by prepending.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Geographic scope. `None` means worldwide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Ranked by relevance, as returned by the strategy request.
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, alias = "sources")]
    pub source_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "strategy")]
    pub strategy_advice: Option<String>,
    /// Newest first.
    #[serde(default)]
    pub findings: Vec<Finding>,
}

impl Project {
    /// Build a project from user input and the strategy returned for it.
    #[must_use]
    pub fn from_strategy(id: String, input: NewProject, strategy: Strategy) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            location: input.location,
            keywords: strategy.keywords,
            source_names: strategy.sources,
            strategy_advice: Some(strategy.advice),
            findings: Vec::new(),
        }
    }

    /// Copy of this project with `finding` placed at index 0.
    #[must_use]
    pub fn with_finding(&self, finding: Finding) -> Self {
        let mut findings = Vec::with_capacity(self.findings.len() + 1);
        findings.push(finding);
        findings.extend(self.findings.iter().cloned());
        Self {
            findings,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn latest_finding(&self) -> Option<&Finding> {
        self.findings.first()
    }

    #[must_use]
    pub fn finding(&self, finding_id: &str) -> Option<&Finding> {
        self.findings.iter().find(|finding| finding.id == finding_id)
    }
}

/// User input for creating a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub location: Option<String>,
}

impl NewProject {
    /// Normalize raw form input. Blank locations become `None`.
    #[must_use]
    pub fn new(name: &str, description: Option<&str>, location: Option<&str>) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description.unwrap_or_default().trim().to_string(),
            location: location
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        }
    }

    /// Reject input that cannot become a project.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the name is empty.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation(String::from(
                "project name must not be empty",
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn finding(id: &str) -> Finding {
        Finding {
            id: id.to_string(),
            created_at: String::from("16 octobre 2026 à 09:30"),
            raw_content: String::from("body"),
            citations: Vec::new(),
        }
    }

    #[test]
    fn new_project_normalizes_blank_location() {
        let input = NewProject::new("  Solar  ", None, Some("   "));
        assert_eq!(input.name, "Solar");
        assert_eq!(input.description, "");
        assert_eq!(input.location, None);
    }

    #[test]
    fn empty_name_fails_validation() {
        let err = NewProject::new("   ", Some("ctx"), None)
            .validate()
            .expect_err("blank name should be rejected");
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn with_finding_prepends_and_leaves_original_untouched() {
        let base = Project::from_strategy(
            String::from("prj-00000001"),
            NewProject::new("Solar", Some("PV"), Some("Quebec")),
            Strategy {
                advice: String::from("watch"),
                keywords: vec![String::from("k1")],
                sources: vec![String::from("s1")],
            },
        );
        let one = base.with_finding(finding("fnd-1"));
        let two = one.with_finding(finding("fnd-2"));

        assert!(base.findings.is_empty());
        assert_eq!(one.findings.len(), 1);
        let ids: Vec<&str> = two.findings.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["fnd-2", "fnd-1"]);
        assert_eq!(two.keywords, base.keywords);
        assert_eq!(two.strategy_advice.as_deref(), Some("watch"));
    }

    #[test]
    fn deserializes_legacy_field_names() {
        let json = r###"{
            "id": "1718000000000",
            "name": "IA en santé",
            "description": "",
            "location": "France",
            "keywords": ["IA"],
            "sources": ["HAS"],
            "strategy": "Suivre les publications",
            "findings": [{"id": "1718000000001", "date": "10 juin 2024", "content": "## T", "sources": [{"title": "HAS", "uri": "https://has-sante.fr"}]}]
        }"###;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.source_names, vec!["HAS"]);
        assert_eq!(project.strategy_advice.as_deref(), Some("Suivre les publications"));
        assert_eq!(project.findings[0].raw_content, "## T");
        assert_eq!(project.findings[0].citations[0].uri, "https://has-sante.fr");
    }
}
