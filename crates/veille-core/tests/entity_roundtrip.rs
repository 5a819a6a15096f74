//! Serde roundtrip and JsonSchema validation tests for persisted entity types.

use schemars::schema_for;
use veille_core::entities::*;
use veille_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_finding() -> Finding {
    Finding {
        id: "fnd-0badc0de".into(),
        created_at: "16 octobre 2026 à 09:30".into(),
        raw_content: "## Overview\n- **Key** point [Source](https://x.test/a)".into(),
        citations: vec![
            Citation {
                title: Some("Source".into()),
                uri: "https://x.test/a".into(),
            },
            Citation {
                title: None,
                uri: "https://x.test/b".into(),
            },
        ],
    }
}

fn sample_project() -> Project {
    Project {
        id: "prj-a3f8b2c1".into(),
        name: "Offshore wind".into(),
        description: "Permitting and grid connection".into(),
        location: Some("North Sea".into()),
        keywords: vec!["offshore wind".into(), "grid connection".into()],
        source_names: vec!["WindEurope".into()],
        strategy_advice: Some("Track national tenders.".into()),
        findings: vec![sample_finding()],
    }
}

roundtrip_and_validate!(project_roundtrip, Project, sample_project());

roundtrip_and_validate!(
    project_without_optionals_roundtrip,
    Project,
    Project {
        id: "prj-00000000".into(),
        name: "Bare".into(),
        description: String::new(),
        location: None,
        keywords: Vec::new(),
        source_names: Vec::new(),
        strategy_advice: None,
        findings: Vec::new(),
    }
);

roundtrip_and_validate!(finding_roundtrip, Finding, sample_finding());

roundtrip_and_validate!(
    strategy_roundtrip,
    Strategy,
    Strategy {
        advice: "Combine alerts and journals.".into(),
        keywords: vec!["k1".into(), "k2".into()],
        sources: vec!["s1".into()],
    }
);

roundtrip_and_validate!(
    trends_report_roundtrip,
    TrendsReport,
    TrendsReport {
        report_text: "## Title\n- item".into(),
        citations: vec![Citation {
            title: Some("t".into()),
            uri: "https://x.test".into(),
        }],
    }
);

roundtrip_and_validate!(
    project_summary_roundtrip,
    ProjectSummary,
    ProjectSummary::from_project(&sample_project(), Some("prj-a3f8b2c1"))
);

roundtrip_and_validate!(
    delete_response_roundtrip,
    DeleteResponse,
    DeleteResponse {
        id: "prj-a3f8b2c1".into(),
        deleted: true,
        selection_cleared: true,
        storage_warning: None,
    }
);

#[test]
fn project_uses_camel_case_keys() {
    let json = serde_json::to_value(sample_project()).unwrap();
    assert!(json.get("sourceNames").is_some());
    assert!(json.get("strategyAdvice").is_some());
    assert!(json["findings"][0].get("rawContent").is_some());
    assert!(json["findings"][0].get("createdAt").is_some());
}

#[test]
fn summary_reports_counts_and_selection() {
    let summary = ProjectSummary::from_project(&sample_project(), Some("prj-other"));
    assert_eq!(summary.keywords, 2);
    assert_eq!(summary.sources, 1);
    assert_eq!(summary.findings, 1);
    assert_eq!(summary.last_refresh.as_deref(), Some("16 octobre 2026 à 09:30"));
    assert!(!summary.selected);
}
