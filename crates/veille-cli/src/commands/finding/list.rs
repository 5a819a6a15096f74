use serde::Serialize;
use veille_core::entities::Finding;
use veille_core::format::Block;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FindingRow {
    id: String,
    created_at: String,
    citations: usize,
    preview: String,
}

impl FindingRow {
    fn from_finding(finding: &Finding) -> Self {
        Self {
            id: finding.id.clone(),
            created_at: finding.created_at.clone(),
            citations: finding.citations.len(),
            preview: preview(finding),
        }
    }
}

/// Plain text of the first non-blank block.
fn preview(finding: &Finding) -> String {
    finding
        .blocks()
        .iter()
        .find(|block| **block != Block::Blank)
        .map(Block::plain_text)
        .unwrap_or_default()
}

pub fn run(project_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let findings = ctx.service.findings(project_id)?;
    match flags.format {
        OutputFormat::Table | OutputFormat::Text => {
            let rows: Vec<FindingRow> = findings.iter().map(FindingRow::from_finding).collect();
            output(&rows, flags.format)
        }
        OutputFormat::Json | OutputFormat::Raw => output(&findings, flags.format),
    }
}
