use veille_core::entities::Finding;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::blocks::{render_blocks, render_citations};
use crate::output::output;
use crate::ui;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let detail = ctx.service.finding_detail(id)?;
    if flags.format == OutputFormat::Text {
        print_finding_text(&detail.project_id, &detail.finding);
        return Ok(());
    }
    output(&detail, flags.format)
}

/// Header, formatted report and numbered sources.
pub fn print_finding_text(project_id: &str, finding: &Finding) {
    println!("{}", finding_text(project_id, finding, ui::prefs().color));
}

fn finding_text(project_id: &str, finding: &Finding, color: bool) -> String {
    let mut out = format!(
        "{} · {} · {}\n\n{}",
        finding.created_at,
        finding.id,
        project_id,
        render_blocks(&finding.blocks(), color)
    );
    let citations = render_citations(&finding.citations, color);
    if !citations.is_empty() {
        out.push_str("\n\n");
        out.push_str(&citations);
    }
    out
}
