use veille_core::entities::Project;
use veille_core::format::format_content;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::blocks::render_blocks;
use crate::output::output;
use crate::ui;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = ctx.service.project(id)?;
    if flags.format == OutputFormat::Text {
        print_project_text(&project);
        return Ok(());
    }
    output(project.as_ref(), flags.format)
}

pub fn print_project_text(project: &Project) {
    println!("{}", project_text(project, ui::prefs().color));
}

fn project_text(project: &Project, color: bool) -> String {
    let mut lines = vec![format!("{} ({})", project.name, project.id)];
    if let Some(location) = &project.location {
        lines.push(format!("Scope: {location}"));
    }
    if !project.description.is_empty() {
        lines.push(format!("Context: {}", project.description));
    }
    if !project.keywords.is_empty() {
        lines.push(format!("Keywords: {}", project.keywords.join(", ")));
    }
    if !project.source_names.is_empty() {
        lines.push(format!("Sources: {}", project.source_names.join(", ")));
    }
    lines.push(format!("Findings: {}", project.findings.len()));
    if let Some(advice) = &project.strategy_advice {
        lines.push(String::new());
        lines.push(render_blocks(&format_content(advice), color));
    }
    lines.join("\n")
}
