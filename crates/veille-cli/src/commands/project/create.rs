use veille_core::entities::NewProject;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::project::get::print_project_text;
use crate::context::AppContext;
use crate::output::{output, storage_warning};
use crate::progress::with_spinner;

pub async fn run(
    name: &str,
    description: Option<&str>,
    location: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let input = NewProject::new(name, description, location);
    let message = format!(
        "Asking {} for a research strategy…",
        ctx.config.gemini.model
    );
    let created = with_spinner(&message, ctx.service.create_project(input)).await?;
    storage_warning(created.storage_warning.as_deref());

    if flags.format == OutputFormat::Text {
        print_project_text(&created.project);
        return Ok(());
    }
    output(&created, flags.format)
}
