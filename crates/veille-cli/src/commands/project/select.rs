use veille_core::responses::ProjectSummary;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project = ctx.service.select(id)?;
    output(
        &ProjectSummary::from_project(&project, Some(&project.id)),
        flags.format,
    )
}
