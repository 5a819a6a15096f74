pub mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FindingCommands;
use crate::context::AppContext;

/// Handle `veille finding`.
pub fn handle(action: &FindingCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        FindingCommands::List { project } => list::run(project, ctx, flags),
        FindingCommands::Get { id } => get::run(id, ctx, flags),
    }
}
