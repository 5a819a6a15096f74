pub mod create;
pub mod delete;
mod get;
mod list;
mod select;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;

/// Handle `veille project`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::Create {
            name,
            description,
            location,
        } => create::run(name, description.as_deref(), location.as_deref(), ctx, flags).await,
        ProjectCommands::List => list::run(ctx, flags),
        ProjectCommands::Get { id } => get::run(id, ctx, flags),
        ProjectCommands::Use { id } => select::run(id, ctx, flags),
        ProjectCommands::Delete { id } => delete::run(id, ctx, flags),
    }
}
