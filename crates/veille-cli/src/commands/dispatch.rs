use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Project { action } => commands::project::handle(&action, ctx, flags).await,
        Commands::CreateProject(args) => {
            commands::project::create::run(
                &args.name,
                args.description.as_deref(),
                args.location.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        Commands::DeleteProject(args) => commands::project::delete::run(&args.id, ctx, flags),
        Commands::Refresh(args) => commands::refresh::handle(&args, ctx, flags).await,
        Commands::Finding { action } => commands::finding::handle(&action, ctx, flags),
        Commands::Assist { action } => commands::assist::handle(&action, ctx, flags).await,
        Commands::Render(_) | Commands::Guide { .. } => {
            unreachable!("render/guide are pre-dispatched in main")
        }
    }
}
