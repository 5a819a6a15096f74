use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;
mod write_lock;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("veille error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    match &cli.command {
        cli::Commands::Render(args) => return commands::render::handle(args, &flags),
        cli::Commands::Guide { action } => return commands::guide::handle(action, &flags),
        _ => {}
    }

    let config = bootstrap::load_config()?;
    context::warn_unconfigured(&config);
    let data_dir = resolve_data_dir(flags.data_dir.as_deref(), &config)?;

    let command = cli.command;
    let write_lock = if command_requires_write_lock(&command) {
        Some(write_lock::acquire_for_data_dir(&data_dir).await?)
    } else {
        None
    };

    let ctx = context::AppContext::init(config, &data_dir);

    let result = commands::dispatch::dispatch(command, &ctx, &flags).await;
    drop(write_lock);
    result
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("VEILLE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn resolve_data_dir(
    data_dir_override: Option<&str>,
    config: &veille_config::VeilleConfig,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = data_dir_override {
        let explicit = PathBuf::from(path);
        if explicit.is_file() {
            anyhow::bail!(
                "invalid --data-dir '{}': path is a file",
                explicit.display()
            );
        }
        return Ok(explicit);
    }

    config
        .storage
        .resolve_data_dir()
        .context("no data directory; set --data-dir or VEILLE_STORAGE__DATA_DIR")
}

fn command_requires_write_lock(command: &cli::Commands) -> bool {
    use crate::cli::subcommands::ProjectCommands;

    match command {
        cli::Commands::Project { action } => !matches!(
            action,
            ProjectCommands::List | ProjectCommands::Get { .. }
        ),
        cli::Commands::CreateProject(_)
        | cli::Commands::DeleteProject(_)
        | cli::Commands::Refresh(_) => true,
        cli::Commands::Finding { .. }
        | cli::Commands::Assist { .. }
        | cli::Commands::Render(_)
        | cli::Commands::Guide { .. } => false,
    }
}
