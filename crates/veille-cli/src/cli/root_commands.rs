use clap::{Args, Subcommand};

use crate::cli::subcommands::{AssistCommands, FindingCommands, GuideCommands, ProjectCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Research projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Create a project (same as `project create`).
    CreateProject(CreateProjectArgs),
    /// Delete a project and all its findings.
    DeleteProject(DeleteProjectArgs),
    /// Fetch a fresh grounded report for a project.
    Refresh(RefreshArgs),
    /// Findings stored under projects.
    Finding {
        #[command(subcommand)]
        action: FindingCommands,
    },
    /// Format report text into blocks.
    #[command(visible_alias = "render-finding")]
    Render(RenderArgs),
    /// Ad-hoc research assistant (nothing is stored).
    Assist {
        #[command(subcommand)]
        action: AssistCommands,
    },
    /// Monitoring methodology and recommended tools.
    Guide {
        #[command(subcommand)]
        action: GuideCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct CreateProjectArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Geographic scope (country, region, city).
    #[arg(long)]
    pub location: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DeleteProjectArgs {
    /// Project ID.
    #[arg(long)]
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct RefreshArgs {
    /// Project to refresh (defaults to the selected project).
    #[arg(long, conflicts_with = "all")]
    pub project_id: Option<String>,

    /// Refresh every project concurrently.
    #[arg(long)]
    pub all: bool,
}

#[derive(Clone, Debug, Args)]
pub struct RenderArgs {
    /// Report text to format (reads stdin when neither --content nor --file is given).
    #[arg(long, conflicts_with = "file")]
    pub content: Option<String>,

    /// File holding the report text.
    #[arg(long)]
    pub file: Option<String>,
}
