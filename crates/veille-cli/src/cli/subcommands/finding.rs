use clap::Subcommand;

/// Finding commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FindingCommands {
    /// List a project's findings, newest first.
    List {
        #[arg(long)]
        project: String,
    },
    /// Get a finding by ID, with its formatted report.
    Get { id: String },
}
