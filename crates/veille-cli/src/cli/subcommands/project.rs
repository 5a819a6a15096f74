use clap::Subcommand;

/// Project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// Create a project from a Gemini research strategy and select it.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Geographic scope (country, region, city).
        #[arg(long)]
        location: Option<String>,
    },
    /// List projects in creation order.
    List,
    /// Get a project by ID.
    Get { id: String },
    /// Select the project used by default.
    Use { id: String },
    /// Delete a project by ID.
    Delete { id: String },
}
