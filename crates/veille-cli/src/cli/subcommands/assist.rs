use clap::Subcommand;

/// Assistant commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AssistCommands {
    /// Suggest keywords, sources and advice for a topic.
    Strategy {
        #[arg(long)]
        topic: String,
        #[arg(long)]
        context: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Produce a grounded report of recent developments on a topic.
    Trends {
        #[arg(long)]
        topic: String,
        #[arg(long)]
        context: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
}
