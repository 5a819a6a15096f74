use clap::Subcommand;

/// Guide commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GuideCommands {
    /// The four steps of a monitoring process.
    Steps,
    /// Recommended monitoring tools.
    Tools,
}
