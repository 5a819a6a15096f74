mod assist;
mod finding;
mod guide;
mod project;

pub use assist::AssistCommands;
pub use finding::FindingCommands;
pub use guide::GuideCommands;
pub use project::ProjectCommands;
