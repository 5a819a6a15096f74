mod app_context;
mod config_warnings;
mod gateway;

pub use app_context::AppContext;
pub use config_warnings::warn_unconfigured;
pub use gateway::AppGateway;
