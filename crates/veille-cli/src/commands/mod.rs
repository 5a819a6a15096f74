pub mod assist;
pub mod dispatch;
pub mod finding;
pub mod guide;
pub mod project;
pub mod refresh;
pub mod render;
