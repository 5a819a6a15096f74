//! Entity structs for the Veille domain objects.
//!
//! Projects and findings are persisted as one JSON blob, so field names are
//! serialized in `camelCase`. All structs derive `Serialize`, `Deserialize`,
//! and `JsonSchema` for JSON roundtrip and schema validation.

mod finding;
mod project;
mod strategy;

pub use finding::{Citation, Finding};
pub use project::{NewProject, Project};
pub use strategy::{Strategy, TrendsReport};
