//! # veille-service
//!
//! The orchestrator between the presentation layer, the research gateway and
//! the record store.
//!
//! [`MonitorService`] turns user intents (create, refresh, delete, select)
//! into gateway requests followed by record store mutations. It tracks which
//! projects have an outstanding refresh so the same project is never
//! refreshed twice at once, and stamps new findings with a locale-formatted
//! date.

mod error;
mod in_flight;
mod service;
pub mod timestamp;

pub use error::ServiceError;
pub use in_flight::{InFlight, InFlightGuard};
pub use service::MonitorService;
