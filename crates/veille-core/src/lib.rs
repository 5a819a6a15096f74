//! # veille-core
//!
//! Core types, ID generation, and error types for Veille.
//!
//! This crate provides the foundational types shared across all Veille crates:
//! - Entity structs for the domain objects (projects, findings, citations)
//! - Gateway payloads (research strategy, trends report)
//! - The markdown-subset content formatter used to display findings
//! - ID prefix constants and generation helpers
//! - Cross-cutting error types
//! - CLI response types
//! - The built-in monitoring methodology catalog

pub mod catalog;
pub mod entities;
pub mod errors;
pub mod format;
pub mod ids;
pub mod responses;
