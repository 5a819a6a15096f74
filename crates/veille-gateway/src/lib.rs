//! # veille-gateway
//!
//! Client side of the generative-language backend.
//!
//! The [`ResearchGateway`] trait is the seam the orchestrator depends on;
//! [`GeminiClient`] implements it over the Gemini `generateContent` REST
//! endpoint. A strategy request asks for schema-constrained JSON, a trends
//! request enables web-search grounding and returns the cited sources.

mod error;
mod gemini;
mod http;

pub use error::GatewayError;
pub use gemini::GeminiClient;

use veille_core::entities::{Strategy, TrendsReport};

/// Backend able to produce research strategies and grounded reports.
pub trait ResearchGateway: Send + Sync {
    /// Propose keywords, sources and methodological advice for a topic.
    fn request_strategy(
        &self,
        topic: &str,
        context: &str,
        scope: Option<&str>,
    ) -> impl Future<Output = Result<Strategy, GatewayError>> + Send;

    /// Produce a report of recent developments with inline citations.
    fn request_trends_report(
        &self,
        topic: &str,
        keywords: &[String],
        context: Option<&str>,
        scope: Option<&str>,
    ) -> impl Future<Output = Result<TrendsReport, GatewayError>> + Send;
}
