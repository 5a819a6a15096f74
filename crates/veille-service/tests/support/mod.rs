//! Scripted gateway for service tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tokio::sync::Notify;
use veille_core::entities::{Citation, Strategy, TrendsReport};
use veille_gateway::{GatewayError, ResearchGateway};

pub struct StubGateway {
    pub strategy: Strategy,
    pub report: String,
    pub citations: Vec<Citation>,
    pub fail: AtomicBool,
    pub strategy_calls: AtomicUsize,
    pub trends_calls: AtomicUsize,
    /// When set, trends requests wait for a notification before answering.
    pub gate: Option<Arc<Notify>>,
}

impl StubGateway {
    pub fn new(strategy: Strategy, report: &str) -> Self {
        Self {
            strategy,
            report: report.to_string(),
            citations: Vec::new(),
            fail: AtomicBool::new(false),
            strategy_calls: AtomicUsize::new(0),
            trends_calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn failing(self) -> Self {
        self.fail.store(true, Ordering::SeqCst);
        self
    }

    fn outage() -> GatewayError {
        GatewayError::Api {
            status: 503,
            message: String::from("backend unavailable"),
        }
    }
}

pub fn strategy(advice: &str, keywords: &[&str], sources: &[&str]) -> Strategy {
    Strategy {
        advice: advice.to_string(),
        keywords: keywords.iter().map(ToString::to_string).collect(),
        sources: sources.iter().map(ToString::to_string).collect(),
    }
}

impl ResearchGateway for StubGateway {
    async fn request_strategy(
        &self,
        _topic: &str,
        _context: &str,
        _scope: Option<&str>,
    ) -> Result<Strategy, GatewayError> {
        self.strategy_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(Self::outage());
        }
        Ok(self.strategy.clone())
    }

    async fn request_trends_report(
        &self,
        _topic: &str,
        _keywords: &[String],
        _context: Option<&str>,
        _scope: Option<&str>,
    ) -> Result<TrendsReport, GatewayError> {
        self.trends_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(Self::outage());
        }
        Ok(TrendsReport {
            report_text: self.report.clone(),
            citations: self.citations.clone(),
        })
    }
}
