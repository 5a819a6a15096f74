//! Gemini `generateContent` client.

mod prompts;
mod types;

use std::time::Duration;

use tracing::debug;
use veille_config::{GeminiConfig, GeneralConfig};
use veille_core::entities::{Strategy, TrendsReport};

use crate::ResearchGateway;
use crate::error::GatewayError;
use crate::http::check_response;

use types::{GenerateContentRequest, GenerateContentResponse, StrategyPayload};

/// HTTP client for the Gemini API.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    report_language: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("report_language", &self.report_language)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Build a client from the `[gemini]` and `[general]` config sections.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotConfigured`] when the API key, model or
    /// timeout is missing, and [`GatewayError::Http`] if the underlying
    /// `reqwest::Client` cannot be built.
    pub fn from_config(gemini: &GeminiConfig, general: &GeneralConfig) -> Result<Self, GatewayError> {
        let gemini = gemini
            .require()
            .map_err(|e| GatewayError::NotConfigured(e.to_string()))?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("veille/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(gemini.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key: gemini.api_key.clone(),
            model: gemini.model.clone(),
            base_url: gemini.base_url.trim_end_matches('/').to_string(),
            report_language: general.report_language.clone(),
        })
    }

    /// Point the client at another API root (proxies, tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url,
            urlencoding::encode(&self.model)
        )
    }

    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GatewayError> {
        let url = self.endpoint();
        debug!(model = %self.model, url = %url, "gemini: generateContent");

        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;
        let body = check_response(resp).await?.text().await?;

        let response: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::Parse(format!("generateContent response: {e}")))?;
        if response.candidates.is_empty() {
            if let Some(reason) = response.block_reason() {
                return Err(GatewayError::Blocked(reason.to_string()));
            }
        }
        debug!(
            candidates = response.candidates.len(),
            "gemini: response received"
        );
        Ok(response)
    }
}

impl ResearchGateway for GeminiClient {
    async fn request_strategy(
        &self,
        topic: &str,
        context: &str,
        scope: Option<&str>,
    ) -> Result<Strategy, GatewayError> {
        let prompt = prompts::strategy_prompt(topic, context, scope, &self.report_language);
        let request =
            GenerateContentRequest::prompt(prompt).with_json_schema(prompts::strategy_schema());
        let response = self.generate(&request).await?;
        let text = response.text().ok_or(GatewayError::EmptyResponse)?;
        parse_strategy(&text)
    }

    async fn request_trends_report(
        &self,
        topic: &str,
        keywords: &[String],
        context: Option<&str>,
        scope: Option<&str>,
    ) -> Result<TrendsReport, GatewayError> {
        let prompt =
            prompts::trends_prompt(topic, keywords, context, scope, &self.report_language);
        let request = GenerateContentRequest::prompt(prompt).with_google_search();
        let response = self.generate(&request).await?;
        let report_text = response.text().ok_or(GatewayError::EmptyResponse)?;
        Ok(TrendsReport {
            report_text,
            citations: response.citations(),
        })
    }
}

/// Decode the schema-constrained strategy JSON.
///
/// Tolerates a surrounding Markdown code fence.
fn parse_strategy(text: &str) -> Result<Strategy, GatewayError> {
    let payload: StrategyPayload = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| GatewayError::Parse(format!("strategy payload: {e}")))?;
    Ok(Strategy {
        advice: payload.advice,
        keywords: payload.suggested_keywords,
        sources: payload.suggested_sources,
    })
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
