use veille_config::VeilleConfig;
use veille_core::entities::{Strategy, TrendsReport};
use veille_gateway::{GatewayError, GeminiClient, ResearchGateway};

const SETUP_HINT: &str = "set VEILLE_GEMINI__API_KEY (or GEMINI_API_KEY)";

/// Gateway used by the CLI: the Gemini client when configured, otherwise a
/// stand-in that fails every request with the configuration problem.
pub struct AppGateway {
    client: Result<GeminiClient, String>,
}

impl AppGateway {
    pub fn from_config(config: &VeilleConfig) -> Self {
        let client = GeminiClient::from_config(&config.gemini, &config.general).map_err(|error| {
            tracing::debug!(%error, "gemini client unavailable");
            match error {
                GatewayError::NotConfigured(reason) => format!("{reason}; {SETUP_HINT}"),
                other => other.to_string(),
            }
        });
        Self { client }
    }

    pub const fn is_configured(&self) -> bool {
        self.client.is_ok()
    }

    fn client(&self) -> Result<&GeminiClient, GatewayError> {
        self.client
            .as_ref()
            .map_err(|reason| GatewayError::NotConfigured(reason.clone()))
    }
}

impl ResearchGateway for AppGateway {
    async fn request_strategy(
        &self,
        topic: &str,
        context: &str,
        scope: Option<&str>,
    ) -> Result<Strategy, GatewayError> {
        self.client()?.request_strategy(topic, context, scope).await
    }

    async fn request_trends_report(
        &self,
        topic: &str,
        keywords: &[String],
        context: Option<&str>,
        scope: Option<&str>,
    ) -> Result<TrendsReport, GatewayError> {
        self.client()?
            .request_trends_report(topic, keywords, context, scope)
            .await
    }
}
