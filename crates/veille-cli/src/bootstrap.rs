use anyhow::Context;
use veille_config::VeilleConfig;

/// Load `.env` (when present) and the layered configuration.
pub fn load_config() -> anyhow::Result<VeilleConfig> {
    load_dotenv()?;
    VeilleConfig::load().context("failed to load veille configuration")
}

fn load_dotenv() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded dotenv file");
            Ok(())
        }
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(error).context("failed to load .env file"),
    }
}
