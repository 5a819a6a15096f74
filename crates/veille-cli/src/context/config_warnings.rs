use veille_config::VeilleConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &VeilleConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &VeilleConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.gemini.is_configured() && has_env_prefix(&env_keys, "VEILLE_GEMINI") {
        warnings.push(
            "Gemini config appears default while VEILLE_GEMINI* env vars exist. Use double underscores (example: VEILLE_GEMINI__API_KEY)."
                .to_string(),
        );
    }

    if config.storage.data_dir.is_empty() && has_env_prefix(&env_keys, "VEILLE_STORAGE") {
        warnings.push(
            "Storage config appears default while VEILLE_STORAGE* env vars exist. Use double underscores (example: VEILLE_STORAGE__DATA_DIR)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
