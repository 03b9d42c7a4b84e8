use pantry_config::{ApiConfig, PantryConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &PantryConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PantryConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.auth.is_configured() && has_env_prefix(&env_keys, "PANTRY_AUTH") {
        warnings.push(
            "Auth token is empty while PANTRY_AUTH* env vars exist. Use double underscores (example: PANTRY_AUTH__TOKEN)."
                .to_string(),
        );
    }

    if config.api.base_url == ApiConfig::default().base_url && has_env_prefix(&env_keys, "PANTRY_API")
    {
        warnings.push(
            "API base URL is the default while PANTRY_API* env vars exist. Use double underscores (example: PANTRY_API__BASE_URL)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
