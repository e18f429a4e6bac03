use roster_config::{ENV_PREFIX, RosterConfig, SourceKind};

/// Emit warnings for likely mistyped env var keys and half-filled credentials.
pub fn warn_unconfigured(config: &RosterConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &RosterConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let airtable_prefix = format!("{ENV_PREFIX}AIRTABLE");

    let mut warnings = Vec::new();

    if !config.airtable.is_configured() && has_env_prefix(&env_keys, &airtable_prefix) {
        warnings.push(format!(
            "Airtable config appears default while {airtable_prefix}* env vars exist. Use double underscores (example: {airtable_prefix}__API_KEY)."
        ));
    }

    let airtable = &config.airtable;
    if airtable.api_key.is_empty() != airtable.base_id.is_empty() {
        warnings.push(
            "Airtable config is half set: both airtable.api_key and airtable.base_id are required."
                .to_string(),
        );
    }

    if config.general.source == SourceKind::Sample && airtable.is_configured() {
        warnings.push(
            "Airtable credentials are set but the sample source is selected. Pass --source airtable or set general.source."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
