use thiserror::Error;

use crate::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_config_from_env() -> Result<AppConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
fn build_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let supabase_url = require("PAITHIAO_SUPABASE_URL")?;
    let supabase_anon_key = require("PAITHIAO_SUPABASE_ANON_KEY")?;

    let request_timeout_secs = parse_u64("PAITHIAO_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PAITHIAO_USER_AGENT", "paithiao/0.1 (tourism-guide)");
    let log_level = or_default("PAITHIAO_LOG_LEVEL", "info");

    Ok(AppConfig {
        supabase_url,
        supabase_anon_key,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid values.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("PAITHIAO_SUPABASE_URL", "https://example.supabase.co");
        m.insert("PAITHIAO_SUPABASE_ANON_KEY", "anon-key");
        m
    }

    #[test]
    fn build_config_fails_without_supabase_url() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "PAITHIAO_SUPABASE_URL"),
            "expected MissingEnvVar(PAITHIAO_SUPABASE_URL), got: {result:?}"
        );
    }

    #[test]
    fn build_config_fails_without_anon_key() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("PAITHIAO_SUPABASE_URL", "https://example.supabase.co");
        let result = build_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "PAITHIAO_SUPABASE_ANON_KEY"),
            "expected MissingEnvVar(PAITHIAO_SUPABASE_ANON_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_config_applies_defaults() {
        let map = full_env();
        let config = build_config(lookup_from_map(&map)).unwrap();
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.log_level, "info");
        assert!(config.user_agent.starts_with("paithiao/"));
    }

    #[test]
    fn build_config_reads_overrides() {
        let mut map = full_env();
        map.insert("PAITHIAO_REQUEST_TIMEOUT_SECS", "5");
        map.insert("PAITHIAO_LOG_LEVEL", "debug");
        let config = build_config(lookup_from_map(&map)).unwrap();
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn build_config_rejects_non_numeric_timeout() {
        let mut map = full_env();
        map.insert("PAITHIAO_REQUEST_TIMEOUT_SECS", "soon");
        let result = build_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PAITHIAO_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar, got: {result:?}"
        );
    }

    #[test]
    fn debug_output_redacts_anon_key() {
        let map = full_env();
        let config = build_config(lookup_from_map(&map)).unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("[redacted]"));
        assert!(!debug.contains("anon-key"));
    }
}
