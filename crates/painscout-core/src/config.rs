use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional. Credentials that are missing or blank leave the
/// corresponding upstream disabled, which routes the pipeline to its demo or
/// mock path instead of failing.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let secret = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("PAINSCOUT_ENV", "development"))?;
    let log_level = or_default("PAINSCOUT_LOG_LEVEL", "info");
    let profile_path = PathBuf::from(or_default("PAINSCOUT_PROFILE_PATH", "./config/scan.yaml"));

    let gemini_api_key = secret("GEMINI_API_KEY");
    let gemini_model = or_default("GEMINI_MODEL", "gemini-1.5-flash");
    let gemini_base_url = or_default(
        "GEMINI_BASE_URL",
        "https://generativelanguage.googleapis.com",
    );
    let force_mock = parse_bool("MOCK_MODE", &or_default("MOCK_MODE", "false"))?;

    let twitter_bearer_token = secret("TWITTER_BEARER_TOKEN");
    let twitter_api_url = or_default("TWITTER_API_URL", "https://api.twitter.com");

    let reddit_search_url = or_default(
        "REDDIT_SEARCH_URL",
        "https://api.pushshift.io/reddit/search/submission/",
    );
    let reddit_user_agent = or_default("REDDIT_USER_AGENT", "PainScout.ai/1.0");

    let request_timeout_secs = parse_u64("PAINSCOUT_REQUEST_TIMEOUT_SECS", "10")?;
    let reddit_result_limit = parse_usize("PAINSCOUT_REDDIT_RESULT_LIMIT", "50")?;
    let reddit_rate_limit_pause_ms = parse_u64("PAINSCOUT_REDDIT_RATE_LIMIT_PAUSE_MS", "2000")?;
    let reddit_inter_request_delay_ms =
        parse_u64("PAINSCOUT_REDDIT_INTER_REQUEST_DELAY_MS", "500")?;
    let classify_interval_ms = parse_u64("PAINSCOUT_CLASSIFY_INTERVAL_MS", "1000")?;

    Ok(AppConfig {
        env,
        log_level,
        profile_path,
        gemini_api_key,
        gemini_model,
        gemini_base_url,
        force_mock,
        twitter_bearer_token,
        twitter_api_url,
        reddit_search_url,
        reddit_user_agent,
        request_timeout_secs,
        reddit_result_limit,
        reddit_rate_limit_pause_ms,
        reddit_inter_request_delay_ms,
        classify_interval_ms,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "PAINSCOUT_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
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

    #[test]
    fn parse_environment_known_values() {
        assert_eq!(
            parse_environment("development").unwrap(),
            Environment::Development
        );
        assert_eq!(parse_environment("test").unwrap(), Environment::Test);
        assert_eq!(
            parse_environment("production").unwrap(),
            Environment::Production
        );
    }

    #[test]
    fn parse_environment_unknown_fails() {
        let err = parse_environment("staging").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "PAINSCOUT_ENV"));
    }

    #[test]
    fn build_app_config_defaults_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.profile_path.to_str(), Some("./config/scan.yaml"));
        assert!(cfg.gemini_api_key.is_none());
        assert!(cfg.twitter_bearer_token.is_none());
        assert!(!cfg.force_mock);
        assert_eq!(cfg.gemini_model, "gemini-1.5-flash");
        assert_eq!(cfg.reddit_user_agent, "PainScout.ai/1.0");
        assert_eq!(cfg.request_timeout_secs, 10);
        assert_eq!(cfg.reddit_result_limit, 50);
        assert_eq!(cfg.reddit_rate_limit_pause_ms, 2000);
        assert_eq!(cfg.reddit_inter_request_delay_ms, 500);
        assert_eq!(cfg.classify_interval_ms, 1000);
        assert!(!cfg.live_classification_enabled());
    }

    #[test]
    fn production_disables_ansi_logs() {
        let mut map = HashMap::new();
        map.insert("PAINSCOUT_ENV", "production");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(!cfg.ansi_logs());

        let dev = build_app_config(lookup_from_map(&HashMap::new())).unwrap();
        assert!(dev.ansi_logs());
    }

    #[test]
    fn gemini_key_enables_live_classification() {
        let mut map = HashMap::new();
        map.insert("GEMINI_API_KEY", "abc123");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.live_classification_enabled());
    }

    #[test]
    fn mock_mode_overrides_gemini_key() {
        let mut map = HashMap::new();
        map.insert("GEMINI_API_KEY", "abc123");
        map.insert("MOCK_MODE", "True");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.force_mock);
        assert!(!cfg.live_classification_enabled());
    }

    #[test]
    fn blank_credentials_are_treated_as_missing() {
        let mut map = HashMap::new();
        map.insert("GEMINI_API_KEY", "   ");
        map.insert("TWITTER_BEARER_TOKEN", "");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.gemini_api_key.is_none());
        assert!(cfg.twitter_bearer_token.is_none());
    }

    #[test]
    fn invalid_mock_mode_is_rejected() {
        let mut map = HashMap::new();
        map.insert("MOCK_MODE", "sometimes");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MOCK_MODE"),
            "expected InvalidEnvVar(MOCK_MODE), got: {result:?}"
        );
    }

    #[test]
    fn request_timeout_override() {
        let mut map = HashMap::new();
        map.insert("PAINSCOUT_REQUEST_TIMEOUT_SECS", "3");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout_secs, 3);
    }

    #[test]
    fn classify_interval_invalid() {
        let mut map = HashMap::new();
        map.insert("PAINSCOUT_CLASSIFY_INTERVAL_MS", "one second");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PAINSCOUT_CLASSIFY_INTERVAL_MS"),
            "expected InvalidEnvVar(PAINSCOUT_CLASSIFY_INTERVAL_MS), got: {result:?}"
        );
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let mut map = HashMap::new();
        map.insert("GEMINI_API_KEY", "super-secret-key");
        map.insert("TWITTER_BEARER_TOKEN", "bearer-secret");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("super-secret-key"));
        assert!(!rendered.contains("bearer-secret"));
        assert!(rendered.contains("[redacted]"));
    }
}
