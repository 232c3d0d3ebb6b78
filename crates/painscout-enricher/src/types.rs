use painscout_core::AppConfig;

/// Settings the enricher needs, derived once from [`AppConfig`].
#[derive(Clone)]
pub struct EnricherConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// Use the local classifier even when a key is configured.
    pub force_mock: bool,
    pub request_timeout_secs: u64,
    /// Minimum spacing between successive live classification calls.
    pub classify_interval_ms: u64,
}

impl EnricherConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            gemini_api_key: config.gemini_api_key.clone(),
            gemini_model: config.gemini_model.clone(),
            gemini_base_url: config.gemini_base_url.clone(),
            force_mock: config.force_mock,
            request_timeout_secs: config.request_timeout_secs,
            classify_interval_ms: config.classify_interval_ms,
        }
    }

    /// The key to use for live calls, or `None` when mock mode applies.
    #[must_use]
    pub fn live_api_key(&self) -> Option<&str> {
        if self.force_mock {
            None
        } else {
            self.gemini_api_key.as_deref()
        }
    }
}

impl std::fmt::Debug for EnricherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnricherConfig")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("force_mock", &self.force_mock)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("classify_interval_ms", &self.classify_interval_ms)
            .finish()
    }
}

/// Which classifier an enricher was built with. Fixed for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichMode {
    Live,
    Mock,
}

impl std::fmt::Display for EnrichMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrichMode::Live => write!(f, "live"),
            EnrichMode::Mock => write!(f, "mock"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: Option<&str>, force_mock: bool) -> EnricherConfig {
        EnricherConfig {
            gemini_api_key: key.map(str::to_string),
            gemini_model: "gemini-1.5-flash".to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
            force_mock,
            request_timeout_secs: 10,
            classify_interval_ms: 1000,
        }
    }

    #[test]
    fn key_enables_live_calls() {
        assert_eq!(config(Some("k"), false).live_api_key(), Some("k"));
    }

    #[test]
    fn force_mock_hides_key() {
        assert_eq!(config(Some("k"), true).live_api_key(), None);
        assert_eq!(config(None, false).live_api_key(), None);
    }

    #[test]
    fn debug_redacts_key() {
        let rendered = format!("{:?}", config(Some("super-secret"), false));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[redacted]"));
    }
}
