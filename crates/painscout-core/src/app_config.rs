use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub profile_path: PathBuf,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub force_mock: bool,
    pub twitter_bearer_token: Option<String>,
    pub twitter_api_url: String,
    pub reddit_search_url: String,
    pub reddit_user_agent: String,
    pub request_timeout_secs: u64,
    pub reddit_result_limit: usize,
    pub reddit_rate_limit_pause_ms: u64,
    pub reddit_inter_request_delay_ms: u64,
    pub classify_interval_ms: u64,
}

impl AppConfig {
    /// Whether the enricher can reach the live classifier.
    ///
    /// False when `MOCK_MODE` is set or no Gemini key is configured.
    #[must_use]
    pub fn live_classification_enabled(&self) -> bool {
        !self.force_mock && self.gemini_api_key.is_some()
    }

    /// ANSI colour in log output; off in production where logs go to files
    /// or collectors.
    #[must_use]
    pub fn ansi_logs(&self) -> bool {
        self.env != Environment::Production
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("profile_path", &self.profile_path)
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("force_mock", &self.force_mock)
            .field(
                "twitter_bearer_token",
                &self.twitter_bearer_token.as_ref().map(|_| "[redacted]"),
            )
            .field("twitter_api_url", &self.twitter_api_url)
            .field("reddit_search_url", &self.reddit_search_url)
            .field("reddit_user_agent", &self.reddit_user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("reddit_result_limit", &self.reddit_result_limit)
            .field(
                "reddit_rate_limit_pause_ms",
                &self.reddit_rate_limit_pause_ms,
            )
            .field(
                "reddit_inter_request_delay_ms",
                &self.reddit_inter_request_delay_ms,
            )
            .field("classify_interval_ms", &self.classify_interval_ms)
            .finish()
    }
}
