use painscout_core::{AppConfig, RawSignal};

/// Settings the collector needs, derived once from [`AppConfig`].
#[derive(Clone)]
pub struct CollectorConfig {
    pub reddit_search_url: String,
    pub reddit_user_agent: String,
    pub twitter_api_url: String,
    pub twitter_bearer_token: Option<String>,
    pub request_timeout_secs: u64,
    /// Pause after a Reddit 429 before moving on to the next community.
    pub rate_limit_pause_ms: u64,
    /// Delay between successive community searches.
    pub inter_request_delay_ms: u64,
}

impl CollectorConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            reddit_search_url: config.reddit_search_url.clone(),
            reddit_user_agent: config.reddit_user_agent.clone(),
            twitter_api_url: config.twitter_api_url.clone(),
            twitter_bearer_token: config.twitter_bearer_token.clone(),
            request_timeout_secs: config.request_timeout_secs,
            rate_limit_pause_ms: config.reddit_rate_limit_pause_ms,
            inter_request_delay_ms: config.reddit_inter_request_delay_ms,
        }
    }
}

impl std::fmt::Debug for CollectorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectorConfig")
            .field("reddit_search_url", &self.reddit_search_url)
            .field("reddit_user_agent", &self.reddit_user_agent)
            .field("twitter_api_url", &self.twitter_api_url)
            .field(
                "twitter_bearer_token",
                &self.twitter_bearer_token.as_ref().map(|_| "[redacted]"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("rate_limit_pause_ms", &self.rate_limit_pause_ms)
            .field("inter_request_delay_ms", &self.inter_request_delay_ms)
            .finish()
    }
}

/// What to collect in one scan.
#[derive(Debug, Clone)]
pub enum ScanRequest {
    /// One search per community, trigger phrases OR-ed together.
    Reddit {
        communities: Vec<String>,
        triggers: Vec<String>,
        days: u32,
        /// Per-community result cap.
        limit: usize,
    },
    /// One recent-search query over topic keywords and built-in intent terms.
    /// `days` is capped at 7 by the collector.
    Twitter { topics: Vec<String>, days: u32 },
}

/// Why a collection fell back to the demo corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No credential configured; the upstream was never contacted.
    MissingCredentials,
    /// The upstream answered but nothing matched.
    NoResults,
    /// Every request to the upstream failed.
    UpstreamUnavailable { detail: String },
}

/// Result of one collection: real data, or a demo substitution tagged with
/// the reason it happened.
#[derive(Debug, Clone)]
pub enum CollectOutcome {
    Live(Vec<RawSignal>),
    Fallback {
        signals: Vec<RawSignal>,
        reason: FallbackReason,
    },
}

impl CollectOutcome {
    #[must_use]
    pub fn signals(&self) -> &[RawSignal] {
        match self {
            CollectOutcome::Live(signals) | CollectOutcome::Fallback { signals, .. } => signals,
        }
    }

    #[must_use]
    pub fn into_signals(self) -> Vec<RawSignal> {
        match self {
            CollectOutcome::Live(signals) | CollectOutcome::Fallback { signals, .. } => signals,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, CollectOutcome::Fallback { .. })
    }

    /// Message for display when the batch is demo data, `None` for live data.
    #[must_use]
    pub fn status_message(&self) -> Option<String> {
        match self {
            CollectOutcome::Live(_) => None,
            CollectOutcome::Fallback { reason, .. } => Some(match reason {
                FallbackReason::MissingCredentials => {
                    "No API credentials configured. Displaying demo intelligence.".to_string()
                }
                FallbackReason::NoResults => {
                    "No live signals matched. Displaying demo intelligence.".to_string()
                }
                FallbackReason::UpstreamUnavailable { detail } => {
                    format!("Network issue ({detail}). Displaying cached intelligence.")
                }
            }),
        }
    }
}

/// One progress update emitted during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanProgress {
    pub completed: usize,
    pub total: usize,
    pub status: String,
}

/// Observability hook for scan progress. Not part of the data contract;
/// non-interactive callers pass [`NoProgress`].
pub trait ProgressSink {
    fn report(&self, progress: &ScanProgress);
}

impl<F> ProgressSink for F
where
    F: Fn(&ScanProgress),
{
    fn report(&self, progress: &ScanProgress) {
        self(progress);
    }
}

/// Sink that discards every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _progress: &ScanProgress) {}
}
