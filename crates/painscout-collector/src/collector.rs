//! Collection orchestration: one source per scan, sequential requests, demo
//! substitution on empty or unreachable upstreams.

use std::collections::HashSet;
use std::time::Duration;

use chrono::Utc;
use painscout_core::profile::{MAX_DAYS, MIN_DAYS};
use painscout_core::{RawSignal, SignalSource};

use crate::demo::demo_corpus;
use crate::error::CollectorError;
use crate::sources::{normalize_community, RedditSearchClient, TwitterClient};
use crate::types::{
    CollectOutcome, CollectorConfig, FallbackReason, ProgressSink, ScanProgress, ScanRequest,
};

/// Produces a normalized batch of [`RawSignal`] from one source.
///
/// [`collect`](Self::collect) never fails: every upstream problem ends in
/// either a skipped community or a demo-corpus substitution.
pub struct SourceCollector {
    reddit: RedditSearchClient,
    twitter: Option<TwitterClient>,
    rate_limit_pause: Duration,
    inter_request_delay: Duration,
}

impl SourceCollector {
    /// # Errors
    ///
    /// Returns [`CollectorError::Http`] if an HTTP client cannot be built.
    pub fn new(config: &CollectorConfig) -> Result<Self, CollectorError> {
        Ok(Self {
            reddit: RedditSearchClient::new(config)?,
            twitter: TwitterClient::from_config(config)?,
            rate_limit_pause: Duration::from_millis(config.rate_limit_pause_ms),
            inter_request_delay: Duration::from_millis(config.inter_request_delay_ms),
        })
    }

    /// Whether X searches will reach the live API.
    #[must_use]
    pub fn has_twitter_credentials(&self) -> bool {
        self.twitter.is_some()
    }

    /// Run one collection for `request`, reporting progress to `progress`.
    ///
    /// Reddit windows are clamped to the profile's 7 to 90 day range; X
    /// windows are clamped further by the X client.
    pub async fn collect<P>(&self, request: &ScanRequest, progress: &P) -> CollectOutcome
    where
        P: ProgressSink + ?Sized,
    {
        match request {
            ScanRequest::Reddit {
                communities,
                triggers,
                days,
                limit,
            } => {
                let days = (*days).clamp(MIN_DAYS, MAX_DAYS);
                self.collect_reddit(communities, triggers, days, *limit, progress)
                    .await
            }
            ScanRequest::Twitter { topics, days } => {
                self.collect_twitter(topics, *days, progress).await
            }
        }
    }

    async fn collect_reddit<P>(
        &self,
        communities: &[String],
        triggers: &[String],
        days: u32,
        limit: usize,
        progress: &P,
    ) -> CollectOutcome
    where
        P: ProgressSink + ?Sized,
    {
        let total = communities.len();
        let mut signals: Vec<RawSignal> = Vec::new();
        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut failures = 0usize;

        for (idx, community) in communities.iter().enumerate() {
            match self
                .reddit
                .search_community(community, triggers, days, limit)
                .await
            {
                Ok(found) => {
                    tracing::debug!(
                        community = community.as_str(),
                        count = found.len(),
                        "collected Reddit signals"
                    );
                    signals.extend(found.into_iter().filter(|s| seen_ids.insert(s.id.clone())));
                }
                Err(CollectorError::RateLimited { source_name }) => {
                    failures += 1;
                    tracing::warn!(
                        community = community.as_str(),
                        source = source_name.as_str(),
                        pause_ms = self.rate_limit_pause.as_millis(),
                        "rate limited; pausing before next community"
                    );
                    tokio::time::sleep(self.rate_limit_pause).await;
                }
                Err(e) => {
                    failures += 1;
                    tracing::warn!(
                        community = community.as_str(),
                        error = %e,
                        "community search failed; skipping"
                    );
                }
            }

            progress.report(&ScanProgress {
                completed: idx + 1,
                total,
                status: format!("Scanned r/{}", normalize_community(community)),
            });

            if idx + 1 < total && !self.inter_request_delay.is_zero() {
                tokio::time::sleep(self.inter_request_delay).await;
            }
        }

        progress.report(&ScanProgress {
            completed: total,
            total,
            status: "Scan complete!".to_string(),
        });

        if !signals.is_empty() {
            tracing::info!(
                communities = total,
                failed = failures,
                count = signals.len(),
                "Reddit scan complete"
            );
            return CollectOutcome::Live(signals);
        }

        let reason = if total > 0 && failures == total {
            FallbackReason::UpstreamUnavailable {
                detail: format!("{failures} of {total} communities failed"),
            }
        } else {
            FallbackReason::NoResults
        };
        fallback(SignalSource::Reddit, reason)
    }

    async fn collect_twitter<P>(&self, topics: &[String], days: u32, progress: &P) -> CollectOutcome
    where
        P: ProgressSink + ?Sized,
    {
        let Some(client) = &self.twitter else {
            return fallback(SignalSource::Twitter, FallbackReason::MissingCredentials);
        };

        progress.report(&ScanProgress {
            completed: 0,
            total: 1,
            status: "Searching X...".to_string(),
        });

        let result = client.search_recent(topics, days).await;

        progress.report(&ScanProgress {
            completed: 1,
            total: 1,
            status: "Scan complete!".to_string(),
        });

        match result {
            Ok(signals) if signals.is_empty() => {
                fallback(SignalSource::Twitter, FallbackReason::NoResults)
            }
            Ok(signals) => {
                tracing::info!(count = signals.len(), "X scan complete");
                CollectOutcome::Live(signals)
            }
            Err(e) => {
                tracing::warn!(error = %e, "X recent search failed");
                fallback(
                    SignalSource::Twitter,
                    FallbackReason::UpstreamUnavailable {
                        detail: e.to_string(),
                    },
                )
            }
        }
    }
}

fn fallback(source: SignalSource, reason: FallbackReason) -> CollectOutcome {
    tracing::warn!(
        source = source.as_str(),
        reason = ?reason,
        "substituting demo corpus"
    );
    let signals = demo_corpus(source, &mut rand::rng(), Utc::now());
    CollectOutcome::Fallback { signals, reason }
}
