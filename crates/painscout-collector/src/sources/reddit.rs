//! Reddit community search (Pushshift-compatible submission search).

use std::time::Duration;

use chrono::Utc;
use painscout_core::RawSignal;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::CollectorError;
use crate::types::CollectorConfig;

use super::reddit_helpers::{build_search_query, lookback_cutoff, normalize_community, to_raw_signal};

/// Search response wrapper.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Submission>,
}

/// One submission as returned by the search endpoint. Every field is optional;
/// missing values take defaults in [`to_raw_signal`].
#[derive(Debug, Default, Deserialize)]
pub(super) struct Submission {
    pub(super) id: Option<String>,
    pub(super) title: Option<String>,
    pub(super) selftext: Option<String>,
    pub(super) body: Option<String>,
    pub(super) full_link: Option<String>,
    pub(super) url: Option<String>,
    pub(super) permalink: Option<String>,
    pub(super) score: Option<i64>,
    pub(super) num_comments: Option<i64>,
    pub(super) created_utc: Option<f64>,
    pub(super) author: Option<String>,
}

/// HTTP client for the community search endpoint.
pub(crate) struct RedditSearchClient {
    client: reqwest::Client,
    search_url: String,
}

impl RedditSearchClient {
    /// # Errors
    ///
    /// Returns [`CollectorError::Http`] if the HTTP client cannot be built.
    pub(crate) fn new(config: &CollectorConfig) -> Result<Self, CollectorError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.reddit_user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            search_url: config.reddit_search_url.clone(),
        })
    }

    /// Search one community for posts matching any trigger phrase.
    ///
    /// Restricted to posts newer than `now - days`, ordered by descending
    /// score, capped at `limit`.
    ///
    /// # Errors
    ///
    /// - [`CollectorError::RateLimited`] on HTTP 429.
    /// - [`CollectorError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`CollectorError::Http`] on network failure or timeout.
    /// - [`CollectorError::Deserialize`] if the body is not the expected JSON.
    pub(crate) async fn search_community(
        &self,
        community: &str,
        triggers: &[String],
        days: u32,
        limit: usize,
    ) -> Result<Vec<RawSignal>, CollectorError> {
        let community = normalize_community(community);
        let now = Utc::now();

        let params: Vec<(&str, String)> = vec![
            ("subreddit", community.to_string()),
            ("q", build_search_query(triggers)),
            ("after", lookback_cutoff(now, days).to_string()),
            ("size", limit.to_string()),
            ("sort", "desc".to_string()),
            ("sort_type", "score".to_string()),
        ];

        let response = self
            .client
            .get(&self.search_url)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(CollectorError::RateLimited {
                source_name: format!("reddit (r/{community})"),
            });
        }
        if !status.is_success() {
            return Err(CollectorError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.search_url.clone(),
            });
        }

        let body = response.text().await?;
        let listing: SearchResponse =
            serde_json::from_str(&body).map_err(|e| CollectorError::Deserialize {
                context: format!("reddit search r/{community}"),
                source: e,
            })?;

        Ok(listing
            .data
            .iter()
            .enumerate()
            .map(|(index, post)| to_raw_signal(post, community, index, now))
            .collect())
    }
}
