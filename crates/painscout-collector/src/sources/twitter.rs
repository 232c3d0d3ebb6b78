//! X (Twitter) recent search via the v2 REST API with an app bearer token.

use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use painscout_core::{RawSignal, SignalSource};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::CollectorError;
use crate::types::CollectorConfig;

use super::title_from_body;

/// Intent terms AND-ed with the caller's topics. Independent of caller input.
pub(crate) const INTENT_TERMS: [&str; 5] = ["need", "wish", "hate", "sucks", "problem"];

/// Longest window recent search supports, whatever the caller asked for.
pub(crate) const MAX_WINDOW_DAYS: u32 = 7;

const MAX_RESULTS: u32 = 100;

/// X rejects a `start_time` outside its window as measured by its own clock,
/// so the computed start is pulled forward by this much.
const START_TIME_MARGIN_SECS: i64 = 60;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Tweet>,
}

#[derive(Debug, Deserialize)]
struct Tweet {
    id: String,
    text: String,
    created_at: Option<DateTime<Utc>>,
    author_id: Option<String>,
    #[serde(default)]
    public_metrics: PublicMetrics,
}

#[derive(Debug, Default, Deserialize)]
struct PublicMetrics {
    #[serde(default)]
    retweet_count: i64,
    #[serde(default)]
    like_count: i64,
    #[serde(default)]
    reply_count: i64,
}

/// Authenticated recent-search client. Only constructed when a bearer token
/// is configured.
pub(crate) struct TwitterClient {
    client: reqwest::Client,
    search_url: String,
    bearer_token: String,
}

impl TwitterClient {
    /// Returns `Ok(None)` when no bearer token is configured.
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError::Http`] if the HTTP client cannot be built.
    pub(crate) fn from_config(config: &CollectorConfig) -> Result<Option<Self>, CollectorError> {
        let Some(token) = config.twitter_bearer_token.as_deref() else {
            return Ok(None);
        };

        let client = reqwest::Client::builder()
            .timeout(StdDuration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Some(Self {
            client,
            search_url: format!(
                "{}/2/tweets/search/recent",
                config.twitter_api_url.trim_end_matches('/')
            ),
            bearer_token: token.to_string(),
        }))
    }

    /// Search the most recent matching posts (up to 100) in one call.
    ///
    /// # Errors
    ///
    /// - [`CollectorError::RateLimited`] on HTTP 429.
    /// - [`CollectorError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`CollectorError::Http`] on network failure or timeout.
    /// - [`CollectorError::Deserialize`] if the body is not the expected JSON.
    pub(crate) async fn search_recent(
        &self,
        topics: &[String],
        days: u32,
    ) -> Result<Vec<RawSignal>, CollectorError> {
        let now = Utc::now();
        let start_time = search_start_time(now, days);

        let params: Vec<(&str, String)> = vec![
            ("query", build_query(topics)),
            ("max_results", MAX_RESULTS.to_string()),
            (
                "tweet.fields",
                "created_at,public_metrics,author_id".to_string(),
            ),
            (
                "start_time",
                start_time.to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
        ];

        let response = self
            .client
            .get(&self.search_url)
            .bearer_auth(&self.bearer_token)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(CollectorError::RateLimited {
                source_name: "x recent search".to_string(),
            });
        }
        if !status.is_success() {
            return Err(CollectorError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.search_url.clone(),
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| CollectorError::Deserialize {
                context: "x recent search".to_string(),
                source: e,
            })?;

        Ok(parsed
            .data
            .into_iter()
            .map(|tweet| to_raw_signal(tweet, now))
            .collect())
    }
}

/// `(topic1 OR topic2 …) (intent1 OR …) -is:retweet lang:en`.
///
/// Blank topics are dropped; with no topics only the intent group remains.
pub(crate) fn build_query(topics: &[String]) -> String {
    let topics: Vec<&str> = topics
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();
    let intent_group = format!("({})", INTENT_TERMS.join(" OR "));

    if topics.is_empty() {
        format!("{intent_group} -is:retweet lang:en")
    } else {
        format!(
            "({}) {intent_group} -is:retweet lang:en",
            topics.join(" OR ")
        )
    }
}

/// Requested window clamped to what recent search supports. A zero-day
/// window would put `start_time` in the future, so one day is the floor.
pub(crate) fn effective_days(days: u32) -> u32 {
    days.clamp(1, MAX_WINDOW_DAYS)
}

fn search_start_time(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    now - Duration::days(i64::from(effective_days(days))) + Duration::seconds(START_TIME_MARGIN_SECS)
}

fn to_raw_signal(tweet: Tweet, now: DateTime<Utc>) -> RawSignal {
    let metrics = &tweet.public_metrics;
    RawSignal {
        source: SignalSource::Twitter,
        sub_source: "X Search".to_string(),
        title: title_from_body(&tweet.text),
        url: format!("https://twitter.com/i/web/status/{}", tweet.id),
        score: metrics.retweet_count + metrics.like_count,
        comments: metrics.reply_count,
        created_at: tweet.created_at.unwrap_or(now),
        author: tweet.author_id.unwrap_or_else(|| "unknown".to_string()),
        id: tweet.id,
        text: tweet.text,
    }
}
