//! Reddit query building and submission-to-signal conversion.

use chrono::{DateTime, Duration, Utc};
use painscout_core::{RawSignal, SignalSource};

use super::reddit::Submission;

/// Join trigger phrases into one OR query (`|` is the search API's OR).
pub(super) fn build_search_query(triggers: &[String]) -> String {
    triggers
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("|")
}

/// Unix timestamp of the oldest post the search should return.
pub(super) fn lookback_cutoff(now: DateTime<Utc>, days: u32) -> i64 {
    (now - Duration::days(i64::from(days))).timestamp()
}

/// Accept both `SaaS` and `r/SaaS`.
pub(crate) fn normalize_community(community: &str) -> &str {
    let trimmed = community.trim();
    trimmed
        .strip_prefix("r/")
        .or_else(|| trimmed.strip_prefix("/r/"))
        .unwrap_or(trimmed)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != "[deleted]" && *v != "[removed]")
}

/// Convert one search hit into a [`RawSignal`].
///
/// Missing fields take defaults: empty body, `[deleted]` author, zero
/// score/comments, `now` for the timestamp. A missing id is replaced by
/// `{community}_{index}` so ids stay unique within the scan, and a missing
/// link by a permalink built from that id.
pub(super) fn to_raw_signal(
    post: &Submission,
    community: &str,
    index: usize,
    now: DateTime<Utc>,
) -> RawSignal {
    let id = non_empty(post.id.as_deref())
        .map_or_else(|| format!("{community}_{index}"), str::to_string);

    let text = non_empty(post.selftext.as_deref())
        .or_else(|| non_empty(post.body.as_deref()))
        .unwrap_or_default()
        .to_string();

    let url = non_empty(post.full_link.as_deref())
        .map(str::to_string)
        .or_else(|| non_empty(post.url.as_deref()).map(str::to_string))
        .or_else(|| {
            non_empty(post.permalink.as_deref()).map(|p| format!("https://reddit.com{p}"))
        })
        .unwrap_or_else(|| format!("https://reddit.com/r/{community}/comments/{id}"));

    #[allow(clippy::cast_possible_truncation)]
    let created_at = post
        .created_utc
        .and_then(|ts| DateTime::from_timestamp(ts as i64, 0))
        .unwrap_or(now);

    RawSignal {
        source: SignalSource::Reddit,
        sub_source: format!("r/{community}"),
        title: post.title.as_deref().map(str::trim).unwrap_or_default().to_string(),
        text,
        url,
        score: post.score.unwrap_or(0),
        comments: post.num_comments.unwrap_or(0),
        created_at,
        author: post
            .author
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or("[deleted]")
            .to_string(),
        id,
    }
}
