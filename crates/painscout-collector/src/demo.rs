//! Fixed demo corpus substituted whenever live collection is impossible or
//! comes back empty.
//!
//! Content is stable across calls; only the comment counts are jittered so
//! repeated demo scans do not look frozen.

use chrono::{DateTime, Duration, Utc};
use painscout_core::{RawSignal, SignalSource};
use rand::Rng;

struct DemoPost {
    title: &'static str,
    sub_source: &'static str,
    score: i64,
    days_ago: i64,
    text: &'static str,
    url: &'static str,
}

const REDDIT_POSTS: [DemoPost; 5] = [
    DemoPost {
        title: "Need a tool that automatically merges HubSpot + Salesforce duplicates",
        sub_source: "r/SaaS",
        score: 298,
        days_ago: 2,
        text: "",
        url: "https://reddit.com/r/SaaS/comments/1gabc12",
    },
    DemoPost {
        title: "Wish there was a proper two-way sync between Notion and Linear",
        sub_source: "r/SaaS",
        score: 412,
        days_ago: 4,
        text: "Every week we waste hours copying tasks manually",
        url: "https://reddit.com/r/SaaS/comments/1gdef34",
    },
    DemoPost {
        title: "Our sales team hates when Gong recordings don't auto-attach to Salesforce deals",
        sub_source: "r/sales",
        score: 187,
        days_ago: 1,
        text: "",
        url: "https://reddit.com/r/sales/comments/1gghi56",
    },
    DemoPost {
        title: "Someone should build an AI that writes cold email sequences for Outreach.io",
        sub_source: "r/startups",
        score: 534,
        days_ago: 6,
        text: "I would pay $500/mo instantly",
        url: "https://reddit.com/r/startups/comments/1gxyz78",
    },
    DemoPost {
        title: "Looking for alternative to Zapier that doesn't cost $800/mo for 10k tasks",
        sub_source: "r/SaaS",
        score: 378,
        days_ago: 3,
        text: "",
        url: "https://reddit.com/r/SaaS/comments/1g12345",
    },
];

const TWITTER_POSTS: [DemoPost; 5] = [
    DemoPost {
        title: "I hate how hard it is to integrate HubSpot with my custom app.",
        sub_source: "Twitter",
        score: 15,
        days_ago: 0,
        text: "I hate how hard it is to integrate HubSpot with my custom app. #SaaS #Developer",
        url: "https://twitter.com/user/status/1",
    },
    DemoPost {
        title: "Why is there no decent tool for cold email automation?",
        sub_source: "Twitter",
        score: 42,
        days_ago: 1,
        text: "Why is there no decent tool for cold email automation that actually works? #Marketing",
        url: "https://twitter.com/user/status/2",
    },
    DemoPost {
        title: "Salesforce is too expensive for small teams.",
        sub_source: "Twitter",
        score: 89,
        days_ago: 2,
        text: "Salesforce is too expensive for small teams. We need a lightweight alternative. #Startup",
        url: "https://twitter.com/user/status/3",
    },
    DemoPost {
        title: "Wish I could sync my Notion tasks to Google Calendar both ways.",
        sub_source: "Twitter",
        score: 120,
        days_ago: 0,
        text: "Wish I could sync my Notion tasks to Google Calendar both ways without Zapier. #Productivity",
        url: "https://twitter.com/user/status/4",
    },
    DemoPost {
        title: "Is there any AI tool that actually writes good copy?",
        sub_source: "Twitter",
        score: 55,
        days_ago: 3,
        text: "Is there any AI tool that actually writes good copy? content is king but writing is hard. #AI",
        url: "https://twitter.com/user/status/5",
    },
];

/// Build the five-post demo corpus for `source`.
///
/// X posts have no native title, so their title is the truncated body, the
/// same way live X results are shaped. `now` anchors `created_at`.
pub fn demo_corpus<R: Rng>(
    source: SignalSource,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<RawSignal> {
    let (posts, comment_range) = match source {
        SignalSource::Reddit => (&REDDIT_POSTS, 10..=100),
        SignalSource::Twitter => (&TWITTER_POSTS, 2..=20),
    };

    posts
        .iter()
        .enumerate()
        .map(|(i, post)| {
            let title = match source {
                SignalSource::Reddit => post.title.to_string(),
                SignalSource::Twitter => crate::sources::title_from_body(post.text),
            };
            RawSignal {
                source,
                sub_source: post.sub_source.to_string(),
                id: format!("demo_{i}"),
                title,
                text: post.text.to_string(),
                url: post.url.to_string(),
                score: post.score,
                comments: rng.random_range(comment_range.clone()),
                created_at: now - Duration::days(post.days_ago),
                author: format!("demo_user_{i}"),
            }
        })
        .collect()
}
