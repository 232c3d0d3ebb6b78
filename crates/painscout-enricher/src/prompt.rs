//! Classification context, prompt text, and reply parsing.

use painscout_core::{Annotation, PainCategory, RawSignal, Urgency};
use serde::Deserialize;
use serde_json::Value;

use crate::error::EnricherError;

/// Characters of body text included in the classification context.
pub const CONTEXT_BODY_CHARS: usize = 500;

/// Shortest title-plus-body worth classifying.
pub const MIN_CONTEXT_CHARS: usize = 20;

/// Build the text sent to the classifier for one signal.
///
/// Returns `None` when the title plus the first [`CONTEXT_BODY_CHARS`] of the
/// body is shorter than [`MIN_CONTEXT_CHARS`]; such records stay unannotated.
#[must_use]
pub fn build_context(signal: &RawSignal) -> Option<String> {
    let title = signal.title.trim();
    let body: String = signal.text.chars().take(CONTEXT_BODY_CHARS).collect();
    let body = body.trim();

    if title.chars().count() + body.chars().count() < MIN_CONTEXT_CHARS {
        return None;
    }

    Some(format!("Title: {title}\nBody: {body}"))
}

/// Full instruction sent to the live classifier.
#[must_use]
pub fn classification_prompt(context: &str) -> String {
    let categories = PainCategory::ALL
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Analyze the following social media post for B2B software pain points.\n\
         Return ONLY a raw JSON object (no markdown formatting) with the following keys:\n\
         - \"pain_point\": Brief summary of the problem or need (max 10 words).\n\
         - \"frustration_score\": Integer 1-10 (10 being extremely frustrated or urgent).\n\
         - \"category\": One of [{categories}].\n\
         - \"target_audience\": Guessed role or industry (e.g. \"Marketing Agency\", \"Developer\").\n\
         - \"urgency\": \"High\", \"Medium\", or \"Low\".\n\
         \n\
         If no clear pain point exists, return null.\n\
         \n\
         Post content:\n\
         {context}\n"
    )
}

/// Remove a surrounding markdown code fence, if any.
#[must_use]
pub fn strip_code_fences(reply: &str) -> &str {
    reply
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

#[derive(Debug, Deserialize)]
struct ClassifierReply {
    pain_point: Option<String>,
    frustration_score: Option<Value>,
    category: Option<String>,
    target_audience: Option<String>,
    urgency: Option<String>,
}

/// Parse a classifier reply into an annotation.
///
/// `Ok(None)` means the classifier found no pain point (a literal `null`,
/// or an object with a missing or blank `pain_point`). Unknown categories
/// become `None`, unknown urgencies `Low`, and the score is clamped to 0–10.
///
/// # Errors
///
/// Returns [`EnricherError::Parse`] if the reply is not JSON or not an object
/// of the expected shape.
pub fn parse_annotation(reply: &str) -> Result<Option<Annotation>, EnricherError> {
    let value: Value = serde_json::from_str(strip_code_fences(reply))?;
    if value.is_null() {
        return Ok(None);
    }
    let reply: ClassifierReply = serde_json::from_value(value)?;

    let Some(pain_point) = non_blank(reply.pain_point) else {
        return Ok(None);
    };

    Ok(Some(Annotation {
        pain_point: Some(pain_point),
        sentiment_score: frustration_score(reply.frustration_score.as_ref()),
        category: reply.category.as_deref().and_then(|c| c.parse().ok()),
        target_audience: non_blank(reply.target_audience),
        urgency: reply
            .urgency
            .as_deref()
            .and_then(|u| u.parse().ok())
            .unwrap_or(Urgency::Low),
    }))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn frustration_score(value: Option<&Value>) -> u8 {
    let raw = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    raw.filter(|s| s.is_finite())
        .map_or(0, |s| s.round().clamp(0.0, 10.0) as u8)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use painscout_core::SignalSource;

    use super::*;

    fn signal(title: &str, text: &str) -> RawSignal {
        RawSignal {
            source: SignalSource::Reddit,
            sub_source: "r/SaaS".to_string(),
            id: "t1".to_string(),
            title: title.to_string(),
            text: text.to_string(),
            url: "https://reddit.com/r/SaaS/comments/t1".to_string(),
            score: 1,
            comments: 0,
            created_at: Utc::now(),
            author: "someone".to_string(),
        }
    }

    #[test]
    fn short_context_is_skipped() {
        assert!(build_context(&signal("help", "")).is_none());
        assert!(build_context(&signal("", "too slow")).is_none());
    }

    #[test]
    fn context_combines_title_and_body() {
        let context = build_context(&signal("Zapier costs too much", "We pay $800")).unwrap();
        assert_eq!(context, "Title: Zapier costs too much\nBody: We pay $800");
    }

    #[test]
    fn context_body_is_bounded() {
        let long_body = "x".repeat(2_000);
        let context = build_context(&signal("Title", &long_body)).unwrap();
        assert_eq!(context.matches('x').count(), CONTEXT_BODY_CHARS);
    }

    #[test]
    fn prompt_lists_every_category() {
        let prompt = classification_prompt("Title: a\nBody: b");
        for category in PainCategory::ALL {
            assert!(prompt.contains(category.as_str()));
        }
        assert!(prompt.ends_with("Title: a\nBody: b\n"));
    }

    #[test]
    fn fences_are_stripped() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\nnull\n```"), "null");
        assert_eq!(strip_code_fences("  {}  "), "{}");
    }

    #[test]
    fn full_reply_parses() {
        let reply = r#"```json
        {
            "pain_point": "CRM sync breaks weekly",
            "frustration_score": 8,
            "category": "Integration",
            "target_audience": "Sales Ops",
            "urgency": "High"
        }
        ```"#;
        let annotation = parse_annotation(reply).unwrap().unwrap();
        assert_eq!(annotation.pain_point.as_deref(), Some("CRM sync breaks weekly"));
        assert_eq!(annotation.sentiment_score, 8);
        assert_eq!(annotation.category, Some(PainCategory::Integration));
        assert_eq!(annotation.target_audience.as_deref(), Some("Sales Ops"));
        assert_eq!(annotation.urgency, Urgency::High);
    }

    #[test]
    fn null_reply_means_no_pain_point() {
        assert!(parse_annotation("null").unwrap().is_none());
        assert!(parse_annotation(r#"{"pain_point": null}"#).unwrap().is_none());
        assert!(parse_annotation(r#"{"pain_point": "  "}"#).unwrap().is_none());
    }

    #[test]
    fn loose_values_are_normalized() {
        let reply = r#"{
            "pain_point": "Dashboard is confusing",
            "frustration_score": "14",
            "category": "ui/ux",
            "urgency": "urgent"
        }"#;
        let annotation = parse_annotation(reply).unwrap().unwrap();
        assert_eq!(annotation.sentiment_score, 10);
        assert_eq!(annotation.category, Some(PainCategory::UiUx));
        assert_eq!(annotation.urgency, Urgency::Low);
        assert!(annotation.target_audience.is_none());
    }

    #[test]
    fn unknown_category_is_dropped() {
        let reply = r#"{"pain_point": "x", "frustration_score": 6.6, "category": "Legal"}"#;
        let annotation = parse_annotation(reply).unwrap().unwrap();
        assert_eq!(annotation.category, None);
        assert_eq!(annotation.sentiment_score, 7);
    }

    #[test]
    fn malformed_reply_is_an_error() {
        assert!(matches!(
            parse_annotation("Sure! Here is the JSON you asked for"),
            Err(EnricherError::Parse(_))
        ));
        assert!(matches!(
            parse_annotation("42"),
            Err(EnricherError::Parse(_))
        ));
    }
}
