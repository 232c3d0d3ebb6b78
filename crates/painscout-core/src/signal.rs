//! Record shapes flowing through one scan: raw posts from the collector and
//! the annotated records produced by the enricher.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Origin platform of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalSource {
    Reddit,
    Twitter,
}

impl SignalSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SignalSource::Reddit => "Reddit",
            SignalSource::Twitter => "Twitter",
        }
    }
}

impl std::fmt::Display for SignalSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observed social post, normalized across platforms.
///
/// Immutable once the collector hands it over. `id` is only unique within a
/// single scan's result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSignal {
    pub source: SignalSource,
    /// Origin detail, e.g. `r/SaaS` or `X Search`.
    pub sub_source: String,
    pub id: String,
    /// Native title, or a truncated body when the platform has none.
    pub title: String,
    pub text: String,
    pub url: String,
    /// Platform-specific engagement (upvotes, or likes + retweets). Not
    /// normalized across sources.
    pub score: i64,
    pub comments: i64,
    pub created_at: DateTime<Utc>,
    pub author: String,
}

/// Closed set of pain-point categories a classification may assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PainCategory {
    Integration,
    Pricing,
    #[serde(rename = "UI/UX")]
    UiUx,
    #[serde(rename = "Missing Feature")]
    MissingFeature,
    #[serde(rename = "Customer Support")]
    CustomerSupport,
    Performance,
}

impl PainCategory {
    pub const ALL: [PainCategory; 6] = [
        PainCategory::Integration,
        PainCategory::Pricing,
        PainCategory::UiUx,
        PainCategory::MissingFeature,
        PainCategory::CustomerSupport,
        PainCategory::Performance,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PainCategory::Integration => "Integration",
            PainCategory::Pricing => "Pricing",
            PainCategory::UiUx => "UI/UX",
            PainCategory::MissingFeature => "Missing Feature",
            PainCategory::CustomerSupport => "Customer Support",
            PainCategory::Performance => "Performance",
        }
    }
}

impl std::fmt::Display for PainCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PainCategory {
    type Err = String;

    /// Case-insensitive; accepts the display labels plus a few spellings the
    /// classifier tends to emit (`UI`, `UX`, `Support`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "integration" | "integrations" => Ok(PainCategory::Integration),
            "pricing" | "price" => Ok(PainCategory::Pricing),
            "uiux" | "ui" | "ux" => Ok(PainCategory::UiUx),
            "missingfeature" => Ok(PainCategory::MissingFeature),
            "customersupport" | "support" => Ok(PainCategory::CustomerSupport),
            "performance" => Ok(PainCategory::Performance),
            _ => Err(format!("unknown pain category: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    High,
    Medium,
    #[default]
    Low,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::High, Urgency::Medium, Urgency::Low];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::High => "High",
            Urgency::Medium => "Medium",
            Urgency::Low => "Low",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Urgency::High),
            "medium" | "med" => Ok(Urgency::Medium),
            "low" => Ok(Urgency::Low),
            _ => Err(format!("unknown urgency: {s}")),
        }
    }
}

/// Structured classification attached to a signal.
///
/// The default value is the "not annotated" state: no pain point, score 0,
/// no category or audience, `Low` urgency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Short summary (≤10 words) of the inferred problem.
    pub pain_point: Option<String>,
    /// Frustration score, 1–10 when classified, 0 when absent.
    pub sentiment_score: u8,
    pub category: Option<PainCategory>,
    pub target_audience: Option<String>,
    pub urgency: Urgency,
}

impl Annotation {
    /// Whether this annotation names a pain point worth presenting.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        self.pain_point.is_some()
    }
}

/// A raw signal plus its (possibly empty) annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedSignal {
    pub signal: RawSignal,
    pub annotation: Annotation,
}

impl EnrichedSignal {
    /// Wrap a raw signal with the default, unannotated state.
    #[must_use]
    pub fn unannotated(signal: RawSignal) -> Self {
        Self {
            signal,
            annotation: Annotation::default(),
        }
    }

    #[must_use]
    pub fn is_actionable(&self) -> bool {
        self.annotation.is_actionable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_with_display_labels() {
        let json = serde_json::to_string(&PainCategory::UiUx).unwrap();
        assert_eq!(json, "\"UI/UX\"");
        let json = serde_json::to_string(&PainCategory::MissingFeature).unwrap();
        assert_eq!(json, "\"Missing Feature\"");
    }

    #[test]
    fn category_parses_loose_spellings() {
        assert_eq!("ui/ux".parse::<PainCategory>().unwrap(), PainCategory::UiUx);
        assert_eq!(
            "Missing feature".parse::<PainCategory>().unwrap(),
            PainCategory::MissingFeature
        );
        assert_eq!(
            " customer support ".parse::<PainCategory>().unwrap(),
            PainCategory::CustomerSupport
        );
        assert!("Billing Drama".parse::<PainCategory>().is_err());
    }

    #[test]
    fn category_display_round_trips_through_from_str() {
        for category in PainCategory::ALL {
            assert_eq!(category.to_string().parse::<PainCategory>().unwrap(), category);
        }
    }

    #[test]
    fn urgency_defaults_to_low() {
        assert_eq!(Urgency::default(), Urgency::Low);
        assert_eq!("MEDIUM".parse::<Urgency>().unwrap(), Urgency::Medium);
        assert!("urgent".parse::<Urgency>().is_err());
    }

    #[test]
    fn default_annotation_is_not_actionable() {
        let annotation = Annotation::default();
        assert!(!annotation.is_actionable());
        assert_eq!(annotation.sentiment_score, 0);
        assert_eq!(annotation.urgency, Urgency::Low);
    }
}
