//! Local keyword classifier used when no live classifier is configured.

use painscout_core::{Annotation, PainCategory, Urgency};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Audience attached to every mock annotation.
pub const MOCK_TARGET_AUDIENCE: &str = "SaaS Founder";

/// Keyword rules, checked in order. First match wins.
const CATEGORY_RULES: &[(&[&str], PainCategory)] = &[
    (&["price", "expensive"], PainCategory::Pricing),
    (&["integrate", "connect"], PainCategory::Integration),
    (&["slow", "buggy"], PainCategory::Performance),
];

/// Pick a category by case-insensitive keyword containment, defaulting to
/// [`PainCategory::MissingFeature`].
#[must_use]
pub fn category_for(text: &str) -> PainCategory {
    let lower = text.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map_or(PainCategory::MissingFeature, |(_, category)| *category)
}

/// Deterministic category plus randomized score and urgency.
pub struct MockClassifier {
    rng: StdRng,
}

impl MockClassifier {
    /// Classifier seeded from the OS.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Classifier with reproducible score and urgency draws.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn classify(&mut self, context: &str) -> Annotation {
        let category = category_for(context);
        let urgency = Urgency::ALL[self.rng.random_range(0..Urgency::ALL.len())];

        Annotation {
            pain_point: Some(format!(
                "User struggle with {} issues",
                category.as_str().to_lowercase()
            )),
            sentiment_score: self.rng.random_range(5..=10),
            category: Some(category),
            target_audience: Some(MOCK_TARGET_AUDIENCE.to_string()),
            urgency,
        }
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}
