//! Aggregates and orderings over an enriched batch, shared by the CLI output
//! and the export renderers.

use std::collections::HashMap;

use serde::Serialize;

use crate::signal::{EnrichedSignal, PainCategory, Urgency};

/// Headline numbers for one scan's actionable results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total_posts: usize,
    /// Most frequent category; ties go to the alphabetically first label.
    pub top_category: Option<PainCategory>,
    pub high_urgency_count: usize,
    /// Mean frustration score, 0.0 for an empty batch.
    pub avg_frustration: f64,
}

impl SummaryStats {
    #[must_use]
    pub fn from_signals(signals: &[EnrichedSignal]) -> Self {
        let mut counts: HashMap<PainCategory, usize> = HashMap::new();
        for category in signals.iter().filter_map(|s| s.annotation.category) {
            *counts.entry(category).or_default() += 1;
        }

        let top_category = counts
            .into_iter()
            .max_by(|(a, a_count), (b, b_count)| {
                a_count
                    .cmp(b_count)
                    .then_with(|| b.as_str().cmp(a.as_str()))
            })
            .map(|(category, _)| category);

        let high_urgency_count = signals
            .iter()
            .filter(|s| s.annotation.urgency == Urgency::High)
            .count();

        let avg_frustration = if signals.is_empty() {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let denom = signals.len() as f64;
            let sum: f64 = signals
                .iter()
                .map(|s| f64::from(s.annotation.sentiment_score))
                .sum();
            sum / denom
        };

        Self {
            total_posts: signals.len(),
            top_category,
            high_urgency_count,
            avg_frustration,
        }
    }

    /// Label for the top category, `N/A` when nothing was categorized.
    #[must_use]
    pub fn top_category_label(&self) -> &'static str {
        self.top_category.map_or("N/A", PainCategory::as_str)
    }
}

/// Drop records without a pain point; they are not presented.
#[must_use]
pub fn retain_actionable(signals: Vec<EnrichedSignal>) -> Vec<EnrichedSignal> {
    signals.into_iter().filter(EnrichedSignal::is_actionable).collect()
}

/// Top `n` records by frustration score, then comment count, both descending.
///
/// The sort is stable, so equal records keep their collection order.
#[must_use]
pub fn rank_by_frustration(signals: &[EnrichedSignal], n: usize) -> Vec<&EnrichedSignal> {
    let mut ranked: Vec<&EnrichedSignal> = signals.iter().collect();
    ranked.sort_by(|a, b| {
        b.annotation
            .sentiment_score
            .cmp(&a.annotation.sentiment_score)
            .then_with(|| b.signal.comments.cmp(&a.signal.comments))
    });
    ranked.truncate(n);
    ranked
}

/// Top `n` records by engagement score, descending.
#[must_use]
pub fn trending(signals: &[EnrichedSignal], n: usize) -> Vec<&EnrichedSignal> {
    let mut ranked: Vec<&EnrichedSignal> = signals.iter().collect();
    ranked.sort_by(|a, b| b.signal.score.cmp(&a.signal.score));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::signal::{Annotation, RawSignal, SignalSource};

    fn enriched(
        id: &str,
        score: i64,
        comments: i64,
        frustration: u8,
        category: Option<PainCategory>,
        urgency: Urgency,
    ) -> EnrichedSignal {
        EnrichedSignal {
            signal: RawSignal {
                source: SignalSource::Reddit,
                sub_source: "r/SaaS".to_string(),
                id: id.to_string(),
                title: format!("title {id}"),
                text: String::new(),
                url: format!("https://reddit.com/r/SaaS/comments/{id}"),
                score,
                comments,
                created_at: Utc::now(),
                author: "someone".to_string(),
            },
            annotation: Annotation {
                pain_point: category.map(|c| format!("pain about {c}")),
                sentiment_score: frustration,
                category,
                target_audience: None,
                urgency,
            },
        }
    }

    #[test]
    fn empty_batch_summary() {
        let stats = SummaryStats::from_signals(&[]);
        assert_eq!(stats.total_posts, 0);
        assert!(stats.top_category.is_none());
        assert_eq!(stats.top_category_label(), "N/A");
        assert_eq!(stats.high_urgency_count, 0);
        assert!(stats.avg_frustration.abs() < f64::EPSILON);
    }

    #[test]
    fn summary_counts_and_top_category() {
        let signals = vec![
            enriched("a", 1, 0, 8, Some(PainCategory::Pricing), Urgency::High),
            enriched("b", 1, 0, 6, Some(PainCategory::Pricing), Urgency::Low),
            enriched("c", 1, 0, 4, Some(PainCategory::Integration), Urgency::High),
        ];
        let stats = SummaryStats::from_signals(&signals);
        assert_eq!(stats.total_posts, 3);
        assert_eq!(stats.top_category, Some(PainCategory::Pricing));
        assert_eq!(stats.high_urgency_count, 2);
        assert!((stats.avg_frustration - 6.0).abs() < 1e-9);
    }

    #[test]
    fn top_category_tie_breaks_alphabetically() {
        let signals = vec![
            enriched("a", 1, 0, 5, Some(PainCategory::Pricing), Urgency::Low),
            enriched("b", 1, 0, 5, Some(PainCategory::Integration), Urgency::Low),
        ];
        let stats = SummaryStats::from_signals(&signals);
        assert_eq!(stats.top_category, Some(PainCategory::Integration));
    }

    #[test]
    fn retain_actionable_drops_missing_pain_points() {
        let signals = vec![
            enriched("a", 1, 0, 5, Some(PainCategory::Pricing), Urgency::Low),
            enriched("b", 1, 0, 0, None, Urgency::Low),
        ];
        let kept = retain_actionable(signals);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].signal.id, "a");
    }

    #[test]
    fn rank_by_frustration_orders_and_truncates() {
        let signals = vec![
            enriched("low", 1, 50, 5, Some(PainCategory::Pricing), Urgency::Low),
            enriched("high", 1, 1, 9, Some(PainCategory::Pricing), Urgency::Low),
            enriched("tie-more", 1, 30, 7, Some(PainCategory::Pricing), Urgency::Low),
            enriched("tie-less", 1, 10, 7, Some(PainCategory::Pricing), Urgency::Low),
        ];
        let ranked = rank_by_frustration(&signals, 3);
        let ids: Vec<&str> = ranked.iter().map(|s| s.signal.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "tie-more", "tie-less"]);
    }

    #[test]
    fn trending_orders_by_engagement() {
        let signals = vec![
            enriched("a", 10, 0, 5, None, Urgency::Low),
            enriched("b", 300, 0, 5, None, Urgency::Low),
            enriched("c", 42, 0, 5, None, Urgency::Low),
        ];
        let ids: Vec<&str> = trending(&signals, 2)
            .iter()
            .map(|s| s.signal.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "c"]);
    }
}
