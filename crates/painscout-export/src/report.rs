//! Markdown executive report.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use painscout_core::{rank_by_frustration, EnrichedSignal, PainCategory, SummaryStats};

/// Rows in the top opportunities table.
pub const REPORT_ROWS: usize = 10;

const PAIN_POINT_CHARS: usize = 50;
const CATEGORY_CHARS: usize = 20;

fn truncate_with_ellipsis(value: &str, max_chars: usize) -> String {
    if value.chars().count() > max_chars {
        format!("{}...", value.chars().take(max_chars).collect::<String>())
    } else {
        value.to_string()
    }
}

fn table_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

/// Render the executive report for an actionable batch.
///
/// Summary figures come from [`SummaryStats`]; the table lists the
/// [`REPORT_ROWS`] most frustrated records.
#[must_use]
pub fn render_markdown_report(signals: &[EnrichedSignal], generated_at: DateTime<Utc>) -> String {
    let stats = SummaryStats::from_signals(signals);
    let mut out = String::new();

    let _ = writeln!(out, "# PainScout.ai Intelligence Report");
    let _ = writeln!(out);
    let _ = writeln!(out, "**Generated on**: {}", generated_at.format("%Y-%m-%d"));
    let _ = writeln!(out);
    let _ = writeln!(out, "## Executive Summary");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "PainScout.ai analyzed {} discussions across Reddit and X to identify \
         high-value B2B opportunities. The analysis reveals a strong demand for \
         solutions in the '{}' sector.",
        stats.total_posts,
        stats.top_category_label()
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "We detected {} critical pain points that users described with high \
         frustration. These represent immediate revenue opportunities for SaaS \
         founders ready to build targeted solutions.",
        stats.high_urgency_count
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "## Top Detected Opportunities");
    let _ = writeln!(out);

    if signals.is_empty() {
        let _ = writeln!(out, "_No actionable pain points were detected._");
        return out;
    }

    let _ = writeln!(out, "| Pain Point | Category | Urgency | Score |");
    let _ = writeln!(out, "|------------|----------|---------|-------|");
    for record in rank_by_frustration(signals, REPORT_ROWS) {
        let a = &record.annotation;
        let pain = truncate_with_ellipsis(
            a.pain_point.as_deref().unwrap_or("N/A"),
            PAIN_POINT_CHARS,
        );
        let category =
            truncate_with_ellipsis(a.category.map_or("N/A", PainCategory::as_str), CATEGORY_CHARS);
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} |",
            table_cell(&pain),
            table_cell(&category),
            a.urgency,
            a.sentiment_score
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use painscout_core::{Annotation, RawSignal, SignalSource, Urgency};

    use super::*;

    fn record(id: &str, pain: &str, score: u8, urgency: Urgency) -> EnrichedSignal {
        EnrichedSignal {
            signal: RawSignal {
                source: SignalSource::Reddit,
                sub_source: "r/SaaS".to_string(),
                id: id.to_string(),
                title: format!("title {id}"),
                text: String::new(),
                url: format!("https://reddit.com/r/SaaS/comments/{id}"),
                score: 1,
                comments: 0,
                created_at: Utc::now(),
                author: "founder".to_string(),
            },
            annotation: Annotation {
                pain_point: Some(pain.to_string()),
                sentiment_score: score,
                category: Some(PainCategory::Pricing),
                target_audience: Some("SaaS Founder".to_string()),
                urgency,
            },
        }
    }

    fn generated() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap()
    }

    #[test]
    fn summary_references_totals() {
        let signals = vec![
            record("a", "CRM costs too much", 9, Urgency::High),
            record("b", "Billing tool overpriced", 6, Urgency::Low),
        ];
        let report = render_markdown_report(&signals, generated());
        assert!(report.contains("**Generated on**: 2026-03-14"));
        assert!(report.contains("analyzed 2 discussions"));
        assert!(report.contains("in the 'Pricing' sector"));
        assert!(report.contains("We detected 1 critical pain points"));
    }

    #[test]
    fn table_is_ordered_and_capped() {
        let signals: Vec<EnrichedSignal> = (0..15u8)
            .map(|i| record(&format!("r{i}"), &format!("pain {i}"), i % 11, Urgency::Medium))
            .collect();
        let report = render_markdown_report(&signals, generated());
        let rows: Vec<&str> = report
            .lines()
            .filter(|l| l.starts_with("| pain"))
            .collect();
        assert_eq!(rows.len(), REPORT_ROWS);
        assert!(rows[0].ends_with("| 10 |"));
    }

    #[test]
    fn long_pain_point_is_truncated() {
        let long = "x".repeat(80);
        let report = render_markdown_report(&[record("a", &long, 7, Urgency::High)], generated());
        let expected = format!("| {}... | Pricing | High | 7 |", "x".repeat(50));
        assert!(report.contains(&expected));
    }

    #[test]
    fn pipes_are_escaped() {
        let report =
            render_markdown_report(&[record("a", "Jira | Linear sync", 5, Urgency::Low)], generated());
        assert!(report.contains("| Jira \\| Linear sync |"));
    }

    #[test]
    fn empty_batch_has_no_table() {
        let report = render_markdown_report(&[], generated());
        assert!(report.contains("analyzed 0 discussions"));
        assert!(report.contains("'N/A' sector"));
        assert!(!report.contains("| Pain Point |"));
    }
}
