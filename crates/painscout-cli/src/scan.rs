use anyhow::Context as _;
use chrono::Utc;
use painscout_collector::{CollectorConfig, ScanProgress, ScanRequest, SourceCollector};
use painscout_core::{
    load_scan_profile, rank_by_frustration, retain_actionable, trending, AppConfig,
    EnrichedSignal, PainCategory, ScanProfile, SummaryStats,
};
use painscout_enricher::{EnricherConfig, MockClassifier, SignalEnricher};

use crate::{ScanArgs, SourceArg};

const TRENDING_ROWS: usize = 5;
const TITLE_DISPLAY_CHARS: usize = 50;

/// Resolve the collection request from CLI arguments, falling back to the
/// scan profile for anything not given explicitly.
pub(crate) fn build_request(
    args: &ScanArgs,
    profile: &ScanProfile,
    default_limit: usize,
) -> ScanRequest {
    let days = args.days.unwrap_or(profile.days);
    let or_profile = |given: &[String], fallback: &[String]| -> Vec<String> {
        let given: Vec<String> = given
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if given.is_empty() {
            fallback.to_vec()
        } else {
            given
        }
    };

    match args.source {
        SourceArg::Reddit => ScanRequest::Reddit {
            communities: or_profile(&args.topics, &profile.subreddits),
            triggers: or_profile(&args.triggers, &profile.triggers),
            days,
            limit: args.limit.unwrap_or(default_limit),
        },
        SourceArg::X => ScanRequest::Twitter {
            topics: or_profile(&args.topics, &profile.x_topics),
            days,
        },
    }
}

fn source_label(source: SourceArg) -> &'static str {
    match source {
        SourceArg::Reddit => "Reddit Posts",
        SourceArg::X => "X Posts",
    }
}

fn truncate_display(value: &str) -> String {
    if value.chars().count() > TITLE_DISPLAY_CHARS {
        format!(
            "{}...",
            value.chars().take(TITLE_DISPLAY_CHARS).collect::<String>()
        )
    } else {
        value.to_string()
    }
}

/// Run one scan: collect, enrich, keep actionable records, then print and
/// export.
///
/// # Errors
///
/// Returns an error if the scan profile cannot be loaded, a client cannot be
/// built, or an export file cannot be written. Upstream failures during the
/// scan never error; they surface as demo data.
pub(crate) async fn run_scan(config: &AppConfig, args: &ScanArgs) -> anyhow::Result<()> {
    let profile = load_scan_profile(&config.profile_path).with_context(|| {
        format!(
            "failed to load scan profile from {}",
            config.profile_path.display()
        )
    })?;
    let request = build_request(args, &profile, config.reddit_result_limit);
    let scan_id = uuid::Uuid::new_v4();

    tracing::info!(scan_id = %scan_id, source = ?args.source, "starting scan");

    let collector = SourceCollector::new(&CollectorConfig::from_app_config(config))?;
    if args.source == SourceArg::X && !collector.has_twitter_credentials() {
        tracing::warn!(
            scan_id = %scan_id,
            "TWITTER_BEARER_TOKEN is not set; X results will come from the demo corpus"
        );
    }
    let progress = |p: &ScanProgress| {
        tracing::info!(
            scan_id = %scan_id,
            completed = p.completed,
            total = p.total,
            "{}",
            p.status
        );
    };
    let outcome = collector.collect(&request, &progress).await;

    if let Some(message) = outcome.status_message() {
        println!("note: {message}");
    }

    let mut enricher = match args.seed {
        Some(seed) if !config.live_classification_enabled() => {
            SignalEnricher::mock(MockClassifier::seeded(seed))
        }
        _ => SignalEnricher::new(&EnricherConfig::from_app_config(config))?,
    };
    tracing::info!(scan_id = %scan_id, mode = %enricher.mode(), "classifying signals");

    let enriched = enricher.enrich(outcome.into_signals()).await;
    let actionable = retain_actionable(enriched);
    let stats = SummaryStats::from_signals(&actionable);

    print_overview(&stats, args.source);
    print_opportunities(&actionable, args.top);
    print_trending(&actionable);

    if let Some(path) = &args.csv {
        painscout_export::write_csv(path, &actionable)
            .with_context(|| format!("failed to write CSV to {}", path.display()))?;
        println!("wrote CSV dataset to {}", path.display());
    }
    if let Some(path) = &args.report {
        painscout_export::write_report(path, &actionable, Utc::now())
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("wrote Markdown executive report to {}", path.display());
    }

    tracing::info!(
        scan_id = %scan_id,
        actionable = actionable.len(),
        "scan finished"
    );
    Ok(())
}

/// Print the resolved scan profile as YAML.
///
/// # Errors
///
/// Returns an error if the profile cannot be loaded or serialized.
pub(crate) fn run_profile(config: &AppConfig) -> anyhow::Result<()> {
    let profile = load_scan_profile(&config.profile_path)?;
    println!("# profile: {}", config.profile_path.display());
    print!("{}", serde_yaml::to_string(&profile)?);
    Ok(())
}

fn print_overview(stats: &SummaryStats, source: SourceArg) {
    println!();
    println!("{:<20}{}", source_label(source).to_uppercase(), stats.total_posts);
    println!("{:<20}{}", "CRITICAL PAINS", stats.high_urgency_count);
    println!("{:<20}{:.1}", "AVG FRUSTRATION", stats.avg_frustration);
    println!("{:<20}{}", "TOP CATEGORY", stats.top_category_label());
    println!();
}

fn print_opportunities(signals: &[EnrichedSignal], top: usize) {
    if signals.is_empty() {
        println!("no actionable pain points found");
        return;
    }

    let header = format!(
        "{:<7}{:<9}{:<18}{:<16}PAIN POINT",
        "SCORE", "URGENCY", "CATEGORY", "SOURCE"
    );
    println!("{header}");
    for record in rank_by_frustration(signals, top) {
        let a = &record.annotation;
        println!(
            "{:<7}{:<9}{:<18}{:<16}{}",
            a.sentiment_score,
            a.urgency.as_str(),
            a.category.map_or("-", PainCategory::as_str),
            record.signal.sub_source,
            truncate_display(a.pain_point.as_deref().unwrap_or("-"))
        );
    }
    println!();
}

fn print_trending(signals: &[EnrichedSignal]) {
    if signals.is_empty() {
        return;
    }

    println!("{:<9}{:<10}TITLE", "SCORE", "COMMENTS");
    for record in trending(signals, TRENDING_ROWS) {
        let s = &record.signal;
        println!(
            "{:<9}{:<10}{}",
            s.score,
            s.comments,
            truncate_display(&s.title)
        );
    }
}
