mod scan;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "painscout")]
#[command(about = "Find B2B pain points in Reddit and X discussions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Collect, classify, and summarize one scan
    Scan(ScanArgs),
    /// Print the resolved scan profile
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceArg {
    Reddit,
    X,
}

#[derive(Debug, Args)]
struct ScanArgs {
    #[arg(long, value_enum, default_value_t = SourceArg::Reddit)]
    source: SourceArg,

    /// Communities (Reddit) or topic keywords (X); defaults to the scan profile
    #[arg(long, value_delimiter = ',')]
    topics: Vec<String>,

    /// Trigger phrases for Reddit searches; defaults to the scan profile
    #[arg(long, value_delimiter = ',')]
    triggers: Vec<String>,

    /// Lookback window in days (X is capped at 7)
    #[arg(long, value_parser = clap::value_parser!(u32).range(7..=90))]
    days: Option<u32>,

    /// Per-community result cap for Reddit
    #[arg(long)]
    limit: Option<usize>,

    /// Rows in the printed opportunity table
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Write the enriched dataset as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the Markdown executive report
    #[arg(long)]
    report: Option<PathBuf>,

    /// Seed the mock classifier for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = painscout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(config.ansi_logs())
        .init();

    tracing::debug!(env = %config.env, config = ?config, "loaded configuration");

    match cli.command {
        Commands::Scan(args) => scan::run_scan(&config, &args).await,
        Commands::Profile => scan::run_profile(&config),
    }
}
