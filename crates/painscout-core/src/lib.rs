//! Shared model and configuration for the `PainScout` signal pipeline.
//!
//! Holds the record shapes passed between the collector and the enricher,
//! the summary statistics consumed by exports, and the environment-driven
//! application config.

pub mod app_config;
pub mod config;
pub mod profile;
pub mod signal;
pub mod summary;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use profile::{load_scan_profile, parse_scan_profile, ScanProfile};
pub use signal::{Annotation, EnrichedSignal, PainCategory, RawSignal, SignalSource, Urgency};
pub use summary::{rank_by_frustration, retain_actionable, trending, SummaryStats};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read scan profile {path}: {source}")]
    ProfileFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scan profile: {0}")]
    ProfileFileParse(#[from] serde_yaml::Error),

    #[error("scan profile validation failed: {0}")]
    Validation(String),
}
