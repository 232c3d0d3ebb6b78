//! Source collector for the `PainScout` pipeline.
//!
//! Searches Reddit communities or X recent posts for pain-point triggers and
//! normalizes the results into [`RawSignal`](painscout_core::RawSignal)
//! records. Any unreachable, unauthenticated, or empty upstream is replaced by
//! a fixed demo corpus, so a collection always yields a usable batch.

pub mod collector;
pub mod demo;
pub mod error;
pub mod types;

mod sources;

pub use collector::SourceCollector;
pub use demo::demo_corpus;
pub use error::CollectorError;
pub use types::{
    CollectOutcome, CollectorConfig, FallbackReason, NoProgress, ProgressSink, ScanProgress,
    ScanRequest,
};
