//! Signal enricher for the `PainScout` pipeline.
//!
//! Attaches a pain-point [`Annotation`](painscout_core::Annotation) to each
//! collected signal, either through the Gemini `generateContent` API or a
//! local keyword classifier. Records are classified one at a time; a failed
//! record stays unannotated and the batch continues.

pub mod enricher;
pub mod error;
pub mod mock;
pub mod pacing;
pub mod prompt;
pub mod types;

mod gemini;

pub use enricher::SignalEnricher;
pub use error::EnricherError;
pub use mock::{category_for, MockClassifier};
pub use pacing::{FixedIntervalPacer, Pacer, Unpaced};
pub use types::{EnrichMode, EnricherConfig};
