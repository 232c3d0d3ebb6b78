//! Export renderers for enriched scan results: a flat CSV dataset and a
//! Markdown executive report.

pub mod csv_export;
pub mod error;
pub mod report;

use std::path::Path;

use chrono::{DateTime, Utc};
use painscout_core::EnrichedSignal;

pub use csv_export::{decode_csv, encode_csv};
pub use error::ExportError;
pub use report::{render_markdown_report, REPORT_ROWS};

/// Write the CSV dataset to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`ExportError`] if encoding or the file write fails.
pub fn write_csv(path: &Path, signals: &[EnrichedSignal]) -> Result<(), ExportError> {
    let encoded = encode_csv(signals)?;
    std::fs::write(path, encoded)?;
    tracing::info!(path = %path.display(), rows = signals.len(), "wrote CSV export");
    Ok(())
}

/// Write the executive report to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file write fails.
pub fn write_report(
    path: &Path,
    signals: &[EnrichedSignal],
    generated_at: DateTime<Utc>,
) -> Result<(), ExportError> {
    std::fs::write(path, render_markdown_report(signals, generated_at))?;
    tracing::info!(path = %path.display(), "wrote executive report");
    Ok(())
}
