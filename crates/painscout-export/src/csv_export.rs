//! Flat CSV dataset, one row per enriched signal.

use chrono::{DateTime, Utc};
use painscout_core::{
    Annotation, EnrichedSignal, PainCategory, RawSignal, SignalSource, Urgency,
};
use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Row layout. Field order is the column order.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRecord {
    source: SignalSource,
    sub_source: String,
    id: String,
    title: String,
    text: String,
    url: String,
    score: i64,
    comments: i64,
    created_at: DateTime<Utc>,
    author: String,
    pain_point: Option<String>,
    sentiment_score: u8,
    category: Option<PainCategory>,
    target_audience: Option<String>,
    urgency: Urgency,
}

impl From<&EnrichedSignal> for CsvRecord {
    fn from(record: &EnrichedSignal) -> Self {
        let s = &record.signal;
        let a = &record.annotation;
        Self {
            source: s.source,
            sub_source: s.sub_source.clone(),
            id: s.id.clone(),
            title: s.title.clone(),
            text: s.text.clone(),
            url: s.url.clone(),
            score: s.score,
            comments: s.comments,
            created_at: s.created_at,
            author: s.author.clone(),
            pain_point: a.pain_point.clone(),
            sentiment_score: a.sentiment_score,
            category: a.category,
            target_audience: a.target_audience.clone(),
            urgency: a.urgency,
        }
    }
}

impl From<CsvRecord> for EnrichedSignal {
    fn from(row: CsvRecord) -> Self {
        Self {
            signal: RawSignal {
                source: row.source,
                sub_source: row.sub_source,
                id: row.id,
                title: row.title,
                text: row.text,
                url: row.url,
                score: row.score,
                comments: row.comments,
                created_at: row.created_at,
                author: row.author,
            },
            annotation: Annotation {
                pain_point: row.pain_point,
                sentiment_score: row.sentiment_score,
                category: row.category,
                target_audience: row.target_audience,
                urgency: row.urgency,
            },
        }
    }
}

/// Encode signals as UTF-8 CSV with a header row.
///
/// Absent annotation fields are written as empty cells.
///
/// # Errors
///
/// Returns [`ExportError`] if a record cannot be serialized.
pub fn encode_csv(signals: &[EnrichedSignal]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in signals {
        writer.serialize(CsvRecord::from(record))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Decode CSV produced by [`encode_csv`].
///
/// # Errors
///
/// Returns [`ExportError::Csv`] on a malformed row or unknown enum label.
pub fn decode_csv(data: &str) -> Result<Vec<EnrichedSignal>, ExportError> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    reader
        .deserialize::<CsvRecord>()
        .map(|row| Ok(EnrichedSignal::from(row?)))
        .collect()
}
