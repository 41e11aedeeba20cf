//! NDJSON format handling for load attempt records and result output
//!
//! This module centralizes the wire format concerns:
//! - RawRecord structure for per-line deserialization
//! - Conversion from raw records to validated [`LoadAttempt`] values
//! - Result log serialization, one JSON object per line
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{EngineError, LoadAttempt, LoadAttemptResult};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::io::Write;

/// Raw input record as it appears on one line of the input file
///
/// Field presence is enforced by serde; field *content* (non-empty strings,
/// parsable amount) is enforced by [`LoadAttempt::new`].
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RawRecord {
    pub id: String,
    pub customer_id: String,
    pub load_amount: String,
    pub time: DateTime<Utc>,
}

/// Parse one input line into a validated load attempt
///
/// # Errors
///
/// * [`EngineError::ParseError`] when the line is not valid JSON, is missing
///   a field, or carries an unparsable timestamp
/// * [`EngineError::InvalidRecord`] when a required field is present but
///   empty
pub fn parse_record_line(line: &str) -> Result<LoadAttempt, EngineError> {
    let raw: RawRecord = serde_json::from_str(line)?;
    LoadAttempt::new(raw.id, raw.customer_id, raw.load_amount, raw.time)
}

/// Write the result log as newline-delimited JSON
///
/// One `{"id":...,"customer_id":...,"accepted":...}` object per line, in
/// the order the results were appended by the engine.
pub fn write_results_json(
    results: &[LoadAttemptResult],
    output: &mut dyn Write,
) -> Result<(), EngineError> {
    for result in results {
        serde_json::to_writer(&mut *output, result)?;
        output.write_all(b"\n")?;
    }
    output.flush()?;
    Ok(())
}
