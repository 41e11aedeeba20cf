//! Load attempt value types
//!
//! This module defines the validated input record ([`LoadAttempt`]) and the
//! per-attempt decision record ([`LoadAttemptResult`]) used throughout the
//! engine. Both are created once and never mutated.

use crate::types::error::EngineError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;
use tracing::warn;

/// A validated, parsed representation of one input record
///
/// Constructed from a raw NDJSON record via [`LoadAttempt::new`], which
/// enforces the structural requirements (non-empty `id`, `customer_id`,
/// and `load_amount`). The monetary value is derived from the raw
/// currency-formatted string; an unparsable amount degrades to zero
/// rather than failing construction.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadAttempt {
    /// Attempt identifier, unique per customer for the engine's lifetime
    pub id: String,

    /// Customer identifier the load applies to
    pub customer_id: String,

    /// Raw currency-formatted amount string, e.g. `"$3,000.00"`
    pub load_amount: String,

    /// Parsed monetary value of `load_amount`
    ///
    /// Derived by stripping `$`, `,`, and spaces. Always non-negative:
    /// parse failures and negative values degrade to zero (with a logged
    /// warning) instead of failing the record.
    pub load_amount_value: Decimal,

    /// Timestamp of the attempt, UTC
    pub time: DateTime<Utc>,
}

impl LoadAttempt {
    /// Construct a validated load attempt from raw record fields
    ///
    /// # Arguments
    ///
    /// * `id` - Attempt identifier (must be non-empty)
    /// * `customer_id` - Customer identifier (must be non-empty)
    /// * `load_amount` - Raw currency-formatted amount string (must be non-empty)
    /// * `time` - Attempt timestamp, UTC
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRecord`] naming the first missing or
    /// empty required field. An amount string that is present but
    /// unparsable is *not* an error: the derived value degrades to zero.
    pub fn new(
        id: String,
        customer_id: String,
        load_amount: String,
        time: DateTime<Utc>,
    ) -> Result<Self, EngineError> {
        if id.is_empty() {
            return Err(EngineError::invalid_record("id"));
        }
        if customer_id.is_empty() {
            return Err(EngineError::invalid_record("customer_id"));
        }
        if load_amount.is_empty() {
            return Err(EngineError::invalid_record("load_amount"));
        }

        let load_amount_value = parse_currency(&load_amount);

        Ok(LoadAttempt {
            id,
            customer_id,
            load_amount,
            load_amount_value,
            time,
        })
    }
}

/// Parse a currency-formatted amount string into a non-negative decimal
///
/// Strips `$`, `,`, and space characters before parsing. Parse failures
/// and negative values are logged and degrade to `Decimal::ZERO`; the
/// record itself stays valid.
fn parse_currency(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();

    match Decimal::from_str(&cleaned) {
        Ok(value) if !value.is_sign_negative() => value,
        Ok(_) => {
            warn!(amount = %raw, "negative load amount, defaulting value to 0");
            Decimal::ZERO
        }
        Err(e) => {
            warn!(amount = %raw, error = %e, "failed to parse load amount, defaulting value to 0");
            Decimal::ZERO
        }
    }
}

/// The accept/reject outcome recorded for one processed load attempt
///
/// One result is produced per attempt, in arrival order, and appended to
/// the engine's output log. The serialized field order matches the output
/// wire format: `{"id":...,"customer_id":...,"accepted":...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadAttemptResult {
    /// Attempt identifier, echoed from the input record
    pub id: String,

    /// Customer identifier, echoed from the input record
    pub customer_id: String,

    /// Whether the attempt was accepted against the velocity limits
    pub accepted: bool,
}

impl LoadAttemptResult {
    /// Create a result mirroring a decision for the given attempt
    pub fn new(attempt: &LoadAttempt, accepted: bool) -> Self {
        LoadAttemptResult {
            id: attempt.id.clone(),
            customer_id: attempt.customer_id.clone(),
            accepted,
        }
    }
}
