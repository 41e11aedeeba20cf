//! Error types for the load-velocity engine
//!
//! This module defines the structural errors that can occur while reading and
//! constructing load attempts. Business-rule rejections (duplicate ids,
//! exceeded velocity limits) are deliberately *not* represented here: they
//! are ordinary data, folded into the `accepted` field of a
//! [`LoadAttemptResult`](crate::types::LoadAttemptResult).
//!
//! # Error Categories
//!
//! - **File I/O errors**: file not found, permission denied, etc.
//! - **Parse errors**: malformed JSON lines, invalid timestamps
//! - **Record errors**: required fields missing or empty

use thiserror::Error;

/// Main error type for the load-velocity engine
///
/// Only structural malformation is represented as an error. Each variant
/// carries enough context to point a caller at the offending input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// I/O error occurred while reading or writing
    ///
    /// Typically fatal to the whole batch (file permissions, disk full, etc.).
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A line of input could not be parsed as a load attempt record
    ///
    /// Recoverable by default: the pipeline skips the malformed record and
    /// continues with the next line.
    #[error("Record parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A required field of a load attempt record is missing or empty
    ///
    /// Fatal to that single record, non-fatal to the batch. The engine
    /// never sees a record that failed construction.
    #[error("Invalid load attempt record: field '{field}' is missing or empty")]
    InvalidRecord {
        /// The field that failed validation
        field: String,
    },
}

// Conversion from io::Error to EngineError
impl From<std::io::Error> for EngineError {
    fn from(error: std::io::Error) -> Self {
        EngineError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to EngineError
impl From<serde_json::Error> for EngineError {
    fn from(error: serde_json::Error) -> Self {
        EngineError::ParseError {
            line: None,
            message: error.to_string(),
        }
    }
}

impl EngineError {
    /// Create an InvalidRecord error for the named field
    pub fn invalid_record(field: &str) -> Self {
        EngineError::InvalidRecord {
            field: field.to_string(),
        }
    }

    /// Create a ParseError with an optional line number
    pub fn parse_error(line: Option<u64>, message: &str) -> Self {
        EngineError::ParseError {
            line,
            message: message.to_string(),
        }
    }
}
