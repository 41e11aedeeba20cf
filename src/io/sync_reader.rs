//! Streaming NDJSON reader with iterator interface
//!
//! Provides a streaming iterator over load attempt records from a
//! newline-delimited JSON file. Delegates format concerns to the
//! `json_format` module.
//!
//! # Design
//!
//! The reader processes the file one line at a time without loading it
//! into memory. Blank lines are skipped. Each yielded item is either a
//! validated [`LoadAttempt`] or an [`EngineError`] carrying the 1-based
//! line number of the offending record, so the caller can decide between
//! per-record skip and whole-batch abort.

use crate::io::json_format::parse_record_line;
use crate::types::{EngineError, LoadAttempt};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// Streaming reader over an NDJSON load attempt file
///
/// Implements [`Iterator`], yielding `Result<LoadAttempt, EngineError>` per
/// non-blank input line. Memory usage is O(1) per record, not O(file size).
#[derive(Debug)]
pub struct SyncReader {
    lines: Lines<BufReader<File>>,
    line_num: u64,
}

impl SyncReader {
    /// Open an NDJSON file for streaming iteration
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::IoError`] if the file cannot be opened.
    pub fn new(path: &Path) -> Result<Self, EngineError> {
        let file = File::open(path).map_err(|e| EngineError::IoError {
            message: format!("Failed to open file '{}': {}", path.display(), e),
        })?;

        Ok(Self {
            lines: BufReader::new(file).lines(),
            line_num: 0,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<LoadAttempt, EngineError>;

    /// Get the next load attempt from the input file
    ///
    /// Blank lines are skipped without producing an item. Parse errors are
    /// yielded with the line number attached; iteration can continue past
    /// them.
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    self.line_num += 1;
                    return Some(Err(EngineError::IoError {
                        message: format!("read failed at line {}: {}", self.line_num, e),
                    }));
                }
            };
            self.line_num += 1;

            if line.trim().is_empty() {
                continue;
            }

            return Some(parse_record_line(&line).map_err(|e| match e {
                EngineError::ParseError { message, .. } => EngineError::ParseError {
                    line: Some(self.line_num),
                    message,
                },
                other => other,
            }));
        }
    }
}
