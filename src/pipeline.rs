//! Processing pipeline
//!
//! Orchestrates the complete read → validate → write flow: streams load
//! attempt records from an NDJSON input file, folds them through the
//! engine strictly in arrival order, and writes the decision log to the
//! output writer.
//!
//! # Error handling
//!
//! Fatal errors (file not found, I/O failures) are returned immediately.
//! Malformed records are recoverable by default: they are logged and
//! skipped, and processing continues with the next line. In strict mode
//! the first malformed record aborts the whole batch instead, per the
//! caller's choice of batch policy.

use crate::core::State;
use crate::io::json_format::write_results_json;
use crate::io::sync_reader::SyncReader;
use crate::types::EngineError;
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Process an NDJSON input file and write the decision log
///
/// Reads load attempts one per line, feeds each through
/// [`State::update`] in arrival order, and writes one result object per
/// line to `output` once the input is exhausted.
///
/// # Arguments
///
/// * `input_path` - Path to the newline-delimited JSON input file
/// * `output` - Writer receiving the result log
/// * `strict` - Abort on the first malformed record instead of skipping it
///
/// # Errors
///
/// Returns an error if the input file cannot be opened, a fatal I/O error
/// occurs, or (in strict mode) any record is malformed. Business-rule
/// rejections never surface here; they appear as `"accepted":false` in the
/// output.
pub fn process_file(
    input_path: &Path,
    output: &mut dyn Write,
    strict: bool,
) -> Result<(), EngineError> {
    let reader = SyncReader::new(input_path)?;

    let mut state = State::new();
    for result in reader {
        match result {
            Ok(attempt) => state = state.update(&attempt),
            Err(e) => {
                if strict {
                    return Err(e);
                }
                warn!(error = %e, "skipping malformed load attempt record");
            }
        }
    }

    write_results_json(state.output(), output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_input(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_pipeline_processes_valid_input() {
        let content = "\
{\"id\":\"1\",\"customer_id\":\"528\",\"load_amount\":\"$3,318.47\",\"time\":\"2000-01-01T00:00:00Z\"}\n\
{\"id\":\"2\",\"customer_id\":\"528\",\"load_amount\":\"$1,413.18\",\"time\":\"2000-01-01T01:00:00Z\"}\n";
        let file = create_temp_input(content);

        let mut output = Vec::new();
        process_file(file.path(), &mut output, false).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "{\"id\":\"1\",\"customer_id\":\"528\",\"accepted\":true}\n\
             {\"id\":\"2\",\"customer_id\":\"528\",\"accepted\":true}\n"
        );
    }

    #[test]
    fn test_pipeline_rejections_are_data_not_errors() {
        let content = "\
{\"id\":\"1\",\"customer_id\":\"528\",\"load_amount\":\"$6,000.00\",\"time\":\"2000-01-01T00:00:00Z\"}\n";
        let file = create_temp_input(content);

        let mut output = Vec::new();
        process_file(file.path(), &mut output, false).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(
            output_str,
            "{\"id\":\"1\",\"customer_id\":\"528\",\"accepted\":false}\n"
        );
    }

    #[test]
    fn test_pipeline_skips_malformed_records_by_default() {
        let content = "\
{\"id\":\"1\",\"customer_id\":\"528\",\"load_amount\":\"$1.00\",\"time\":\"2000-01-01T00:00:00Z\"}\n\
this line is not json\n\
{\"id\":\"2\",\"customer_id\":\"528\",\"load_amount\":\"$1.00\",\"time\":\"2000-01-01T01:00:00Z\"}\n";
        let file = create_temp_input(content);

        let mut output = Vec::new();
        process_file(file.path(), &mut output, false).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert_eq!(output_str.lines().count(), 2);
        assert!(output_str.contains("\"id\":\"1\""));
        assert!(output_str.contains("\"id\":\"2\""));
    }

    #[test]
    fn test_pipeline_strict_mode_aborts_on_malformed_record() {
        let content = "\
{\"id\":\"1\",\"customer_id\":\"528\",\"load_amount\":\"$1.00\",\"time\":\"2000-01-01T00:00:00Z\"}\n\
this line is not json\n";
        let file = create_temp_input(content);

        let mut output = Vec::new();
        let result = process_file(file.path(), &mut output, true);

        assert!(matches!(
            result,
            Err(EngineError::ParseError { line: Some(2), .. })
        ));
    }

    #[test]
    fn test_pipeline_missing_file_is_fatal() {
        let mut output = Vec::new();
        let result = process_file(Path::new("nonexistent.jsonl"), &mut output, false);
        assert!(matches!(result, Err(EngineError::IoError { .. })));
    }

    #[test]
    fn test_pipeline_empty_input_produces_empty_output() {
        let file = create_temp_input("");
        let mut output = Vec::new();
        process_file(file.path(), &mut output, false).unwrap();
        assert!(output.is_empty());
    }
}
