//! I/O module
//!
//! Handles NDJSON parsing and output.
//!
//! # Components
//!
//! - `json_format` - Wire format handling (record conversion, result serialization)
//! - `sync_reader` - Streaming NDJSON reader with iterator interface

pub mod json_format;
pub mod sync_reader;

pub use json_format::{parse_record_line, write_results_json, RawRecord};
pub use sync_reader::SyncReader;
