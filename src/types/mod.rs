//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `load_attempt`: Load attempt input and result value types
//! - `error`: Error types for the engine

pub mod error;
pub mod load_attempt;

pub use error::EngineError;
pub use load_attempt::{LoadAttempt, LoadAttemptResult};
