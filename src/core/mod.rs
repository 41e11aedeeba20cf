//! Core business logic module
//!
//! This module contains the validation engine components:
//! - `window` - Rolling day/week time-window accumulators
//! - `history` - Per-customer history and accept/reject decisions
//! - `engine` - The immutable-snapshot engine state

pub mod engine;
pub mod history;
pub mod window;

pub use engine::State;
pub use history::{CustomerHistory, Decision, RejectReason, WeekWindow};
pub use window::{TimeWindow, WindowKind, WindowLimits};
