//! Load-Velocity Engine Library
//! # Overview
//!
//! This library validates a stream of "load attempt" events (a customer
//! requesting funds be loaded onto an account) against per-customer velocity
//! limits and deterministically accepts or rejects each attempt.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (LoadAttempt, LoadAttemptResult, errors)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::window`] - Rolling day/week time-window accumulators
//!   - [`core::history`] - Per-customer history and accept/reject decisions
//!   - [`core::engine`] - The immutable-snapshot engine state
//! - [`io`] - NDJSON input/output handling
//! - [`pipeline`] - Read → validate → write orchestration
//!
//! # Velocity Limits
//!
//! Per customer, within rolling calendar windows (UTC):
//!
//! - **Daily amount cap**: at most 5000 accepted per day
//! - **Daily count cap**: at most 3 accepted attempts per day
//! - **Weekly amount cap**: at most 20000 accepted per week (Monday-start)
//!
//! Additionally, an attempt id that was already accepted for a customer is
//! always rejected as a duplicate, even across window rollovers.
//!
//! # Determinism
//!
//! The engine is a pure, order-sensitive decision function: replaying the
//! same ordered sequence of attempts from the initial empty [`core::State`]
//! always produces the same ordered sequence of accept/reject results.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use core::{CustomerHistory, Decision, RejectReason, State, TimeWindow, WindowKind};
pub use io::write_results_json;
pub use types::{EngineError, LoadAttempt, LoadAttemptResult};
