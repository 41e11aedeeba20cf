//! Validation engine state
//!
//! This module provides [`State`], the aggregate root that owns the mapping
//! from customer id to [`CustomerHistory`] and the ordered output log of
//! decisions. [`State::update`] evaluates one attempt, records it on accept,
//! and returns a **new** snapshot; the previous snapshot is never mutated.
//!
//! # Snapshot semantics
//!
//! Each `update` performs a defensive full copy of the customer map and the
//! output log. That trades memory churn for equational reasoning: any held
//! snapshot stays valid forever, replay/undo are trivial, and publishing the
//! latest snapshot to readers is a single reference swap. Structural sharing
//! would be an implementation change, not a contract change.

use crate::core::history::{CustomerHistory, Decision};
use crate::types::{LoadAttempt, LoadAttemptResult};
use std::collections::HashMap;
use tracing::debug;

/// Immutable point-in-time view of the engine's full state
///
/// Owns every customer's history plus the ordered log of all results
/// produced so far. The empty value from [`State::new`] is the initial
/// snapshot; feeding the same ordered attempts into it always reproduces
/// the same output log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    history: HashMap<String, CustomerHistory>,
    output: Vec<LoadAttemptResult>,
}

impl State {
    /// The initial empty snapshot: no customers, no output
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one load attempt and return the updated snapshot
    ///
    /// Locates (or lazily creates) the customer's history on a copy of this
    /// state, evaluates the attempt against the velocity limits, commits it
    /// on accept, and always appends a result mirroring the decision to the
    /// output log.
    ///
    /// Never fails for a well-formed [`LoadAttempt`]: business-rule
    /// rejections become data, and malformed records are rejected before
    /// they ever reach the engine.
    pub fn update(&self, attempt: &LoadAttempt) -> State {
        let mut next = self.clone();

        let history = next
            .history
            .entry(attempt.customer_id.clone())
            .or_default();

        let decision = history.evaluate(attempt);
        match decision {
            Decision::Accept => history.commit(attempt),
            Decision::Reject(reason) => debug!(
                id = %attempt.id,
                customer_id = %attempt.customer_id,
                ?reason,
                "load attempt rejected"
            ),
        }

        next.output
            .push(LoadAttemptResult::new(attempt, decision.is_accept()));
        next
    }

    /// Administrative reset: the initial empty snapshot
    ///
    /// Discards all accumulated history and output. A replay against the
    /// returned state behaves exactly like a replay against a fresh engine.
    pub fn refresh(&self) -> State {
        State::new()
    }

    /// The ordered log of results, in engine-append order
    pub fn output(&self) -> &[LoadAttemptResult] {
        &self.output
    }

    /// One customer's history, if any attempt for them was processed
    pub fn customer(&self, customer_id: &str) -> Option<&CustomerHistory> {
        self.history.get(customer_id)
    }

    /// Number of customers with processed attempts
    pub fn customer_count(&self) -> usize {
        self.history.len()
    }
}
