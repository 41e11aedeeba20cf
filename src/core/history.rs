//! Per-customer load attempt history
//!
//! This module provides [`CustomerHistory`], which owns one customer's set
//! of previously accepted attempt ids and the current week/day window chain,
//! and makes the accept/reject [`Decision`] for each incoming attempt.
//!
//! Evaluation and commit are split on purpose: [`CustomerHistory::evaluate`]
//! is pure and can be called speculatively or repeatedly without corrupting
//! state, while [`CustomerHistory::commit`] applies the side effects and is
//! only called after an `Accept` decision.

use crate::core::window::{TimeWindow, WindowKind};
use crate::types::LoadAttempt;
use std::collections::HashSet;

/// Why a load attempt was rejected
///
/// Rejection reasons are data, not errors: they are folded into the
/// `accepted` field of the output record and logged at debug level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The attempt id was already accepted for this customer
    DuplicateId,
    /// Accepting would push the daily total past the daily amount cap,
    /// or the single attempt alone exceeds it
    DailyCapExceeded,
    /// The daily count of accepted attempts is already exhausted
    DailyCountExceeded,
    /// Accepting would push the weekly total past the weekly amount cap
    WeeklyCapExceeded,
}

/// The outcome of evaluating a load attempt against current limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The attempt passes all velocity checks
    Accept,
    /// The attempt fails a velocity check; the first failing check wins
    Reject(RejectReason),
}

impl Decision {
    /// Whether this decision accepts the attempt
    pub fn is_accept(&self) -> bool {
        matches!(self, Decision::Accept)
    }
}

/// The current week window and the day window it contains
///
/// The week exclusively owns its current day. Both are direct fields,
/// never "the last element of a sequence", so rollover is a plain value
/// replacement with no positional bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekWindow {
    window: TimeWindow,
    day: TimeWindow,
}

impl WeekWindow {
    /// Create a fresh week/day pair anchored at `anchor`
    fn new(anchor: chrono::DateTime<chrono::Utc>) -> Self {
        WeekWindow {
            window: TimeWindow::week(anchor),
            day: TimeWindow::day(anchor),
        }
    }

    /// The week-granularity window
    pub fn window(&self) -> &TimeWindow {
        &self.window
    }

    /// The current day window within this week
    pub fn day(&self) -> &TimeWindow {
        &self.day
    }
}

/// One customer's accepted-attempt history and current window chain
///
/// Created lazily on the customer's first attempt. The week window is
/// `None` until the first accepted attempt and is replaced, not mutated,
/// whenever an incoming timestamp falls outside its range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerHistory {
    accepted_ids: HashSet<String>,
    week: Option<WeekWindow>,
}

impl CustomerHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an attempt with this id was already accepted
    pub fn has_accepted(&self, id: &str) -> bool {
        self.accepted_ids.contains(id)
    }

    /// The current week window chain, if any attempt was accepted yet
    pub fn current_week(&self) -> Option<&WeekWindow> {
        self.week.as_ref()
    }

    /// Evaluate an attempt against the velocity limits without mutating
    ///
    /// Checks run in a fixed short-circuit order; the first failing check
    /// determines the rejection reason:
    ///
    /// 1. duplicate id
    /// 2. absolute amount above the daily cap (no history can admit it)
    /// 3. weekly total cap, if the attempt falls in the current week
    /// 4. daily total cap and daily count cap, if it also falls in the
    ///    current day
    ///
    /// All total/count checks use pre-acceptance values; the attempt under
    /// evaluation never counts against itself. Calling this twice with the
    /// same state yields the same decision.
    pub fn evaluate(&self, attempt: &LoadAttempt) -> Decision {
        if self.accepted_ids.contains(&attempt.id) {
            return Decision::Reject(RejectReason::DuplicateId);
        }

        if attempt.load_amount_value > WindowKind::Day.limits().amount_cap {
            return Decision::Reject(RejectReason::DailyCapExceeded);
        }

        if let Some(week) = &self.week {
            if week.window.has_in_range(attempt.time) {
                if week.window.exceeds_amount_cap(attempt.load_amount_value) {
                    return Decision::Reject(RejectReason::WeeklyCapExceeded);
                }

                if week.day.has_in_range(attempt.time) {
                    if week.day.exceeds_amount_cap(attempt.load_amount_value) {
                        return Decision::Reject(RejectReason::DailyCapExceeded);
                    }
                    if week.day.exceeds_count_cap() {
                        return Decision::Reject(RejectReason::DailyCountExceeded);
                    }
                }
            }
        }

        Decision::Accept
    }

    /// Record an accepted attempt, resolving window rollover
    ///
    /// Must only be called after [`evaluate`](Self::evaluate) returned
    /// `Accept`. Inserts the attempt id, replaces the week and/or day
    /// window with a fresh zeroed one when the timestamp falls outside the
    /// current range, and records the amount on both resolved windows.
    pub fn commit(&mut self, attempt: &LoadAttempt) {
        self.accepted_ids.insert(attempt.id.clone());

        let needs_new_week = match &self.week {
            Some(week) => !week.window.has_in_range(attempt.time),
            None => true,
        };
        if needs_new_week {
            self.week = Some(WeekWindow::new(attempt.time));
        }
        let week = self.week.as_mut().expect("week resolved above");

        if !week.day.has_in_range(attempt.time) {
            week.day = TimeWindow::day(attempt.time);
        }

        // A resolved window pair must always contain the attempt timestamp;
        // anything else is a bounds-computation defect, not a rejection.
        debug_assert!(week.window.has_in_range(attempt.time));
        debug_assert!(week.day.has_in_range(attempt.time));

        week.day.record_accepted(attempt.load_amount_value);
        week.window.record_accepted(attempt.load_amount_value);
    }
}
