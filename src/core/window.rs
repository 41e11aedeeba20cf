//! Rolling time-window accumulators
//!
//! This module provides the [`TimeWindow`] accumulator used for velocity
//! limit bookkeeping. A window covers exactly one UTC calendar day or one
//! UTC calendar week (Monday through Sunday) and accumulates the total
//! accepted amount and count of accepted attempts within its range.
//!
//! Day and Week differ only in their bounds computation and limit values,
//! so both are modeled as one struct tagged with a [`WindowKind`] carrying
//! data-driven [`WindowLimits`] rather than two parallel implementations.
//!
//! # Replacement policy
//!
//! A window is never mutated across a period boundary. When an incoming
//! timestamp falls outside the current window's range, the owner constructs
//! a fresh window (zeroed total and count) anchored at the new timestamp and
//! drops the old one.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use rust_decimal::Decimal;

/// The kind of period a window covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    /// One UTC calendar day (midnight up to, but excluding, the next midnight)
    Day,
    /// One UTC calendar week (Monday midnight up to, but excluding, the next
    /// Monday midnight)
    Week,
}

/// Velocity limits applied to one window kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLimits {
    /// Maximum total accepted amount within the window
    pub amount_cap: Decimal,

    /// Maximum number of accepted attempts within the window, if capped
    pub count_cap: Option<u32>,
}

impl WindowKind {
    /// The velocity limits for this window kind
    ///
    /// Day: at most 5000 in total and 3 accepted attempts.
    /// Week: at most 20000 in total, no count cap.
    pub fn limits(&self) -> WindowLimits {
        match self {
            WindowKind::Day => WindowLimits {
                amount_cap: Decimal::new(5_000, 0),
                count_cap: Some(3),
            },
            WindowKind::Week => WindowLimits {
                amount_cap: Decimal::new(20_000, 0),
                count_cap: None,
            },
        }
    }
}

/// A rolling time-window accumulator
///
/// Tracks a contiguous UTC date range (half-open: the start is inclusive,
/// the end is the first instant of the following period and exclusive) and
/// the total amount and count of accepted attempts whose timestamps fall
/// inside it. Half-open bounds make membership exact at any timestamp
/// precision the input carries. Owned exclusively by the customer history
/// that created it.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeWindow {
    kind: WindowKind,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    total: Decimal,
    count: u32,
}

impl TimeWindow {
    /// Create a Day window covering the UTC calendar day containing `anchor`
    pub fn day(anchor: DateTime<Utc>) -> Self {
        let date = anchor.date_naive();
        Self::from_date_range(WindowKind::Day, date, date)
    }

    /// Create a Week window covering the UTC calendar week containing `anchor`
    ///
    /// Weeks start on Monday. A Sunday-timestamped anchor therefore belongs
    /// to the week that began the previous Monday, not the following one.
    pub fn week(anchor: DateTime<Utc>) -> Self {
        let date = anchor.date_naive();
        let monday = date - Days::new(u64::from(date.weekday().num_days_from_monday()));
        let sunday = monday + Days::new(6);
        Self::from_date_range(WindowKind::Week, monday, sunday)
    }

    fn from_date_range(kind: WindowKind, first: NaiveDate, last: NaiveDate) -> Self {
        let start = first
            .and_hms_opt(0, 0, 0)
            .expect("valid start of day")
            .and_utc();
        let end = (last + Days::new(1))
            .and_hms_opt(0, 0, 0)
            .expect("valid start of day")
            .and_utc();

        TimeWindow {
            kind,
            start,
            end,
            total: Decimal::ZERO,
            count: 0,
        }
    }

    /// The kind of period this window covers
    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    /// Inclusive start of the window's range
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive end of the window's range (the next period's first instant)
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Total accepted amount accumulated within the window
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Number of accepted attempts recorded within the window
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether `t` falls inside the window's range (`start <= t < end`)
    pub fn has_in_range(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t < self.end
    }

    /// The window total as it would be if `amount` were accepted
    ///
    /// Non-mutating; used for limit checks so the attempt under evaluation
    /// never counts against itself.
    pub fn total_if_accepted(&self, amount: Decimal) -> Decimal {
        self.total + amount
    }

    /// Whether accepting `amount` would push the total past the amount cap
    pub fn exceeds_amount_cap(&self, amount: Decimal) -> bool {
        self.total_if_accepted(amount) > self.kind.limits().amount_cap
    }

    /// Whether the count cap is already exhausted (pre-acceptance count)
    ///
    /// Always false for window kinds without a count cap.
    pub fn exceeds_count_cap(&self) -> bool {
        match self.kind.limits().count_cap {
            Some(cap) => self.count >= cap,
            None => false,
        }
    }

    /// Record an accepted amount, updating the running total and count
    pub fn record_accepted(&mut self, amount: Decimal) {
        self.total += amount;
        self.count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_day_bounds_cover_one_utc_day() {
        let window = TimeWindow::day(ts("2024-01-03T15:42:07Z"));

        assert_eq!(window.kind(), WindowKind::Day);
        assert_eq!(window.start(), ts("2024-01-03T00:00:00Z"));
        assert_eq!(window.end(), ts("2024-01-04T00:00:00Z"));
    }

    // 2024-01-01 is a Monday; every anchor in that week maps to the same bounds.
    #[rstest]
    #[case::monday_anchor("2024-01-01T00:00:00Z")]
    #[case::midweek_anchor("2024-01-03T12:00:00Z")]
    #[case::sunday_anchor("2024-01-07T23:59:59Z")]
    fn test_week_bounds_monday_start(#[case] anchor: &str) {
        let window = TimeWindow::week(ts(anchor));

        assert_eq!(window.kind(), WindowKind::Week);
        assert_eq!(window.start(), ts("2024-01-01T00:00:00Z"));
        assert_eq!(window.end(), ts("2024-01-08T00:00:00Z"));
    }

    #[test]
    fn test_sunday_belongs_to_preceding_monday_week() {
        // A Sunday anchor must not roll forward into the next week.
        let sunday = ts("2024-01-07T10:00:00Z");
        let window = TimeWindow::week(sunday);

        assert!(window.has_in_range(sunday));
        assert_eq!(window.start(), ts("2024-01-01T00:00:00Z"));

        // The following Monday is out of range.
        assert!(!window.has_in_range(ts("2024-01-08T00:00:00Z")));
    }

    #[rstest]
    #[case::at_start("2024-01-03T00:00:00Z", true)]
    #[case::inside("2024-01-03T12:00:00Z", true)]
    #[case::last_millisecond("2024-01-03T23:59:59.999Z", true)]
    #[case::sub_millisecond_before_midnight("2024-01-03T23:59:59.999500Z", true)]
    #[case::last_nanosecond("2024-01-03T23:59:59.999999999Z", true)]
    #[case::previous_day("2024-01-02T23:59:59.999Z", false)]
    #[case::next_day("2024-01-04T00:00:00Z", false)]
    fn test_day_has_in_range(#[case] t: &str, #[case] expected: bool) {
        let window = TimeWindow::day(ts("2024-01-03T15:00:00Z"));
        assert_eq!(window.has_in_range(ts(t)), expected);
    }

    #[test]
    fn test_total_if_accepted_is_non_mutating() {
        let window = TimeWindow::day(ts("2024-01-03T00:00:00Z"));

        assert_eq!(
            window.total_if_accepted(Decimal::new(100, 0)),
            Decimal::new(100, 0)
        );
        assert_eq!(window.total(), Decimal::ZERO);
        assert_eq!(window.count(), 0);
    }

    #[test]
    fn test_record_accepted_accumulates() {
        let mut window = TimeWindow::day(ts("2024-01-03T00:00:00Z"));

        window.record_accepted(Decimal::new(1_000, 0));
        window.record_accepted(Decimal::new(250, 0));

        assert_eq!(window.total(), Decimal::new(1_250, 0));
        assert_eq!(window.count(), 2);
    }

    #[rstest]
    #[case::under_cap(4_000, 500, false)]
    #[case::exactly_at_cap(4_999, 1, false)]
    #[case::over_cap(4_999, 2, true)]
    fn test_day_amount_cap(#[case] total: i64, #[case] amount: i64, #[case] expected: bool) {
        let mut window = TimeWindow::day(ts("2024-01-03T00:00:00Z"));
        window.record_accepted(Decimal::new(total, 0));

        assert_eq!(window.exceeds_amount_cap(Decimal::new(amount, 0)), expected);
    }

    #[test]
    fn test_day_count_cap_uses_pre_acceptance_count() {
        let mut window = TimeWindow::day(ts("2024-01-03T00:00:00Z"));

        // Two accepted attempts: the third is still admissible.
        window.record_accepted(Decimal::ONE);
        window.record_accepted(Decimal::ONE);
        assert!(!window.exceeds_count_cap());

        // Three accepted attempts: the cap is exhausted.
        window.record_accepted(Decimal::ONE);
        assert!(window.exceeds_count_cap());
    }

    #[test]
    fn test_week_has_no_count_cap() {
        let mut window = TimeWindow::week(ts("2024-01-01T00:00:00Z"));
        for _ in 0..10 {
            window.record_accepted(Decimal::ONE);
        }

        assert!(!window.exceeds_count_cap());
    }

    #[test]
    fn test_week_amount_cap() {
        let mut window = TimeWindow::week(ts("2024-01-01T00:00:00Z"));
        window.record_accepted(Decimal::new(20_000, 0));

        assert!(window.exceeds_amount_cap(Decimal::ONE));
        assert!(!window.exceeds_amount_cap(Decimal::ZERO));
    }

    #[test]
    fn test_year_boundary_week() {
        // 2024-12-30 is a Monday; the week spans into January 2025.
        let window = TimeWindow::week(ts("2025-01-01T12:00:00Z"));

        assert_eq!(window.start(), ts("2024-12-30T00:00:00Z"));
        assert_eq!(window.end(), ts("2025-01-06T00:00:00Z"));
    }

    #[test]
    fn test_week_contains_sub_millisecond_sunday_timestamp() {
        let window = TimeWindow::week(ts("2024-01-01T00:00:00Z"));

        assert!(window.has_in_range(ts("2024-01-07T23:59:59.999999Z")));
        assert!(!window.has_in_range(ts("2024-01-08T00:00:00Z")));
    }
}
