//! Business-day counting for leave valuation.
//!
//! This module counts working days in an inclusive date range, excluding
//! weekends and configured public holidays. It is used to value unused
//! leave on payslips.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// The date format accepted by the permissive string-input counter.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns true if a date is a business day.
///
/// A business day is a calendar day that is neither a Saturday nor a
/// Sunday nor present in the holiday set. Holiday membership is an exact
/// calendar-date match; dates carry no time component, so the check is
/// immune to timezone shifts.
pub fn is_business_day(date: NaiveDate, holidays: &HashSet<NaiveDate>) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !holidays.contains(&date)
}

/// Counts business days from `start` to `end` inclusive.
///
/// Returns 0 when `end` precedes `start`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::count_business_days;
/// use chrono::NaiveDate;
/// use std::collections::HashSet;
///
/// // 2026-01-12 is a Monday, 2026-01-16 a Friday.
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let friday = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
///
/// assert_eq!(count_business_days(monday, friday, &HashSet::new()), 5);
/// ```
pub fn count_business_days(
    start: NaiveDate,
    end: NaiveDate,
    holidays: &HashSet<NaiveDate>,
) -> u32 {
    if end < start {
        return 0;
    }

    let mut count = 0;
    let mut current = start;
    while current <= end {
        if is_business_day(current, holidays) {
            count += 1;
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    count
}

/// Counts business days between two `YYYY-MM-DD` strings.
///
/// Malformed or empty date strings yield 0 rather than an error, a
/// permissive default for a UI-facing helper.
pub fn count_business_days_str(start: &str, end: &str, holidays: &HashSet<NaiveDate>) -> u32 {
    match (
        NaiveDate::parse_from_str(start, DATE_FORMAT),
        NaiveDate::parse_from_str(end, DATE_FORMAT),
    ) {
        (Ok(start), Ok(end)) => count_business_days(start, end, holidays),
        _ => 0,
    }
}
