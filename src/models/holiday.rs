//! Holiday calendar models.
//!
//! This module contains the [`Holiday`] and [`HolidayCalendar`] types
//! supplying the holiday set consumed by the business-day counter when
//! valuing unused leave.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named public holiday.
///
/// Holidays are plain calendar dates with no time component, so
/// membership checks are never affected by timezone shifts.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
///     name: "Workers' Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The calendar date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday (e.g., "Workers' Day").
    pub name: String,
}

/// A jurisdiction's public-holiday calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayCalendar {
    /// The holidays in this calendar.
    pub holidays: Vec<Holiday>,
}

impl HolidayCalendar {
    /// Checks if a given date is a holiday in this calendar.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.iter().any(|h| h.date == date)
    }

    /// Returns the calendar's dates as a set for business-day counting.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{Holiday, HolidayCalendar};
    /// use chrono::NaiveDate;
    ///
    /// let calendar = HolidayCalendar {
    ///     holidays: vec![Holiday {
    ///         date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
    ///         name: "Workers' Day".to_string(),
    ///     }],
    /// };
    ///
    /// let dates = calendar.date_set();
    /// assert!(dates.contains(&NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()));
    /// ```
    pub fn date_set(&self) -> HashSet<NaiveDate> {
        self.holidays.iter().map(|h| h.date).collect()
    }
}
