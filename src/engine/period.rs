//! Vacation period derivation.
//!
//! This module implements the fixed-duration policy: given the first day of
//! a vacation, the last day and the return date follow from the configured
//! period length (30 days by default, so the end is `start + 29` and the
//! return is `start + 30`).

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::PeriodPolicy;

use super::date_codec::{parse_localized, to_localized};

/// End and return dates derived from a period start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedPeriod {
    /// Last vacation day (inclusive).
    pub end: NaiveDate,
    /// First working day after the vacation.
    pub return_date: NaiveDate,
}

impl DerivedPeriod {
    /// Returns the end date in localized form.
    pub fn end_localized(&self) -> String {
        to_localized(self.end)
    }

    /// Returns the return date in localized form.
    pub fn return_localized(&self) -> String {
        to_localized(self.return_date)
    }
}

/// Derives end and return dates under the default 30-day policy.
///
/// # Example
///
/// ```
/// use vacation_engine::engine::{derive_period, parse_localized};
///
/// let start = parse_localized("05/01/2026").unwrap();
/// let period = derive_period(start);
///
/// assert_eq!(period.end_localized(), "03/02/2026");
/// assert_eq!(period.return_localized(), "04/02/2026");
/// ```
pub fn derive_period(start: NaiveDate) -> DerivedPeriod {
    derive_period_with(start, &PeriodPolicy::default())
}

/// Derives end and return dates under the given policy.
///
/// Dates past the end of the supported calendar saturate at
/// [`NaiveDate::MAX`].
pub fn derive_period_with(start: NaiveDate, policy: &PeriodPolicy) -> DerivedPeriod {
    DerivedPeriod {
        end: shift(start, policy.end_offset_days()).unwrap_or(NaiveDate::MAX),
        return_date: shift(start, policy.return_offset_days()).unwrap_or(NaiveDate::MAX),
    }
}

/// Adds `days` calendar days to a localized date string.
///
/// Handles month, year and leap-year rollover. A malformed input, or a
/// result outside the supported calendar, yields the input unchanged;
/// callers treat an unchanged value as "could not compute".
///
/// # Example
///
/// ```
/// use vacation_engine::engine::add_days;
///
/// assert_eq!(add_days("07/12/2026", 29), "05/01/2027");
/// assert_eq!(add_days("not a date", 29), "not a date");
/// ```
pub fn add_days(value: &str, days: i64) -> String {
    parse_localized(value)
        .and_then(|date| shift(date, days))
        .map(to_localized)
        .unwrap_or_else(|| value.to_string())
}

fn shift(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    Duration::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}
