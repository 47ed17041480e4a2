//! Vacation status classification.
//!
//! Classifies a stored period relative to an explicit "today". The caller
//! always supplies the reference date; nothing here reads a clock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::VacationRecord;

use super::date_codec::parse_localized;

/// Where a vacation period stands relative to a reference date.
///
/// # Example
///
/// ```
/// use vacation_engine::engine::{classify_status, VacationStatus};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 4).unwrap();
/// let status = classify_status("05/01/2026", "03/02/2026", today);
/// assert_eq!(status, VacationStatus::Upcoming { days_remaining: 1 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VacationStatus {
    /// Today falls within the period, bounds included.
    Active,
    /// The period has not started yet.
    Upcoming {
        /// Whole days until the first vacation day (at least 1).
        days_remaining: i64,
    },
    /// The last vacation day is in the past.
    Completed,
    /// A bound could not be decoded.
    Invalid,
}

impl std::fmt::Display for VacationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VacationStatus::Active => write!(f, "On vacation"),
            VacationStatus::Upcoming { days_remaining: 1 } => write!(f, "Starts in 1 day"),
            VacationStatus::Upcoming { days_remaining } => {
                write!(f, "Starts in {} days", days_remaining)
            }
            VacationStatus::Completed => write!(f, "Completed"),
            VacationStatus::Invalid => write!(f, "Invalid date"),
        }
    }
}

/// Classifies the localized period `[period_start, period_end]` against `today`.
///
/// The active check runs first, then completed, then upcoming. A record
/// whose bounds are reversed is therefore never active.
pub fn classify_status(period_start: &str, period_end: &str, today: NaiveDate) -> VacationStatus {
    let (Some(start), Some(end)) = (parse_localized(period_start), parse_localized(period_end))
    else {
        return VacationStatus::Invalid;
    };

    if today >= start && today <= end {
        VacationStatus::Active
    } else if today > end {
        VacationStatus::Completed
    } else {
        VacationStatus::Upcoming {
            days_remaining: (start - today).num_days(),
        }
    }
}

/// Classifies a stored record against `today`.
pub fn classify_record(record: &VacationRecord, today: NaiveDate) -> VacationStatus {
    classify_status(&record.period_start, &record.period_end, today)
}
