//! Employee-scoped conflict detection.
//!
//! A candidate vacation conflicts with an existing one when both belong to
//! the same employee key and their inclusive `[start, end]` ranges
//! intersect. Records whose bounds cannot be decoded never conflict.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::VacationRecord;

use super::date_codec::parse_localized;

/// An inclusive calendar-day interval.
///
/// # Example
///
/// ```
/// use vacation_engine::engine::Period;
///
/// let january = Period::from_localized("05/01/2026", "03/02/2026").unwrap();
/// let february = Period::from_localized("03/02/2026", "04/03/2026").unwrap();
/// assert!(january.overlaps(&february));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl Period {
    /// Decodes a period from localized bounds.
    pub fn from_localized(start: &str, end: &str) -> Option<Self> {
        Some(Self {
            start: parse_localized(start)?,
            end: parse_localized(end)?,
        })
    }

    /// Decodes the period of a stored record.
    pub fn of_record(record: &VacationRecord) -> Option<Self> {
        Self::from_localized(&record.period_start, &record.period_end)
    }

    /// Returns true if the two inclusive intervals share at least one day.
    pub fn overlaps(&self, other: &Period) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Returns true if `date` lies within the period, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// A pair of records of the same employee whose periods overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictPair {
    /// The earlier record in input order.
    pub record_id: String,
    /// The later record in input order.
    pub conflicting_id: String,
    /// The shared employee key.
    pub employee: String,
}

/// Finds the first existing record that conflicts with `candidate`.
///
/// Only records with the candidate's employee key are considered, and the
/// record whose id equals `exclude_id` is skipped so that an edited record
/// never conflicts with its own stored copy.
///
/// # Example
///
/// ```
/// use vacation_engine::engine::find_conflict;
/// use vacation_engine::models::VacationRecord;
///
/// let record = |id: &str, name: &str, start: &str, end: &str| VacationRecord {
///     id: id.to_string(),
///     employee_name: name.to_string(),
///     admission_date: "01/01/2020".to_string(),
///     period_start: start.to_string(),
///     period_end: end.to_string(),
///     return_date: String::new(),
/// };
///
/// let existing = vec![record("1", "RONAN", "05/01/2026", "03/02/2026")];
/// let candidate = record("new", "ronan ", "01/02/2026", "02/03/2026");
///
/// let hit = find_conflict(&candidate, &existing, None).unwrap();
/// assert_eq!(hit.id, "1");
/// assert!(find_conflict(&candidate, &existing, Some("1")).is_none());
/// ```
pub fn find_conflict<'a>(
    candidate: &VacationRecord,
    existing: &'a [VacationRecord],
    exclude_id: Option<&str>,
) -> Option<&'a VacationRecord> {
    let period = Period::of_record(candidate)?;
    let key = candidate.employee_key();

    let hit = existing
        .iter()
        .filter(|other| exclude_id != Some(other.id.as_str()))
        .filter(|other| other.belongs_to(&key))
        .find(|other| Period::of_record(other).is_some_and(|p| p.overlaps(&period)));

    if let Some(other) = hit {
        debug!(
            employee = %key,
            conflicting_id = %other.id,
            period_start = %other.period_start,
            period_end = %other.period_end,
            "Vacation conflict detected"
        );
    }

    hit
}

/// Returns true if `candidate` conflicts with any record in `existing`.
pub fn has_conflict(
    candidate: &VacationRecord,
    existing: &[VacationRecord],
    exclude_id: Option<&str>,
) -> bool {
    find_conflict(candidate, existing, exclude_id).is_some()
}

/// Checks every pair within a batch of records.
///
/// Bulk extraction does not cross-check its own rows; callers that want to
/// reject duplicates inside one import run this explicitly. Each
/// overlapping pair is reported once, in input order.
pub fn find_conflicts_within(batch: &[VacationRecord]) -> Vec<ConflictPair> {
    let mut pairs = Vec::new();

    for (i, record) in batch.iter().enumerate() {
        let Some(period) = Period::of_record(record) else {
            continue;
        };
        let key = record.employee_key();

        for other in &batch[i + 1..] {
            let overlapping = other.belongs_to(&key)
                && Period::of_record(other).is_some_and(|p| p.overlaps(&period));
            if overlapping {
                pairs.push(ConflictPair {
                    record_id: record.id.clone(),
                    conflicting_id: other.id.clone(),
                    employee: key.clone(),
                });
            }
        }
    }

    pairs
}
