//! Single-entry registration and editing.
//!
//! Validates a [`VacationEntry`], fills in the derived dates and checks the
//! result against the existing records before producing the record to
//! store. Storage itself is left to the caller.

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::PeriodPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{VacationEntry, VacationRecord, employee_key};

use super::conflict::find_conflict;
use super::date_codec::{from_picker, to_localized};
use super::period::derive_period_with;

/// Validates `entry` and builds the record to store.
///
/// When `editing_id` is set the result keeps that id and replaces the
/// stored record; the stored copy is excluded from the conflict check.
/// Otherwise a fresh UUID v4 is assigned.
///
/// # Errors
///
/// - [`EngineError::InvalidEntry`] if the employee name is blank.
/// - [`EngineError::MalformedDate`] if a date is not a real `YYYY-MM-DD` day.
/// - [`EngineError::InvalidPeriod`] if the period ends before it starts.
/// - [`EngineError::ConflictDetected`] if the employee already has an
///   overlapping period.
///
/// # Example
///
/// ```
/// use vacation_engine::config::PeriodPolicy;
/// use vacation_engine::engine::register_vacation;
/// use vacation_engine::models::VacationEntry;
///
/// let entry = VacationEntry {
///     employee_name: " maria costa".to_string(),
///     admission_date: "2020-02-10".to_string(),
///     period_start: "2026-03-02".to_string(),
///     period_end: None,
///     return_date: None,
/// };
///
/// let record = register_vacation(&entry, &[], None, &PeriodPolicy::default()).unwrap();
/// assert_eq!(record.employee_name, "MARIA COSTA");
/// assert_eq!(record.period_end, "31/03/2026");
/// assert_eq!(record.return_date, "01/04/2026");
/// ```
pub fn register_vacation(
    entry: &VacationEntry,
    existing: &[VacationRecord],
    editing_id: Option<&str>,
    policy: &PeriodPolicy,
) -> EngineResult<VacationRecord> {
    let employee_name = employee_key(&entry.employee_name);
    if employee_name.is_empty() {
        return Err(EngineError::InvalidEntry {
            field: "employee_name".to_string(),
            message: "employee name is required".to_string(),
        });
    }

    let admission = parse_field("admission_date", &entry.admission_date)?;
    let start = parse_field("period_start", &entry.period_start)?;
    let explicit_end = parse_optional_field("period_end", entry.period_end.as_deref())?;
    let explicit_return = parse_optional_field("return_date", entry.return_date.as_deref())?;

    let derived = derive_period_with(start, policy);
    let end = explicit_end.unwrap_or(derived.end);
    let return_date = explicit_return.unwrap_or(derived.return_date);

    if end < start {
        return Err(EngineError::InvalidPeriod {
            start: to_localized(start),
            end: to_localized(end),
        });
    }

    let mut record = VacationRecord {
        id: editing_id
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        employee_name,
        admission_date: to_localized(admission),
        period_start: to_localized(start),
        period_end: to_localized(end),
        return_date: to_localized(return_date),
    };

    if let Some(other) = find_conflict(&record, existing, editing_id) {
        warn!(
            employee = %record.employee_name,
            conflicting_id = %other.id,
            "Registration rejected due to overlapping period"
        );
        return Err(EngineError::ConflictDetected {
            employee: std::mem::take(&mut record.employee_name),
            conflicting_id: other.id.clone(),
            period_start: other.period_start.clone(),
            period_end: other.period_end.clone(),
        });
    }

    info!(
        id = %record.id,
        employee = %record.employee_name,
        period_start = %record.period_start,
        period_end = %record.period_end,
        edited = editing_id.is_some(),
        "Vacation registered"
    );

    Ok(record)
}

fn parse_field(field: &str, value: &str) -> EngineResult<NaiveDate> {
    from_picker(value).ok_or_else(|| EngineError::MalformedDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// A blank optional field counts as absent.
fn parse_optional_field(field: &str, value: Option<&str>) -> EngineResult<Option<NaiveDate>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => parse_field(field, v).map(Some),
        None => Ok(None),
    }
}
