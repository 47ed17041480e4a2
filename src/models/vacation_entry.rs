//! Single-entry input model.
//!
//! This module defines [`VacationEntry`], the raw form submitted for manual
//! registration or editing. Dates arrive in picker format (`YYYY-MM-DD`).

use serde::{Deserialize, Serialize};

use crate::engine::localized_to_picker;

use super::VacationRecord;

/// A manually entered vacation, as submitted by a date-picker form.
///
/// `period_end` and `return_date` are optional: when omitted they are
/// derived from `period_start` under the configured period policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationEntry {
    /// The employee's name as typed.
    pub employee_name: String,
    /// Admission date in picker format.
    pub admission_date: String,
    /// First vacation day in picker format.
    pub period_start: String,
    /// Last vacation day in picker format, if set explicitly.
    #[serde(default)]
    pub period_end: Option<String>,
    /// Return date in picker format, if set explicitly.
    #[serde(default)]
    pub return_date: Option<String>,
}

impl VacationEntry {
    /// Builds an entry pre-filled from a stored record, for editing.
    ///
    /// Localized dates are converted to picker format. A stored date that
    /// cannot be decoded becomes an empty string, leaving the field blank.
    ///
    /// # Example
    ///
    /// ```
    /// use vacation_engine::models::{VacationEntry, VacationRecord};
    ///
    /// let record = VacationRecord {
    ///     id: "7".to_string(),
    ///     employee_name: "FABIO CESAR".to_string(),
    ///     admission_date: "03/01/2022".to_string(),
    ///     period_start: "02/03/2026".to_string(),
    ///     period_end: "31/03/2026".to_string(),
    ///     return_date: "01/04/2026".to_string(),
    /// };
    ///
    /// let entry = VacationEntry::from_record(&record);
    /// assert_eq!(entry.period_start, "2026-03-02");
    /// assert_eq!(entry.period_end.as_deref(), Some("2026-03-31"));
    /// ```
    pub fn from_record(record: &VacationRecord) -> Self {
        let picker = |value: &str| localized_to_picker(value).unwrap_or_default();

        Self {
            employee_name: record.employee_name.clone(),
            admission_date: picker(&record.admission_date),
            period_start: picker(&record.period_start),
            period_end: Some(picker(&record.period_end)),
            return_date: Some(picker(&record.return_date)),
        }
    }
}
