//! Vacation record model.
//!
//! This module defines the [`VacationRecord`] entity and the employee key
//! used to scope conflict checks.

use serde::{Deserialize, Serialize};

/// Canonicalizes an employee name into its employee key.
///
/// The key is the trimmed name folded to upper case. Two records belong to
/// the same employee iff their keys are equal.
///
/// # Example
///
/// ```
/// use vacation_engine::models::employee_key;
///
/// assert_eq!(employee_key("  João Silva "), "JOÃO SILVA");
/// ```
pub fn employee_key(name: &str) -> String {
    name.trim().to_uppercase()
}

/// A single vacation period of one employee.
///
/// All dates are stored in the localized `DD/MM/YYYY` encoding. Records
/// read from legacy or imported data may hold unparseable dates or overlap
/// each other; they stay representable and the engine treats such values
/// as invalid rather than failing.
///
/// # Example
///
/// ```
/// use vacation_engine::models::VacationRecord;
///
/// let record = VacationRecord {
///     id: "1".to_string(),
///     employee_name: "RONAN".to_string(),
///     admission_date: "01/06/2022".to_string(),
///     period_start: "05/01/2026".to_string(),
///     period_end: "03/02/2026".to_string(),
///     return_date: "04/02/2026".to_string(),
/// };
/// assert_eq!(record.employee_key(), "RONAN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationRecord {
    /// Opaque unique identifier, never reused.
    pub id: String,
    /// Display name of the employee (stored upper-cased).
    pub employee_name: String,
    /// The date the employee was admitted.
    pub admission_date: String,
    /// First day of the vacation (inclusive).
    pub period_start: String,
    /// Last day of the vacation (inclusive).
    pub period_end: String,
    /// The day the employee returns to work.
    pub return_date: String,
}

impl VacationRecord {
    /// Returns the canonical employee key of this record.
    pub fn employee_key(&self) -> String {
        employee_key(&self.employee_name)
    }

    /// Returns true if this record belongs to the employee with the given key.
    pub fn belongs_to(&self, key: &str) -> bool {
        self.employee_key() == key
    }
}
