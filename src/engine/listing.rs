//! Sorting and filtering of stored records for display.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::VacationRecord;

use super::date_codec::parse_comparable;

/// A record column that can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Employee name, compared as text.
    EmployeeName,
    /// Admission date.
    AdmissionDate,
    /// First vacation day.
    PeriodStart,
    /// Last vacation day.
    PeriodEnd,
    /// Return date.
    ReturnDate,
}

/// How the values of a [`SortField`] are compared.
#[derive(Debug, Clone, Copy)]
pub enum FieldComparator {
    /// Localized dates, compared chronologically.
    Date(fn(&VacationRecord) -> &str),
    /// Free text, compared case-insensitively.
    Text(fn(&VacationRecord) -> &str),
}

impl FieldComparator {
    /// Compares two records on the selected field, ascending.
    ///
    /// Undecodable dates sort before every valid date.
    pub fn compare(&self, a: &VacationRecord, b: &VacationRecord) -> Ordering {
        match self {
            FieldComparator::Date(get) => parse_comparable(get(a)).cmp(&parse_comparable(get(b))),
            FieldComparator::Text(get) => get(a).to_uppercase().cmp(&get(b).to_uppercase()),
        }
    }
}

impl SortField {
    /// Returns the comparator for this field.
    pub fn comparator(self) -> FieldComparator {
        match self {
            SortField::EmployeeName => FieldComparator::Text(|r| r.employee_name.as_str()),
            SortField::AdmissionDate => FieldComparator::Date(|r| r.admission_date.as_str()),
            SortField::PeriodStart => FieldComparator::Date(|r| r.period_start.as_str()),
            SortField::PeriodEnd => FieldComparator::Date(|r| r.period_end.as_str()),
            SortField::ReturnDate => FieldComparator::Date(|r| r.return_date.as_str()),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

/// A field and direction to sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortOrder {
    /// The column to sort on.
    pub field: SortField,
    /// The direction of the primary comparison.
    pub direction: SortDirection,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            field: SortField::PeriodStart,
            direction: SortDirection::Ascending,
        }
    }
}

/// Sorts records in place.
///
/// The sort is stable. Records equal on the selected field are ordered by
/// employee key ascending, whatever the direction.
///
/// # Example
///
/// ```
/// use vacation_engine::engine::{sort_records, SortOrder};
/// use vacation_engine::models::VacationRecord;
///
/// let record = |name: &str, start: &str| VacationRecord {
///     id: name.to_string(),
///     employee_name: name.to_string(),
///     admission_date: String::new(),
///     period_start: start.to_string(),
///     period_end: String::new(),
///     return_date: String::new(),
/// };
///
/// let mut records = vec![record("B", "02/03/2026"), record("A", "05/01/2026")];
/// sort_records(&mut records, SortOrder::default());
/// assert_eq!(records[0].employee_name, "A");
/// ```
pub fn sort_records(records: &mut [VacationRecord], order: SortOrder) {
    let comparator = order.field.comparator();

    records.sort_by(|a, b| {
        let primary = match order.direction {
            SortDirection::Ascending => comparator.compare(a, b),
            SortDirection::Descending => comparator.compare(b, a),
        };
        primary.then_with(|| a.employee_key().cmp(&b.employee_key()))
    });
}

/// Returns the records whose employee name contains `term`, ignoring case.
///
/// An empty or blank term keeps every record.
pub fn filter_by_name<'a>(records: &'a [VacationRecord], term: &str) -> Vec<&'a VacationRecord> {
    let needle = term.trim().to_uppercase();
    records
        .iter()
        .filter(|record| needle.is_empty() || record.employee_key().contains(&needle))
        .collect()
}
