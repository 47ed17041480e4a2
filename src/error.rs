//! Error types for the Vacation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine reports. All of them describe ordinary
//! user-input or configuration conditions and are returned as values.

use thiserror::Error;

/// The main error type for the Vacation Engine.
///
/// # Example
///
/// ```
/// use vacation_engine::error::EngineError;
///
/// let error = EngineError::MalformedDate {
///     field: "period_start".to_string(),
///     value: "2026-13-45".to_string(),
/// };
/// assert_eq!(error.to_string(), "Malformed date in 'period_start': 2026-13-45");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date value could not be decoded.
    #[error("Malformed date in '{field}': {value}")]
    MalformedDate {
        /// The entry field holding the date.
        field: String,
        /// The raw value as received.
        value: String,
    },

    /// A single-entry field was missing or unusable.
    #[error("Invalid entry field '{field}': {message}")]
    InvalidEntry {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The period ends before it starts.
    #[error("Invalid period: end {end} is before start {start}")]
    InvalidPeriod {
        /// The localized period start.
        start: String,
        /// The localized period end.
        end: String,
    },

    /// The candidate period overlaps another period of the same employee.
    #[error(
        "Conflict detected: {employee} already has vacation scheduled from {period_start} to {period_end} (record '{conflicting_id}')"
    )]
    ConflictDetected {
        /// The employee key of the candidate.
        employee: String,
        /// The id of the existing record that collides.
        conflicting_id: String,
        /// Start of the existing, colliding period.
        period_start: String,
        /// End of the existing, colliding period.
        period_end: String,
    },

    /// The bulk import text was empty or whitespace-only.
    #[error("Bulk input is empty")]
    EmptyBulkInput,

    /// The bulk import text had no line with a name and at least two dates.
    #[error("No records extracted: no line contains a name followed by at least two DD/MM/YYYY dates")]
    NoRecordsExtracted,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/policy.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/policy.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_entry_displays_field_and_message() {
        let error = EngineError::InvalidEntry {
            field: "employee_name".to_string(),
            message: "must not be empty".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid entry field 'employee_name': must not be empty"
        );
    }

    #[test]
    fn test_invalid_period_displays_bounds() {
        let error = EngineError::InvalidPeriod {
            start: "10/03/2026".to_string(),
            end: "01/03/2026".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid period: end 01/03/2026 is before start 10/03/2026"
        );
    }

    #[test]
    fn test_conflict_detected_names_employee_and_record() {
        let error = EngineError::ConflictDetected {
            employee: "RONAN".to_string(),
            conflicting_id: "rec-1".to_string(),
            period_start: "05/01/2026".to_string(),
            period_end: "03/02/2026".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("RONAN"));
        assert!(message.contains("rec-1"));
        assert!(message.contains("05/01/2026 to 03/02/2026"));
    }

    #[test]
    fn test_bulk_failures_are_distinct() {
        assert_ne!(EngineError::EmptyBulkInput, EngineError::NoRecordsExtracted);
        assert_eq!(EngineError::EmptyBulkInput.to_string(), "Bulk input is empty");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_empty_input() -> EngineResult<()> {
            Err(EngineError::EmptyBulkInput)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_empty_input()?;
            Ok(())
        }

        assert_eq!(propagates_error(), Err(EngineError::EmptyBulkInput));
    }
}
