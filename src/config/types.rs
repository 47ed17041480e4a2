//! Configuration types for the vacation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every type has a
//! `Default` equal to the engine's built-in policy.

use serde::Deserialize;

use crate::models::VacationRecord;

/// The default vacation length, in calendar days, counting the first day.
pub const DEFAULT_PERIOD_LENGTH_DAYS: u32 = 30;

/// The fixed-duration vacation policy.
///
/// A period of `length_days` days starting on `start` ends on
/// `start + length_days - 1` and the employee returns on
/// `start + length_days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PeriodPolicy {
    /// Inclusive length of a vacation period in calendar days.
    pub length_days: u32,
}

impl PeriodPolicy {
    /// Offset from the period start to the last vacation day.
    pub fn end_offset_days(&self) -> i64 {
        i64::from(self.length_days) - 1
    }

    /// Offset from the period start to the return date.
    pub fn return_offset_days(&self) -> i64 {
        i64::from(self.length_days)
    }
}

impl Default for PeriodPolicy {
    fn default() -> Self {
        Self {
            length_days: DEFAULT_PERIOD_LENGTH_DAYS,
        }
    }
}

/// Keywords used to recognise the header row of pasted tables.
///
/// A line is a header when it contains at least one name marker and at
/// least one date marker, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeaderMarkers {
    /// Tokens identifying the employee-name column (e.g. "NOME").
    pub name_markers: Vec<String>,
    /// Tokens identifying a date column (e.g. "DATA").
    pub date_markers: Vec<String>,
}

impl Default for HeaderMarkers {
    fn default() -> Self {
        Self {
            name_markers: vec!["NOME".to_string(), "NAME".to_string()],
            date_markers: vec!["DATA".to_string(), "DATE".to_string()],
        }
    }
}

/// Policy configuration file structure (`policy.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// The vacation period policy.
    pub period: PeriodPolicy,
}

/// Extraction configuration file structure (`extraction.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    /// Header recognition keywords.
    pub header: HeaderMarkers,
}

/// Roster configuration file structure (`roster.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Records used to seed an empty store.
    #[serde(default)]
    pub records: Vec<VacationRecord>,
}

/// The complete engine configuration.
///
/// This struct aggregates all configuration loaded from the YAML files in
/// a configuration directory.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// The vacation period policy.
    policy: PeriodPolicy,
    /// Header recognition keywords for bulk extraction.
    header_markers: HeaderMarkers,
    /// Seed roster.
    roster: Vec<VacationRecord>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        policy: PeriodPolicy,
        header_markers: HeaderMarkers,
        roster: Vec<VacationRecord>,
    ) -> Self {
        Self {
            policy,
            header_markers,
            roster,
        }
    }

    /// Returns the vacation period policy.
    pub fn policy(&self) -> &PeriodPolicy {
        &self.policy
    }

    /// Returns the header recognition keywords.
    pub fn header_markers(&self) -> &HeaderMarkers {
        &self.header_markers
    }

    /// Returns the seed roster.
    pub fn roster(&self) -> &[VacationRecord] {
        &self.roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_thirty_days() {
        let policy = PeriodPolicy::default();
        assert_eq!(policy.length_days, 30);
        assert_eq!(policy.end_offset_days(), 29);
        assert_eq!(policy.return_offset_days(), 30);
    }

    #[test]
    fn test_default_markers() {
        let markers = HeaderMarkers::default();
        assert!(markers.name_markers.contains(&"NOME".to_string()));
        assert!(markers.date_markers.contains(&"DATA".to_string()));
    }

    #[test]
    fn test_deserialize_policy_config() {
        let yaml = "period:\n  length_days: 15\n";
        let config: PolicyConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.period.length_days, 15);
    }

    #[test]
    fn test_deserialize_roster_without_records() {
        let config: RosterConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.records.is_empty());
    }

    #[test]
    fn test_default_engine_config_has_empty_roster() {
        let config = EngineConfig::default();
        assert_eq!(config.policy(), &PeriodPolicy::default());
        assert!(config.roster().is_empty());
    }
}
