//! Dashboard-style aggregates over a set of records.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::VacationRecord;

use super::conflict::Period;
use super::date_codec::parse_localized;

/// Number of vacation periods starting in each calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MonthlyDistribution {
    /// Counts indexed by month, January at index 0.
    pub counts: [usize; 12],
}

impl MonthlyDistribution {
    /// Counts periods by start month across all years.
    ///
    /// Records with an undecodable start are not counted.
    pub fn from_records(records: &[VacationRecord]) -> Self {
        let mut counts = [0usize; 12];
        for start in records.iter().filter_map(|r| parse_localized(&r.period_start)) {
            counts[start.month0() as usize] += 1;
        }
        Self { counts }
    }

    /// Returns the count for a month numbered 1 to 12.
    pub fn count_for(&self, month: u32) -> usize {
        match month {
            1..=12 => self.counts[(month - 1) as usize],
            _ => 0,
        }
    }

    /// Returns `(month, count)` for every month with at least one period.
    pub fn non_empty_months(&self) -> Vec<(u32, usize)> {
        (1..=12u32)
            .zip(self.counts)
            .filter(|&(_, count)| count > 0)
            .collect()
    }

    /// Total number of counted periods.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Returns the records whose period starts in `year`.
pub fn periods_starting_in(records: &[VacationRecord], year: i32) -> Vec<&VacationRecord> {
    records
        .iter()
        .filter(|r| parse_localized(&r.period_start).is_some_and(|d| d.year() == year))
        .collect()
}

/// Returns the records whose period includes `date`, bounds included.
pub fn on_vacation(records: &[VacationRecord], date: NaiveDate) -> Vec<&VacationRecord> {
    records
        .iter()
        .filter(|r| Period::of_record(r).is_some_and(|p| p.contains(date)))
        .collect()
}

/// Returns true if any record's period includes `date`.
pub fn is_anyone_on_vacation(records: &[VacationRecord], date: NaiveDate) -> bool {
    records
        .iter()
        .any(|r| Period::of_record(r).is_some_and(|p| p.contains(date)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_record(name: &str, start: &str, end: &str) -> VacationRecord {
        VacationRecord {
            id: name.to_string(),
            employee_name: name.to_string(),
            admission_date: "01/01/2020".to_string(),
            period_start: start.to_string(),
            period_end: end.to_string(),
            return_date: String::new(),
        }
    }

    fn sample() -> Vec<VacationRecord> {
        vec![
            make_record("A", "05/01/2026", "03/02/2026"),
            make_record("B", "12/01/2026", "10/02/2026"),
            make_record("C", "02/03/2026", "31/03/2026"),
            make_record("D", "07/12/2026", "05/01/2027"),
            make_record("E", "", "05/01/2027"),
        ]
    }

    #[test]
    fn test_monthly_distribution_counts() {
        let distribution = MonthlyDistribution::from_records(&sample());
        assert_eq!(distribution.count_for(1), 2);
        assert_eq!(distribution.count_for(3), 1);
        assert_eq!(distribution.count_for(12), 1);
        assert_eq!(distribution.count_for(2), 0);
        assert_eq!(distribution.total(), 4);
    }

    #[test]
    fn test_count_for_out_of_range_month() {
        let distribution = MonthlyDistribution::from_records(&sample());
        assert_eq!(distribution.count_for(0), 0);
        assert_eq!(distribution.count_for(13), 0);
    }

    #[test]
    fn test_non_empty_months() {
        let distribution = MonthlyDistribution::from_records(&sample());
        assert_eq!(distribution.non_empty_months(), vec![(1, 2), (3, 1), (12, 1)]);
    }

    #[test]
    fn test_periods_starting_in_year() {
        let records = sample();
        assert_eq!(periods_starting_in(&records, 2026).len(), 4);
        assert!(periods_starting_in(&records, 2027).is_empty());
    }

    #[test]
    fn test_on_vacation_inclusive_bounds() {
        let records = sample();

        let ids: Vec<&str> = on_vacation(&records, make_date(2026, 2, 3))
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["A", "B"]);

        assert!(on_vacation(&records, make_date(2026, 2, 11)).is_empty());
    }

    #[test]
    fn test_is_anyone_on_vacation_across_year_boundary() {
        let records = sample();
        assert!(is_anyone_on_vacation(&records, make_date(2027, 1, 5)));
        assert!(!is_anyone_on_vacation(&records, make_date(2027, 1, 6)));
    }
}
