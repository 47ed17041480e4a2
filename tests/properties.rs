//! Property tests for the date codec, period derivation, conflict detection
//! and line matching.

use chrono::NaiveDate;
use proptest::prelude::*;

use vacation_engine::config::PeriodPolicy;
use vacation_engine::engine::{
    Period, add_days, derive_period, find_conflict, find_localized_dates, from_picker,
    has_conflict, parse_line, parse_localized, to_localized, to_picker,
};
use vacation_engine::models::VacationRecord;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1i32..=9999, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn record(id: &str, name: &str, start: NaiveDate, end: NaiveDate) -> VacationRecord {
    VacationRecord {
        id: id.to_string(),
        employee_name: name.to_string(),
        admission_date: "01/01/2020".to_string(),
        period_start: to_localized(start),
        period_end: to_localized(end),
        return_date: String::new(),
    }
}

proptest! {
    #[test]
    fn localized_round_trip(date in any_date()) {
        prop_assert_eq!(parse_localized(&to_localized(date)), Some(date));
    }

    #[test]
    fn picker_round_trip(date in any_date()) {
        prop_assert_eq!(from_picker(&to_picker(date)), Some(date));
    }

    #[test]
    fn derived_return_follows_end(date in (2000i32..=2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()))
    {
        let period = derive_period(date);
        prop_assert_eq!((period.end - date).num_days(), 29);
        prop_assert_eq!((period.return_date - period.end).num_days(), 1);
        prop_assert_eq!(add_days(&to_localized(date), 29), period.end_localized());
    }

    #[test]
    fn add_days_inverse(date in (2000i32..=2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
        days in -1000i64..=1000)
    {
        let forward = add_days(&to_localized(date), days);
        prop_assert_eq!(add_days(&forward, -days), to_localized(date));
    }

    #[test]
    fn overlap_is_symmetric(
        a in any_date(), a_len in 0i64..60,
        b in any_date(), b_len in 0i64..60,
    ) {
        let a_end = a.checked_add_signed(chrono::Duration::days(a_len)).unwrap_or(a);
        let b_end = b.checked_add_signed(chrono::Duration::days(b_len)).unwrap_or(b);
        let first = record("a", "ANA", a, a_end);
        let second = record("b", "ana", b, b_end);

        prop_assert_eq!(
            has_conflict(&first, std::slice::from_ref(&second), None),
            has_conflict(&second, std::slice::from_ref(&first), None)
        );
        prop_assert_eq!(
            Period::of_record(&first).unwrap().overlaps(&Period::of_record(&second).unwrap()),
            has_conflict(&first, std::slice::from_ref(&second), None)
        );
    }

    #[test]
    fn other_employees_never_conflict(start in any_date(), len in 0i64..60) {
        let end = start.checked_add_signed(chrono::Duration::days(len)).unwrap_or(start);
        let existing = vec![record("1", "RONAN", start, end)];
        let candidate = record("c", "IGOR", start, end);
        prop_assert!(find_conflict(&candidate, &existing, None).is_none());
    }

    #[test]
    fn record_never_conflicts_with_itself_when_excluded(start in any_date(), len in 0i64..60) {
        let end = start.checked_add_signed(chrono::Duration::days(len)).unwrap_or(start);
        let stored = record("1", "RONAN", start, end);
        prop_assert!(!has_conflict(&stored, std::slice::from_ref(&stored), Some("1")));
        prop_assert!(has_conflict(&stored, std::slice::from_ref(&stored), None));
    }

    #[test]
    fn date_matches_are_ordered_and_in_bounds(line in "[A-Z /0-9]{0,60}") {
        let matches = find_localized_dates(&line);
        let mut last_end = 0;
        for m in matches {
            prop_assert!(m.offset >= last_end);
            prop_assert_eq!(&line[m.offset..m.offset + m.text.len()], m.text);
            last_end = m.offset + m.text.len();
        }
    }

    #[test]
    fn parsed_line_preserves_leading_dates(
        name in "[A-Z]{1,10}( [A-Z]{1,10})?",
        admission in any_date(),
        start in any_date(),
    ) {
        let text = format!("{} {} {}", name, to_localized(admission), to_localized(start));
        let line = parse_line(&text, &PeriodPolicy::default()).unwrap();

        prop_assert_eq!(line.employee_name, name);
        prop_assert_eq!(line.admission_date, to_localized(admission));
        prop_assert_eq!(line.period_start, to_localized(start));
    }
}
