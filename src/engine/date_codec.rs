//! Date encoding and decoding.
//!
//! Two textual encodings are in use: the *localized* form `DD/MM/YYYY`, used
//! for storage, display and every business comparison, and the *picker* form
//! `YYYY-MM-DD`, used only at date-input boundaries. Every conversion builds
//! the date from explicit year/month/day components with
//! [`NaiveDate::from_ymd_opt`]; nothing here goes through a generic date
//! parser or a timezone, so a date can never shift by a day.

use chrono::{Datelike, NaiveDate};

/// Separator of the localized `DD/MM/YYYY` encoding.
pub const LOCALIZED_SEPARATOR: char = '/';

/// Separator of the picker `YYYY-MM-DD` encoding.
pub const PICKER_SEPARATOR: char = '-';

/// Decodes a localized `DD/MM/YYYY` string.
///
/// Returns `None` when the string is empty, does not split into exactly
/// three tokens, has a non-numeric token, or names a day that does not
/// exist in the calendar (e.g. `31/02/2026`).
///
/// # Example
///
/// ```
/// use vacation_engine::engine::parse_localized;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     parse_localized("05/01/2026"),
///     NaiveDate::from_ymd_opt(2026, 1, 5)
/// );
/// assert_eq!(parse_localized("5/1/2026"), NaiveDate::from_ymd_opt(2026, 1, 5));
/// assert_eq!(parse_localized("05/01"), None);
/// assert_eq!(parse_localized(""), None);
/// ```
pub fn parse_localized(value: &str) -> Option<NaiveDate> {
    let [day, month, year] = split_three(value, LOCALIZED_SEPARATOR)?;
    date_from_parts(year, month, day)
}

/// Decodes a localized string into a day ordinal for ordering and overlap
/// arithmetic.
///
/// The ordinal is the number of days since the common era, so the
/// difference between two ordinals is a whole number of calendar days.
pub fn parse_comparable(value: &str) -> Option<i64> {
    parse_localized(value).map(day_ordinal)
}

/// Returns the day ordinal of a calendar date.
pub fn day_ordinal(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

/// Encodes a date in the localized `DD/MM/YYYY` form.
///
/// # Example
///
/// ```
/// use vacation_engine::engine::to_localized;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2027, 1, 5).unwrap();
/// assert_eq!(to_localized(date), "05/01/2027");
/// ```
pub fn to_localized(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

/// Encodes a date in the picker `YYYY-MM-DD` form.
pub fn to_picker(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Decodes a picker `YYYY-MM-DD` string.
///
/// Returns `None` under the same conditions as [`parse_localized`].
pub fn from_picker(value: &str) -> Option<NaiveDate> {
    let [year, month, day] = split_three(value, PICKER_SEPARATOR)?;
    date_from_parts(year, month, day)
}

/// Converts a picker string to its localized form.
pub fn picker_to_localized(value: &str) -> Option<String> {
    from_picker(value).map(to_localized)
}

/// Converts a localized string to its picker form.
pub fn localized_to_picker(value: &str) -> Option<String> {
    parse_localized(value).map(to_picker)
}

fn split_three(value: &str, separator: char) -> Option<[&str; 3]> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let mut parts = value.split(separator);
    let first = parts.next()?;
    let second = parts.next()?;
    let third = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some([first, second, third])
}

fn date_from_parts(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.trim().parse().ok()?;
    let month: u32 = month.trim().parse().ok()?;
    let day: u32 = day.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
