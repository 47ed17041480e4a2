//! Bulk extraction of vacation records from pasted text.
//!
//! Text copied out of spreadsheets or PDFs arrives with irregular spacing,
//! stray columns and header rows. Extraction is line-oriented and purely
//! heuristic:
//!
//! - blank lines and header lines (a name keyword plus a date keyword) are
//!   skipped,
//! - every `D/M/YYYY`-shaped substring is collected left to right,
//! - a line needs at least two dates; the text before the first date is
//!   the employee name,
//! - dates are assigned positionally: admission, start, end, return, with
//!   missing end/return derived from the period policy.
//!
//! Extracted records are not checked for conflicts, not even against each
//! other; see [`find_conflicts_within`](super::find_conflicts_within).

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{EngineConfig, HeaderMarkers, PeriodPolicy};
use crate::error::{EngineError, EngineResult};
use crate::models::{VacationRecord, employee_key};

use super::period::add_days;

/// Prefix of every bulk-extracted record id.
pub const BATCH_ID_PREFIX: &str = "batch";

/// The minimum number of dates a line must carry to produce a record.
pub const MIN_DATES_PER_LINE: usize = 2;

static LOCALIZED_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}").expect("valid localized date regex")
});

/// A date-shaped substring found in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateMatch<'a> {
    /// Byte offset of the match within the line.
    pub offset: usize,
    /// The matched text, verbatim.
    pub text: &'a str,
}

/// The fields recovered from one accepted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLine {
    /// Employee name, trimmed and upper-cased.
    pub employee_name: String,
    /// First date on the line.
    pub admission_date: String,
    /// Second date on the line.
    pub period_start: String,
    /// Third date on the line, or derived from the start.
    pub period_end: String,
    /// Fourth date on the line, or derived from the start.
    pub return_date: String,
    /// True when `period_end` was derived rather than read.
    pub end_derived: bool,
    /// True when `return_date` was derived rather than read.
    pub return_derived: bool,
}

impl ExtractedLine {
    /// Turns the line into a record carrying the given id.
    pub fn into_record(self, id: String) -> VacationRecord {
        VacationRecord {
            id,
            employee_name: self.employee_name,
            admission_date: self.admission_date,
            period_start: self.period_start,
            period_end: self.period_end,
            return_date: self.return_date,
        }
    }
}

/// Finds every non-overlapping localized-date-shaped substring in order.
///
/// Only the shape is checked (`1-2 digits / 1-2 digits / 4 digits`); a
/// match such as `31/02/2026` is still returned.
///
/// # Example
///
/// ```
/// use vacation_engine::engine::find_localized_dates;
///
/// let dates: Vec<&str> = find_localized_dates("ANA 1/2/2020 03/04/2026")
///     .into_iter()
///     .map(|m| m.text)
///     .collect();
/// assert_eq!(dates, vec!["1/2/2020", "03/04/2026"]);
/// ```
pub fn find_localized_dates(line: &str) -> Vec<DateMatch<'_>> {
    LOCALIZED_DATE_RE
        .find_iter(line)
        .map(|m| DateMatch {
            offset: m.start(),
            text: m.as_str(),
        })
        .collect()
}

/// Returns true if `line` looks like a table header.
///
/// A header contains, case-insensitively, at least one name marker and at
/// least one date marker anywhere in the line.
pub fn is_header_line(line: &str, markers: &HeaderMarkers) -> bool {
    let upper = line.to_uppercase();
    let contains_any =
        |list: &[String]| list.iter().any(|marker| upper.contains(&marker.to_uppercase()));
    contains_any(markers.name_markers.as_slice())
        && contains_any(markers.date_markers.as_slice())
}

/// Parses a single data line.
///
/// Returns `None` when the line has fewer than two dates or no text before
/// the first date. Header detection is not applied here.
///
/// # Example
///
/// ```
/// use vacation_engine::config::PeriodPolicy;
/// use vacation_engine::engine::parse_line;
///
/// let line = parse_line("Maria Costa 10/02/2020 02/03/2026", &PeriodPolicy::default()).unwrap();
/// assert_eq!(line.employee_name, "MARIA COSTA");
/// assert_eq!(line.period_end, "31/03/2026");
/// assert_eq!(line.return_date, "01/04/2026");
/// assert!(line.end_derived && line.return_derived);
/// ```
pub fn parse_line(line: &str, policy: &PeriodPolicy) -> Option<ExtractedLine> {
    let line = line.trim();
    let dates = find_localized_dates(line);
    if dates.len() < MIN_DATES_PER_LINE {
        return None;
    }

    let employee_name = employee_key(&line[..dates[0].offset]);
    if employee_name.is_empty() {
        return None;
    }

    let admission_date = dates[0].text.to_string();
    let period_start = dates[1].text.to_string();
    let explicit_end = dates.get(2).map(|m| m.text.to_string());
    let explicit_return = dates.get(3).map(|m| m.text.to_string());

    let end_derived = explicit_end.is_none();
    let return_derived = explicit_return.is_none();

    Some(ExtractedLine {
        period_end: explicit_end
            .unwrap_or_else(|| add_days(&period_start, policy.end_offset_days())),
        return_date: explicit_return
            .unwrap_or_else(|| add_days(&period_start, policy.return_offset_days())),
        employee_name,
        admission_date,
        period_start,
        end_derived,
        return_derived,
    })
}

/// Turns pasted multi-line text into candidate vacation records.
///
/// # Example
///
/// ```
/// use vacation_engine::engine::BulkRecordExtractor;
///
/// let text = "NOME ADMISSAO DATA INICIO\n\nJOÃO SILVA 01/01/2022 01/05/2026 30/05/2026 31/05/2026\n";
/// let records = BulkRecordExtractor::default().extract_batch(text, "demo").unwrap();
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].id, "batch-demo-2");
/// assert_eq!(records[0].employee_name, "JOÃO SILVA");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BulkRecordExtractor {
    policy: PeriodPolicy,
    markers: HeaderMarkers,
}

impl BulkRecordExtractor {
    /// Creates an extractor using the policy and header markers of `config`.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            policy: *config.policy(),
            markers: config.header_markers().clone(),
        }
    }

    /// Returns true if `line` is a header under this extractor's markers.
    pub fn is_header(&self, line: &str) -> bool {
        is_header_line(line, &self.markers)
    }

    /// Extracts records under a freshly generated batch token.
    pub fn extract(&self, text: &str) -> EngineResult<Vec<VacationRecord>> {
        let token = Uuid::new_v4().simple().to_string();
        self.extract_batch(text, &token)
    }

    /// Extracts records, naming them `batch-<token>-<line index>`.
    ///
    /// Line indices count every line of the input, skipped ones included,
    /// so ids are unique within the batch.
    ///
    /// # Errors
    ///
    /// - [`EngineError::EmptyBulkInput`] if `text` is empty or whitespace.
    /// - [`EngineError::NoRecordsExtracted`] if no line was accepted.
    pub fn extract_batch(&self, text: &str, token: &str) -> EngineResult<Vec<VacationRecord>> {
        if text.trim().is_empty() {
            warn!("Bulk extraction called with empty input");
            return Err(EngineError::EmptyBulkInput);
        }

        let mut records = Vec::new();
        let mut discarded = 0usize;

        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            if self.is_header(line) {
                debug!(line = index, "Skipping header line");
                continue;
            }

            match parse_line(line, &self.policy) {
                Some(parsed) => {
                    let id = format!("{}-{}-{}", BATCH_ID_PREFIX, token, index);
                    records.push(parsed.into_record(id));
                }
                None => discarded += 1,
            }
        }

        if records.is_empty() {
            warn!(
                batch = %token,
                discarded,
                "Bulk extraction found no usable lines"
            );
            return Err(EngineError::NoRecordsExtracted);
        }

        info!(
            batch = %token,
            extracted = records.len(),
            discarded,
            "Bulk extraction completed"
        );

        Ok(records)
    }
}
