//! Vacation engine components.
//!
//! Each component is a set of pure functions over explicit inputs:
//!
//! - [`date_codec`]: localized (`DD/MM/YYYY`) and picker (`YYYY-MM-DD`)
//!   encodings,
//! - [`period`]: end and return dates under the period policy,
//! - [`conflict`]: employee-scoped overlap detection,
//! - [`bulk_extract`]: records from pasted free text,
//! - [`status`]: active / upcoming / completed classification,
//! - [`registration`]: validation of a single manual entry,
//! - [`listing`] and [`summary`]: ordering, filtering and aggregates.
//!
//! "Today" is always a parameter; nothing in this module reads the clock.

pub mod bulk_extract;
pub mod conflict;
pub mod date_codec;
pub mod listing;
pub mod period;
pub mod registration;
pub mod status;
pub mod summary;

pub use bulk_extract::{
    BATCH_ID_PREFIX, BulkRecordExtractor, DateMatch, ExtractedLine, MIN_DATES_PER_LINE,
    find_localized_dates, is_header_line, parse_line,
};
pub use conflict::{ConflictPair, Period, find_conflict, find_conflicts_within, has_conflict};
pub use date_codec::{
    day_ordinal, from_picker, localized_to_picker, parse_comparable, parse_localized,
    picker_to_localized, to_localized, to_picker,
};
pub use listing::{FieldComparator, SortDirection, SortField, SortOrder, filter_by_name, sort_records};
pub use period::{DerivedPeriod, add_days, derive_period, derive_period_with};
pub use registration::register_vacation;
pub use status::{VacationStatus, classify_record, classify_status};
pub use summary::{MonthlyDistribution, is_anyone_on_vacation, on_vacation, periods_starting_in};
