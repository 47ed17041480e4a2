//! Core data models for the Vacation Engine.
//!
//! This module contains the stored record and the raw single-entry form.

mod vacation_entry;
mod vacation_record;

pub use vacation_entry::VacationEntry;
pub use vacation_record::{VacationRecord, employee_key};
