//! Vacation Period & Conflict Engine
//!
//! This crate derives vacation periods from a start date under a fixed-length
//! policy, detects overlapping periods of the same employee, extracts records
//! from loosely formatted pasted text and classifies periods relative to a
//! caller-supplied "today".
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use vacation_engine::engine::{BulkRecordExtractor, classify_record, has_conflict};
//!
//! let extractor = BulkRecordExtractor::default();
//! let records = extractor
//!     .extract("MARIA COSTA 10/02/2020 02/03/2026\nJOÃO SILVA 01/01/2022 01/05/2026")
//!     .unwrap();
//!
//! assert!(!has_conflict(&records[0], &records[1..], None));
//!
//! let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
//! assert_eq!(classify_record(&records[0], today).to_string(), "On vacation");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
