//! Configuration loading and management for the Vacation Engine.
//!
//! This module provides functionality to load the vacation period policy,
//! the bulk-import header keywords and an optional seed roster from YAML
//! files. [`EngineConfig::default`] reproduces the built-in policy without
//! touching the filesystem.
//!
//! # Example
//!
//! ```no_run
//! use vacation_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Seed roster: {} records", loader.config().roster().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_PERIOD_LENGTH_DAYS, EngineConfig, ExtractionConfig, HeaderMarkers, PeriodPolicy,
    PolicyConfig, RosterConfig,
};
