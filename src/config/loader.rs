//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, ExtractionConfig, PolicyConfig, RosterConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── policy.yaml       # Vacation period length
/// ├── extraction.yaml   # Header keywords for bulk import
/// └── roster.yaml       # Optional seed roster
/// ```
///
/// # Example
///
/// ```no_run
/// use vacation_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Period length: {} days", loader.config().policy().length_days);
/// # Ok::<(), vacation_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `policy.yaml` or `extraction.yaml` is missing
    /// - Any file contains invalid YAML
    /// - The period length is zero
    /// - A header marker list is empty
    ///
    /// A missing `roster.yaml` yields an empty roster.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<PolicyConfig>(&policy_path)?.period;
        if policy.length_days == 0 {
            return Err(EngineError::ConfigParseError {
                path: policy_path.display().to_string(),
                message: "period.length_days must be at least 1".to_string(),
            });
        }

        let extraction_path = path.join("extraction.yaml");
        let markers = Self::load_yaml::<ExtractionConfig>(&extraction_path)?.header;
        if markers.name_markers.is_empty() || markers.date_markers.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: extraction_path.display().to_string(),
                message: "header name_markers and date_markers must not be empty".to_string(),
            });
        }

        let roster_path = path.join("roster.yaml");
        let roster = if roster_path.exists() {
            Self::load_yaml::<RosterConfig>(&roster_path)?.records
        } else {
            Vec::new()
        };

        info!(
            path = %path.display(),
            period_length_days = policy.length_days,
            roster_size = roster.len(),
            "Loaded engine configuration"
        );

        Ok(Self {
            config: EngineConfig::new(policy, markers, roster),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
