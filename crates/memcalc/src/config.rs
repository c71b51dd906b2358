//! Calculator configuration
//!
//! Loaded from YAML or JSON; every field has a default so an empty file is
//! a valid configuration.

use crate::core::history::History;
use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Maximum number of computations kept on the tape
    pub history_capacity: usize,
    /// Record successful computations on the tape
    pub record_history: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            history_capacity: History::DEFAULT_MAX_ENTRIES,
            record_history: true,
        }
    }
}

impl CalculatorConfig {
    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set tape capacity
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Enable or disable the tape
    #[must_use]
    pub const fn with_record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    /// Parses a YAML document
    pub fn from_yaml_str(source: &str) -> CalcResult<Self> {
        let config: Self =
            serde_yaml_ng::from_str(source).map_err(|e| CalcError::Config(e.to_string()))?;
        config.validate()
    }

    /// Parses a JSON document
    pub fn from_json_str(source: &str) -> CalcResult<Self> {
        let config: Self =
            serde_json::from_str(source).map_err(|e| CalcError::Config(e.to_string()))?;
        config.validate()
    }

    /// Loads a configuration file, choosing the format by extension
    /// (`.json` is JSON, anything else is YAML)
    pub fn from_path(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| CalcError::Config(format!("{}: {e}", path.display())))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_yaml_str(&source)
        }
    }

    fn validate(self) -> CalcResult<Self> {
        if self.record_history && self.history_capacity == 0 {
            return Err(CalcError::Config(
                "history_capacity must be at least 1 when record_history is enabled".into(),
            ));
        }
        Ok(self)
    }
}
