//! Script binding and dispatch configuration
//!
//! Collects the knobs that affect how bindings are read and how dispatch
//! failures are reported. None of them change which script runs or what a
//! run returns.

use crate::core::error::{Result, ScriptError};
use crate::core::types::RESREF_MAX_LEN;
use serde::Deserialize;
use std::path::Path;

/// Configuration for script binding and dispatch
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    // === BINDINGS ===
    /// Longest script name the resource system can resolve
    ///
    /// Aurora resource references are limited to 16 characters. Longer names
    /// are still stored so that nothing read from game data is silently lost,
    /// but they will never resolve to a compiled script.
    pub max_resref_len: usize,

    /// Log a warning when a binding longer than `max_resref_len` is read
    pub warn_long_resref: bool,

    // === DISPATCH ===
    /// Log a warning naming the script when a run fails
    ///
    /// Turning this off only silences the log line. The dispatcher still
    /// reports the failure to its caller.
    pub log_failures: bool,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            max_resref_len: RESREF_MAX_LEN,
            warn_long_resref: true,
            log_failures: true,
        }
    }
}

impl ScriptConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML, filling unspecified keys with defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ScriptConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_resref_len == 0 {
            return Err(ScriptError::Config(
                "max_resref_len must be greater than zero".into(),
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<ScriptConfig> = OnceLock::new();

/// Get the global script config (initializes with defaults if not set)
pub fn config() -> &'static ScriptConfig {
    CONFIG.get_or_init(ScriptConfig::default)
}

/// Set the global script config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: ScriptConfig) -> std::result::Result<(), ScriptConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ScriptConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_resref_len, 16);
        assert!(config.log_failures);
    }

    #[test]
    fn test_zero_resref_len_rejected() {
        let config = ScriptConfig {
            max_resref_len: 0,
            ..ScriptConfig::default()
        };
        assert!(matches!(config.validate(), Err(ScriptError::Config(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ScriptConfig::from_toml_str("log_failures = false\n").unwrap();
        assert!(!config.log_failures);
        assert!(config.warn_long_resref);
        assert_eq!(config.max_resref_len, 16);
    }

    #[test]
    fn test_invalid_toml_reports_error() {
        let result = ScriptConfig::from_toml_str("max_resref_len = \"long\"");
        assert!(matches!(result, Err(ScriptError::TomlError(_))));
    }

    #[test]
    fn test_toml_validation_applied() {
        let result = ScriptConfig::from_toml_str("max_resref_len = 0");
        assert!(matches!(result, Err(ScriptError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = ScriptConfig::load(Path::new("/nonexistent/scripts.toml"));
        assert!(matches!(result, Err(ScriptError::IoError(_))));
    }
}
