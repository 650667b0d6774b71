//! TOML configuration loader with validation.
//!
//! Loads a [`PtzfConfig`] from a TOML file, applies serde defaults for
//! missing sections, and runs the bounds checks before handing the
//! config to the runtime.

use std::path::Path;

use ptzf_common::config::PtzfConfig;

// ─── Error Type ─────────────────────────────────────────────────────

/// Configuration loading/validation error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("config I/O error: {0}")]
    Io(String),
    /// TOML parse error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Parameter validation error.
    #[error("config validation: {0}")]
    Validation(String),
}

// ─── Loading Functions ──────────────────────────────────────────────

/// Load and validate the PTZF configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<PtzfConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("failed to read {}: {e}", path.display())))?;
    load_config_from_str(&raw)
}

/// Load config from a TOML string (also used by tests).
pub fn load_config_from_str(raw: &str) -> Result<PtzfConfig, ConfigError> {
    let config: PtzfConfig =
        toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate().map_err(ConfigError::Validation)?;
    Ok(config)
}
