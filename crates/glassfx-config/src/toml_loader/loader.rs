//! Core TOML config loading: read from a path or an in-memory string.

use crate::schema::GlassFxConfig;
use crate::validation;
use glassfx_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

/// Parse a config from TOML text.
///
/// Missing fields take their serde defaults. If the parsed config fails
/// validation a warning is logged and the config is returned as-is.
pub fn load_from_str(content: &str) -> Result<GlassFxConfig, ConfigError> {
    let config: GlassFxConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config.liquid_glass) {
        warn!("config validation warning: {e}; returning parsed config unvalidated");
    }

    Ok(config)
}

/// Load config from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<GlassFxConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config = load_from_str(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}
