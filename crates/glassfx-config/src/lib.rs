//! glassfx configuration.
//!
//! Provides the liquid glass config schema, its validation, and TOML
//! loading. Every section has defaults, so partial configs work out of
//! the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use glassfx_config::load_liquid_glass;
//! use std::path::Path;
//!
//! let glass = load_liquid_glass(Path::new("glassfx.toml")).expect("invalid config");
//! println!("glass enabled: {}", glass.is_enabled());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{GlassFxConfig, LiquidGlassConfig, SurfaceType, CONFIG_SCHEMA_VERSION};
pub use validation::{validate, ValidatedConfig};

use glassfx_common::ConfigError;
use std::path::Path;

/// Load a config file and validate its liquid glass section.
///
/// Unlike [`toml_loader::load_from_path`], a config that fails validation
/// is a hard error here.
pub fn load_liquid_glass(path: &Path) -> Result<ValidatedConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config.liquid_glass)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GlassFxConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_liquid_glass() {
        let config = GlassFxConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"liquid_glass\""));
        assert!(json.contains("\"surface_type\": \"convex_circle\""));
        assert!(json.contains("\"refraction_index\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = GlassFxConfig::default();
        let json = config_to_json(&config);
        let parsed: GlassFxConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn load_liquid_glass_rejects_invalid_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glassfx.toml");
        std::fs::write(
            &path,
            r#"
[liquid_glass]
enabled = true
specular_opacity = 1.5
"#,
        )
        .unwrap();

        let err = load_liquid_glass(&path).unwrap_err();
        assert!(matches!(err, ConfigError::SpecularOpacityOutOfRange(_)));
    }

    #[test]
    fn load_liquid_glass_clamps_refraction_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glassfx.toml");
        std::fs::write(
            &path,
            r#"
[liquid_glass]
enabled = true
refraction_index = 0.5
"#,
        )
        .unwrap();

        let glass = load_liquid_glass(&path).unwrap();
        assert!(glass.is_enabled());
        assert_eq!(glass.refraction_index(), 1.0);
    }
}
