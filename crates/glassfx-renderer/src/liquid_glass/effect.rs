use glassfx_common::ConfigError;
use glassfx_config::{validate, LiquidGlassConfig, ValidatedConfig};
use tracing::warn;

use super::profile::derive_params;
use super::types::{RenderParams, SurfaceGeometry};
use super::uniforms::GlassUniforms;

/// Liquid glass state owned by a render loop.
///
/// Holds the config snapshot used for the next pass. Updates between
/// passes go through [`update`](Self::update), so a render thread never
/// observes an unvalidated config.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LiquidGlassEffect {
    config: ValidatedConfig,
}

impl LiquidGlassEffect {
    pub fn new(config: &LiquidGlassConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            config: validate(config)?,
        })
    }

    pub fn disabled() -> Self {
        Self {
            config: ValidatedConfig::disabled(),
        }
    }

    /// Create the effect tuned for the given performance preset.
    ///
    /// - `"low"` forces the effect off, keeping the other settings.
    /// - Any other preset uses `config` as given, or falls back to a
    ///   disabled effect if `config` is invalid.
    pub fn from_performance_preset(config: &LiquidGlassConfig, preset: &str) -> Self {
        match preset {
            "low" => {
                let off = LiquidGlassConfig {
                    enabled: false,
                    ..*config
                };
                Self {
                    config: validate(&off).unwrap_or_default(),
                }
            }
            _ => Self::new(config).unwrap_or_else(|e| {
                warn!("liquid glass disabled for preset '{preset}': {e}");
                Self::disabled()
            }),
        }
    }

    /// Replace the config for subsequent passes.
    ///
    /// On error the previous config stays in force.
    pub fn update(&mut self, config: &LiquidGlassConfig) -> Result<(), ConfigError> {
        match validate(config) {
            Ok(validated) => {
                self.config = validated;
                Ok(())
            }
            Err(e) => {
                warn!("keeping previous liquid glass config: {e}");
                Err(e)
            }
        }
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    pub fn params(&self, geometry: &SurfaceGeometry) -> RenderParams {
        derive_params(&self.config, geometry)
    }

    pub fn uniforms(&self, geometry: &SurfaceGeometry) -> GlassUniforms {
        GlassUniforms::from_params(&self.params(geometry))
    }
}
