//! Liquid glass configuration validation.
//!
//! Disabled configs pass untouched. Enabled configs are checked field by
//! field and the first failure is returned; `refraction_index` is clamped
//! rather than rejected.

mod helpers;


use crate::schema::{LiquidGlassConfig, SurfaceType};
use glassfx_common::ConfigError;
use tracing::debug;

use helpers::{
    clamp_or_min, is_non_negative, is_within, MAX_REFRACTION_INDEX, MIN_REFRACTION_INDEX,
};

/// A liquid glass config that has passed [`validate`].
///
/// Only `validate` can build one, so holders can rely on the field
/// constraints whenever [`is_enabled`](Self::is_enabled) is true.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedConfig {
    enabled: bool,
    surface_type: SurfaceType,
    bezel_width: f32,
    thickness: f32,
    refraction_index: f32,
    specular_opacity: f32,
}

impl ValidatedConfig {
    /// A disabled config, valid by definition.
    pub fn disabled() -> Self {
        Self::from_raw(&LiquidGlassConfig::default())
    }

    fn from_raw(config: &LiquidGlassConfig) -> Self {
        Self {
            enabled: config.enabled,
            surface_type: config.surface_type,
            bezel_width: config.bezel_width,
            thickness: config.thickness,
            refraction_index: config.refraction_index,
            specular_opacity: config.specular_opacity,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn surface_type(&self) -> SurfaceType {
        self.surface_type
    }

    pub fn bezel_width(&self) -> f32 {
        self.bezel_width
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn refraction_index(&self) -> f32 {
        self.refraction_index
    }

    pub fn specular_opacity(&self) -> f32 {
        self.specular_opacity
    }

    /// Back to a plain, editable config record.
    pub fn to_config(&self) -> LiquidGlassConfig {
        LiquidGlassConfig {
            enabled: self.enabled,
            surface_type: self.surface_type,
            bezel_width: self.bezel_width,
            thickness: self.thickness,
            refraction_index: self.refraction_index,
            specular_opacity: self.specular_opacity,
        }
    }
}

impl Default for ValidatedConfig {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Validate a liquid glass config.
///
/// Checks run in order: `bezel_width`, `thickness`, `specular_opacity`.
/// NaN fails every check it reaches.
pub fn validate(config: &LiquidGlassConfig) -> Result<ValidatedConfig, ConfigError> {
    if !config.enabled {
        return Ok(ValidatedConfig::from_raw(config));
    }

    if !is_non_negative(config.bezel_width) {
        return Err(ConfigError::NegativeBezelWidth(config.bezel_width));
    }
    if !is_non_negative(config.thickness) {
        return Err(ConfigError::NegativeThickness(config.thickness));
    }
    if !is_within(config.specular_opacity, 0.0, 1.0) {
        return Err(ConfigError::SpecularOpacityOutOfRange(
            config.specular_opacity,
        ));
    }

    let mut validated = ValidatedConfig::from_raw(config);
    let clamped = clamp_or_min(
        config.refraction_index,
        MIN_REFRACTION_INDEX,
        MAX_REFRACTION_INDEX,
    );
    if clamped != config.refraction_index {
        debug!(
            "liquid_glass.refraction_index = {} clamped to {clamped}",
            config.refraction_index
        );
    }
    validated.refraction_index = clamped;

    Ok(validated)
}
