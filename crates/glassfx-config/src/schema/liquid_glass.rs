//! Liquid glass effect configuration types.
//!
//! One record per glass surface. When `enabled = false` every other
//! field is ignored, so a disabled config never fails validation.

use serde::{Deserialize, Serialize};

/// Geometric profile used to derive refraction normals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceType {
    /// Dome over the inscribed circle of the surface.
    #[default]
    ConvexCircle,
    /// Dome over a superellipse filling the surface bounds.
    ConvexSquircle,
    /// Inward dish over the rounded surface rectangle.
    Concave,
    /// Raised rim confined to the bezel band.
    Lip,
}

impl SurfaceType {
    pub const ALL: [SurfaceType; 4] = [
        SurfaceType::ConvexCircle,
        SurfaceType::ConvexSquircle,
        SurfaceType::Concave,
        SurfaceType::Lip,
    ];

    /// Stable numeric code, in declaration order, for shader consumption.
    pub fn code(self) -> u32 {
        match self {
            SurfaceType::ConvexCircle => 0,
            SurfaceType::ConvexSquircle => 1,
            SurfaceType::Concave => 2,
            SurfaceType::Lip => 3,
        }
    }
}

/// Liquid glass distortion settings for a single surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiquidGlassConfig {
    pub enabled: bool,
    pub surface_type: SurfaceType,
    /// Width of the beveled edge band in surface units (must be >= 0).
    pub bezel_width: f32,
    /// Simulated glass thickness, scales displacement (must be >= 0).
    pub thickness: f32,
    /// Index of refraction, clamped into 1.0-3.0 on validation.
    pub refraction_index: f32,
    /// Specular highlight blend weight (valid range: 0.0-1.0).
    pub specular_opacity: f32,
}

impl Default for LiquidGlassConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            surface_type: SurfaceType::default(),
            bezel_width: 16.0,
            thickness: 12.0,
            refraction_index: 1.5,
            specular_opacity: 0.4,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
