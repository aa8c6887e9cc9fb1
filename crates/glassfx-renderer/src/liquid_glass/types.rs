use glassfx_common::{Rect, Vec2};
use serde::{Deserialize, Serialize};

use super::profile::GlassProfile;

/// Shape of the surface the glass is laid over, in surface-local units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceGeometry {
    pub bounds: Rect,
    /// Corner radius of the surface rectangle. Used by concave and lip
    /// profiles; clamped to half the shorter side when sampled.
    pub corner_radius: f32,
}

impl SurfaceGeometry {
    /// A sharp-cornered rectangle.
    pub fn rect(bounds: Rect) -> Self {
        Self {
            bounds,
            corner_radius: 0.0,
        }
    }

    pub fn rounded(bounds: Rect, corner_radius: f32) -> Self {
        Self {
            bounds,
            corner_radius,
        }
    }

    /// A circle given by center and radius.
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self {
            bounds: Rect::new(
                center.x - radius,
                center.y - radius,
                radius * 2.0,
                radius * 2.0,
            ),
            corner_radius: radius,
        }
    }

    /// Corner radius limited to `[0, min(half_width, half_height)]`.
    pub fn effective_corner_radius(&self) -> f32 {
        let half = self.bounds.half_extents();
        let max = half.x.min(half.y).max(0.0);
        if self.corner_radius.is_nan() {
            0.0
        } else {
            self.corner_radius.clamp(0.0, max)
        }
    }
}

/// A per-point function over surface-local coordinates.
///
/// Fields are evaluated on demand; the caller picks the sampling grid.
pub trait SampleField {
    type Output;

    fn sample(&self, point: Vec2) -> Self::Output;
}

/// Refraction offset to apply when sampling the backdrop at a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplacementField {
    pub(crate) profile: Option<GlassProfile>,
}

impl SampleField for DisplacementField {
    type Output = Vec2;

    fn sample(&self, point: Vec2) -> Vec2 {
        match &self.profile {
            Some(profile) => profile.displacement(point),
            None => Vec2::ZERO,
        }
    }
}

/// Blend weight (0.0-1.0) of the specular highlight layer at a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightWeightField {
    pub(crate) profile: Option<GlassProfile>,
}

impl SampleField for HighlightWeightField {
    type Output = f32;

    fn sample(&self, point: Vec2) -> f32 {
        match &self.profile {
            Some(profile) => profile.highlight_weight(point),
            None => 0.0,
        }
    }
}

/// Sampling and shading parameters for one glass surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    pub displacement_field: DisplacementField,
    pub highlight_weight_field: HighlightWeightField,
}

impl RenderParams {
    /// Zero displacement and zero highlight everywhere.
    pub fn identity() -> Self {
        Self {
            displacement_field: DisplacementField { profile: None },
            highlight_weight_field: HighlightWeightField { profile: None },
        }
    }

    pub(crate) fn from_profile(profile: GlassProfile) -> Self {
        Self {
            displacement_field: DisplacementField {
                profile: Some(profile),
            },
            highlight_weight_field: HighlightWeightField {
                profile: Some(profile),
            },
        }
    }

    pub fn is_identity(&self) -> bool {
        self.displacement_field.profile.is_none() && self.highlight_weight_field.profile.is_none()
    }

    pub fn displacement_at(&self, point: Vec2) -> Vec2 {
        self.displacement_field.sample(point)
    }

    pub fn highlight_at(&self, point: Vec2) -> f32 {
        self.highlight_weight_field.sample(point)
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self::identity()
    }
}
