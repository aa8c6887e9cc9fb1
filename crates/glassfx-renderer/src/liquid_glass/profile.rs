//! Per-surface-type normal and inset math.
//!
//! Every profile reduces a sample point to a `SurfaceSample`: how far the
//! point sits inside the silhouette, and the lateral surface normal there.
//! Displacement and highlight are both built from that one sample.

use glassfx_common::Vec2;
use glassfx_config::{SurfaceType, ValidatedConfig};
use tracing::trace;

use super::types::{RenderParams, SurfaceGeometry};

/// Superellipse exponent for the squircle profile.
const SQUIRCLE_EXPONENT: i32 = 4;

/// Everything needed to evaluate both fields of an enabled effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GlassProfile {
    pub(crate) surface_type: SurfaceType,
    pub(crate) geometry: SurfaceGeometry,
    pub(crate) bezel_width: f32,
    /// `thickness * (1 - 1 / refraction_index)`.
    pub(crate) displacement_scale: f32,
    pub(crate) specular_opacity: f32,
}

/// Local surface shape at one point inside the silhouette.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SurfaceSample {
    /// Distance from the point inward to the silhouette (>= 0).
    inset: f32,
    /// Lateral normal. Unit length at full slope, zero where flat.
    normal: Vec2,
}

/// Derive the render parameters for a validated config on a surface.
///
/// Disabled configs and degenerate geometry give [`RenderParams::identity`].
pub fn derive_params(config: &ValidatedConfig, geometry: &SurfaceGeometry) -> RenderParams {
    if !config.is_enabled() {
        return RenderParams::identity();
    }
    if !geometry.bounds.is_renderable() {
        trace!(bounds = ?geometry.bounds, "liquid glass skipped: empty or non-finite bounds");
        return RenderParams::identity();
    }

    let displacement_scale = refraction_scale(config.thickness(), config.refraction_index());
    if !displacement_scale.is_finite() || !config.bezel_width().is_finite() {
        trace!(
            displacement_scale,
            bezel_width = config.bezel_width(),
            "liquid glass skipped: non-finite parameters"
        );
        return RenderParams::identity();
    }

    RenderParams::from_profile(GlassProfile {
        surface_type: config.surface_type(),
        geometry: *geometry,
        bezel_width: config.bezel_width(),
        displacement_scale,
        specular_opacity: config.specular_opacity(),
    })
}

/// Thin-slab refraction approximation: `thickness * (1 - 1/n)`.
pub(crate) fn refraction_scale(thickness: f32, refraction_index: f32) -> f32 {
    thickness * (1.0 - 1.0 / refraction_index)
}

/// Falloff across an edge band of width `width`: 1 on the silhouette,
/// 0 at and beyond `width` inside it.
fn edge_band(inset: f32, width: f32) -> f32 {
    if width <= 0.0 {
        return if inset <= 0.0 { 1.0 } else { 0.0 };
    }
    if inset >= width {
        0.0
    } else {
        1.0 - inset / width
    }
}

fn sign_or_zero(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl GlassProfile {
    pub(crate) fn displacement(&self, point: Vec2) -> Vec2 {
        match self.sample(point) {
            Some(sample) => sample.normal * self.displacement_scale,
            None => Vec2::ZERO,
        }
    }

    pub(crate) fn highlight_weight(&self, point: Vec2) -> f32 {
        match self.sample(point) {
            Some(sample) => self.specular_opacity * edge_band(sample.inset, self.bezel_width),
            None => 0.0,
        }
    }

    /// `None` for points outside the silhouette.
    fn sample(&self, point: Vec2) -> Option<SurfaceSample> {
        if !point.is_finite() {
            return None;
        }
        let q = point - self.geometry.bounds.center();
        match self.surface_type {
            SurfaceType::ConvexCircle => self.convex_circle(q),
            SurfaceType::ConvexSquircle => self.convex_squircle(q),
            SurfaceType::Concave => self.concave(q),
            SurfaceType::Lip => self.lip(q),
        }
    }

    fn convex_circle(&self, q: Vec2) -> Option<SurfaceSample> {
        let half = self.geometry.bounds.half_extents();
        let radius = half.x.min(half.y);
        let dist = q.length();
        if dist > radius {
            return None;
        }
        Some(SurfaceSample {
            inset: radius - dist,
            normal: Vec2::new(q.x / radius, q.y / radius),
        })
    }

    fn convex_squircle(&self, q: Vec2) -> Option<SurfaceSample> {
        let half = self.geometry.bounds.half_extents();
        let u = q.x / half.x;
        let v = q.y / half.y;
        let level = u.powi(SQUIRCLE_EXPONENT) + v.powi(SQUIRCLE_EXPONENT);
        if level > 1.0 {
            return None;
        }
        // Normalized superellipse radius: 0 at the center, 1 on the edge.
        let rho = level.powf(1.0 / SQUIRCLE_EXPONENT as f32);
        let gradient = Vec2::new(
            u.powi(SQUIRCLE_EXPONENT - 1) / half.x,
            v.powi(SQUIRCLE_EXPONENT - 1) / half.y,
        );
        Some(SurfaceSample {
            inset: (1.0 - rho) * half.x.min(half.y),
            normal: gradient.normalize_or_zero() * rho,
        })
    }

    fn concave(&self, q: Vec2) -> Option<SurfaceSample> {
        let (inset, outward) = self.rounded_rect(q)?;
        let half = self.geometry.bounds.half_extents();
        let depth = half.x.min(half.y);
        let slope = (1.0 - inset / depth).clamp(0.0, 1.0);
        Some(SurfaceSample {
            inset,
            normal: -outward * slope,
        })
    }

    fn lip(&self, q: Vec2) -> Option<SurfaceSample> {
        let (inset, outward) = self.rounded_rect(q)?;
        let slope = edge_band(inset, self.bezel_width);
        let normal = if slope > 0.0 {
            outward * slope
        } else {
            Vec2::ZERO
        };
        Some(SurfaceSample { inset, normal })
    }

    /// Inset distance and outward unit direction for the rounded surface
    /// rectangle, or `None` outside it.
    fn rounded_rect(&self, q: Vec2) -> Option<(f32, Vec2)> {
        let half = self.geometry.bounds.half_extents();
        let radius = self.geometry.effective_corner_radius();
        let k = Vec2::new(
            q.x.abs() - half.x + radius,
            q.y.abs() - half.y + radius,
        );

        let outside = Vec2::new(k.x.max(0.0), k.y.max(0.0)).length();
        let inside = k.x.max(k.y).min(0.0);
        let inset = radius - outside - inside;
        if inset < 0.0 {
            return None;
        }

        let outward = if k.x > 0.0 && k.y > 0.0 {
            let corner = k.normalize_or_zero();
            Vec2::new(corner.x * sign_or_zero(q.x), corner.y * sign_or_zero(q.y))
        } else if k.x > k.y {
            Vec2::new(sign_or_zero(q.x), 0.0)
        } else {
            Vec2::new(0.0, sign_or_zero(q.y))
        };
        Some((inset, outward))
    }
}
