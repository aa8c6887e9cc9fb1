//! GPU uniform block for the liquid glass pass.

use super::types::RenderParams;

/// GPU-side uniforms matching the glass shader's `GlassUniforms` struct.
///
/// Layout: 12 × 4 bytes = 48 bytes, 16-byte aligned.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlassUniforms {
    /// Surface bounds as x, y, width, height.
    pub bounds: [f32; 4],
    pub corner_radius: f32,
    /// `thickness * (1 - 1/refraction_index)`.
    pub displacement_scale: f32,
    pub bezel_width: f32,
    pub specular_opacity: f32,
    /// `SurfaceType::code()`.
    pub surface_type: u32,
    /// 1 when the pass should run, 0 for pass-through.
    pub enabled: u32,
    pub _padding: [u32; 2],
}

impl GlassUniforms {
    /// Pack render params for upload. Identity params pack as all zeros.
    pub fn from_params(params: &RenderParams) -> Self {
        let Some(profile) = params.displacement_field.profile else {
            return bytemuck::Zeroable::zeroed();
        };
        let bounds = profile.geometry.bounds;
        let specular_opacity = params
            .highlight_weight_field
            .profile
            .map_or(0.0, |p| p.specular_opacity);

        Self {
            bounds: [bounds.x, bounds.y, bounds.width, bounds.height],
            corner_radius: profile.geometry.effective_corner_radius(),
            displacement_scale: profile.displacement_scale,
            bezel_width: profile.bezel_width,
            specular_opacity,
            surface_type: profile.surface_type.code(),
            enabled: 1,
            _padding: [0; 2],
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::liquid_glass::{derive_params, SurfaceGeometry};
    use glassfx_common::Rect;
    use glassfx_config::{validate, LiquidGlassConfig, SurfaceType};

    #[test]
    fn glass_uniforms_size_is_48_bytes() {
        assert_eq!(std::mem::size_of::<GlassUniforms>(), 48);
        assert_eq!(std::mem::size_of::<GlassUniforms>() % 16, 0);
    }

    #[test]
    fn identity_params_pack_as_zeroes() {
        let u = GlassUniforms::from_params(&RenderParams::identity());
        assert_eq!(u.enabled, 0);
        assert_eq!(u.displacement_scale, 0.0);
        assert_eq!(u.specular_opacity, 0.0);
        assert!(u.as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn enabled_params_pack_all_fields() {
        let config = validate(&LiquidGlassConfig {
            enabled: true,
            surface_type: SurfaceType::Lip,
            bezel_width: 4.0,
            thickness: 2.0,
            refraction_index: 2.0,
            specular_opacity: 1.0,
        })
        .unwrap();
        let geometry = SurfaceGeometry::rounded(Rect::new(10.0, 20.0, 100.0, 60.0), 45.0);
        let u = GlassUniforms::from_params(&derive_params(&config, &geometry));

        assert_eq!(u.bounds, [10.0, 20.0, 100.0, 60.0]);
        // Clamped to half the shorter side.
        assert_eq!(u.corner_radius, 30.0);
        assert!((u.displacement_scale - 1.0).abs() < 1e-6);
        assert_eq!(u.bezel_width, 4.0);
        assert_eq!(u.specular_opacity, 1.0);
        assert_eq!(u.surface_type, 3);
        assert_eq!(u.enabled, 1);
        assert_eq!(u.as_bytes().len(), 48);
    }
}
