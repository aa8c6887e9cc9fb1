pub mod liquid_glass;

pub use liquid_glass::{
    derive_params, DisplacementField, GlassUniforms, HighlightWeightField, LiquidGlassEffect,
    RenderParams, SampleField, SurfaceGeometry,
};
