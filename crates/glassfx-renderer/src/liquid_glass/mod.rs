//! Liquid glass refraction effect.
//!
//! Turns a validated [`LiquidGlassConfig`](glassfx_config::LiquidGlassConfig)
//! and a surface shape into two lazily sampled fields: a backdrop
//! displacement for refraction and a specular highlight weight. The GPU
//! backend samples them per fragment (or uploads [`GlassUniforms`] and
//! evaluates the same math in a shader).
//!
//! Displacement is `thickness * (1 - 1/refraction_index) * normal`, where
//! `normal` comes from the surface profile:
//!
//! - convex circle / squircle: outward slope growing from the center to
//!   the silhouette
//! - concave: the same slope pointing inward
//! - lip: outward slope confined to the bezel band, flat inside it

mod effect;
mod profile;
mod types;
mod uniforms;


pub use effect::LiquidGlassEffect;
pub use profile::derive_params;
pub use types::{
    DisplacementField, HighlightWeightField, RenderParams, SampleField, SurfaceGeometry,
};
pub use uniforms::GlassUniforms;
