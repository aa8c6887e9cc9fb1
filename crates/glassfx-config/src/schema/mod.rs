//! Configuration schema types for glassfx.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod liquid_glass;

pub use liquid_glass::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root of a glassfx config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlassFxConfig {
    pub liquid_glass: LiquidGlassConfig,
}
