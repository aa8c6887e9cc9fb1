use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("liquid_glass.bezel_width = {0} must not be negative")]
    NegativeBezelWidth(f32),

    #[error("liquid_glass.thickness = {0} must not be negative")]
    NegativeThickness(f32),

    #[error("liquid_glass.specular_opacity = {0} is out of range [0, 1]")]
    SpecularOpacityOutOfRange(f32),
}

impl ConfigError {
    /// Dotted config path of the field that failed validation, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NegativeBezelWidth(_) => Some("liquid_glass.bezel_width"),
            Self::NegativeThickness(_) => Some("liquid_glass.thickness"),
            Self::SpecularOpacityOutOfRange(_) => Some("liquid_glass.specular_opacity"),
            Self::FileNotFound(_) | Self::ParseError(_) => None,
        }
    }
}
