pub mod errors;
pub mod types;

pub use errors::ConfigError;
pub use types::{Rect, Vec2};

pub type Result<T> = std::result::Result<T, ConfigError>;
