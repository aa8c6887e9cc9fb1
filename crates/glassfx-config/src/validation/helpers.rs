//! Range checks shared by the liquid glass validator.

/// Lowest accepted index of refraction; 1.0 means no bending.
pub(crate) const MIN_REFRACTION_INDEX: f32 = 1.0;
/// Highest accepted index of refraction.
pub(crate) const MAX_REFRACTION_INDEX: f32 = 3.0;

/// `value >= 0`, with NaN rejected.
pub(crate) fn is_non_negative(value: f32) -> bool {
    value >= 0.0
}

/// `min <= value <= max`, with NaN rejected.
pub(crate) fn is_within(value: f32, min: f32, max: f32) -> bool {
    value >= min && value <= max
}

/// Clamp into `[min, max]`, mapping NaN to `min`.
pub(crate) fn clamp_or_min(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}
