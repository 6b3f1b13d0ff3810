//! Shared numeric conventions for the calculator core.
//!
//! Every model in this workspace uses the same float type and the same two
//! post-processing rules: reported tonnage/currency figures are rounded to
//! two decimal places, and spectral indices are clamped to the closed
//! interval [-1, 1] with NaN mapped to 0.

/// Float type used throughout the calculators.
pub type FloatValue = f64;

/// Round a value to two decimal places.
///
/// Applied to every mass/currency figure before it leaves a model, matching
/// the precision shown on the platform dashboard.
pub fn round2(value: FloatValue) -> FloatValue {
    (value * 100.0).round() / 100.0
}

/// Clamp a spectral index to [-1, 1].
///
/// NaN (e.g. from a zero denominator) maps to 0 rather than propagating.
pub fn clamp_index(value: FloatValue) -> FloatValue {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(-1.0, 1.0)
}
