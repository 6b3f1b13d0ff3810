//! NDVI Interpretation
//!
//! Maps an NDVI value onto the qualitative health classes shown on the
//! farmer dashboard, and onto the 0-100 % gauge scaling.

use palmcarbon_core::values::{clamp_index, FloatValue};
use serde::{Deserialize, Serialize};

/// Qualitative NDVI health class.
///
/// Classes are evaluated top-down with strict `<` thresholds; the first
/// matching band wins:
///
/// | Class | Threshold |
/// |-------|-----------|
/// | Water | < -0.1 |
/// | Bare Soil | < 0.1 |
/// | Sparse | < 0.3 |
/// | Moderate | < 0.5 |
/// | Good | < 0.7 |
/// | Excellent | >= 0.7 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VegetationHealth {
    Water,
    BareSoil,
    Sparse,
    Moderate,
    Good,
    Excellent,
}

impl VegetationHealth {
    /// Classify an NDVI value.
    pub fn classify(ndvi: FloatValue) -> Self {
        if ndvi < -0.1 {
            VegetationHealth::Water
        } else if ndvi < 0.1 {
            VegetationHealth::BareSoil
        } else if ndvi < 0.3 {
            VegetationHealth::Sparse
        } else if ndvi < 0.5 {
            VegetationHealth::Moderate
        } else if ndvi < 0.7 {
            VegetationHealth::Good
        } else {
            VegetationHealth::Excellent
        }
    }

    /// Status label shown on the dashboard.
    pub fn status(&self) -> &'static str {
        match self {
            VegetationHealth::Water => "Water",
            VegetationHealth::BareSoil => "Bare Soil",
            VegetationHealth::Sparse => "Sparse Vegetation",
            VegetationHealth::Moderate => "Moderate Vegetation",
            VegetationHealth::Good => "Good Vegetation",
            VegetationHealth::Excellent => "Excellent",
        }
    }

    /// Display color (hex) for the dashboard gauge.
    pub fn color(&self) -> &'static str {
        match self {
            VegetationHealth::Water => "#2563eb",
            VegetationHealth::BareSoil => "#b45309",
            VegetationHealth::Sparse => "#ca8a04",
            VegetationHealth::Moderate => "#84cc16",
            VegetationHealth::Good => "#22c55e",
            VegetationHealth::Excellent => "#15803d",
        }
    }

    /// One-line description for the dashboard tooltip.
    pub fn description(&self) -> &'static str {
        match self {
            VegetationHealth::Water => "Open water or deep shadow",
            VegetationHealth::BareSoil => "Bare soil or very sparse cover",
            VegetationHealth::Sparse => "Sparse or stressed vegetation",
            VegetationHealth::Moderate => "Moderately healthy vegetation",
            VegetationHealth::Good => "Healthy, productive vegetation",
            VegetationHealth::Excellent => "Dense, vigorous canopy",
        }
    }
}

/// Classify an NDVI value into its health class.
pub fn interpret_ndvi(ndvi: FloatValue) -> VegetationHealth {
    VegetationHealth::classify(ndvi)
}

/// Linear remap of NDVI from [-1, 1] onto a 0-100 gauge percentage.
///
/// Out-of-range and NaN inputs are clamped/neutralised first, so the result
/// is always a valid percentage.
pub fn ndvi_to_percentage(ndvi: FloatValue) -> u8 {
    let clamped = clamp_index(ndvi);
    (((clamped + 1.0) / 2.0) * 100.0).round() as u8
}
