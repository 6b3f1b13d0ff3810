//! Spectral Vegetation Indices
//!
//! Computes normalized-difference style indices from a sparse
//! [`SentinelBands`] reading.
//!
//! # Contract
//!
//! Every index function follows the same degrade-to-neutral contract:
//!
//! 1. If a required band is absent, return exactly 0.
//! 2. If the denominator is 0 or the result is NaN, return 0.
//! 3. Clamp the result to the closed interval [-1, 1].
//!
//! The functions are pure and never error; a malformed reading yields a
//! neutral index, not a failure.
//!
//! # Formulas
//!
//! | Index | Formula | Bands |
//! |-------|---------|-------|
//! | NDVI  | (NIR - Red) / (NIR + Red) | B8, B4 |
//! | EVI   | 2.5 (NIR - Red) / (NIR + 6 Red - 7.5 Blue + 1) | B8, B4, B2 |
//! | NDBI  | (SWIR - NIR) / (SWIR + NIR) | B11, B8 |
//! | NDMI  | (NIR - SWIR) / (NIR + SWIR) | B8, B11 |
//! | NDII  | identical to NDMI | B8, B11 |
//! | NDSI  | (Green - SWIR) / (Green + SWIR) | B3, B11 |
//! | GNDVI | (NIR - Green) / (NIR + Green) | B8, B3 |
//! | OSAVI | (NIR - Red) / (NIR + Red + 0.16) | B8, B4 |

use palmcarbon_core::bands::SentinelBands;
use palmcarbon_core::values::{clamp_index, FloatValue};
use serde::{Deserialize, Serialize};

/// EVI gain factor (MODIS standard coefficients).
const EVI_GAIN: FloatValue = 2.5;
/// EVI red aerosol-resistance coefficient.
const EVI_C1: FloatValue = 6.0;
/// EVI blue aerosol-resistance coefficient.
const EVI_C2: FloatValue = 7.5;
/// EVI canopy background adjustment.
const EVI_L: FloatValue = 1.0;

/// OSAVI soil adjustment constant.
const OSAVI_L: FloatValue = 0.16;

/// All eight indices for a single band reading.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VegetationIndices {
    pub ndvi: FloatValue,
    pub evi: FloatValue,
    pub ndbi: FloatValue,
    pub ndmi: FloatValue,
    pub ndii: FloatValue,
    pub ndsi: FloatValue,
    pub gndvi: FloatValue,
    pub osavi: FloatValue,
}

/// Core normalized-difference formula with the shared fallback contract.
fn normalized_difference(a: FloatValue, b: FloatValue) -> FloatValue {
    let denominator = a + b;
    if denominator == 0.0 {
        return 0.0;
    }
    clamp_index((a - b) / denominator)
}

/// NDVI: (NIR - Red) / (NIR + Red). The primary vegetation health proxy.
pub fn calculate_ndvi(bands: &SentinelBands) -> FloatValue {
    match (bands.b08, bands.b04) {
        (Some(nir), Some(red)) => normalized_difference(nir, red),
        _ => 0.0,
    }
}

/// EVI: 2.5 (NIR - Red) / (NIR + 6 Red - 7.5 Blue + 1).
///
/// Less saturation over dense canopy than NDVI; needs the blue band for
/// aerosol resistance.
pub fn calculate_evi(bands: &SentinelBands) -> FloatValue {
    match (bands.b08, bands.b04, bands.b02) {
        (Some(nir), Some(red), Some(blue)) => {
            let denominator = nir + EVI_C1 * red - EVI_C2 * blue + EVI_L;
            if denominator == 0.0 {
                return 0.0;
            }
            clamp_index(EVI_GAIN * (nir - red) / denominator)
        }
        _ => 0.0,
    }
}

/// NDBI: (SWIR - NIR) / (SWIR + NIR). Built-up area proxy.
pub fn calculate_ndbi(bands: &SentinelBands) -> FloatValue {
    match (bands.b11, bands.b08) {
        (Some(swir), Some(nir)) => normalized_difference(swir, nir),
        _ => 0.0,
    }
}

/// NDMI: (NIR - SWIR) / (NIR + SWIR). Canopy moisture proxy.
pub fn calculate_ndmi(bands: &SentinelBands) -> FloatValue {
    match (bands.b08, bands.b11) {
        (Some(nir), Some(swir)) => normalized_difference(nir, swir),
        _ => 0.0,
    }
}

/// NDII: same formula as NDMI, reported separately for legacy dashboards.
pub fn calculate_ndii(bands: &SentinelBands) -> FloatValue {
    calculate_ndmi(bands)
}

/// NDSI: (Green - SWIR) / (Green + SWIR). Snow/ice proxy.
pub fn calculate_ndsi(bands: &SentinelBands) -> FloatValue {
    match (bands.b03, bands.b11) {
        (Some(green), Some(swir)) => normalized_difference(green, swir),
        _ => 0.0,
    }
}

/// GNDVI: (NIR - Green) / (NIR + Green). Chlorophyll-sensitive NDVI variant.
pub fn calculate_gndvi(bands: &SentinelBands) -> FloatValue {
    match (bands.b08, bands.b03) {
        (Some(nir), Some(green)) => normalized_difference(nir, green),
        _ => 0.0,
    }
}

/// OSAVI: (NIR - Red) / (NIR + Red + 0.16). Soil-adjusted NDVI variant
/// suited to the sparse canopy of young palm plantations.
pub fn calculate_osavi(bands: &SentinelBands) -> FloatValue {
    match (bands.b08, bands.b04) {
        (Some(nir), Some(red)) => {
            let denominator = nir + red + OSAVI_L;
            if denominator == 0.0 {
                return 0.0;
            }
            clamp_index((nir - red) / denominator)
        }
        _ => 0.0,
    }
}

/// Compute every index for one reading.
pub fn calculate_all_indices(bands: &SentinelBands) -> VegetationIndices {
    VegetationIndices {
        ndvi: calculate_ndvi(bands),
        evi: calculate_evi(bands),
        ndbi: calculate_ndbi(bands),
        ndmi: calculate_ndmi(bands),
        ndii: calculate_ndii(bands),
        ndsi: calculate_ndsi(bands),
        gndvi: calculate_gndvi(bands),
        osavi: calculate_osavi(bands),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    fn full_reading() -> SentinelBands {
        SentinelBands {
            b02: Some(0.12),
            b03: Some(0.15),
            b04: Some(0.22),
            b05: Some(0.25),
            b06: Some(0.30),
            b07: Some(0.35),
            b08: Some(0.42),
            b8a: Some(0.43),
            b11: Some(0.19),
            b12: Some(0.14),
        }
    }

    // ===== Reference Value Tests =====

    #[test]
    fn test_ndvi_reference_value() {
        let bands = SentinelBands::new().with_nir(0.4).with_red(0.2);
        let ndvi = calculate_ndvi(&bands);
        assert!(
            is_close!(ndvi, (0.4 - 0.2) / (0.4 + 0.2), abs_tol = 1e-3),
            "Expected ~0.333, got {}",
            ndvi
        );
    }

    #[test]
    fn test_evi_reference_value() {
        let bands = SentinelBands::new()
            .with_nir(0.42)
            .with_red(0.22)
            .with_blue(0.12);
        let evi = calculate_evi(&bands);
        // 2.5 * 0.20 / (0.42 + 1.32 - 0.9 + 1) = 0.5 / 1.84
        assert!(
            is_close!(evi, 0.2717, abs_tol = 1e-3),
            "Expected ~0.2717, got {}",
            evi
        );
    }

    #[test]
    fn test_osavi_reference_value() {
        let bands = SentinelBands::new().with_nir(0.4).with_red(0.2);
        let osavi = calculate_osavi(&bands);
        assert!(
            is_close!(osavi, 0.2 / 0.76, abs_tol = 1e-6),
            "Expected ~0.2632, got {}",
            osavi
        );
    }

    #[test]
    fn test_ndbi_is_negated_ndmi() {
        let bands = full_reading();
        assert!(
            is_close!(calculate_ndbi(&bands), -calculate_ndmi(&bands), abs_tol = 1e-12),
            "NDBI should mirror NDMI with opposite sign"
        );
    }

    #[test]
    fn test_ndii_matches_ndmi() {
        let bands = full_reading();
        assert_eq!(calculate_ndii(&bands), calculate_ndmi(&bands));
    }

    // ===== Missing Band Tests =====

    #[test]
    fn test_missing_band_returns_zero() {
        let nir_only = SentinelBands::new().with_nir(0.4);
        assert_eq!(calculate_ndvi(&nir_only), 0.0);
        assert_eq!(calculate_evi(&nir_only), 0.0);
        assert_eq!(calculate_ndbi(&nir_only), 0.0);
        assert_eq!(calculate_ndmi(&nir_only), 0.0);
        assert_eq!(calculate_ndsi(&nir_only), 0.0);
        assert_eq!(calculate_gndvi(&nir_only), 0.0);
        assert_eq!(calculate_osavi(&nir_only), 0.0);
    }

    #[test]
    fn test_empty_reading_yields_all_zero() {
        let indices = calculate_all_indices(&SentinelBands::new());
        assert_eq!(indices, VegetationIndices::default());
    }

    #[test]
    fn test_evi_missing_blue_returns_zero() {
        let bands = SentinelBands::new().with_nir(0.42).with_red(0.22);
        assert_eq!(calculate_evi(&bands), 0.0);
    }

    // ===== Degenerate Denominator Tests =====

    #[test]
    fn test_zero_denominator_returns_zero() {
        let bands = SentinelBands::new().with_nir(0.0).with_red(0.0);
        assert_eq!(calculate_ndvi(&bands), 0.0);
    }

    #[test]
    fn test_cancelling_bands_return_zero() {
        let bands = SentinelBands::new().with_nir(0.3).with_red(-0.3);
        assert_eq!(calculate_ndvi(&bands), 0.0);
    }

    #[test]
    fn test_evi_zero_denominator_returns_zero() {
        // nir + 6*red - 7.5*blue + 1 == 0
        let bands = SentinelBands::new()
            .with_nir(0.5)
            .with_red(0.0)
            .with_blue(0.2);
        assert_eq!(calculate_evi(&bands), 0.0);
    }

    // ===== Range Invariant Tests =====

    #[test]
    fn test_all_indices_within_unit_interval() {
        let readings = [
            full_reading(),
            SentinelBands::new().with_nir(0.9).with_red(0.01).with_blue(0.005),
            SentinelBands::new().with_nir(0.01).with_red(0.9).with_blue(0.8),
            SentinelBands::new()
                .with_nir(5.0)
                .with_red(0.001)
                .with_blue(0.6)
                .with_green(0.2)
                .with_swir1(0.1),
        ];
        for (i, bands) in readings.iter().enumerate() {
            let indices = calculate_all_indices(bands);
            for (name, value) in [
                ("ndvi", indices.ndvi),
                ("evi", indices.evi),
                ("ndbi", indices.ndbi),
                ("ndmi", indices.ndmi),
                ("ndii", indices.ndii),
                ("ndsi", indices.ndsi),
                ("gndvi", indices.gndvi),
                ("osavi", indices.osavi),
            ] {
                assert!(
                    (-1.0..=1.0).contains(&value),
                    "{} out of [-1, 1] for reading {}: {}",
                    name,
                    i,
                    value
                );
            }
        }
    }

    // ===== Purity Tests =====

    #[test]
    fn test_idempotence() {
        let bands = full_reading();
        let first = calculate_all_indices(&bands);
        let second = calculate_all_indices(&bands);
        assert_eq!(first, second, "Identical inputs must give identical outputs");
    }

    #[test]
    fn test_serialization_round_trip() {
        let indices = calculate_all_indices(&full_reading());
        let json = serde_json::to_string(&indices).expect("Serialization failed");
        let parsed: VegetationIndices =
            serde_json::from_str(&json).expect("Deserialization failed");
        assert_eq!(indices, parsed);
    }
}
