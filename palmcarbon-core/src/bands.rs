//! Sentinel-2 reflectance band readings.
//!
//! A [`SentinelBands`] record is a sparse snapshot of per-band surface
//! reflectance for one observation. Any subset of bands may be present;
//! an index formula whose required bands are absent reports a neutral 0
//! instead of failing (see the `indices` module of `palmcarbon-metrics`).
//!
//! Serde names follow the provider's short band codes (`B2`, `B8A`, ...).

use crate::values::FloatValue;
use serde::{Deserialize, Serialize};

/// Sparse set of Sentinel-2 reflectance readings.
///
/// Reflectances are dimensionless, nominally in [0, 1] after atmospheric
/// correction, but no range is enforced here; downstream formulas clamp
/// their own outputs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentinelBands {
    /// Blue (490 nm)
    #[serde(rename = "B2", default, skip_serializing_if = "Option::is_none")]
    pub b02: Option<FloatValue>,
    /// Green (560 nm)
    #[serde(rename = "B3", default, skip_serializing_if = "Option::is_none")]
    pub b03: Option<FloatValue>,
    /// Red (665 nm)
    #[serde(rename = "B4", default, skip_serializing_if = "Option::is_none")]
    pub b04: Option<FloatValue>,
    /// Red edge 1 (705 nm)
    #[serde(rename = "B5", default, skip_serializing_if = "Option::is_none")]
    pub b05: Option<FloatValue>,
    /// Red edge 2 (740 nm)
    #[serde(rename = "B6", default, skip_serializing_if = "Option::is_none")]
    pub b06: Option<FloatValue>,
    /// Red edge 3 (783 nm)
    #[serde(rename = "B7", default, skip_serializing_if = "Option::is_none")]
    pub b07: Option<FloatValue>,
    /// NIR (842 nm)
    #[serde(rename = "B8", default, skip_serializing_if = "Option::is_none")]
    pub b08: Option<FloatValue>,
    /// Narrow NIR (865 nm)
    #[serde(rename = "B8A", default, skip_serializing_if = "Option::is_none")]
    pub b8a: Option<FloatValue>,
    /// SWIR 1 (1610 nm)
    #[serde(rename = "B11", default, skip_serializing_if = "Option::is_none")]
    pub b11: Option<FloatValue>,
    /// SWIR 2 (2190 nm)
    #[serde(rename = "B12", default, skip_serializing_if = "Option::is_none")]
    pub b12: Option<FloatValue>,
}

impl SentinelBands {
    /// An empty reading with every band absent.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blue(mut self, value: FloatValue) -> Self {
        self.b02 = Some(value);
        self
    }

    pub fn with_green(mut self, value: FloatValue) -> Self {
        self.b03 = Some(value);
        self
    }

    pub fn with_red(mut self, value: FloatValue) -> Self {
        self.b04 = Some(value);
        self
    }

    pub fn with_nir(mut self, value: FloatValue) -> Self {
        self.b08 = Some(value);
        self
    }

    pub fn with_swir1(mut self, value: FloatValue) -> Self {
        self.b11 = Some(value);
        self
    }

    pub fn with_swir2(mut self, value: FloatValue) -> Self {
        self.b12 = Some(value);
        self
    }

    /// True if no band carries a reading.
    pub fn is_empty(&self) -> bool {
        [
            self.b02, self.b03, self.b04, self.b05, self.b06, self.b07, self.b08, self.b8a,
            self.b11, self.b12,
        ]
        .iter()
        .all(Option::is_none)
    }
}
