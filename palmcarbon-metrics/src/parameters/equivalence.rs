//! Environmental Equivalence Factors
//!
//! Conversion constants turning an annual CO2 tonnage into the relatable
//! figures shown on the dashboard (trees planted, cars off the road, homes
//! off the grid, flights mitigated).
//!
//! Earlier revisions of the platform drifted into several inconsistent
//! constant sets across copy-pasted call sites (16 / 16.67 / 47.6 trees per
//! ton, and similar spreads for homes and flights). This struct is the one
//! canonical set; a call site that genuinely needs different assumptions
//! must construct its own `EquivalenceFactors` rather than hard-coding.

use palmcarbon_core::errors::{PalmCarbonError, PalmCarbonResult};
use palmcarbon_core::values::FloatValue;
use serde::{Deserialize, Serialize};

/// Canonical equivalence constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquivalenceFactors {
    /// Mature trees absorbing the same CO2 over a year
    /// unit: trees / tCO2
    /// default: 16.0 (one tree absorbs ~60 kg/yr)
    pub trees_per_ton: FloatValue,

    /// Annual emissions of one passenger car
    /// unit: tCO2 / car / yr
    /// default: 4.6
    pub tons_per_car: FloatValue,

    /// Annual energy-related emissions of one home
    /// unit: tCO2 / home / yr
    /// default: 4.74
    pub tons_per_house: FloatValue,

    /// Emissions of one medium-haul round-trip flight per passenger
    /// unit: tCO2 / flight
    /// default: 0.9
    pub tons_per_flight: FloatValue,
}

impl Default for EquivalenceFactors {
    fn default() -> Self {
        Self {
            trees_per_ton: 16.0,
            tons_per_car: 4.6,
            tons_per_house: 4.74,
            tons_per_flight: 0.9,
        }
    }
}

impl EquivalenceFactors {
    /// Check that every factor is positive.
    pub fn validate(&self) -> PalmCarbonResult<()> {
        let factors = [
            ("trees_per_ton", self.trees_per_ton),
            ("tons_per_car", self.tons_per_car),
            ("tons_per_house", self.tons_per_house),
            ("tons_per_flight", self.tons_per_flight),
        ];
        for (name, value) in factors {
            if !value.is_finite() || value <= 0.0 {
                return Err(PalmCarbonError::InvalidParameter {
                    name: name.to_string(),
                    reason: format!("must be a positive number, got {}", value),
                });
            }
        }
        Ok(())
    }
}
