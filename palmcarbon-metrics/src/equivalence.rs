//! Environmental Equivalences
//!
//! Converts an annual CO2 tonnage into the relatable integer figures shown
//! on the dashboard. Constants live in [`EquivalenceFactors`]; see that
//! module for the canonical-set rationale.

use crate::parameters::EquivalenceFactors;
use palmcarbon_core::values::FloatValue;
use serde::{Deserialize, Serialize};

/// Rounded equivalence counts for an annual CO2 figure.
///
/// Each count is a non-negative integer, rounded from the continuous
/// tonnage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalImpact {
    /// Mature trees absorbing the same CO2 over a year
    pub trees_equivalent: u64,
    /// Passenger cars taken off the road for a year
    pub cars_off_road: u64,
    /// Homes taken off the grid for a year
    pub houses_off_grid: u64,
    /// Medium-haul round-trip flights mitigated
    pub flights_mitigated: u64,
}

/// Compute equivalence counts with an explicit factor set.
///
/// Negative tonnage clamps to zero before rounding, so counts are always
/// non-negative.
pub fn calculate_environmental_impact_with(
    co2_tons: FloatValue,
    factors: &EquivalenceFactors,
) -> EnvironmentalImpact {
    let tons = if co2_tons.is_finite() {
        co2_tons.max(0.0)
    } else {
        0.0
    };

    EnvironmentalImpact {
        trees_equivalent: (tons * factors.trees_per_ton).round() as u64,
        cars_off_road: (tons / factors.tons_per_car).round() as u64,
        houses_off_grid: (tons / factors.tons_per_house).round() as u64,
        flights_mitigated: (tons / factors.tons_per_flight).round() as u64,
    }
}

/// Compute equivalence counts with the canonical factor set.
pub fn calculate_environmental_impact(co2_tons: FloatValue) -> EnvironmentalImpact {
    calculate_environmental_impact_with(co2_tons, &EquivalenceFactors::default())
}
