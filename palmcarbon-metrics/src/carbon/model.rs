//! Carbon Sequestration Model
//!
//! Converts a [`FarmData`] record into a [`CarbonMetrics`] record using
//! IPCC-style per-hectare sequestration rates adjusted by three
//! multiplicative factors.
//!
//! # Algorithm
//!
//! 1. Base rate lookup by species (date palm 2.5 tCO2/ha/yr, other 1.5).
//! 2. Age factor: `max(0.5, 1 - age * 0.02)`.
//! 3. Soil factor lookup (sandy 0.8, loamy 1.0, clay 1.2).
//! 4. Irrigation factor lookup (drip 1.3, flood 1.0, rain-fed 0.7).
//! 5. Annual sequestration = area x base x age x soil x irrigation.
//! 6. Biomass stock = annual x 0.5 x average age (rough stock proxy).
//! 7. Soil carbon storage = biomass x 0.4.
//! 8. Estimated value = annual x price per ton.
//! 9. Carbon credits = floor(annual), one credit per whole ton.
//!
//! The model is deterministic and holds no state; all factors come from the
//! injected [`SequestrationParameters`].

use crate::parameters::SequestrationParameters;
use palmcarbon_core::farm::FarmData;
use palmcarbon_core::values::{round2, FloatValue};
use serde::{Deserialize, Serialize};

/// Derived carbon metrics for one farm.
///
/// All float figures are rounded to two decimal places; the credit count is
/// the integer floor of the annual tonnage. Every field is non-negative for
/// a valid farm record (all factors are positive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonMetrics {
    /// Annual CO2 sequestration
    /// unit: tCO2 / yr
    pub annual_sequestration: FloatValue,
    /// Monthly CO2 sequestration (annual / 12)
    /// unit: tCO2 / month
    pub monthly_sequestration: FloatValue,
    /// Standing biomass stock proxy
    /// unit: t
    pub total_biomass: FloatValue,
    /// Soil carbon storage derived from biomass
    /// unit: t
    pub soil_carbon_storage: FloatValue,
    /// Estimated credit value at the configured price
    /// unit: currency units
    pub estimated_value: FloatValue,
    /// Carbon credits earned, one per whole ton sequestered annually
    pub carbon_credits: u64,
}

/// Carbon sequestration model.
///
/// Holds its factor tables by value; construct with [`Default`] parameters
/// or inject an overridden [`SequestrationParameters`] set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SequestrationModel {
    parameters: SequestrationParameters,
}

impl SequestrationModel {
    /// Create a model with default parameters.
    pub fn new() -> Self {
        Self::from_parameters(SequestrationParameters::default())
    }

    /// Create a model from an explicit parameter set.
    pub fn from_parameters(parameters: SequestrationParameters) -> Self {
        Self { parameters }
    }

    /// Get the parameters.
    pub fn parameters(&self) -> &SequestrationParameters {
        &self.parameters
    }

    /// Unrounded annual sequestration for a farm (tCO2/yr).
    ///
    /// This is the core calculation, exposed for testability; callers
    /// normally use [`SequestrationModel::calculate`].
    pub fn annual_sequestration(&self, farm: &FarmData) -> FloatValue {
        let base_rate = self.parameters.base_rate(farm.tree_species);
        let age_factor = self.parameters.age_factor(farm.average_tree_age);
        let soil_factor = self.parameters.soil_factor(farm.soil_type);
        let irrigation_factor = self.parameters.irrigation_factor(farm.irrigation_type);

        farm.area_hectares * base_rate * age_factor * soil_factor * irrigation_factor
    }

    /// Compute the full metrics record for a farm.
    pub fn calculate(&self, farm: &FarmData) -> CarbonMetrics {
        let annual = self.annual_sequestration(farm);
        let biomass = annual * self.parameters.biomass_stock_factor * farm.average_tree_age;
        let soil_carbon = biomass * self.parameters.soil_carbon_fraction;
        let value = annual * self.parameters.price_per_ton;

        log::debug!(
            "Sequestration for {:.1} ha {} farm: {:.2} tCO2/yr",
            farm.area_hectares,
            farm.tree_species.as_str(),
            annual
        );

        CarbonMetrics {
            annual_sequestration: round2(annual),
            monthly_sequestration: round2(annual / 12.0),
            total_biomass: round2(biomass),
            soil_carbon_storage: round2(soil_carbon),
            estimated_value: round2(value),
            carbon_credits: annual.max(0.0).floor() as u64,
        }
    }
}

/// Convenience entry point using default parameters.
pub fn calculate_annual_co2_sequestration(farm: &FarmData) -> CarbonMetrics {
    SequestrationModel::new().calculate(farm)
}
