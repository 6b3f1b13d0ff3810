//! Sequestration Model Parameters
//!
//! Factor tables for the per-hectare CO2 sequestration model. Rates are
//! IPCC-style approximations for arid-region orchards: a species base rate
//! adjusted by three multiplicative factors (tree age, soil type,
//! irrigation method).

use palmcarbon_core::errors::{PalmCarbonError, PalmCarbonResult};
use palmcarbon_core::farm::{IrrigationType, SoilType, TreeSpecies};
use palmcarbon_core::values::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the carbon sequestration model.
///
/// Annual sequestration is computed as
///
/// ```text
/// annual = area * base_rate(species)
///               * age_factor(age)
///               * soil_factor(soil)
///               * irrigation_factor(irrigation)
/// ```
///
/// All factors are positive, so the model can never produce a negative
/// tonnage for a valid farm record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequestrationParameters {
    /// Base sequestration rate for date palms
    /// unit: tCO2 / ha / yr
    /// default: 2.5
    pub base_rate_date_palm: FloatValue,

    /// Base sequestration rate for other species
    /// unit: tCO2 / ha / yr
    /// default: 1.5
    pub base_rate_other: FloatValue,

    /// Per-year decline of the age factor. Older stands sequester
    /// relatively less per year.
    /// unit: yr^-1
    /// default: 0.02
    pub age_decline_per_year: FloatValue,

    /// Lower bound of the age factor, so very old stands never reach a
    /// zero or negative rate.
    /// unit: dimensionless
    /// default: 0.5
    pub age_factor_floor: FloatValue,

    /// Soil factor for sandy soil
    /// unit: dimensionless
    /// default: 0.8
    pub soil_factor_sandy: FloatValue,

    /// Soil factor for loamy soil
    /// unit: dimensionless
    /// default: 1.0
    pub soil_factor_loamy: FloatValue,

    /// Soil factor for clay soil
    /// unit: dimensionless
    /// default: 1.2
    pub soil_factor_clay: FloatValue,

    /// Irrigation factor for drip irrigation
    /// unit: dimensionless
    /// default: 1.3
    pub irrigation_factor_drip: FloatValue,

    /// Irrigation factor for flood irrigation
    /// unit: dimensionless
    /// default: 1.0
    pub irrigation_factor_flood: FloatValue,

    /// Irrigation factor for rain-fed farms
    /// unit: dimensionless
    /// default: 0.7
    pub irrigation_factor_rain_fed: FloatValue,

    /// Biomass stock proxy: tons of standing biomass accumulated per ton of
    /// annual sequestration per year of stand age. A rough proxy, not a
    /// true allometric model.
    /// unit: dimensionless
    /// default: 0.5
    pub biomass_stock_factor: FloatValue,

    /// Fraction of standing biomass counted as soil carbon storage
    /// unit: dimensionless
    /// default: 0.4
    pub soil_carbon_fraction: FloatValue,

    /// Credit price applied to annual sequestration
    /// unit: currency units / tCO2
    /// default: 15.0
    pub price_per_ton: FloatValue,
}

impl Default for SequestrationParameters {
    fn default() -> Self {
        Self {
            // Species base rates
            base_rate_date_palm: 2.5,
            base_rate_other: 1.5,

            // Age response
            age_decline_per_year: 0.02,
            age_factor_floor: 0.5,

            // Soil factors
            soil_factor_sandy: 0.8,
            soil_factor_loamy: 1.0,
            soil_factor_clay: 1.2,

            // Irrigation factors
            irrigation_factor_drip: 1.3,
            irrigation_factor_flood: 1.0,
            irrigation_factor_rain_fed: 0.7,

            // Derived stocks and pricing
            biomass_stock_factor: 0.5,
            soil_carbon_fraction: 0.4,
            price_per_ton: 15.0,
        }
    }
}

impl SequestrationParameters {
    /// Base rate lookup by species (tCO2/ha/yr).
    pub fn base_rate(&self, species: TreeSpecies) -> FloatValue {
        match species {
            TreeSpecies::DatePalm => self.base_rate_date_palm,
            TreeSpecies::Other => self.base_rate_other,
        }
    }

    /// Soil factor lookup (dimensionless).
    pub fn soil_factor(&self, soil: SoilType) -> FloatValue {
        match soil {
            SoilType::Sandy => self.soil_factor_sandy,
            SoilType::Loamy => self.soil_factor_loamy,
            SoilType::Clay => self.soil_factor_clay,
        }
    }

    /// Irrigation factor lookup (dimensionless).
    pub fn irrigation_factor(&self, irrigation: IrrigationType) -> FloatValue {
        match irrigation {
            IrrigationType::Drip => self.irrigation_factor_drip,
            IrrigationType::Flood => self.irrigation_factor_flood,
            IrrigationType::RainFed => self.irrigation_factor_rain_fed,
        }
    }

    /// Age factor for a stand of the given average age (dimensionless).
    ///
    /// `max(floor, 1 - age * decline)`, floored so the factor stays
    /// strictly positive.
    pub fn age_factor(&self, age_years: FloatValue) -> FloatValue {
        (1.0 - age_years * self.age_decline_per_year).max(self.age_factor_floor)
    }

    /// Check that every factor is positive and fractions are in range.
    pub fn validate(&self) -> PalmCarbonResult<()> {
        let positives = [
            ("base_rate_date_palm", self.base_rate_date_palm),
            ("base_rate_other", self.base_rate_other),
            ("age_factor_floor", self.age_factor_floor),
            ("soil_factor_sandy", self.soil_factor_sandy),
            ("soil_factor_loamy", self.soil_factor_loamy),
            ("soil_factor_clay", self.soil_factor_clay),
            ("irrigation_factor_drip", self.irrigation_factor_drip),
            ("irrigation_factor_flood", self.irrigation_factor_flood),
            ("irrigation_factor_rain_fed", self.irrigation_factor_rain_fed),
            ("biomass_stock_factor", self.biomass_stock_factor),
            ("price_per_ton", self.price_per_ton),
        ];
        for (name, value) in positives {
            if !value.is_finite() || value <= 0.0 {
                return Err(PalmCarbonError::InvalidParameter {
                    name: name.to_string(),
                    reason: format!("must be a positive number, got {}", value),
                });
            }
        }
        if !(0.0..=1.0).contains(&self.soil_carbon_fraction) {
            return Err(PalmCarbonError::InvalidParameter {
                name: "soil_carbon_fraction".to_string(),
                reason: format!("must be within [0, 1], got {}", self.soil_carbon_fraction),
            });
        }
        if self.age_decline_per_year < 0.0 {
            return Err(PalmCarbonError::InvalidParameter {
                name: "age_decline_per_year".to_string(),
                reason: format!("cannot be negative, got {}", self.age_decline_per_year),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = SequestrationParameters::default();
        assert!((params.base_rate_date_palm - 2.5).abs() < 1e-10);
        assert!((params.base_rate_other - 1.5).abs() < 1e-10);
        assert!((params.price_per_ton - 15.0).abs() < 1e-10);
        params.validate().expect("Defaults should validate");
    }

    #[test]
    fn test_factor_lookups() {
        let params = SequestrationParameters::default();
        assert_eq!(params.base_rate(TreeSpecies::DatePalm), 2.5);
        assert_eq!(params.base_rate(TreeSpecies::Other), 1.5);
        assert_eq!(params.soil_factor(SoilType::Sandy), 0.8);
        assert_eq!(params.soil_factor(SoilType::Clay), 1.2);
        assert_eq!(params.irrigation_factor(IrrigationType::Drip), 1.3);
        assert_eq!(params.irrigation_factor(IrrigationType::RainFed), 0.7);
    }

    #[test]
    fn test_age_factor_declines_then_floors() {
        let params = SequestrationParameters::default();
        assert!((params.age_factor(0.0) - 1.0).abs() < 1e-10);
        assert!((params.age_factor(8.0) - 0.84).abs() < 1e-10);
        // 1 - 100 * 0.02 = -1.0, floored at 0.5
        assert!((params.age_factor(100.0) - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_age_factor_monotonic_until_floor() {
        let params = SequestrationParameters::default();
        let mut previous = params.age_factor(0.0);
        for age in 1..=100 {
            let factor = params.age_factor(age as FloatValue);
            assert!(
                factor <= previous,
                "Age factor should not increase with age: {} at {} yr",
                factor,
                age
            );
            assert!(factor >= params.age_factor_floor);
            previous = factor;
        }
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let mut params = SequestrationParameters::default();
        params.base_rate_date_palm = -1.0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_fraction() {
        let mut params = SequestrationParameters::default();
        params.soil_carbon_fraction = 1.5;
        assert!(params.validate().is_err());
    }
}
