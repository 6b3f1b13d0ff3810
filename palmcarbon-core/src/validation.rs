//! Boundary validation for farm input records.
//!
//! Validation accumulates every violation into a [`ValidationReport`] rather
//! than failing on the first one, so the caller can display all problems
//! inline at once. Nothing here panics or returns `Err`; a malformed record
//! yields a report with `valid == false`.

use crate::farm::FarmData;
use crate::values::FloatValue;
use serde::{Deserialize, Serialize};

/// Maximum plausible average tree age accepted at the boundary (years).
pub const MAX_TREE_AGE_YEARS: FloatValue = 100.0;

/// Outcome of validating a boundary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when no violations were found.
    pub valid: bool,
    /// Human-readable violation messages, suitable for inline display.
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validate a [`FarmData`] record before it reaches the sequestration model.
///
/// Checks:
/// - area is a positive, finite number of hectares
/// - tree count is positive
/// - average tree age is finite and within 0-100 years
pub fn validate_farm_data(farm: &FarmData) -> ValidationReport {
    let mut errors = Vec::new();

    if !farm.area_hectares.is_finite() || farm.area_hectares <= 0.0 {
        errors.push(format!(
            "Farm area must be a positive number of hectares (got {})",
            farm.area_hectares
        ));
    }

    if farm.tree_count == 0 {
        errors.push("Tree count must be greater than zero".to_string());
    }

    if !farm.average_tree_age.is_finite() || farm.average_tree_age < 0.0 {
        errors.push(format!(
            "Average tree age cannot be negative (got {})",
            farm.average_tree_age
        ));
    } else if farm.average_tree_age > MAX_TREE_AGE_YEARS {
        errors.push(format!(
            "Average tree age cannot exceed {} years (got {})",
            MAX_TREE_AGE_YEARS, farm.average_tree_age
        ));
    }

    if !errors.is_empty() {
        log::warn!(
            "Rejected farm record with {} validation error(s)",
            errors.len()
        );
    }

    ValidationReport::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::farm::{IrrigationType, SoilType, TreeSpecies};

    fn valid_farm() -> FarmData {
        FarmData {
            area_hectares: 50.0,
            tree_count: 2500,
            average_tree_age: 8.0,
            tree_species: TreeSpecies::DatePalm,
            soil_type: SoilType::Loamy,
            irrigation_type: IrrigationType::Drip,
        }
    }

    #[test]
    fn test_valid_farm_passes() {
        let report = validate_farm_data(&valid_farm());
        assert!(report.valid, "Expected valid report, got {:?}", report.errors);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_negative_area_rejected() {
        let mut farm = valid_farm();
        farm.area_hectares = -1.0;
        let report = validate_farm_data(&farm);
        assert!(!report.valid);
        assert!(
            report.errors.iter().any(|e| e.contains("area")),
            "Expected an area-related message, got {:?}",
            report.errors
        );
    }

    #[test]
    fn test_zero_area_rejected() {
        let mut farm = valid_farm();
        farm.area_hectares = 0.0;
        assert!(!validate_farm_data(&farm).valid);
    }

    #[test]
    fn test_zero_tree_count_rejected() {
        let mut farm = valid_farm();
        farm.tree_count = 0;
        let report = validate_farm_data(&farm);
        assert!(!report.valid);
        assert!(report.errors.iter().any(|e| e.contains("Tree count")));
    }

    #[test]
    fn test_age_bounds() {
        let mut farm = valid_farm();
        farm.average_tree_age = -3.0;
        assert!(!validate_farm_data(&farm).valid);

        farm.average_tree_age = 101.0;
        let report = validate_farm_data(&farm);
        assert!(!report.valid);
        assert!(report.errors.iter().any(|e| e.contains("100")));

        // Boundary values are accepted
        farm.average_tree_age = 0.0;
        assert!(validate_farm_data(&farm).valid);
        farm.average_tree_age = 100.0;
        assert!(validate_farm_data(&farm).valid);
    }

    #[test]
    fn test_nan_area_rejected() {
        let mut farm = valid_farm();
        farm.area_hectares = f64::NAN;
        assert!(!validate_farm_data(&farm).valid);
    }

    #[test]
    fn test_multiple_violations_accumulate() {
        let mut farm = valid_farm();
        farm.area_hectares = -1.0;
        farm.tree_count = 0;
        farm.average_tree_age = 150.0;
        let report = validate_farm_data(&farm);
        assert_eq!(report.errors.len(), 3, "got {:?}", report.errors);
    }
}
