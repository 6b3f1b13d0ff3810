//! Projection Parameters
//!
//! Compounding rates for the two multi-year projection models. The two
//! rates are deliberately different: forward growth projections assume an
//! optimistic 5 %/yr improvement from maturing stands and better practice,
//! while the cumulative summary figure compounds at a conservative 2 %/yr.
//! See the `projection` module for the full rationale.

use palmcarbon_core::errors::{PalmCarbonError, PalmCarbonResult};
use palmcarbon_core::values::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for multi-year projections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionParameters {
    /// Year-on-year growth applied by the forward projection sequence
    /// unit: fraction / yr
    /// default: 0.05
    pub growth_rate: FloatValue,

    /// Year-on-year growth applied by the cumulative summary total
    /// unit: fraction / yr
    /// default: 0.02
    pub cumulative_growth_rate: FloatValue,
}

impl Default for ProjectionParameters {
    fn default() -> Self {
        Self {
            growth_rate: 0.05,
            cumulative_growth_rate: 0.02,
        }
    }
}

impl ProjectionParameters {
    /// Forward projection sequence using this parameter set's growth rate.
    pub fn growth_projection(&self, current: FloatValue, years: usize) -> Vec<FloatValue> {
        crate::projection::calculate_growth_projection(current, years, self.growth_rate)
    }

    /// Cumulative total using this parameter set's conservative rate.
    pub fn cumulative_sequestration(&self, annual_rate: FloatValue, years: usize) -> FloatValue {
        crate::projection::calculate_cumulative_sequestration_with(
            annual_rate,
            years,
            self.cumulative_growth_rate,
        )
    }

    /// Check that both rates are finite and above -100 %.
    pub fn validate(&self) -> PalmCarbonResult<()> {
        for (name, value) in [
            ("growth_rate", self.growth_rate),
            ("cumulative_growth_rate", self.cumulative_growth_rate),
        ] {
            if !value.is_finite() || value <= -1.0 {
                return Err(PalmCarbonError::InvalidParameter {
                    name: name.to_string(),
                    reason: format!("must be a finite rate above -1.0, got {}", value),
                });
            }
        }
        Ok(())
    }
}
