//! Model parameters
//!
//! This module contains parameter structures for all palmcarbon models.
//! Each parameter struct provides documented defaults matching the
//! platform's published methodology, and the aggregate [`ModelParameters`]
//! can be loaded from a TOML file so deployments can override individual
//! factors without a rebuild.

mod equivalence;
mod projection;
mod sequestration;

pub use equivalence::EquivalenceFactors;
pub use projection::ProjectionParameters;
pub use sequestration::SequestrationParameters;

use palmcarbon_core::errors::PalmCarbonResult;
use serde::{Deserialize, Serialize};

/// Aggregate parameter set for every model in this crate.
///
/// Each section is optional in the TOML source and falls back to its
/// defaults, so an override file only needs the factors it changes:
///
/// ```toml
/// [sequestration]
/// price_per_ton = 18.0
///
/// [equivalence]
/// trees_per_ton = 16.0
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelParameters {
    #[serde(default)]
    pub sequestration: SequestrationParameters,
    #[serde(default)]
    pub equivalence: EquivalenceFactors,
    #[serde(default)]
    pub projection: ProjectionParameters,
}

impl ModelParameters {
    /// Parse a parameter set from a TOML document, then validate it.
    pub fn from_toml_str(source: &str) -> PalmCarbonResult<Self> {
        let parameters: ModelParameters = toml::from_str(source)?;
        parameters.validate()?;
        Ok(parameters)
    }

    /// Check every section for out-of-range values.
    pub fn validate(&self) -> PalmCarbonResult<()> {
        self.sequestration.validate()?;
        self.equivalence.validate()?;
        self.projection.validate()?;
        Ok(())
    }
}
