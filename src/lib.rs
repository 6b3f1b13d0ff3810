//! # palmcarbon
//!
//! Environmental metrics calculator for a date-palm carbon-credit platform.
//!
//! This facade crate re-exports the public API of the workspace members:
//!
//! - [`core`]: farm and satellite-band input records, boundary validation,
//!   shared numeric conventions, the workspace error type
//! - [`metrics`]: the calculation models (carbon sequestration, vegetation
//!   indices, environmental equivalences, multi-year projections)
//!
//! # Example
//!
//! ```
//! use palmcarbon::core::farm::{FarmData, IrrigationType, SoilType, TreeSpecies};
//! use palmcarbon::core::validation::validate_farm_data;
//! use palmcarbon::metrics::calculate_annual_co2_sequestration;
//!
//! let farm = FarmData {
//!     area_hectares: 50.0,
//!     tree_count: 2500,
//!     average_tree_age: 8.0,
//!     tree_species: TreeSpecies::DatePalm,
//!     soil_type: SoilType::Loamy,
//!     irrigation_type: IrrigationType::Drip,
//! };
//!
//! assert!(validate_farm_data(&farm).valid);
//! let metrics = calculate_annual_co2_sequestration(&farm);
//! assert!((metrics.annual_sequestration - 136.5).abs() < 0.1);
//! ```

pub use palmcarbon_core as core;
pub use palmcarbon_metrics as metrics;

pub use palmcarbon_core::bands::SentinelBands;
pub use palmcarbon_core::errors::{PalmCarbonError, PalmCarbonResult};
pub use palmcarbon_core::farm::{FarmData, IrrigationType, SoilType, TreeSpecies};
pub use palmcarbon_core::validation::{validate_farm_data, ValidationReport};
pub use palmcarbon_metrics::{
    calculate_all_indices, calculate_annual_co2_sequestration, calculate_cumulative_sequestration,
    calculate_environmental_impact, calculate_growth_projection, interpret_ndvi,
    ndvi_to_percentage, CarbonMetrics, EnvironmentalImpact, VegetationHealth, VegetationIndices,
};
