//! Calculation models for the palmcarbon platform
//!
//! This crate provides the environmental metrics calculators behind the
//! platform's farmer dashboard: carbon sequestration, vegetation indices,
//! environmental equivalences and multi-year projections.
//!
//! # Module Organisation
//!
//! Models are organised by domain:
//! - `carbon`: CO2 sequestration model converting farm attributes into
//!   carbon metrics
//! - `indices`: spectral vegetation indices from Sentinel-2 reflectance
//!   bands, plus NDVI interpretation
//! - `equivalence`: rounded "trees / cars / homes / flights" equivalences
//!   for an annual CO2 figure
//! - `projection`: multi-year growth and cumulative sequestration figures
//!
//! # Parameters
//!
//! Each model has an associated parameters struct in the `parameters` module
//! with documented defaults; the aggregate [`parameters::ModelParameters`]
//! can be loaded from a TOML file.
//!
//! # Error semantics
//!
//! Every calculator is pure and total: missing bands, zero denominators and
//! out-of-range values degrade to neutral outputs (0, clamped) instead of
//! erroring. Only parameter-file loading can fail.

pub mod carbon;
pub mod equivalence;
pub mod indices;
pub mod parameters;
pub mod projection;

pub use carbon::{calculate_annual_co2_sequestration, CarbonMetrics, SequestrationModel};
pub use equivalence::{calculate_environmental_impact, EnvironmentalImpact};
pub use indices::{
    calculate_all_indices, calculate_evi, calculate_gndvi, calculate_ndbi, calculate_ndii,
    calculate_ndmi, calculate_ndsi, calculate_ndvi, calculate_osavi, interpret_ndvi,
    ndvi_to_percentage, VegetationHealth, VegetationIndices,
};
pub use projection::{calculate_cumulative_sequestration, calculate_growth_projection};
