//! Vegetation index domain
//!
//! This module contains the spectral index calculators:
//!
//! - `spectral`: the eight normalized-difference style indices computed from
//!   sparse Sentinel-2 band readings
//! - `interpretation`: qualitative NDVI health classification and the
//!   0-100 % dashboard scaling

mod interpretation;
mod spectral;

pub use interpretation::{interpret_ndvi, ndvi_to_percentage, VegetationHealth};
pub use spectral::{
    calculate_all_indices, calculate_evi, calculate_gndvi, calculate_ndbi, calculate_ndii,
    calculate_ndmi, calculate_ndsi, calculate_ndvi, calculate_osavi, VegetationIndices,
};
