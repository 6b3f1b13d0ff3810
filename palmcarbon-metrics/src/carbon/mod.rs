//! Carbon domain
//!
//! This module contains the carbon sequestration model:
//!
//! - `SequestrationModel`: converts a farm record into annual/monthly CO2
//!   tonnage, biomass and soil-carbon stocks, and credit figures

mod model;

pub use model::{calculate_annual_co2_sequestration, CarbonMetrics, SequestrationModel};
