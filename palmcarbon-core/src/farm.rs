//! Farm domain types.
//!
//! A [`FarmData`] record is the immutable value object describing one farm as
//! entered at the platform boundary. It carries no identity beyond its field
//! values and is constructed fresh for every calculation.
//!
//! Field names serialize in camelCase and enum variants in snake_case to
//! match the platform's JSON wire format (`areaHectares`, `date_palm`, ...).

use crate::values::FloatValue;
use serde::{Deserialize, Serialize};

/// Tree species grown on the farm.
///
/// The platform targets date-palm farmers; anything else falls into a single
/// catch-all bucket with a lower base sequestration rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeSpecies {
    DatePalm,
    Other,
}

impl TreeSpecies {
    pub fn as_str(&self) -> &'static str {
        match self {
            TreeSpecies::DatePalm => "date_palm",
            TreeSpecies::Other => "other",
        }
    }
}

/// Dominant soil type of the farm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Sandy,
    Loamy,
    Clay,
}

impl SoilType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Sandy => "sandy",
            SoilType::Loamy => "loamy",
            SoilType::Clay => "clay",
        }
    }
}

/// Irrigation method used on the farm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrrigationType {
    Drip,
    Flood,
    RainFed,
}

impl IrrigationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationType::Drip => "drip",
            IrrigationType::Flood => "flood",
            IrrigationType::RainFed => "rain_fed",
        }
    }
}

/// Farm attributes driving the sequestration model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmData {
    /// Cultivated area
    /// unit: hectares
    /// valid range: > 0
    pub area_hectares: FloatValue,

    /// Number of trees on the farm
    /// valid range: > 0
    pub tree_count: u32,

    /// Average tree age across the farm
    /// unit: years
    /// valid range: 0-100
    pub average_tree_age: FloatValue,

    /// Tree species
    pub tree_species: TreeSpecies,

    /// Dominant soil type
    pub soil_type: SoilType,

    /// Irrigation method
    pub irrigation_type: IrrigationType,
}
