pub mod bands;
pub mod farm;
pub mod validation;
pub mod values;

pub mod errors;
