use thiserror::Error;

/// Error type for invalid operations.
///
/// The calculator core itself degrades to neutral values instead of erroring;
/// this type covers the boundary surface (parameter files, parameter sets).
#[derive(Error, Debug)]
pub enum PalmCarbonError {
    #[error("{0}")]
    Error(String),
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
    #[error("Failed to parse parameter file: {0}")]
    ParameterFile(#[from] toml::de::Error),
}

/// Convenience type for `Result<T, PalmCarbonError>`.
pub type PalmCarbonResult<T> = Result<T, PalmCarbonError>;
