// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TerritoryError {
    #[error("Geometry of '{country}' has no usable polygon parts")]
    EmptyGeometry { country: String },

    #[error("Total area of '{country}' is zero (got {total_area})")]
    ZeroArea { country: String, total_area: f64 },

    #[error("Invalid dominance threshold {value}: expected a value in (0, 1]")]
    InvalidThreshold { value: f64 },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Unsupported geometry in '{country}': {kind} is not a polygon type")]
    UnsupportedGeometry { country: String, kind: String },

    #[error("Country '{name}' not found")]
    CountryNotFound { name: String },

    #[error("Geometry source failure: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type TerritoryResult<T> = Result<T, TerritoryError>;
