//! Defines [`GeoVecError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoVecError {
    /// [geojson::Error]
    #[error(transparent)]
    GeoJson(#[from] geojson::Error),

    /// Input that parsed as JSON but does not describe vector shapes
    #[error("Invalid GeoJSON vector data: {0}")]
    InvalidGeoJson(String),

    /// Malformed or truncated binary vector file
    #[error("Invalid vector file: {0}")]
    InvalidVectorFile(String),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// [serde_json::Error]
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Whenever a count or length does not fit in its fixed-width encoding.
    #[error("Overflow: data does not fit in u32 record fields.")]
    Overflow,
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoVecError>;
