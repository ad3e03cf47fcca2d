//! Error types for NetCDF parsing operations.

use thiserror::Error;

/// Result type for NetCDF parser operations.
pub type NetCdfResult<T> = Result<T, NetCdfError>;

/// Error types for NetCDF parsing.
#[derive(Error, Debug)]
pub enum NetCdfError {
    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Missing required variable or dimension
    #[error("Missing required data: {0}")]
    MissingData(String),

    /// Invalid data format, or an error reported by libnetcdf
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    /// The file contents do not form valid labeled arrays
    #[error("Invalid array layout: {0}")]
    Array(#[from] rt_common::CommonError),
}
