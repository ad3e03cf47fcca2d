//! Error types for array and dataset operations.

use thiserror::Error;

/// Result type alias using CommonError.
pub type CommonResult<T> = Result<T, CommonError>;

/// Errors raised by labeled array, dataset and frame operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CommonError {
    #[error("shape mismatch: axes describe {expected} cells but {actual} values were given")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("duplicate axis name: {0}")]
    DuplicateAxis(String),

    #[error("unknown axis: {0}")]
    UnknownAxis(String),

    #[error("invalid axis order {requested:?} for axes {available:?}")]
    InvalidAxisOrder {
        requested: Vec<String>,
        available: Vec<String>,
    },

    #[error("no exact match for {axis} = {value}")]
    NoExactMatch { axis: String, value: f64 },

    #[error("unknown variable: {0}")]
    UnknownVariable(String),

    #[error("cannot concatenate: {0}")]
    IncompatibleConcat(String),

    #[error("direction vector has zero length")]
    ZeroDirection,
}
