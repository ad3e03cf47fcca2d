//! Error types for BRDF adapters and views.

use rt_common::CommonError;
use thiserror::Error;

/// Result type alias using BrdfError.
pub type BrdfResult<T> = Result<T, BrdfError>;

/// Errors raised while wrapping or querying BRDF data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BrdfError {
    /// Gridded data lacks one of the required axes.
    #[error("required data dimension {0} not present in data")]
    MissingAxis(String),

    /// `phi_o` holds neither 0° nor 360°.
    #[error("phi_o contains data for neither 0° nor 360°")]
    IncompleteBoundary,

    /// A query coordinate is not on the data grid. Gridded data is never
    /// interpolated.
    #[error("{axis} = {value} does not align with the data grid")]
    NoExactMatch { axis: String, value: f64 },

    #[error("the principal plane view requires values at phi_o = 180°")]
    MissingPrincipalPlane,

    #[error("incoming direction vector cannot have length 0")]
    ZeroDirection,

    /// Angular resolution must be a positive, finite number of degrees.
    #[error("invalid angular resolution: {0}")]
    InvalidResolution(f64),

    #[error(transparent)]
    Array(CommonError),
}

impl From<CommonError> for BrdfError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::NoExactMatch { axis, value } => Self::NoExactMatch { axis, value },
            CommonError::ZeroDirection => Self::ZeroDirection,
            other => Self::Array(other),
        }
    }
}
