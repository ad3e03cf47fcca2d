//! Common front for gridded and sampled BRDF sources.

use serde::Serialize;

use crate::gridded::GriddedBrdf;
use crate::sampled::SampledBrdf;

/// How an adapter produces values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterKind {
    /// Values come from a fixed grid; views adopt the grid's resolution.
    Gridded,
    /// Values are computed for any direction; views use their own sampling.
    Sampled,
}

/// A BRDF source a view can evaluate.
#[derive(Debug)]
pub enum BrdfAdapter {
    Gridded(GriddedBrdf),
    Sampled(SampledBrdf),
}

impl BrdfAdapter {
    pub fn kind(&self) -> AdapterKind {
        match self {
            Self::Gridded(_) => AdapterKind::Gridded,
            Self::Sampled(_) => AdapterKind::Sampled,
        }
    }
}

impl From<GriddedBrdf> for BrdfAdapter {
    fn from(brdf: GriddedBrdf) -> Self {
        Self::Gridded(brdf)
    }
}

impl From<SampledBrdf> for BrdfAdapter {
    fn from(brdf: SampledBrdf) -> Self {
        Self::Sampled(brdf)
    }
}
