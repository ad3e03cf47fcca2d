//! BRDF adapters and plotting data.
//!
//! Two kinds of BRDF source sit behind [`BrdfAdapter`]:
//!
//! - [`GriddedBrdf`]: precomputed values on a 5-D grid
//!   `(theta_i, phi_i, theta_o, phi_o, wavelength)`, queried by exact match
//! - [`SampledBrdf`]: an analytic [`BsdfModel`] evaluated for any direction
//!
//! [`PolarView`] and [`PrincipalPlaneView`] turn either kind into plot-ready
//! arrays. Drawing the figures is left to the caller.
//!
//! # Example
//!
//! ```ignore
//! use brdf_view::{BrdfAdapter, GriddedBrdf, PolarView, ViewSettings};
//!
//! let adapter = BrdfAdapter::from(GriddedBrdf::new(array)?);
//! let mut settings = ViewSettings::default();
//! settings.set_wi(30.0, 0.0);
//! settings.set_wavelength(550.0);
//! let plot = PolarView::evaluate(&adapter, &settings)?;
//! ```

pub mod adapter;
pub mod error;
pub mod gridded;
pub mod sampled;
pub mod ticks;
pub mod view;

pub use adapter::{AdapterKind, BrdfAdapter};
pub use error::{BrdfError, BrdfResult};
pub use gridded::{GriddedBrdf, PlottingData, REQUIRED_AXES};
pub use sampled::{Black, BsdfModel, Lambertian, SampledBrdf};
pub use ticks::generate_ticks;
pub use view::{PolarPlot, PolarView, PrincipalPlanePlot, PrincipalPlaneView, ViewSettings};
