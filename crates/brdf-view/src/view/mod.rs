//! Plotting data for BRDF adapters.
//!
//! Views discriminate the two adapter kinds:
//!
//! - sampled adapters are queried once per point of the view's own
//!   zenith/azimuth grid
//! - gridded adapters provide a whole slice at once through
//!   [`GriddedBrdf::plotting_data`](crate::GriddedBrdf::plotting_data), and
//!   the view adopts the data grid in place of its sampling settings

mod polar;
mod principal_plane;
mod settings;

pub use polar::{PolarPlot, PolarView};
pub use principal_plane::{PrincipalPlanePlot, PrincipalPlaneView};
pub use settings::ViewSettings;

/// Evenly spaced values from `start` to `end`, both included.
pub(crate) fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps - 1) as f64;
            (0..steps).map(|i| start + step * i as f64).collect()
        }
    }
}
