use rt_common::{Axis, LabeledArray};
use serde::Serialize;
use tracing::debug;

use super::settings::ViewSettings;
use crate::adapter::BrdfAdapter;
use crate::error::BrdfResult;

/// Scattering into the whole upper hemisphere.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolarView;

/// Values on an azimuth × zenith grid, both in radians.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolarPlot {
    pub azimuths: Vec<f64>,
    pub zeniths: Vec<f64>,
    /// `values[azimuth][zenith]`.
    pub values: Vec<Vec<f64>>,
}

impl PolarView {
    pub fn evaluate(adapter: &BrdfAdapter, settings: &ViewSettings) -> BrdfResult<PolarPlot> {
        let plot = match adapter {
            BrdfAdapter::Gridded(brdf) => {
                let data = brdf.plotting_data(settings.wi(), settings.wavelength())?;
                let values = (0..data.phi_o.len()).map(|j| data.column(j)).collect();
                PolarPlot {
                    azimuths: data.phi_o.iter().map(|p| p.to_radians()).collect(),
                    zeniths: data.theta_o.iter().map(|t| t.to_radians()).collect(),
                    values,
                }
            }
            BrdfAdapter::Sampled(brdf) => {
                let values = settings
                    .azimuths()
                    .iter()
                    .map(|phi| {
                        settings
                            .zeniths()
                            .iter()
                            .map(|theta| {
                                brdf.evaluate(
                                    (theta.to_degrees(), phi.to_degrees()),
                                    settings.wi(),
                                    settings.wavelength(),
                                )
                            })
                            .collect()
                    })
                    .collect();
                PolarPlot {
                    azimuths: settings.azimuths().to_vec(),
                    zeniths: settings.zeniths().to_vec(),
                    values,
                }
            }
        };

        debug!(
            adapter = ?adapter.kind(),
            azimuths = plot.azimuths.len(),
            zeniths = plot.zeniths.len(),
            "Evaluated polar view"
        );
        Ok(plot)
    }
}

impl PolarPlot {
    /// The plot as an array with dims `(phi, theta)`.
    pub fn to_array(&self) -> BrdfResult<LabeledArray> {
        let axes = vec![
            Axis::new("phi", self.azimuths.clone()),
            Axis::new("theta", self.zeniths.clone()),
        ];
        let data = self.values.iter().flatten().copied().collect();
        Ok(LabeledArray::new(axes, data)?.with_name("brdf"))
    }
}
