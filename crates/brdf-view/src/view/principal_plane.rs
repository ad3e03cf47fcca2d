use std::f64::consts::PI;

use rt_common::{Axis, LabeledArray};
use serde::Serialize;
use tracing::debug;

use super::settings::ViewSettings;
use crate::adapter::BrdfAdapter;
use crate::error::{BrdfError, BrdfResult};
use crate::gridded::PHI_O;

/// Scattering in the principal plane, `phi = 0` and `phi = π`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrincipalPlaneView;

/// Values along the principal plane.
///
/// `values` has twice as many entries as `zeniths`. The first half is the
/// `phi = π` branch from the horizon up to the zenith, the second half the
/// `phi = 0` branch from the zenith down to the horizon, so plotting against
/// [`signed_zeniths`](Self::signed_zeniths) gives one continuous curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrincipalPlanePlot {
    /// Zenith angles of one branch, radians, ascending.
    pub zeniths: Vec<f64>,
    pub values: Vec<f64>,
}

impl PrincipalPlaneView {
    pub fn evaluate(
        adapter: &BrdfAdapter,
        settings: &ViewSettings,
    ) -> BrdfResult<PrincipalPlanePlot> {
        let (zeniths, backward, forward) = match adapter {
            BrdfAdapter::Gridded(brdf) => {
                let data = brdf.plotting_data(settings.wi(), settings.wavelength())?;
                let back = data
                    .phi_o_index(180.0)
                    .ok_or(BrdfError::MissingPrincipalPlane)?;
                let front = data.phi_o_index(0.0).ok_or_else(|| BrdfError::NoExactMatch {
                    axis: PHI_O.to_string(),
                    value: 0.0,
                })?;
                let zeniths = data.theta_o.iter().map(|t| t.to_radians()).collect();
                (zeniths, data.column(back), data.column(front))
            }
            BrdfAdapter::Sampled(brdf) => {
                let branch = |phi: f64| -> Vec<f64> {
                    settings
                        .zeniths()
                        .iter()
                        .map(|theta| {
                            brdf.evaluate(
                                (theta.to_degrees(), phi),
                                settings.wi(),
                                settings.wavelength(),
                            )
                        })
                        .collect()
                };
                (settings.zeniths().to_vec(), branch(180.0), branch(0.0))
            }
        };

        let mut values = Vec::with_capacity(backward.len() + forward.len());
        values.extend(backward.iter().rev());
        values.extend(forward);

        debug!(adapter = ?adapter.kind(), zeniths = zeniths.len(), "Evaluated principal plane view");
        Ok(PrincipalPlanePlot { zeniths, values })
    }
}

impl PrincipalPlanePlot {
    /// X coordinates matching `values`: `-zeniths` reversed, then `zeniths`.
    pub fn signed_zeniths(&self) -> Vec<f64> {
        self.zeniths
            .iter()
            .rev()
            .map(|z| -z)
            .chain(self.zeniths.iter().copied())
            .collect()
    }

    /// The plot as an array with dims `(phi, theta)` and `phi = [π, 0]`.
    ///
    /// Both rows run in ascending zenith order.
    pub fn to_array(&self) -> BrdfResult<LabeledArray> {
        let n = self.zeniths.len();
        let (backward, forward) = self.values.split_at(n.min(self.values.len()));
        let data = backward.iter().rev().chain(forward).copied().collect();
        let axes = vec![
            Axis::new("phi", vec![PI, 0.0]),
            Axis::new("theta", self.zeniths.clone()),
        ];
        Ok(LabeledArray::new(axes, data)?.with_name("brdf"))
    }
}
