//! Adapter around precomputed BRDF values on a 5-D coordinate grid.

use rt_common::{Axis, LabeledArray};
use serde::Serialize;
use tracing::debug;

use crate::error::{BrdfError, BrdfResult};

pub const THETA_I: &str = "theta_i";
pub const PHI_I: &str = "phi_i";
pub const THETA_O: &str = "theta_o";
pub const PHI_O: &str = "phi_o";
pub const WAVELENGTH: &str = "wavelength";

/// Axes a gridded BRDF must carry. Storage order is free; lookup is by name.
pub const REQUIRED_AXES: [&str; 5] = [THETA_I, PHI_I, THETA_O, PHI_O, WAVELENGTH];

/// Gridded BRDF data with a complete `phi_o` boundary.
///
/// Angles are in degrees and wavelengths in nanometers. On construction the
/// `phi_o` axis is extended so that both 0° and 360° are present, which lets
/// plots close the azimuthal circle.
#[derive(Debug, Clone, PartialEq)]
pub struct GriddedBrdf {
    data: LabeledArray,
}

impl GriddedBrdf {
    /// Validate `data` and complete its `phi_o` boundary.
    ///
    /// If 0° is missing it is copied from 360°. Otherwise, if 360° is missing,
    /// it is copied from 0°. Neither being present is an error.
    pub fn new(data: LabeledArray) -> BrdfResult<Self> {
        for name in REQUIRED_AXES {
            if data.axis(name).is_none() {
                return Err(BrdfError::MissingAxis(name.to_string()));
            }
        }

        let phi_o = data
            .axis(PHI_O)
            .ok_or_else(|| BrdfError::MissingAxis(PHI_O.to_string()))?;
        let has_zero = phi_o.contains(0.0);
        let has_full = phi_o.contains(360.0);

        let data = match (has_zero, has_full) {
            (true, true) => data,
            (false, true) => copy_phi_o_values(&data, 360.0, 0.0)?,
            (true, false) => copy_phi_o_values(&data, 0.0, 360.0)?,
            (false, false) => return Err(BrdfError::IncompleteBoundary),
        };

        Ok(Self { data })
    }

    /// The completed grid.
    pub fn data(&self) -> &LabeledArray {
        &self.data
    }

    pub fn into_data(self) -> LabeledArray {
        self.data
    }

    /// Coordinates of the axis `name`.
    pub fn coords(&self, name: &str) -> Option<&[f64]> {
        self.data.axis(name).map(|a| a.coords.as_slice())
    }

    /// The `(theta_o, phi_o)` slice at one incident direction and wavelength.
    ///
    /// `wi` is `(theta_i, phi_i)` in degrees. Every key must be literally
    /// present on its axis; nothing is interpolated.
    pub fn plotting_data(&self, wi: (f64, f64), wavelength: f64) -> BrdfResult<PlottingData> {
        let (theta_i, phi_i) = wi;
        let slice = self
            .data
            .sel(&[(THETA_I, theta_i), (PHI_I, phi_i), (WAVELENGTH, wavelength)])?
            .transposed(&[THETA_O, PHI_O])?;

        let theta_o = slice
            .axis(THETA_O)
            .map(|a| a.coords.clone())
            .unwrap_or_default();
        let phi_o = slice
            .axis(PHI_O)
            .map(|a| a.coords.clone())
            .unwrap_or_default();

        debug!(
            theta_i = theta_i,
            phi_i = phi_i,
            wavelength = wavelength,
            theta_o = theta_o.len(),
            phi_o = phi_o.len(),
            "Extracted plotting data"
        );

        Ok(PlottingData {
            theta_o,
            phi_o,
            values: slice.into_data(),
        })
    }
}

impl TryFrom<LabeledArray> for GriddedBrdf {
    type Error = BrdfError;

    fn try_from(data: LabeledArray) -> BrdfResult<Self> {
        Self::new(data)
    }
}

/// Outgoing-direction slice of a gridded BRDF.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlottingData {
    /// Outgoing zenith coordinates, degrees.
    pub theta_o: Vec<f64>,
    /// Outgoing azimuth coordinates, degrees.
    pub phi_o: Vec<f64>,
    /// Row-major values shaped `(theta_o.len(), phi_o.len())`.
    pub values: Vec<f64>,
}

impl PlottingData {
    pub fn shape(&self) -> (usize, usize) {
        (self.theta_o.len(), self.phi_o.len())
    }

    /// Value at zenith index `i` and azimuth index `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.theta_o.len() || j >= self.phi_o.len() {
            return None;
        }
        self.values.get(i * self.phi_o.len() + j).copied()
    }

    /// Index of the azimuth equal to `phi_o`, if any.
    pub fn phi_o_index(&self, phi_o: f64) -> Option<usize> {
        self.phi_o.iter().position(|&p| p == phi_o)
    }

    /// All zenith values at azimuth index `j`.
    pub fn column(&self, j: usize) -> Vec<f64> {
        (0..self.theta_o.len())
            .filter_map(|i| self.get(i, j))
            .collect()
    }
}

/// Copy-on-grow: a new array with `target` appended to `phi_o`, where cells
/// at `target` take the values found at `origin`.
fn copy_phi_o_values(data: &LabeledArray, origin: f64, target: f64) -> BrdfResult<LabeledArray> {
    let phi_index = data.require_axis(PHI_O)?;
    let phi_axis = &data.axes()[phi_index];
    let origin_position = phi_axis
        .position(origin)
        .ok_or_else(|| BrdfError::NoExactMatch {
            axis: PHI_O.to_string(),
            value: origin,
        })?;
    let target_position = phi_axis.len();

    let mut coords = phi_axis.coords.clone();
    coords.push(target);
    let axes: Vec<Axis> = data
        .axes()
        .iter()
        .enumerate()
        .map(|(i, axis)| {
            if i == phi_index {
                Axis::new(PHI_O, coords.clone())
            } else {
                axis.clone()
            }
        })
        .collect();

    let mut source = vec![0usize; axes.len()];
    let grown = LabeledArray::from_fn(axes, |index| {
        source.copy_from_slice(index);
        if index[phi_index] == target_position {
            source[phi_index] = origin_position;
        }
        // source only differs from index on phi_o, where origin_position is in range
        let value = data.get(&source);
        debug_assert!(value.is_some(), "phi_o source index {:?} out of bounds", source);
        value.unwrap_or(f64::NAN)
    })?;

    debug!(origin = origin, target = target, "Completed phi_o boundary");

    Ok(match data.name() {
        Some(name) => grown.with_name(name),
        None => grown,
    })
}
