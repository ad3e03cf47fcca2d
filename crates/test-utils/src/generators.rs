//! Generators for synthetic BRDF grids and spectra.
//!
//! Values follow simple closed-form patterns so tests can recompute the
//! expected value of any cell from its coordinates.

use rt_common::{Axis, Dataset, LabeledArray};

/// Axis names of a gridded BRDF, in the conventional storage order.
pub const BRDF_AXES: [&str; 5] = ["theta_i", "phi_i", "theta_o", "phi_o", "wavelength"];

/// Coordinates for each axis of a synthetic BRDF grid.
#[derive(Debug, Clone)]
pub struct BrdfGridLayout {
    pub theta_i: Vec<f64>,
    pub phi_i: Vec<f64>,
    pub theta_o: Vec<f64>,
    pub phi_o: Vec<f64>,
    pub wavelength: Vec<f64>,
}

impl BrdfGridLayout {
    /// Coordinates of the axis called `name`.
    pub fn coords(&self, name: &str) -> Vec<f64> {
        match name {
            "theta_i" => self.theta_i.clone(),
            "phi_i" => self.phi_i.clone(),
            "theta_o" => self.theta_o.clone(),
            "phi_o" => self.phi_o.clone(),
            "wavelength" => self.wavelength.clone(),
            other => panic!("unknown BRDF axis {}", other),
        }
    }
}

impl Default for BrdfGridLayout {
    /// Small grid with `phi_o` missing its 360° boundary.
    fn default() -> Self {
        Self {
            theta_i: vec![0.0, 30.0],
            phi_i: vec![0.0],
            theta_o: vec![0.0, 30.0, 60.0],
            phi_o: vec![0.0, 90.0, 180.0, 270.0],
            wavelength: vec![500.0, 550.0],
        }
    }
}

/// Reference value pattern for synthetic BRDF grids.
///
/// Every coordinate contributes a distinct decimal weight, so any
/// mismatch between axes shows up in the value.
pub fn brdf_pattern(theta_i: f64, phi_i: f64, theta_o: f64, phi_o: f64, wavelength: f64) -> f64 {
    theta_i * 1e6 + phi_i * 1e3 + theta_o * 10.0 + phi_o * 0.01 + wavelength * 1e-6
}

/// Creates a 5-D BRDF grid with axes stored in `order`, filled with [`brdf_pattern`].
pub fn create_brdf_grid_ordered(layout: &BrdfGridLayout, order: [&str; 5]) -> LabeledArray {
    let axes: Vec<Axis> = order
        .iter()
        .map(|name| Axis::new(*name, layout.coords(name)))
        .collect();
    let positions: Vec<usize> = BRDF_AXES
        .iter()
        .map(|name| order.iter().position(|o| o == name).expect("axis present"))
        .collect();

    let coords: Vec<Vec<f64>> = axes.iter().map(|a| a.coords.clone()).collect();
    LabeledArray::from_fn(axes, |idx| {
        let value = |k: usize| coords[positions[k]][idx[positions[k]]];
        brdf_pattern(value(0), value(1), value(2), value(3), value(4))
    })
    .expect("valid BRDF grid")
}

/// Creates a 5-D BRDF grid in the conventional axis order.
pub fn create_brdf_grid(layout: &BrdfGridLayout) -> LabeledArray {
    create_brdf_grid_ordered(layout, BRDF_AXES)
}

/// Creates a 1-D spectrum data set with one variable over the axis `axis`.
///
/// Values are `scale * coordinate`.
pub fn create_spectrum(variable: &str, axis: &str, coords: Vec<f64>, scale: f64) -> Dataset {
    let data = coords.iter().map(|c| c * scale).collect();
    let array = LabeledArray::new(vec![Axis::new(axis, coords)], data).expect("valid spectrum");
    Dataset::new().with_variable(variable, array)
}

/// Evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps - 1) as f64;
            (0..steps).map(|i| start + step * i as f64).collect()
        }
    }
}
