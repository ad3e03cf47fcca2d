use std::f64::consts::{FRAC_PI_2, TAU};

use nalgebra::Vector3;
use rt_common::direction_to_angles;
use serde::Serialize;

use super::linspace;
use crate::error::{BrdfError, BrdfResult};

const DEFAULT_STEPS: usize = 101;
const DEFAULT_WAVELENGTH: f64 = 650.0;

/// Incident direction, sampling grids and wavelength shared by all views.
///
/// The incident direction is `(theta, phi)` in degrees. The sampling grids
/// are in radians: zeniths span `[0, π/2]` and azimuths `[0, 2π]`, both ends
/// included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSettings {
    wi: (f64, f64),
    zeniths: Vec<f64>,
    azimuths: Vec<f64>,
    wavelength: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            wi: (0.0, 0.0),
            zeniths: linspace(0.0, FRAC_PI_2, DEFAULT_STEPS),
            azimuths: linspace(0.0, TAU, DEFAULT_STEPS),
            wavelength: DEFAULT_WAVELENGTH,
        }
    }
}

impl ViewSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wi(&self) -> (f64, f64) {
        self.wi
    }

    /// Incident direction as `(theta, phi)` in degrees.
    pub fn set_wi(&mut self, theta: f64, phi: f64) {
        self.wi = (theta, phi);
    }

    /// Incident direction from a Cartesian vector of any non-zero length.
    pub fn set_wi_cartesian(&mut self, direction: Vector3<f64>) -> BrdfResult<()> {
        if direction.norm() == 0.0 {
            return Err(BrdfError::ZeroDirection);
        }
        let (theta, phi) = direction_to_angles(&direction)?;
        self.wi = (theta.to_degrees(), phi.to_degrees());
        Ok(())
    }

    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    /// Wavelength in nanometers. Models without spectral dependency ignore it.
    pub fn set_wavelength(&mut self, wavelength: f64) {
        self.wavelength = wavelength;
    }

    /// Zenith sampling grid, radians.
    pub fn zeniths(&self) -> &[f64] {
        &self.zeniths
    }

    pub fn set_zeniths(&mut self, zeniths: Vec<f64>) {
        self.zeniths = zeniths;
    }

    pub fn zen_steps(&self) -> usize {
        self.zeniths.len()
    }

    /// Sample `[0, π/2]` with `steps` points, both ends included.
    pub fn set_zen_steps(&mut self, steps: usize) {
        self.zeniths = linspace(0.0, FRAC_PI_2, steps);
    }

    /// Zenith resolution in degrees per step.
    pub fn zen_res(&self) -> f64 {
        90.0 / (self.zeniths.len().saturating_sub(1)) as f64
    }

    /// Sample zeniths every `res` degrees, rounding the step count up.
    pub fn set_zen_res(&mut self, res: f64) -> BrdfResult<()> {
        self.set_zen_steps(steps_for(90.0, res)?);
        Ok(())
    }

    /// Azimuth sampling grid, radians.
    pub fn azimuths(&self) -> &[f64] {
        &self.azimuths
    }

    pub fn set_azimuths(&mut self, azimuths: Vec<f64>) {
        self.azimuths = azimuths;
    }

    pub fn azm_steps(&self) -> usize {
        self.azimuths.len()
    }

    /// Sample `[0, 2π]` with `steps` points. Both 0° and 360° are counted.
    pub fn set_azm_steps(&mut self, steps: usize) {
        self.azimuths = linspace(0.0, TAU, steps);
    }

    /// Azimuth resolution in degrees per step.
    pub fn azm_res(&self) -> f64 {
        360.0 / (self.azimuths.len().saturating_sub(1)) as f64
    }

    /// Sample azimuths every `res` degrees, rounding the step count up.
    pub fn set_azm_res(&mut self, res: f64) -> BrdfResult<()> {
        self.set_azm_steps(steps_for(360.0, res)?);
        Ok(())
    }
}

/// Sample count covering `span` degrees at `res` degrees per step.
///
/// A resolution coarser than the span yields the two end points.
fn steps_for(span: f64, res: f64) -> BrdfResult<usize> {
    if !res.is_finite() || res <= 0.0 {
        return Err(BrdfError::InvalidResolution(res));
    }
    Ok((span / res).ceil() as usize + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ViewSettings::default();
        assert_eq!(settings.zen_steps(), 101);
        assert_eq!(settings.azm_steps(), 101);
        assert_eq!(settings.wavelength(), 650.0);
        assert_eq!(settings.wi(), (0.0, 0.0));
        assert!((settings.zeniths()[100] - FRAC_PI_2).abs() < 1e-12);
        assert!((settings.azimuths()[100] - TAU).abs() < 1e-12);
    }

    #[test]
    fn test_resolution_rounds_steps_up() {
        let mut settings = ViewSettings::default();
        settings.set_azm_res(7.0).unwrap();
        // ceil(360 / 7) = 52 intervals
        assert_eq!(settings.azm_steps(), 53);
        settings.set_zen_res(30.0).unwrap();
        assert_eq!(settings.zen_steps(), 4);
        assert!((settings.zen_res() - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_resolution_rejected() {
        let mut settings = ViewSettings::default();
        for res in [0.0, -10.0, f64::INFINITY] {
            assert_eq!(settings.set_zen_res(res), Err(BrdfError::InvalidResolution(res)));
            assert_eq!(settings.set_azm_res(res), Err(BrdfError::InvalidResolution(res)));
        }
        assert!(matches!(
            settings.set_azm_res(f64::NAN),
            Err(BrdfError::InvalidResolution(r)) if r.is_nan()
        ));
        assert!(matches!(
            settings.set_zen_res(f64::NAN),
            Err(BrdfError::InvalidResolution(r)) if r.is_nan()
        ));

        // rejected settings leave the grids untouched
        assert_eq!(settings.zen_steps(), 101);
        assert_eq!(settings.azm_steps(), 101);
        assert!(settings.azm_res().is_finite());
    }

    #[test]
    fn test_coarse_resolution_keeps_end_points() {
        let mut settings = ViewSettings::default();
        settings.set_zen_res(400.0).unwrap();
        assert_eq!(settings.zen_steps(), 2);
        assert!((settings.zen_res() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_azm_res_from_steps() {
        let mut settings = ViewSettings::default();
        settings.set_azm_steps(5);
        assert!((settings.azm_res() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_wi_cartesian() {
        let mut settings = ViewSettings::default();
        settings.set_wi_cartesian(Vector3::new(0.0, 2.0, 2.0)).unwrap();
        let (theta, phi) = settings.wi();
        assert!((theta - 45.0).abs() < 1e-9);
        assert!((phi - 90.0).abs() < 1e-9);

        assert_eq!(
            settings.set_wi_cartesian(Vector3::zeros()),
            Err(BrdfError::ZeroDirection)
        );
    }
}
