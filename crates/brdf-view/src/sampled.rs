//! Adapter around analytic BSDF models evaluated on demand.

use std::f64::consts::PI;
use std::fmt;

use nalgebra::Vector3;
use rt_common::angles_to_direction;

/// A scattering model evaluated for a pair of local-frame directions.
///
/// Directions are unit vectors with +z along the surface normal. Like a
/// rendering kernel's BSDF plugin, `eval` returns the cosine-weighted value
/// `f(wi, wo) · cos(theta_o)`.
pub trait BsdfModel: fmt::Debug + Send + Sync {
    fn eval(&self, wi: &Vector3<f64>, wo: &Vector3<f64>, wavelength: f64) -> f64;
}

/// Ideal diffuse reflector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lambertian {
    pub reflectance: f64,
}

impl Lambertian {
    pub fn new(reflectance: f64) -> Self {
        Self { reflectance }
    }
}

impl BsdfModel for Lambertian {
    fn eval(&self, wi: &Vector3<f64>, wo: &Vector3<f64>, _wavelength: f64) -> f64 {
        if wi.z <= 0.0 || wo.z <= 0.0 {
            return 0.0;
        }
        self.reflectance / PI * wo.z
    }
}

/// Perfect absorber.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Black;

impl BsdfModel for Black {
    fn eval(&self, _wi: &Vector3<f64>, _wo: &Vector3<f64>, _wavelength: f64) -> f64 {
        0.0
    }
}

/// BRDF values computed point by point from a [`BsdfModel`].
#[derive(Debug)]
pub struct SampledBrdf {
    model: Box<dyn BsdfModel>,
}

impl SampledBrdf {
    pub fn new(model: impl BsdfModel + 'static) -> Self {
        Self {
            model: Box::new(model),
        }
    }

    pub fn model(&self) -> &dyn BsdfModel {
        self.model.as_ref()
    }

    /// BRDF value for outgoing `wo` and incoming `wi`, both `(theta, phi)`
    /// in degrees.
    ///
    /// The cosine weighting of the model is divided out; directions below the
    /// horizon give 0.
    pub fn evaluate(&self, wo: (f64, f64), wi: (f64, f64), wavelength: f64) -> f64 {
        let wi = angles_to_direction(wi.0.to_radians(), wi.1.to_radians());
        let wo = angles_to_direction(wo.0.to_radians(), wo.1.to_radians());
        if wo.z <= 0.0 {
            return 0.0;
        }
        self.model.eval(&wi, &wo, wavelength) / wo.z
    }
}
