//! Conversions between spherical angles and unit direction vectors.
//!
//! The local frame has its z axis along the surface normal. Zenith angles
//! are measured from +z, azimuth angles counter-clockwise from +x.

use nalgebra::Vector3;
use std::f64::consts::TAU;

use crate::error::{CommonError, CommonResult};

/// Unit direction for zenith `theta` and azimuth `phi`, in radians.
pub fn angles_to_direction(theta: f64, phi: f64) -> Vector3<f64> {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vector3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
}

/// Zenith and azimuth angles (radians) of a direction.
///
/// The vector does not need to be normalized. The azimuth is returned in
/// `[0, 2π)`.
pub fn direction_to_angles(direction: &Vector3<f64>) -> CommonResult<(f64, f64)> {
    let norm = direction.norm();
    if norm == 0.0 {
        return Err(CommonError::ZeroDirection);
    }

    let unit = direction / norm;
    let theta = unit.z.clamp(-1.0, 1.0).acos();
    // rem_euclid rounds tiny negative angles up to exactly TAU
    let mut phi = unit.y.atan2(unit.x).rem_euclid(TAU);
    if phi >= TAU {
        phi = 0.0;
    }

    Ok((theta, phi))
}
