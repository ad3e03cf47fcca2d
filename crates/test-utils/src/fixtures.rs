//! Common test fixtures for rt-frontend tests.

/// Data set categories and identifiers.
pub mod registry {
    pub const SOLAR_CATEGORY: &str = "solar_irradiance_spectrum";
    pub const ABSORPTION_CATEGORY: &str = "absorption_spectrum";

    pub const THUILLIER_2003: &str = "thuillier_2003";
    pub const THUILLIER_2003_PATH: &str = "spectra/solar_irradiance/thuillier_2003.nc";

    pub const US76_U86_4: &str = "us76_u86_4";
    pub const US76_U86_4_DIR: &str = "spectra/absorption/us76_u86_4";
}

/// Common angular grids, in degrees.
pub mod angles {
    /// Outgoing azimuths missing the 360° boundary.
    pub const PHI_O_OPEN_END: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

    /// Outgoing azimuths missing the 0° boundary.
    pub const PHI_O_OPEN_START: [f64; 4] = [90.0, 180.0, 270.0, 360.0];

    /// Outgoing azimuths with neither boundary.
    pub const PHI_O_NO_BOUNDARY: [f64; 3] = [10.0, 90.0, 180.0];

    /// Outgoing azimuths with both boundaries but no principal plane.
    pub const PHI_O_NO_PRINCIPAL: [f64; 3] = [0.0, 120.0, 360.0];

    pub const THETA_O: [f64; 4] = [0.0, 30.0, 60.0, 85.0];
}

/// Common wavelengths, in nanometers.
pub mod wavelengths {
    pub const GREEN: f64 = 550.0;
    pub const RED: f64 = 650.0;
    pub const ABSENT: f64 = 551.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_fixtures() {
        assert!(angles::PHI_O_OPEN_END.contains(&0.0));
        assert!(!angles::PHI_O_OPEN_END.contains(&360.0));
        assert!(!angles::PHI_O_NO_BOUNDARY.contains(&0.0));
        assert!(!angles::PHI_O_NO_BOUNDARY.contains(&360.0));
    }
}
