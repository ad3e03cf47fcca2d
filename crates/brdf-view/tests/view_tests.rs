//! Polar and principal-plane views over both adapter kinds.

use std::f64::consts::{FRAC_PI_2, PI};

use brdf_view::{
    generate_ticks, AdapterKind, BrdfAdapter, BrdfError, GriddedBrdf, Lambertian, PolarView,
    PrincipalPlaneView, SampledBrdf, ViewSettings,
};
use test_utils::{
    angles, assert_approx_eq, assert_slice_approx_eq, brdf_pattern, create_brdf_grid,
    BrdfGridLayout,
};

fn gridded(layout: &BrdfGridLayout) -> BrdfAdapter {
    GriddedBrdf::new(create_brdf_grid(layout)).unwrap().into()
}

fn lambertian(reflectance: f64) -> BrdfAdapter {
    SampledBrdf::new(Lambertian::new(reflectance)).into()
}

fn settings_at(theta_i: f64, wavelength: f64) -> ViewSettings {
    let mut settings = ViewSettings::default();
    settings.set_wi(theta_i, 0.0);
    settings.set_wavelength(wavelength);
    settings
}

// ============================================================================
// Polar view
// ============================================================================

#[test]
fn test_polar_sampled_lambertian() {
    let adapter = lambertian(0.3);
    assert_eq!(adapter.kind(), AdapterKind::Sampled);

    let mut settings = settings_at(30.0, 650.0);
    settings.set_azm_steps(9);
    settings.set_zen_steps(7);
    let plot = PolarView::evaluate(&adapter, &settings).unwrap();

    assert_eq!(plot.values.len(), 9);
    assert!(plot.values.iter().all(|row| row.len() == 7));
    // The last zenith sits on the horizon and may round to zero
    for row in &plot.values {
        for &value in &row[..6] {
            assert_approx_eq!(value, 0.3 / PI, 1e-12);
        }
    }
}

#[test]
fn test_polar_gridded_adopts_data_grid() {
    let layout = BrdfGridLayout::default();
    let adapter = gridded(&layout);
    assert_eq!(adapter.kind(), AdapterKind::Gridded);

    let plot = PolarView::evaluate(&adapter, &settings_at(30.0, 550.0)).unwrap();

    let expected_zen: Vec<f64> = layout.theta_o.iter().map(|t| t.to_radians()).collect();
    assert_slice_approx_eq!(&plot.zeniths, &expected_zen, 1e-12);
    assert_eq!(plot.azimuths.len(), 5);
    assert_approx_eq!(plot.azimuths[4], 2.0 * PI, 1e-12);

    // values[azimuth][zenith]
    assert_approx_eq!(
        plot.values[1][2],
        brdf_pattern(30.0, 0.0, 60.0, 90.0, 550.0),
        1e-9
    );

    let array = plot.to_array().unwrap();
    assert_eq!(array.axis_names(), vec!["phi", "theta"]);
    assert_eq!(array.shape(), vec![5, 3]);
}

#[test]
fn test_polar_gridded_missing_wavelength() {
    let adapter = gridded(&BrdfGridLayout::default());
    let result = PolarView::evaluate(&adapter, &ViewSettings::default());
    assert!(matches!(result, Err(BrdfError::NoExactMatch { .. })));
}

// ============================================================================
// Principal plane view
// ============================================================================

#[test]
fn test_principal_plane_sampled_layout() {
    let adapter = lambertian(1.0);
    let mut settings = settings_at(0.0, 650.0);
    settings.set_zen_steps(4);

    let plot = PrincipalPlaneView::evaluate(&adapter, &settings).unwrap();
    assert_eq!(plot.values.len(), 8);
    assert_eq!(plot.zeniths.len(), 4);

    let signed = plot.signed_zeniths();
    assert_approx_eq!(signed[0], -FRAC_PI_2, 1e-12);
    assert_approx_eq!(signed[3], 0.0, 1e-12);
    assert_approx_eq!(signed[4], 0.0, 1e-12);
    assert_approx_eq!(signed[7], FRAC_PI_2, 1e-12);

    // Both zenith samples adjacent to the middle look straight up
    assert_approx_eq!(plot.values[3], 1.0 / PI, 1e-12);
    assert_approx_eq!(plot.values[4], 1.0 / PI, 1e-12);
}

#[test]
fn test_principal_plane_gridded_branches() {
    let layout = BrdfGridLayout::default();
    let adapter = gridded(&layout);
    let plot = PrincipalPlaneView::evaluate(&adapter, &settings_at(30.0, 500.0)).unwrap();

    let n = layout.theta_o.len();
    assert_eq!(plot.values.len(), 2 * n);

    // First half: phi_o = 180, from the horizon inwards
    for (k, &theta_o) in layout.theta_o.iter().rev().enumerate() {
        assert_approx_eq!(
            plot.values[k],
            brdf_pattern(30.0, 0.0, theta_o, 180.0, 500.0),
            1e-9
        );
    }
    // Second half: phi_o = 0, from the zenith outwards
    for (k, &theta_o) in layout.theta_o.iter().enumerate() {
        assert_approx_eq!(
            plot.values[n + k],
            brdf_pattern(30.0, 0.0, theta_o, 0.0, 500.0),
            1e-9
        );
    }

    let array = plot.to_array().unwrap();
    assert_eq!(array.shape(), vec![2, n]);
    assert_eq!(array.axis("phi").unwrap().coords, vec![PI, 0.0]);
    // Rows run in ascending zenith order
    assert_approx_eq!(
        array.get(&[0, 0]).unwrap(),
        brdf_pattern(30.0, 0.0, 0.0, 180.0, 500.0),
        1e-9
    );
    assert_approx_eq!(
        array.get(&[1, n - 1]).unwrap(),
        brdf_pattern(30.0, 0.0, 60.0, 0.0, 500.0),
        1e-9
    );
}

#[test]
fn test_principal_plane_requires_180() {
    let layout = BrdfGridLayout {
        phi_o: angles::PHI_O_NO_PRINCIPAL.to_vec(),
        ..BrdfGridLayout::default()
    };
    let adapter = gridded(&layout);
    let result = PrincipalPlaneView::evaluate(&adapter, &settings_at(0.0, 550.0));
    assert_eq!(result.unwrap_err(), BrdfError::MissingPrincipalPlane);
}

// ============================================================================
// Ticks and export
// ============================================================================

#[test]
fn test_ticks_are_evenly_spaced() {
    let (ticks, labels) = generate_ticks(11, (-FRAC_PI_2, FRAC_PI_2));
    assert_eq!(ticks.len(), 11);
    assert_eq!(labels.len(), 11);
    let step = ticks[1] - ticks[0];
    for pair in ticks.windows(2) {
        assert_approx_eq!(pair[1] - pair[0], step, 1e-12);
    }
    assert_eq!(labels[0], "-90.0°");
    assert_eq!(labels[10], "90.0°");
}

#[test]
fn test_plot_serializes_to_json() {
    let adapter = lambertian(0.5);
    let mut settings = ViewSettings::default();
    settings.set_zen_steps(3);
    let plot = PrincipalPlaneView::evaluate(&adapter, &settings).unwrap();

    let json = serde_json::to_value(&plot).unwrap();
    assert_eq!(json["zeniths"].as_array().unwrap().len(), 3);
    assert_eq!(json["values"].as_array().unwrap().len(), 6);
}
