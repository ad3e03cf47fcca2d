//! Registry behavior against scratch data roots containing real NetCDF files.

use std::path::Path;

use data_registry::{
    AbsorptionGetter, DataRegistry, DataSource, PathResolver, RegistryConfig, RegistryError,
    SolarIrradianceGetter,
};
use netcdf_parser::write_dataset;
use test_utils::{create_spectrum, registry as ids, temp_test_dir, touch};

/// Writes a spectrum file at `root/relative`, creating parent directories.
fn write_spectrum(root: &Path, relative: &str, coords: Vec<f64>, scale: f64) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    write_dataset(&path, &create_spectrum("k", "w", coords, scale)).unwrap();
}

/// Registry with a single category "a" whose getter knows "known_id".
fn single_category_registry(root: &Path) -> DataRegistry {
    DataRegistry::builder(PathResolver::new([root]))
        .category("a", SolarIrradianceGetter::new([("known_id", "known.nc")]))
        .build()
        .unwrap()
}

// ============================================================================
// Unknown categories
// ============================================================================

#[test]
fn test_unknown_category_fails_everywhere() {
    let dir = temp_test_dir();
    let registry = single_category_registry(dir.path());

    for category in ["", "b", "solar_irradiance_spectrum", "A"] {
        let open = registry.open(&DataSource::registered(category, "known_id"));
        assert!(
            matches!(open, Err(RegistryError::UnknownCategory(ref c)) if c == category),
            "open({:?}) should fail with UnknownCategory",
            category
        );
        assert!(matches!(
            registry.registered(category),
            Err(RegistryError::UnknownCategory(_))
        ));
        assert!(matches!(
            registry.find(category),
            Err(RegistryError::UnknownCategory(_))
        ));
    }
}

// ============================================================================
// Registered data sets
// ============================================================================

#[test]
fn test_open_known_and_missing_identifier() {
    let dir = temp_test_dir();
    write_spectrum(dir.path(), "known.nc", vec![1.0, 2.0], 3.0);
    let registry = single_category_registry(dir.path());

    let dataset = registry
        .open(&DataSource::registered("a", "known_id"))
        .expect("known id opens");
    assert_eq!(dataset.variable("k").unwrap().data(), &[3.0, 6.0]);

    let err = registry
        .open(&DataSource::registered("a", "missing_id"))
        .unwrap_err();
    match err {
        RegistryError::UnknownIdentifier { category, id } => {
            assert_eq!(category, "a");
            assert_eq!(id, "missing_id");
        }
        other => panic!("expected UnknownIdentifier, got {:?}", other),
    }
}

#[test]
fn test_registered_identifier_with_missing_file() {
    let dir = temp_test_dir();
    let registry = single_category_registry(dir.path());

    let err = registry
        .open(&DataSource::registered("a", "known_id"))
        .unwrap_err();
    assert!(matches!(err, RegistryError::ResourceNotFound(_)));
}

#[test]
fn test_registered_and_find() {
    let dir = temp_test_dir();
    touch(dir.path(), ids::THUILLIER_2003_PATH);
    let registry = DataRegistry::builtin(PathResolver::new([dir.path()]));

    let registered = registry.registered(ids::SOLAR_CATEGORY).unwrap();
    assert!(registered.contains(&ids::THUILLIER_2003.to_string()));
    assert!(registered.windows(2).all(|w| w[0] < w[1]), "ids are sorted");

    let found = registry.find(ids::SOLAR_CATEGORY).unwrap();
    assert_eq!(found.len(), registered.len());
    assert!(found[ids::THUILLIER_2003]);
    assert!(!found["whi_2008"]);
}

#[test]
fn test_absorption_chunks_concatenated() {
    let dir = temp_test_dir();
    write_spectrum(dir.path(), &format!("{}/chunk_1.nc", ids::US76_U86_4_DIR), vec![3.0, 4.0], 1.0);
    write_spectrum(dir.path(), &format!("{}/chunk_0.nc", ids::US76_U86_4_DIR), vec![1.0, 2.0], 1.0);
    let registry = DataRegistry::builtin(PathResolver::new([dir.path()]));

    let dataset = registry
        .open(&DataSource::registered(ids::ABSORPTION_CATEGORY, ids::US76_U86_4))
        .unwrap();
    let k = dataset.variable("k").unwrap();
    assert_eq!(k.axis("w").unwrap().coords, vec![1.0, 2.0, 3.0, 4.0]);

    let found = registry.find(ids::ABSORPTION_CATEGORY).unwrap();
    assert!(found[ids::US76_U86_4]);
    assert!(!found["us76_u86_4-4000_4500"]);
}

#[test]
fn test_absorption_empty_directory() {
    let dir = temp_test_dir();
    std::fs::create_dir_all(dir.path().join("abs/empty")).unwrap();
    let registry = DataRegistry::builder(PathResolver::new([dir.path()]))
        .category("abs", AbsorptionGetter::new([("empty", "abs/empty")]))
        .build()
        .unwrap();

    let err = registry.open(&DataSource::registered("abs", "empty")).unwrap_err();
    assert!(matches!(err, RegistryError::EmptyDataDirectory(_)));
}

#[test]
fn test_duplicate_category_rejected() {
    let result = DataRegistry::builder(PathResolver::default())
        .category("a", SolarIrradianceGetter::default())
        .category("a", AbsorptionGetter::default())
        .build();
    assert!(matches!(result, Err(RegistryError::DuplicateCategory(ref c)) if c == "a"));
}

// ============================================================================
// Path-based access
// ============================================================================

#[test]
fn test_open_path_netcdf() {
    let dir = temp_test_dir();
    write_spectrum(dir.path(), "data.nc", vec![10.0], 0.5);
    let registry = DataRegistry::builtin(PathResolver::new([dir.path()]));

    let dataset = registry.open(&DataSource::path("data.nc")).unwrap();
    assert_eq!(dataset.variable("k").unwrap().data(), &[5.0]);
}

#[test]
fn test_open_path_unsupported_extension() {
    let dir = temp_test_dir();
    let expected = touch(dir.path(), "data.unknown");
    let registry = DataRegistry::builtin(PathResolver::new([dir.path()]));

    let err = registry.open(&DataSource::path("data.unknown")).unwrap_err();
    match &err {
        RegistryError::UnsupportedResource(path) => assert_eq!(path, &expected),
        other => panic!("expected UnsupportedResource, got {:?}", other),
    }
    assert!(err.to_string().contains("data.unknown"));
}

#[test]
fn test_open_path_not_found() {
    let dir = temp_test_dir();
    let registry = DataRegistry::builtin(PathResolver::new([dir.path()]));
    let err = registry.open(&DataSource::path("absent.nc")).unwrap_err();
    assert!(matches!(err, RegistryError::ResourceNotFound(_)));
}

#[test]
fn test_resolver_uses_first_matching_root() {
    let first = temp_test_dir();
    let second = temp_test_dir();
    touch(second.path(), "shared.nc");
    let in_first = touch(first.path(), "shared.nc");
    let only_second = touch(second.path(), "only_second.nc");

    let resolver = PathResolver::new([first.path(), second.path()]);
    assert_eq!(resolver.resolve("shared.nc").unwrap(), in_first);
    assert_eq!(resolver.resolve("only_second.nc").unwrap(), only_second);
    assert_eq!(resolver.resolve(&only_second).unwrap(), only_second);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_registry_from_yaml_config() {
    let dir = temp_test_dir();
    write_spectrum(dir.path(), "custom/sun.nc", vec![500.0], 1.0);

    let yaml = format!(
        r#"
search_paths:
  - {root}
categories:
  my_spectra:
    kind: solar_irradiance
    datasets:
      sun: custom/sun.nc
  absorption_spectrum:
    kind: absorption
"#,
        root = dir.path().display()
    );

    let config: RegistryConfig = serde_yaml::from_str(&yaml).unwrap();
    config.validate().unwrap();
    let registry = config.build_registry().unwrap();

    assert_eq!(registry.categories(), vec!["absorption_spectrum", "my_spectra"]);
    assert_eq!(registry.registered("my_spectra").unwrap(), vec!["sun".to_string()]);
    assert!(registry.open(&DataSource::registered("my_spectra", "sun")).is_ok());
    assert_eq!(registry.resolver().paths(), &[dir.path().to_path_buf()]);
}
