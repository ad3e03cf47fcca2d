//! Solar irradiance spectra: one NetCDF file per data set.

use std::collections::BTreeMap;
use std::path::PathBuf;

use rt_common::Dataset;
use tracing::info;

use super::{DataGetter, GetterKind};
use crate::error::{RegistryError, RegistryResult};
use crate::resolver::PathResolver;

/// Built-in solar irradiance spectra.
const BUILTIN: [&str; 5] = [
    "blackbody_sun",
    "meftah_2017",
    "solid_2017",
    "thuillier_2003",
    "whi_2008",
];

/// Getter for solar irradiance spectra.
#[derive(Debug, Clone, Default)]
pub struct SolarIrradianceGetter {
    datasets: BTreeMap<String, PathBuf>,
}

impl SolarIrradianceGetter {
    /// Create a getter from an identifier → relative file path table.
    pub fn new<I, K, V>(table: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<PathBuf>,
    {
        Self {
            datasets: table
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Getter for the spectra shipped under `spectra/solar_irradiance/`.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN
                .iter()
                .map(|id| (*id, format!("spectra/solar_irradiance/{}.nc", id))),
        )
    }

    /// Relative path registered for `id`.
    pub fn path(&self, id: &str) -> Option<&PathBuf> {
        self.datasets.get(id)
    }
}

impl DataGetter for SolarIrradianceGetter {
    fn open(&self, id: &str, resolver: &PathResolver) -> RegistryResult<Dataset> {
        let relative = self
            .datasets
            .get(id)
            .ok_or_else(|| RegistryError::UnknownIdentifier {
                category: GetterKind::SolarIrradiance.as_str().to_string(),
                id: id.to_string(),
            })?;

        let path = resolver.resolve(relative)?;
        info!(id = id, path = %path.display(), "Opening solar irradiance spectrum");
        Ok(netcdf_parser::open_dataset(&path)?)
    }

    fn registered(&self) -> Vec<String> {
        self.datasets.keys().cloned().collect()
    }

    fn find(&self, resolver: &PathResolver) -> BTreeMap<String, bool> {
        self.datasets
            .iter()
            .map(|(id, relative)| {
                let present = resolver
                    .try_resolve(relative)
                    .map(|p| p.is_file())
                    .unwrap_or(false);
                (id.clone(), present)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_paths() {
        let getter = SolarIrradianceGetter::builtin();
        assert_eq!(
            getter.path("thuillier_2003"),
            Some(&PathBuf::from("spectra/solar_irradiance/thuillier_2003.nc"))
        );
        assert_eq!(getter.registered().len(), 5);
    }

    #[test]
    fn test_registered_is_sorted() {
        let getter = SolarIrradianceGetter::new([("b", "b.nc"), ("a", "a.nc")]);
        assert_eq!(getter.registered(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_unknown_identifier() {
        let getter = SolarIrradianceGetter::default();
        let err = getter.open("nope", &PathResolver::default()).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownIdentifier { ref id, .. } if id == "nope"));
    }
}
