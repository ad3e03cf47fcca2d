//! Absorption spectra: one directory of NetCDF files per data set.
//!
//! Large absorption data sets are split into spectral chunks, one file per
//! wavenumber range. Opening a data set concatenates every chunk along the
//! wavenumber axis.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rt_common::Dataset;
use tracing::{debug, info};
use walkdir::WalkDir;

use super::{DataGetter, GetterKind};
use crate::error::{RegistryError, RegistryResult};
use crate::resolver::PathResolver;

/// Axis along which spectral chunks are joined.
pub const WAVENUMBER_AXIS: &str = "w";

/// Built-in absorption data sets.
const BUILTIN: [&str; 2] = ["us76_u86_4", "us76_u86_4-4000_4500"];

/// Getter for absorption cross section spectra.
#[derive(Debug, Clone)]
pub struct AbsorptionGetter {
    datasets: BTreeMap<String, PathBuf>,
    concat_axis: String,
}

impl Default for AbsorptionGetter {
    fn default() -> Self {
        Self {
            datasets: BTreeMap::new(),
            concat_axis: WAVENUMBER_AXIS.to_string(),
        }
    }
}

impl AbsorptionGetter {
    /// Create a getter from an identifier → relative directory table.
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
            ..Self::default()
        }
    }

    /// Getter for the data sets shipped under `spectra/absorption/`.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN
                .iter()
                .map(|id| (*id, format!("spectra/absorption/{}", id))),
        )
    }

    /// Join chunks along `axis` instead of the wavenumber axis.
    pub fn with_concat_axis(mut self, axis: impl Into<String>) -> Self {
        self.concat_axis = axis.into();
        self
    }

    pub fn concat_axis(&self) -> &str {
        &self.concat_axis
    }
}

impl DataGetter for AbsorptionGetter {
    fn open(&self, id: &str, resolver: &PathResolver) -> RegistryResult<Dataset> {
        let relative = self
            .datasets
            .get(id)
            .ok_or_else(|| RegistryError::UnknownIdentifier {
                category: GetterKind::Absorption.as_str().to_string(),
                id: id.to_string(),
            })?;

        let dir = resolver.resolve(relative)?;
        let files = list_netcdf_files(&dir)?;
        if files.is_empty() {
            return Err(RegistryError::EmptyDataDirectory(dir));
        }

        info!(id = id, dir = %dir.display(), chunks = files.len(), "Opening absorption data set");

        let chunks = files
            .iter()
            .map(netcdf_parser::open_dataset)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Dataset::concat(&chunks, &self.concat_axis)?)
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
                    .filter(|dir| dir.is_dir())
                    .and_then(|dir| list_netcdf_files(&dir).ok())
                    .map(|files| !files.is_empty())
                    .unwrap_or(false);
                (id.clone(), present)
            })
            .collect()
    }
}

/// NetCDF files directly inside `dir`, sorted by file name.
fn list_netcdf_files(dir: &Path) -> RegistryResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path.extension().and_then(|s| s.to_str()) == Some(netcdf_parser::NETCDF_EXTENSION)
        {
            files.push(path.to_path_buf());
        } else {
            debug!(path = %path.display(), "Ignoring non-NetCDF entry");
        }
    }

    Ok(files)
}
