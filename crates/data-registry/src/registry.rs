//! The category → getter registry and the `open`/`registered`/`find` entry points.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rt_common::Dataset;
use tracing::{debug, info};

use crate::error::{RegistryError, RegistryResult};
use crate::getters::{DataGetter, Getter, GetterKind};
use crate::resolver::PathResolver;

/// Category of built-in solar irradiance spectra.
pub const SOLAR_IRRADIANCE_SPECTRUM: &str = "solar_irradiance_spectrum";

/// Category of built-in absorption spectra.
pub const ABSORPTION_SPECTRUM: &str = "absorption_spectrum";

/// What to open: a registered data set or an explicit path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Registered { category: String, id: String },
    Path(PathBuf),
}

impl DataSource {
    /// Build a source from optional arguments.
    ///
    /// `path` takes precedence. Without it, both `category` and `id` are
    /// required.
    pub fn from_parts(
        category: Option<&str>,
        id: Option<&str>,
        path: Option<&Path>,
    ) -> RegistryResult<Self> {
        if let Some(path) = path {
            return Ok(Self::Path(path.to_path_buf()));
        }
        match (category, id) {
            (Some(category), Some(id)) => Ok(Self::registered(category, id)),
            _ => Err(RegistryError::MissingArguments),
        }
    }

    pub fn registered(category: impl Into<String>, id: impl Into<String>) -> Self {
        Self::Registered {
            category: category.into(),
            id: id.into(),
        }
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }
}

/// Maps category names to getters and resolves data sets through them.
///
/// A registry is immutable once built; build a new one to change categories.
#[derive(Debug, Clone)]
pub struct DataRegistry {
    resolver: PathResolver,
    getters: BTreeMap<String, Getter>,
}

impl DataRegistry {
    pub fn builder(resolver: PathResolver) -> DataRegistryBuilder {
        DataRegistryBuilder {
            resolver,
            getters: BTreeMap::new(),
            duplicate: None,
        }
    }

    /// Registry with the built-in solar irradiance and absorption categories.
    pub fn builtin(resolver: PathResolver) -> Self {
        let mut getters = BTreeMap::new();
        getters.insert(
            SOLAR_IRRADIANCE_SPECTRUM.to_string(),
            Getter::builtin(GetterKind::SolarIrradiance),
        );
        getters.insert(
            ABSORPTION_SPECTRUM.to_string(),
            Getter::builtin(GetterKind::Absorption),
        );
        Self { resolver, getters }
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Registered category names, sorted.
    pub fn categories(&self) -> Vec<&str> {
        self.getters.keys().map(String::as_str).collect()
    }

    /// Getter registered for `category`.
    pub fn getter(&self, category: &str) -> RegistryResult<&Getter> {
        self.getters
            .get(category)
            .ok_or_else(|| RegistryError::UnknownCategory(category.to_string()))
    }

    /// Open a data set.
    pub fn open(&self, source: &DataSource) -> RegistryResult<Dataset> {
        match source {
            DataSource::Registered { category, id } => self.open_registered(category, id),
            DataSource::Path(path) => self.open_path(path),
        }
    }

    /// Open the data set registered as `id` in `category`.
    pub fn open_registered(&self, category: &str, id: &str) -> RegistryResult<Dataset> {
        let getter = self.getter(category)?;
        debug!(category = category, id = id, "Opening registered data set");
        getter
            .open(id, &self.resolver)
            .map_err(|e| e.in_category(category))
    }

    /// Resolve `path` against the search roots and load it.
    ///
    /// Only NetCDF files are supported; any other extension fails with
    /// [`RegistryError::UnsupportedResource`] naming the resolved path.
    pub fn open_path(&self, path: impl AsRef<Path>) -> RegistryResult<Dataset> {
        let resolved = self.resolver.resolve(path)?;
        let extension = resolved.extension().and_then(|s| s.to_str());

        if extension == Some(netcdf_parser::NETCDF_EXTENSION) {
            info!(path = %resolved.display(), "Opening data file");
            return Ok(netcdf_parser::open_dataset(&resolved)?);
        }

        Err(RegistryError::UnsupportedResource(resolved))
    }

    /// Identifiers known in `category`, sorted.
    pub fn registered(&self, category: &str) -> RegistryResult<Vec<String>> {
        Ok(self.getter(category)?.registered())
    }

    /// Presence of the backing data of every identifier in `category`.
    pub fn find(&self, category: &str) -> RegistryResult<BTreeMap<String, bool>> {
        Ok(self.getter(category)?.find(&self.resolver))
    }
}

/// Collects categories before freezing them into a [`DataRegistry`].
#[derive(Debug)]
pub struct DataRegistryBuilder {
    resolver: PathResolver,
    getters: BTreeMap<String, Getter>,
    duplicate: Option<String>,
}

impl DataRegistryBuilder {
    /// Register `getter` under `category`.
    ///
    /// Registering a category twice makes [`build`](Self::build) fail.
    pub fn category(mut self, category: impl Into<String>, getter: impl Into<Getter>) -> Self {
        let category = category.into();
        if self.getters.contains_key(&category) {
            self.duplicate.get_or_insert(category);
        } else {
            self.getters.insert(category, getter.into());
        }
        self
    }

    pub fn build(self) -> RegistryResult<DataRegistry> {
        if let Some(category) = self.duplicate {
            return Err(RegistryError::DuplicateCategory(category));
        }
        Ok(DataRegistry {
            resolver: self.resolver,
            getters: self.getters,
        })
    }
}
