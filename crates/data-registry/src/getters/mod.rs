//! Getters: per-family knowledge of where data sets live on disk.
//!
//! The set of data families is closed. Each family has its own getter type
//! implementing [`DataGetter`], and [`Getter`] dispatches between them.

mod absorption;
mod solar;

pub use absorption::AbsorptionGetter;
pub use solar::SolarIrradianceGetter;

use std::collections::BTreeMap;

use rt_common::Dataset;
use serde::{Deserialize, Serialize};

use crate::error::RegistryResult;
use crate::resolver::PathResolver;

/// Capabilities every data family exposes.
pub trait DataGetter {
    /// Load the data set registered as `id`.
    fn open(&self, id: &str, resolver: &PathResolver) -> RegistryResult<Dataset>;

    /// Identifiers this getter knows about, sorted.
    fn registered(&self) -> Vec<String>;

    /// Whether the backing data of each identifier currently exists on disk.
    fn find(&self, resolver: &PathResolver) -> BTreeMap<String, bool>;
}

/// Data families known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GetterKind {
    /// One NetCDF file per solar irradiance spectrum.
    SolarIrradiance,
    /// One directory of NetCDF files per absorption data set.
    Absorption,
}

impl GetterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SolarIrradiance => "solar_irradiance",
            Self::Absorption => "absorption",
        }
    }
}

/// A getter of any known family.
#[derive(Debug, Clone)]
pub enum Getter {
    SolarIrradiance(SolarIrradianceGetter),
    Absorption(AbsorptionGetter),
}

impl Getter {
    pub fn kind(&self) -> GetterKind {
        match self {
            Self::SolarIrradiance(_) => GetterKind::SolarIrradiance,
            Self::Absorption(_) => GetterKind::Absorption,
        }
    }

    /// Build a getter of `kind` from an identifier → relative path table.
    pub fn from_table<I, K, V>(kind: GetterKind, table: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<std::path::PathBuf>,
    {
        match kind {
            GetterKind::SolarIrradiance => Self::SolarIrradiance(SolarIrradianceGetter::new(table)),
            GetterKind::Absorption => Self::Absorption(AbsorptionGetter::new(table)),
        }
    }

    /// The built-in getter of `kind`.
    pub fn builtin(kind: GetterKind) -> Self {
        match kind {
            GetterKind::SolarIrradiance => Self::SolarIrradiance(SolarIrradianceGetter::builtin()),
            GetterKind::Absorption => Self::Absorption(AbsorptionGetter::builtin()),
        }
    }
}

impl DataGetter for Getter {
    fn open(&self, id: &str, resolver: &PathResolver) -> RegistryResult<Dataset> {
        match self {
            Self::SolarIrradiance(g) => g.open(id, resolver),
            Self::Absorption(g) => g.open(id, resolver),
        }
    }

    fn registered(&self) -> Vec<String> {
        match self {
            Self::SolarIrradiance(g) => g.registered(),
            Self::Absorption(g) => g.registered(),
        }
    }

    fn find(&self, resolver: &PathResolver) -> BTreeMap<String, bool> {
        match self {
            Self::SolarIrradiance(g) => g.find(resolver),
            Self::Absorption(g) => g.find(resolver),
        }
    }
}

impl From<SolarIrradianceGetter> for Getter {
    fn from(getter: SolarIrradianceGetter) -> Self {
        Self::SolarIrradiance(getter)
    }
}

impl From<AbsorptionGetter> for Getter {
    fn from(getter: AbsorptionGetter) -> Self {
        Self::Absorption(getter)
    }
}
