//! Data set registry and path resolution.
//!
//! Data sets are opened in one of two ways:
//!
//! - by `(category, id)`: the category selects a getter, which knows where the
//!   data set lives relative to the data roots
//! - by path: the path is resolved against the data roots and loaded directly
//!   if it is a NetCDF file
//!
//! # Example
//!
//! ```ignore
//! use data_registry::{DataRegistry, DataSource, PathResolver};
//!
//! let registry = DataRegistry::builtin(PathResolver::from_env());
//!
//! let ds = registry.open(&DataSource::registered("solar_irradiance_spectrum", "thuillier_2003"))?;
//! let ds = registry.open(&DataSource::path("spectra/solar_irradiance/thuillier_2003.nc"))?;
//! ```
//!
//! The registry is built once and passed explicitly; there is no global
//! instance.

pub mod config;
pub mod error;
pub mod getters;
pub mod registry;
pub mod resolver;

pub use config::{CategoryConfig, RegistryConfig};
pub use error::{RegistryError, RegistryResult};
pub use getters::{AbsorptionGetter, DataGetter, Getter, GetterKind, SolarIrradianceGetter};
pub use registry::{
    DataRegistry, DataRegistryBuilder, DataSource, ABSORPTION_SPECTRUM, SOLAR_IRRADIANCE_SPECTRUM,
};
pub use resolver::{expand_root, PathResolver, DATA_DIR_ENV, DATA_PATH_ENV};
