//! NetCDF reader and writer for labeled datasets.
//!
//! NetCDF is the container format used for every on-disk data set: solar
//! irradiance spectra, absorption cross sections and gridded BRDF results.
//! Files map onto [`rt_common::Dataset`] as follows:
//!
//! - every dimension becomes an [`Axis`](rt_common::Axis); its coordinates are
//!   read from the 1-D variable of the same name, or default to `0..len`
//! - every other variable becomes a [`LabeledArray`](rt_common::LabeledArray)
//!   of `f64` values
//! - numeric and text global attributes are kept
//!
//! # Implementation Notes
//!
//! This uses the `netcdf` crate, which wraps libnetcdf/HDF5.
//! System requirements: libhdf5-dev libnetcdf-dev.

pub mod error;
pub mod native;
pub mod reader;
pub mod writer;

pub use error::{NetCdfError, NetCdfResult};
pub use native::silence_hdf5_errors;
pub use reader::open_dataset;
pub use writer::write_dataset;

/// File extension (without the dot) of NetCDF files.
pub const NETCDF_EXTENSION: &str = "nc";
