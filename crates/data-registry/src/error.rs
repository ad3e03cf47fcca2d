//! Error types for data set resolution.

use std::path::PathBuf;
use thiserror::Error;

use netcdf_parser::NetCdfError;

/// Errors that can occur while resolving or opening a data set.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The category is not in the registry.
    #[error("invalid data category '{0}'")]
    UnknownCategory(String),

    /// The category is known but its getter has no such identifier.
    #[error("unknown data set '{id}' in category '{category}'")]
    UnknownIdentifier { category: String, id: String },

    /// The resolved file has an extension no loader handles.
    #[error("cannot load resource {}", .0.display())]
    UnsupportedResource(PathBuf),

    /// No search root contains the requested path.
    #[error("resource not found: {}", .0.display())]
    ResourceNotFound(PathBuf),

    /// A data directory contains no loadable file.
    #[error("no NetCDF file in data directory {}", .0.display())]
    EmptyDataDirectory(PathBuf),

    /// A category was registered twice.
    #[error("category '{0}' is already registered")]
    DuplicateCategory(String),

    /// Neither a path nor a complete (category, id) pair was given.
    #[error("if 'path' is not set, 'category' and 'id' must both be set")]
    MissingArguments,

    /// Directory listing failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// The file could not be loaded.
    #[error("failed to load data set: {0}")]
    Load(#[from] NetCdfError),

    /// Loaded files could not be combined.
    #[error("invalid data set layout: {0}")]
    Array(#[from] rt_common::CommonError),
}

impl RegistryError {
    /// Report an unknown identifier under the category key it was requested with.
    pub(crate) fn in_category(self, category: &str) -> Self {
        match self {
            Self::UnknownIdentifier { id, .. } => Self::UnknownIdentifier {
                category: category.to_string(),
                id,
            },
            other => other,
        }
    }
}

impl From<walkdir::Error> for RegistryError {
    fn from(err: walkdir::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type for registry operations.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
