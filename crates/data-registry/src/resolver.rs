//! Search-path based resolution of relative data paths.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{RegistryError, RegistryResult};

/// Environment variable holding an OS path list of data roots.
pub const DATA_PATH_ENV: &str = "RT_DATA_PATH";

/// Environment variable pointing at the installation directory; its `data`
/// subdirectory is searched when `RT_DATA_PATH` is unset.
pub const DATA_DIR_ENV: &str = "RT_DATA_DIR";

/// Resolves relative paths against an ordered list of root directories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathResolver {
    paths: Vec<PathBuf>,
}

impl PathResolver {
    /// Create a resolver searching `paths` in order.
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut resolver = Self::default();
        for path in paths {
            resolver.append(path);
        }
        resolver
    }

    /// Build the search list from the environment.
    ///
    /// Uses `RT_DATA_PATH` when set. Otherwise searches `$RT_DATA_DIR/data`
    /// (when `RT_DATA_DIR` is set), then the current directory.
    pub fn from_env() -> Self {
        if let Some(list) = std::env::var_os(DATA_PATH_ENV) {
            let paths: Vec<PathBuf> = std::env::split_paths(&list)
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| expand_root(&p.to_string_lossy()))
                .collect();
            if !paths.is_empty() {
                return Self::new(paths);
            }
        }

        let mut resolver = Self::default();
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            resolver.append(expand_root(&dir).join("data"));
        }
        resolver.append(".");
        resolver
    }

    /// Search roots, in resolution order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Put `path` first in the search order, moving it if already present.
    pub fn prepend(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.paths.retain(|p| *p != path);
        self.paths.insert(0, path);
    }

    /// Put `path` last in the search order, moving it if already present.
    pub fn append(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.paths.retain(|p| *p != path);
        self.paths.push(path);
    }

    /// Remove `path` from the search list. Returns whether it was present.
    pub fn remove(&mut self, path: &Path) -> bool {
        let before = self.paths.len();
        self.paths.retain(|p| p != path);
        self.paths.len() != before
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    /// Resolve `path` to an existing file or directory.
    ///
    /// Absolute paths are returned as-is if they exist. Relative paths are
    /// joined to each root in order and the first existing candidate wins.
    pub fn resolve(&self, path: impl AsRef<Path>) -> RegistryResult<PathBuf> {
        let path = path.as_ref();
        self.try_resolve(path)
            .ok_or_else(|| RegistryError::ResourceNotFound(path.to_path_buf()))
    }

    /// Like [`resolve`](Self::resolve), but returns `None` when nothing matches.
    pub fn try_resolve(&self, path: impl AsRef<Path>) -> Option<PathBuf> {
        let path = path.as_ref();

        if path.is_absolute() {
            return path.exists().then(|| path.to_path_buf());
        }

        for root in &self.paths {
            let candidate = root.join(path);
            if candidate.exists() {
                debug!(path = %path.display(), resolved = %candidate.display(), "Resolved data path");
                return Some(candidate);
            }
        }

        debug!(path = %path.display(), roots = self.paths.len(), "Data path not found in any root");
        None
    }
}

/// Expand `~` and environment variables in a root directory.
///
/// Unknown variables are left untouched rather than failing.
pub fn expand_root(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
    }
}
