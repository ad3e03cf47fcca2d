//! Library side of the `rt-data` command-line tool.
//!
//! The binary only parses arguments and prints; configuration loading and
//! every command live here so they can be tested without spawning a process.

pub mod commands;
pub mod config_loader;
pub mod summary;

pub use config_loader::{load_config, LoggingConfig, RtDataConfig};
pub use summary::DatasetSummary;
