//! Configuration loader for rt-data.
//!
//! Loads and validates a YAML file describing the data roots, the registry
//! categories and the logging defaults:
//!
//! ```yaml
//! search_paths:
//!   - ${RT_DATA_DIR:-/opt/rt}/data
//!   - ~/rt-data
//! categories:
//!   solar_irradiance_spectrum:
//!     kind: solar_irradiance
//!   absorption_spectrum:
//!     kind: absorption
//!     concat_axis: w
//! logging:
//!   level: info
//!   format: pretty
//! ```
//!
//! Supports environment variable substitution using ${VAR} syntax.

use anyhow::{Context, Result};
use data_registry::RegistryConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const VALID_FORMATS: [&str; 2] = ["json", "pretty"];

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RtDataConfig {
    #[serde(flatten)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

impl RtDataConfig {
    /// Built-in categories with roots from the environment.
    pub fn builtin() -> Self {
        Self {
            registry: RegistryConfig::builtin(),
            logging: LoggingConfig::default(),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load and parse a configuration YAML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RtDataConfig> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read config from {:?}", path.as_ref()))?;

    parse_config(&content)
        .with_context(|| format!("Invalid config in {:?}", path.as_ref()))
}

/// Parse configuration YAML, expanding environment variables first.
pub fn parse_config(content: &str) -> Result<RtDataConfig> {
    let expanded = expand_env_vars(content)?;

    let config: RtDataConfig =
        serde_yaml::from_str(&expanded).with_context(|| "Failed to parse config YAML")?;

    validate_config(&config)?;

    Ok(config)
}

// ============================================================================
// Environment Variable Expansion
// ============================================================================

/// Substitute `${VAR}` and `${VAR:-default}` in the YAML text. A lone `$`
/// is left alone.
pub fn expand_env_vars(content: &str) -> Result<String> {
    let mut result = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find('}')
            .with_context(|| format!("Unclosed variable substitution: ${{{}", after))?;
        result.push_str(&lookup_var(&after[..end])?);
        rest = &after[end + 1..];
    }
    result.push_str(rest);

    Ok(result)
}

/// An empty variable falls back to the default, like the shell's `:-`.
fn lookup_var(expr: &str) -> Result<String> {
    match expr.split_once(":-") {
        Some((name, default)) => Ok(std::env::var(name.trim())
            .ok()
            .filter(|val| !val.is_empty())
            .unwrap_or_else(|| default.to_string())),
        None => std::env::var(expr.trim())
            .with_context(|| format!("Environment variable {} not set", expr.trim())),
    }
}

// ============================================================================
// Validation
// ============================================================================

fn validate_config(config: &RtDataConfig) -> Result<()> {
    config
        .registry
        .validate()
        .map_err(|msg| anyhow::anyhow!("Invalid registry config: {}", msg))?;

    validate_logging(&config.logging)
}

pub fn validate_logging(logging: &LoggingConfig) -> Result<()> {
    anyhow::ensure!(
        VALID_LEVELS.contains(&logging.level.as_str()),
        "Invalid log level: {}. Must be one of: {:?}",
        logging.level,
        VALID_LEVELS
    );

    anyhow::ensure!(
        VALID_FORMATS.contains(&logging.format.as_str()),
        "Invalid log format: {}. Must be one of: {:?}",
        logging.format,
        VALID_FORMATS
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_env_vars_simple() {
        std::env::set_var("RT_TEST_VAR", "test_value");
        let result = expand_env_vars("prefix_${RT_TEST_VAR}_suffix").unwrap();
        assert_eq!(result, "prefix_test_value_suffix");
    }

    #[test]
    fn test_expand_env_vars_with_default() {
        std::env::remove_var("RT_NONEXISTENT_VAR");
        let result = expand_env_vars("value_${RT_NONEXISTENT_VAR:-default}_end").unwrap();
        assert_eq!(result, "value_default_end");
    }

    #[test]
    fn test_expand_env_vars_missing_required() {
        std::env::remove_var("RT_REQUIRED_VAR");
        assert!(expand_env_vars("${RT_REQUIRED_VAR}").is_err());
    }

    #[test]
    fn test_expand_env_vars_unclosed() {
        assert!(expand_env_vars("path: ${RT_UNCLOSED").is_err());
    }

    #[test]
    fn test_plain_dollar_kept() {
        let result = expand_env_vars("cost: $5").unwrap();
        assert_eq!(result, "cost: $5");
    }

    #[test]
    fn test_lookup_var_override_default() {
        std::env::set_var("RT_SET_VAR", "custom");
        assert_eq!(lookup_var("RT_SET_VAR:-default").unwrap(), "custom");

        std::env::set_var("RT_EMPTY_VAR", "");
        assert_eq!(lookup_var("RT_EMPTY_VAR:-fallback").unwrap(), "fallback");
    }

    #[test]
    fn test_expand_env_vars_several_in_one_line() {
        std::env::set_var("RT_ROOT_A", "/a");
        std::env::remove_var("RT_ROOT_B");
        let result = expand_env_vars("[${RT_ROOT_A}, ${RT_ROOT_B:-/b}]").unwrap();
        assert_eq!(result, "[/a, /b]");
    }

    #[test]
    fn test_parse_config_defaults() {
        let config = parse_config(
            "categories:\n  solar_irradiance_spectrum:\n    kind: solar_irradiance\n",
        )
        .unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.registry.search_paths.is_empty());
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        let yaml = "categories:\n  a:\n    kind: absorption\nlogging:\n  format: xml\n";
        let err = parse_config(yaml).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid log format"));
    }

    #[test]
    fn test_empty_categories_rejected() {
        assert!(parse_config("search_paths: [/tmp]\n").is_err());
    }
}
