//! Configuration for the data registry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::RegistryResult;
use crate::getters::{AbsorptionGetter, Getter, GetterKind};
use crate::registry::{DataRegistry, ABSORPTION_SPECTRUM, SOLAR_IRRADIANCE_SPECTRUM};
use crate::resolver::{expand_root, PathResolver};

/// Registry configuration: search roots plus category definitions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Data roots, searched in order. `~` and `$VAR` are expanded.
    /// When empty, roots come from the environment (see [`PathResolver::from_env`]).
    #[serde(default)]
    pub search_paths: Vec<String>,

    /// Category name → getter definition.
    #[serde(default)]
    pub categories: BTreeMap<String, CategoryConfig>,
}

/// Definition of one data set category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Data family served by this category.
    pub kind: GetterKind,

    /// Identifier → relative path. When empty, the family's built-in table is used.
    #[serde(default)]
    pub datasets: BTreeMap<String, String>,

    /// Axis along which absorption chunks are joined.
    #[serde(default)]
    pub concat_axis: Option<String>,
}

impl CategoryConfig {
    fn builtin(kind: GetterKind) -> Self {
        Self {
            kind,
            datasets: BTreeMap::new(),
            concat_axis: None,
        }
    }

    /// Build the getter this category describes.
    pub fn getter(&self) -> Getter {
        let getter = if self.datasets.is_empty() {
            Getter::builtin(self.kind)
        } else {
            Getter::from_table(self.kind, self.datasets.clone())
        };

        match (getter, &self.concat_axis) {
            (Getter::Absorption(g), Some(axis)) => {
                Getter::Absorption(AbsorptionGetter::with_concat_axis(g, axis.clone()))
            }
            (getter, _) => getter,
        }
    }
}

impl RegistryConfig {
    /// The built-in categories, with roots taken from the environment.
    pub fn builtin() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(
            SOLAR_IRRADIANCE_SPECTRUM.to_string(),
            CategoryConfig::builtin(GetterKind::SolarIrradiance),
        );
        categories.insert(
            ABSORPTION_SPECTRUM.to_string(),
            CategoryConfig::builtin(GetterKind::Absorption),
        );
        Self {
            search_paths: Vec::new(),
            categories,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.categories.is_empty() {
            return Err("at least one category must be configured".to_string());
        }

        for (name, category) in &self.categories {
            if name.trim().is_empty() {
                return Err("category names cannot be empty".to_string());
            }
            if let Some(axis) = &category.concat_axis {
                if category.kind != GetterKind::Absorption {
                    return Err(format!(
                        "category '{}': concat_axis is only valid for absorption data",
                        name
                    ));
                }
                if axis.trim().is_empty() {
                    return Err(format!("category '{}': concat_axis cannot be empty", name));
                }
            }
            if let Some(id) = category.datasets.keys().find(|id| id.trim().is_empty()) {
                return Err(format!("category '{}': invalid data set id '{}'", name, id));
            }
        }

        if self.search_paths.iter().any(|p| p.trim().is_empty()) {
            return Err("search paths cannot be empty".to_string());
        }

        Ok(())
    }

    /// Path resolver for the configured roots.
    pub fn resolver(&self) -> PathResolver {
        if self.search_paths.is_empty() {
            PathResolver::from_env()
        } else {
            PathResolver::new(self.search_paths.iter().map(|p| expand_root(p)))
        }
    }

    /// Build the registry this configuration describes.
    pub fn build_registry(&self) -> RegistryResult<DataRegistry> {
        let builder = self.categories.iter().fold(
            DataRegistry::builder(self.resolver()),
            |builder, (name, category)| builder.category(name.clone(), category.getter()),
        );
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::getters::DataGetter;

    #[test]
    fn test_builtin_config_is_valid() {
        let config = RegistryConfig::builtin();
        assert!(config.validate().is_ok());
        let registry = config.build_registry().unwrap();
        assert_eq!(registry.categories().len(), 2);
    }

    #[test]
    fn test_custom_table_replaces_builtin() {
        let mut datasets = BTreeMap::new();
        datasets.insert("custom".to_string(), "custom.nc".to_string());
        let category = CategoryConfig {
            kind: GetterKind::SolarIrradiance,
            datasets,
            concat_axis: None,
        };
        assert_eq!(category.getter().registered(), vec!["custom".to_string()]);
    }

    #[test]
    fn test_concat_axis_only_for_absorption() {
        let mut config = RegistryConfig::default();
        config.categories.insert(
            "solar".to_string(),
            CategoryConfig {
                kind: GetterKind::SolarIrradiance,
                datasets: BTreeMap::new(),
                concat_axis: Some("w".to_string()),
            },
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_concat_axis_applied() {
        let category = CategoryConfig {
            kind: GetterKind::Absorption,
            datasets: BTreeMap::new(),
            concat_axis: Some("nu".to_string()),
        };
        match category.getter() {
            Getter::Absorption(g) => assert_eq!(g.concat_axis(), "nu"),
            other => panic!("unexpected getter {:?}", other),
        }
    }

    #[test]
    fn test_empty_config_rejected() {
        assert!(RegistryConfig::default().validate().is_err());
    }
}
