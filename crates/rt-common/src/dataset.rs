//! Collections of named arrays with global attributes.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::array::LabeledArray;
use crate::error::{CommonError, CommonResult};

/// A global attribute value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Text(String),
    Number(f64),
    Numbers(Vec<f64>),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Vec<f64>> for AttrValue {
    fn from(value: Vec<f64>) -> Self {
        Self::Numbers(value)
    }
}

/// A set of named labeled arrays sharing a file of origin.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    pub variables: BTreeMap<String, LabeledArray>,
    pub attributes: BTreeMap<String, AttrValue>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, naming the array after it.
    pub fn with_variable(mut self, name: impl Into<String>, array: LabeledArray) -> Self {
        self.insert_variable(name, array);
        self
    }

    /// Add a global attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn insert_variable(&mut self, name: impl Into<String>, array: LabeledArray) {
        let name = name.into();
        let array = array.with_name(name.clone());
        self.variables.insert(name, array);
    }

    pub fn variable(&self, name: &str) -> Option<&LabeledArray> {
        self.variables.get(name)
    }

    /// Like [`variable`](Self::variable), but fails with `UnknownVariable`.
    pub fn require_variable(&self, name: &str) -> CommonResult<&LabeledArray> {
        self.variable(name)
            .ok_or_else(|| CommonError::UnknownVariable(name.to_string()))
    }

    /// Length of every dimension used by any variable.
    ///
    /// When two variables disagree on a dimension length, the first one in
    /// name order wins.
    pub fn dims(&self) -> BTreeMap<String, usize> {
        let mut dims = BTreeMap::new();
        for array in self.variables.values() {
            for axis in array.axes() {
                dims.entry(axis.name.clone()).or_insert(axis.len());
            }
        }
        dims
    }

    /// Concatenate data sets along `axis`.
    ///
    /// Variables carrying `axis` are joined; other variables must be identical
    /// in every input. Attributes are taken from the first data set.
    pub fn concat(datasets: &[Dataset], axis: &str) -> CommonResult<Self> {
        let first = datasets
            .first()
            .ok_or_else(|| CommonError::IncompatibleConcat("no datasets given".to_string()))?;

        let names: Vec<&String> = first.variables.keys().collect();
        for other in &datasets[1..] {
            let other_names: Vec<&String> = other.variables.keys().collect();
            if other_names != names {
                return Err(CommonError::IncompatibleConcat(format!(
                    "variables {:?} differ from {:?}",
                    other_names, names
                )));
            }
        }

        let mut result = Dataset {
            variables: BTreeMap::new(),
            attributes: first.attributes.clone(),
        };

        for (name, array) in &first.variables {
            let parts: Vec<LabeledArray> = datasets
                .iter()
                .map(|d| d.variables[name].clone())
                .collect();

            let joined = if array.axis_index(axis).is_some() {
                LabeledArray::concat(&parts, axis)?
            } else if parts.iter().all(|p| p == array) {
                array.clone()
            } else {
                return Err(CommonError::IncompatibleConcat(format!(
                    "variable '{}' has no axis '{}' and differs between inputs",
                    name, axis
                )));
            };

            result.insert_variable(name.clone(), joined);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::Axis;

    fn spectrum(w: Vec<f64>, values: Vec<f64>) -> Dataset {
        let array = LabeledArray::new(vec![Axis::new("w", w)], values).unwrap();
        Dataset::new()
            .with_variable("k", array)
            .with_attribute("title", "test")
    }

    #[test]
    fn test_concat_along_axis() {
        let a = spectrum(vec![1.0, 2.0], vec![0.1, 0.2]);
        let b = spectrum(vec![3.0], vec![0.3]);
        let joined = Dataset::concat(&[a, b], "w").unwrap();

        let k = joined.variable("k").unwrap();
        assert_eq!(k.axis("w").unwrap().coords, vec![1.0, 2.0, 3.0]);
        assert_eq!(k.data(), &[0.1, 0.2, 0.3]);
        assert_eq!(k.name(), Some("k"));
        assert_eq!(joined.attributes["title"], AttrValue::from("test"));
    }

    #[test]
    fn test_concat_rejects_mismatched_variables() {
        let a = spectrum(vec![1.0], vec![0.1]);
        let b = Dataset::new();
        assert!(matches!(
            Dataset::concat(&[a, b], "w"),
            Err(CommonError::IncompatibleConcat(_))
        ));
    }

    #[test]
    fn test_dims() {
        let ds = spectrum(vec![1.0, 2.0, 3.0], vec![0.0; 3]);
        assert_eq!(ds.dims().get("w"), Some(&3));
    }
}
