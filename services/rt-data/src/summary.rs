//! JSON-friendly overview of a loaded dataset.

use std::collections::BTreeMap;

use rt_common::{AttrValue, Dataset, LabeledArray};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub variables: BTreeMap<String, VariableSummary>,
    pub attributes: BTreeMap<String, AttrValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableSummary {
    pub shape: Vec<usize>,
    pub axes: Vec<AxisSummary>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisSummary {
    pub name: String,
    pub len: usize,
    pub first: Option<f64>,
    pub last: Option<f64>,
}

impl From<&Dataset> for DatasetSummary {
    fn from(dataset: &Dataset) -> Self {
        Self {
            variables: dataset
                .variables
                .iter()
                .map(|(name, array)| (name.clone(), VariableSummary::from(array)))
                .collect(),
            attributes: dataset.attributes.clone(),
        }
    }
}

impl From<&LabeledArray> for VariableSummary {
    fn from(array: &LabeledArray) -> Self {
        let finite = || array.data().iter().copied().filter(|v| v.is_finite());
        Self {
            shape: array.shape(),
            axes: array
                .axes()
                .iter()
                .map(|axis| AxisSummary {
                    name: axis.name.clone(),
                    len: axis.len(),
                    first: axis.coords.first().copied(),
                    last: axis.coords.last().copied(),
                })
                .collect(),
            min: finite().reduce(f64::min),
            max: finite().reduce(f64::max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rt_common::Axis;

    #[test]
    fn test_summary_ranges_skip_nan() {
        let array =
            LabeledArray::new(vec![Axis::new("w", vec![1.0, 2.0, 3.0])], vec![2.0, f64::NAN, -1.0])
                .unwrap();
        let summary = VariableSummary::from(&array);
        assert_eq!(summary.shape, vec![3]);
        assert_eq!(summary.min, Some(-1.0));
        assert_eq!(summary.max, Some(2.0));
        assert_eq!(summary.axes[0].first, Some(1.0));
        assert_eq!(summary.axes[0].last, Some(3.0));
    }

    #[test]
    fn test_dataset_summary_keeps_attributes() {
        let dataset = Dataset::new()
            .with_variable(
                "k",
                LabeledArray::new(vec![Axis::new("w", vec![1.0])], vec![5.0]).unwrap(),
            )
            .with_attribute("title", "test");
        let summary = DatasetSummary::from(&dataset);
        assert_eq!(summary.variables.len(), 1);
        assert_eq!(
            summary.attributes.get("title"),
            Some(&AttrValue::Text("test".to_string()))
        );
    }
}
