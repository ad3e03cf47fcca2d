//! Dense N-dimensional arrays with named axes.
//!
//! Values are stored in row-major order: the last axis varies fastest.
//! Axes are looked up by name, so callers never depend on axis order.

use serde::Serialize;

use crate::error::{CommonError, CommonResult};

/// A named, ordered coordinate sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub name: String,
    pub coords: Vec<f64>,
}

impl Axis {
    /// Create a new axis.
    pub fn new(name: impl Into<String>, coords: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            coords,
        }
    }

    /// Create an axis with integer coordinates `0..len`.
    pub fn indexed(name: impl Into<String>, len: usize) -> Self {
        Self::new(name, (0..len).map(|i| i as f64).collect())
    }

    /// Number of coordinates.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Check if the axis has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Position of the first coordinate equal to `value`.
    ///
    /// Comparison is exact; no tolerance is applied.
    pub fn position(&self, value: f64) -> Option<usize> {
        self.coords.iter().position(|&c| c == value)
    }

    /// Check if `value` is literally present among the coordinates.
    pub fn contains(&self, value: f64) -> bool {
        self.position(value).is_some()
    }
}

/// A dense array whose dimensions are identified by [`Axis`] names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledArray {
    name: Option<String>,
    axes: Vec<Axis>,
    data: Vec<f64>,
}

impl LabeledArray {
    /// Create a labeled array from axes and row-major data.
    ///
    /// Fails if two axes share a name or if `data` does not hold exactly one
    /// value per cell.
    pub fn new(axes: Vec<Axis>, data: Vec<f64>) -> CommonResult<Self> {
        for (i, axis) in axes.iter().enumerate() {
            if axes[..i].iter().any(|a| a.name == axis.name) {
                return Err(CommonError::DuplicateAxis(axis.name.clone()));
            }
        }

        let expected: usize = axes.iter().map(Axis::len).product();
        if expected != data.len() {
            return Err(CommonError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            name: None,
            axes,
            data,
        })
    }

    /// Build an array by evaluating `f` at every multi-index, in row-major order.
    pub fn from_fn<F>(axes: Vec<Axis>, mut f: F) -> CommonResult<Self>
    where
        F: FnMut(&[usize]) -> f64,
    {
        let shape: Vec<usize> = axes.iter().map(Axis::len).collect();
        let total: usize = shape.iter().product();
        let mut data = Vec::with_capacity(total);
        let mut index = vec![0usize; shape.len()];

        for _ in 0..total {
            data.push(f(&index));
            increment_index(&mut index, &shape);
        }

        Self::new(axes, data)
    }

    /// Attach a name to this array.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// Names of the axes, in storage order.
    pub fn axis_names(&self) -> Vec<&str> {
        self.axes.iter().map(|a| a.name.as_str()).collect()
    }

    /// Look up an axis by name.
    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.axes.iter().find(|a| a.name == name)
    }

    /// Storage position of the axis called `name`.
    pub fn axis_index(&self, name: &str) -> Option<usize> {
        self.axes.iter().position(|a| a.name == name)
    }

    /// Like [`axis_index`](Self::axis_index), but fails with `UnknownAxis`.
    pub fn require_axis(&self, name: &str) -> CommonResult<usize> {
        self.axis_index(name)
            .ok_or_else(|| CommonError::UnknownAxis(name.to_string()))
    }

    /// Length of every axis, in storage order.
    pub fn shape(&self) -> Vec<usize> {
        self.axes.iter().map(Axis::len).collect()
    }

    pub fn ndim(&self) -> usize {
        self.axes.len()
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major strides, in cells.
    pub fn strides(&self) -> Vec<usize> {
        let mut strides = vec![1usize; self.axes.len()];
        for i in (0..self.axes.len().saturating_sub(1)).rev() {
            strides[i] = strides[i + 1] * self.axes[i + 1].len();
        }
        strides
    }

    /// Flat storage offset of a multi-index, or `None` if out of bounds.
    pub fn flat_index(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.axes.len() {
            return None;
        }
        let mut offset = 0;
        let mut stride = 1;
        for (i, axis) in index.iter().zip(&self.axes).rev() {
            if *i >= axis.len() {
                return None;
            }
            offset += i * stride;
            stride *= axis.len();
        }
        Some(offset)
    }

    /// Value at a multi-index.
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        self.flat_index(index).map(|i| self.data[i])
    }

    /// Element at an index derived from this array's own axes, which is
    /// always in bounds.
    fn at(&self, index: &[usize]) -> f64 {
        let value = self.get(index);
        debug_assert!(value.is_some(), "index {:?} out of bounds", index);
        value.unwrap_or(f64::NAN)
    }

    /// Select single coordinates along some axes by exact match.
    ///
    /// The selected axes are dropped from the result; the remaining axes keep
    /// their relative order.
    pub fn sel(&self, selections: &[(&str, f64)]) -> CommonResult<Self> {
        let mut fixed: Vec<Option<usize>> = vec![None; self.axes.len()];

        for &(name, value) in selections {
            let axis_index = self.require_axis(name)?;
            let position =
                self.axes[axis_index]
                    .position(value)
                    .ok_or_else(|| CommonError::NoExactMatch {
                        axis: name.to_string(),
                        value,
                    })?;
            fixed[axis_index] = Some(position);
        }

        let kept: Vec<usize> = (0..self.axes.len())
            .filter(|&i| fixed[i].is_none())
            .collect();
        let axes = kept.iter().map(|&i| self.axes[i].clone()).collect();

        let mut full = vec![0usize; self.axes.len()];
        let result = Self::from_fn(axes, |sub| {
            for (axis_index, slot) in full.iter_mut().enumerate() {
                if let Some(position) = fixed[axis_index] {
                    *slot = position;
                }
            }
            for (k, &axis_index) in kept.iter().enumerate() {
                full[axis_index] = sub[k];
            }
            self.at(&full)
        })?;

        Ok(match &self.name {
            Some(name) => result.with_name(name.clone()),
            None => result,
        })
    }

    /// Reorder axes so they appear in the order given by `order`.
    ///
    /// `order` must name every axis exactly once.
    pub fn transposed(&self, order: &[&str]) -> CommonResult<Self> {
        let invalid = || CommonError::InvalidAxisOrder {
            requested: order.iter().map(|s| s.to_string()).collect(),
            available: self.axes.iter().map(|a| a.name.clone()).collect(),
        };

        if order.len() != self.axes.len() {
            return Err(invalid());
        }

        let mut permutation = Vec::with_capacity(order.len());
        for name in order {
            let index = self.axis_index(name).ok_or_else(invalid)?;
            if permutation.contains(&index) {
                return Err(invalid());
            }
            permutation.push(index);
        }

        let axes = permutation.iter().map(|&i| self.axes[i].clone()).collect();
        let mut source = vec![0usize; self.axes.len()];
        let result = Self::from_fn(axes, |target| {
            for (k, &axis_index) in permutation.iter().enumerate() {
                source[axis_index] = target[k];
            }
            self.at(&source)
        })?;

        Ok(match &self.name {
            Some(name) => result.with_name(name.clone()),
            None => result,
        })
    }

    /// Concatenate arrays along `axis`.
    ///
    /// All inputs must have the same axes in the same order, with identical
    /// coordinates on every axis except `axis`.
    pub fn concat(arrays: &[LabeledArray], axis: &str) -> CommonResult<Self> {
        let first = arrays
            .first()
            .ok_or_else(|| CommonError::IncompatibleConcat("no arrays given".to_string()))?;
        let axis_index = first.require_axis(axis)?;

        for other in &arrays[1..] {
            if other.axis_names() != first.axis_names() {
                return Err(CommonError::IncompatibleConcat(format!(
                    "axes {:?} differ from {:?}",
                    other.axis_names(),
                    first.axis_names()
                )));
            }
            for (i, (a, b)) in first.axes.iter().zip(&other.axes).enumerate() {
                if i != axis_index && a.coords != b.coords {
                    return Err(CommonError::IncompatibleConcat(format!(
                        "coordinates of axis '{}' differ",
                        a.name
                    )));
                }
            }
        }

        // Start and end of each input along the concatenation axis.
        let mut offsets = Vec::with_capacity(arrays.len());
        let mut ends = Vec::with_capacity(arrays.len());
        let mut coords = Vec::new();
        for array in arrays {
            offsets.push(coords.len());
            coords.extend_from_slice(&array.axes[axis_index].coords);
            ends.push(coords.len());
        }

        let mut axes = first.axes.clone();
        axes[axis_index] = Axis::new(axis, coords);

        let mut local = vec![0usize; first.axes.len()];
        let result = Self::from_fn(axes, |index| {
            let position = index[axis_index];
            let part = ends.partition_point(|&e| e <= position);
            local.copy_from_slice(index);
            local[axis_index] = position - offsets[part];
            arrays[part].at(&local)
        })?;

        Ok(match &first.name {
            Some(name) => result.with_name(name.clone()),
            None => result,
        })
    }
}

/// Advance a row-major multi-index by one cell.
fn increment_index(index: &mut [usize], shape: &[usize]) {
    for i in (0..index.len()).rev() {
        index[i] += 1;
        if index[i] < shape[i] {
            return;
        }
        index[i] = 0;
    }
}
