//! Write labeled datasets to NetCDF files.

use std::collections::BTreeMap;
use std::path::Path;

use rt_common::Dataset;
use tracing::debug;

use crate::error::{NetCdfError, NetCdfResult};
use crate::native::{from_attr_value, silence_hdf5_errors};

/// Write `dataset` to a new NetCDF file at `path`, replacing any existing file.
///
/// Each axis is written once as a dimension plus a coordinate variable. Two
/// variables sharing an axis name must agree on its coordinates.
pub fn write_dataset<P: AsRef<Path>>(path: P, dataset: &Dataset) -> NetCdfResult<()> {
    let path = path.as_ref();
    silence_hdf5_errors();

    let mut axes: BTreeMap<&str, &[f64]> = BTreeMap::new();
    for (var_name, array) in &dataset.variables {
        for axis in array.axes() {
            match axes.get(axis.name.as_str()) {
                Some(existing) if *existing != axis.coords.as_slice() => {
                    return Err(NetCdfError::InvalidFormat(format!(
                        "variable {} disagrees on coordinates of axis {}",
                        var_name, axis.name
                    )));
                }
                Some(_) => {}
                None => {
                    axes.insert(axis.name.as_str(), axis.coords.as_slice());
                }
            }
        }
    }

    let mut file = netcdf::create(path).map_err(|e| {
        NetCdfError::InvalidFormat(format!("Failed to create NetCDF {}: {}", path.display(), e))
    })?;

    for (&name, &coords) in &axes {
        file.add_dimension(name, coords.len())
            .map_err(|e| NetCdfError::InvalidFormat(format!("Failed to add dimension {}: {}", name, e)))?;
        let mut var = file
            .add_variable::<f64>(name, &[name])
            .map_err(|e| NetCdfError::InvalidFormat(format!("Failed to add coordinate {}: {}", name, e)))?;
        var.put_values(coords, ..)
            .map_err(|e| NetCdfError::InvalidFormat(format!("Failed to write coordinate {}: {}", name, e)))?;
    }

    for (name, array) in &dataset.variables {
        if axes.contains_key(name.as_str()) {
            // Same name as a dimension: already written as its coordinates.
            continue;
        }
        let dims = array.axis_names();
        let mut var = file
            .add_variable::<f64>(name, &dims)
            .map_err(|e| NetCdfError::InvalidFormat(format!("Failed to add variable {}: {}", name, e)))?;
        var.put_values(array.data(), ..)
            .map_err(|e| NetCdfError::InvalidFormat(format!("Failed to write variable {}: {}", name, e)))?;
    }

    for (name, value) in &dataset.attributes {
        file.add_attribute(name, from_attr_value(value))
            .map_err(|e| NetCdfError::InvalidFormat(format!("Failed to add attribute {}: {}", name, e)))?;
    }

    debug!(
        path = %path.display(),
        dimensions = axes.len(),
        variables = dataset.variables.len(),
        "Wrote NetCDF dataset"
    );

    Ok(())
}
