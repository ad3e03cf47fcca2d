//! Load NetCDF files into labeled datasets.

use std::collections::HashMap;
use std::path::Path;

use rt_common::{Axis, Dataset, LabeledArray};
use tracing::{debug, warn};

use crate::error::{NetCdfError, NetCdfResult};
use crate::native::{silence_hdf5_errors, to_attr_value};

/// Open a NetCDF file and read all of its numeric variables.
///
/// Coordinate variables (1-D variables named after their own dimension) are
/// attached to the axes of the data variables instead of being returned as
/// variables themselves. Variables that cannot be read as numbers are skipped.
pub fn open_dataset<P: AsRef<Path>>(path: P) -> NetCdfResult<Dataset> {
    let path = path.as_ref();
    silence_hdf5_errors();

    if !path.is_file() {
        return Err(NetCdfError::MissingData(format!(
            "file {} does not exist",
            path.display()
        )));
    }

    let file = netcdf::open(path).map_err(|e| {
        NetCdfError::InvalidFormat(format!("Failed to open NetCDF {}: {}", path.display(), e))
    })?;

    // Dimension coordinates
    let mut coords: HashMap<String, Vec<f64>> = HashMap::new();
    for dim in file.dimensions() {
        let name = dim.name();
        let len = dim.len();
        let values = match file.variable(&name) {
            Some(var) if is_coordinate_variable(&var) => {
                var.get_values::<f64, _>(..).map_err(|e| {
                    NetCdfError::InvalidFormat(format!("Failed to read coordinate {}: {}", name, e))
                })?
            }
            _ => (0..len).map(|i| i as f64).collect(),
        };
        if values.len() != len {
            return Err(NetCdfError::InvalidFormat(format!(
                "coordinate {} has {} values for a dimension of length {}",
                name,
                values.len(),
                len
            )));
        }
        coords.insert(name, values);
    }

    let mut dataset = Dataset::new();

    for var in file.variables() {
        let name = var.name();
        if is_coordinate_variable(&var) {
            continue;
        }

        let mut axes = Vec::with_capacity(var.dimensions().len());
        for dim in var.dimensions() {
            let dim_name = dim.name();
            let values = coords
                .get(&dim_name)
                .cloned()
                .ok_or_else(|| NetCdfError::MissingData(format!("{} dimension", dim_name)))?;
            axes.push(Axis::new(dim_name, values));
        }

        let data: Vec<f64> = match var.get_values::<f64, _>(..) {
            Ok(data) => data,
            Err(e) => {
                warn!(variable = %name, error = %e, "Skipping non-numeric variable");
                continue;
            }
        };

        let array = LabeledArray::new(axes, data)?;
        debug!(variable = %name, shape = ?array.shape(), "Read variable");
        dataset.insert_variable(name, array);
    }

    for attr in file.attributes() {
        let name = attr.name().to_string();
        match attr.value() {
            Ok(value) => {
                if let Some(value) = to_attr_value(&name, value) {
                    dataset.attributes.insert(name, value);
                }
            }
            Err(e) => debug!(attribute = %name, error = %e, "Could not read attribute"),
        }
    }

    debug!(
        path = %path.display(),
        variables = dataset.variables.len(),
        attributes = dataset.attributes.len(),
        "Opened NetCDF dataset"
    );

    Ok(dataset)
}

/// A coordinate variable is 1-D and shares its name with its dimension.
fn is_coordinate_variable(var: &netcdf::Variable) -> bool {
    let dims = var.dimensions();
    dims.len() == 1 && dims[0].name() == var.name()
}
