//! Command implementations. Each returns text or data for `main` to print.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use brdf_view::{
    BrdfAdapter, GriddedBrdf, Lambertian, PolarPlot, PolarView, PrincipalPlanePlot,
    PrincipalPlaneView, SampledBrdf, ViewSettings, REQUIRED_AXES,
};
use data_registry::{DataRegistry, DataSource};
use rt_common::{Dataset, LabeledArray};
use serde::Serialize;
use tracing::info;

use crate::summary::DatasetSummary;

/// Identifiers of `category`, one per line.
pub fn registered(registry: &DataRegistry, category: &str) -> Result<String> {
    let ids = registry.registered(category)?;
    Ok(ids.join("\n"))
}

/// Presence report for `category`: `✓ id` or `✗ id` per line.
pub fn find(registry: &DataRegistry, category: &str) -> Result<String> {
    let found = registry.find(category)?;
    let lines: Vec<String> = found
        .iter()
        .map(|(id, present)| format!("{} {}", if *present { "✓" } else { "✗" }, id))
        .collect();
    Ok(lines.join("\n"))
}

/// Search paths followed by the presence report of every category.
pub fn info(registry: &DataRegistry) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Search paths:")?;
    for path in registry.resolver().paths() {
        writeln!(out, "  {}", path.display())?;
    }
    for category in registry.categories() {
        writeln!(out)?;
        writeln!(out, "{}:", category)?;
        for line in find(registry, category)?.lines() {
            writeln!(out, "  {}", line)?;
        }
    }
    Ok(out.trim_end().to_string())
}

/// Open a data set and summarize it.
pub fn open(registry: &DataRegistry, source: &DataSource) -> Result<DatasetSummary> {
    let dataset = registry
        .open(source)
        .with_context(|| format!("Failed to open {:?}", source))?;
    Ok(DatasetSummary::from(&dataset))
}

// ============================================================================
// BRDF views
// ============================================================================

/// Where BRDF values come from.
#[derive(Debug, Clone, PartialEq)]
pub enum BrdfSource {
    /// A gridded BRDF stored in a NetCDF file.
    Gridded {
        path: PathBuf,
        variable: Option<String>,
    },
    /// A Lambertian reflector with the given reflectance.
    Lambertian(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Polar,
    PrincipalPlane,
}

/// Output of a BRDF view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Plot {
    Polar(PolarPlot),
    PrincipalPlane(PrincipalPlanePlot),
}

impl Plot {
    pub fn to_array(&self) -> Result<LabeledArray> {
        let array = match self {
            Self::Polar(plot) => plot.to_array()?,
            Self::PrincipalPlane(plot) => plot.to_array()?,
        };
        Ok(array)
    }
}

/// Build the adapter for `source`. Gridded files are resolved against the
/// registry's data roots.
pub fn load_adapter(registry: &DataRegistry, source: &BrdfSource) -> Result<BrdfAdapter> {
    match source {
        BrdfSource::Lambertian(reflectance) => {
            Ok(SampledBrdf::new(Lambertian::new(*reflectance)).into())
        }
        BrdfSource::Gridded { path, variable } => {
            let dataset = registry
                .open_path(path)
                .with_context(|| format!("Failed to load BRDF data from {}", path.display()))?;
            let array = select_brdf_variable(&dataset, variable.as_deref())?;
            let brdf = GriddedBrdf::new(array.clone())
                .with_context(|| format!("Invalid gridded BRDF in {}", path.display()))?;
            Ok(brdf.into())
        }
    }
}

/// The named variable, or the only one carrying every BRDF axis.
fn select_brdf_variable<'a>(dataset: &'a Dataset, variable: Option<&str>) -> Result<&'a LabeledArray> {
    if let Some(name) = variable {
        return Ok(dataset.require_variable(name)?);
    }

    let candidates: Vec<(&String, &LabeledArray)> = dataset
        .variables
        .iter()
        .filter(|(_, array)| REQUIRED_AXES.iter().all(|axis| array.axis(axis).is_some()))
        .collect();

    match candidates.as_slice() {
        [(name, array)] => {
            info!(variable = %name, "Using BRDF variable");
            Ok(*array)
        }
        [] => bail!("no variable carries all of {:?}; pass --variable", REQUIRED_AXES),
        many => bail!(
            "several BRDF variables found ({}); pass --variable",
            many.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>().join(", ")
        ),
    }
}

pub fn evaluate(adapter: &BrdfAdapter, view: ViewKind, settings: &ViewSettings) -> Result<Plot> {
    let plot = match view {
        ViewKind::Polar => Plot::Polar(PolarView::evaluate(adapter, settings)?),
        ViewKind::PrincipalPlane => {
            Plot::PrincipalPlane(PrincipalPlaneView::evaluate(adapter, settings)?)
        }
    };
    Ok(plot)
}

/// Write `plot` to `output` (`.nc` or `.json`), or return it as JSON text
/// when no output is given.
pub fn write_plot(plot: &Plot, output: Option<&Path>) -> Result<Option<String>> {
    let Some(path) = output else {
        return Ok(Some(serde_json::to_string_pretty(plot)?));
    };

    match path.extension().and_then(|s| s.to_str()) {
        Some(netcdf_parser::NETCDF_EXTENSION) => {
            let dataset = Dataset::new().with_variable("brdf", plot.to_array()?);
            netcdf_parser::write_dataset(path, &dataset)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        Some("json") => {
            let json = serde_json::to_string_pretty(plot)?;
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        }
        _ => bail!(
            "unsupported output format for {}; use .nc or .json",
            path.display()
        ),
    }

    info!(path = %path.display(), "Wrote plot");
    Ok(None)
}
