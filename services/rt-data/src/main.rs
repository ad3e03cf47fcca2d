//! rt-data: inspect registered data sets and export BRDF plotting data.

use std::path::PathBuf;

use anyhow::{Context, Result};
use brdf_view::ViewSettings;
use clap::{Args as ClapArgs, Parser, Subcommand};
use data_registry::DataSource;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use rt_data::commands::{self, BrdfSource, ViewKind};
use rt_data::config_loader::{self, RtDataConfig};

#[derive(Parser, Debug)]
#[command(name = "rt-data")]
#[command(about = "Data set registry and BRDF plotting data for radiative transfer scenes")]
struct Args {
    /// Registry configuration file (YAML)
    #[arg(short, long, env = "RT_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (overrides the config file)
    #[arg(long, env = "RT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: json or pretty (overrides the config file)
    #[arg(long, env = "RT_LOG_FORMAT")]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the identifiers registered in a category
    Registered { category: String },

    /// Report which data sets of a category are present on disk
    Find { category: String },

    /// Show search paths and data set presence for every category
    Info,

    /// Open a data set and print a JSON summary
    Open {
        #[arg(long, requires = "id", conflicts_with = "path")]
        category: Option<String>,

        #[arg(long, requires = "category")]
        id: Option<String>,

        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Evaluate a BRDF view
    Brdf {
        #[command(subcommand)]
        view: BrdfCommand,
    },
}

#[derive(Subcommand, Debug)]
enum BrdfCommand {
    /// Scattering into the upper hemisphere
    Polar(BrdfArgs),
    /// Scattering in the principal plane
    PrincipalPlane(BrdfArgs),
}

#[derive(ClapArgs, Debug)]
struct BrdfArgs {
    /// Gridded BRDF file (NetCDF)
    #[arg(long, conflicts_with = "lambertian", required_unless_present = "lambertian")]
    path: Option<PathBuf>,

    /// Variable holding the BRDF in the gridded file
    #[arg(long, requires = "path")]
    variable: Option<String>,

    /// Evaluate a Lambertian reflector with this reflectance
    #[arg(long)]
    lambertian: Option<f64>,

    /// Incident zenith angle, degrees
    #[arg(long, default_value_t = 0.0)]
    theta_i: f64,

    /// Incident azimuth angle, degrees
    #[arg(long, default_value_t = 0.0)]
    phi_i: f64,

    /// Wavelength, nanometers
    #[arg(long, default_value_t = 650.0)]
    wavelength: f64,

    /// Number of zenith samples (sampled BRDFs only)
    #[arg(long)]
    zen_steps: Option<usize>,

    /// Number of azimuth samples (sampled BRDFs only)
    #[arg(long)]
    azm_steps: Option<usize>,

    /// Output file (.nc or .json); JSON on stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl BrdfArgs {
    fn source(&self) -> Result<BrdfSource> {
        match (&self.path, self.lambertian) {
            (Some(path), _) => Ok(BrdfSource::Gridded {
                path: path.clone(),
                variable: self.variable.clone(),
            }),
            (None, Some(reflectance)) => Ok(BrdfSource::Lambertian(reflectance)),
            (None, None) => anyhow::bail!("either --path or --lambertian is required"),
        }
    }

    fn settings(&self) -> ViewSettings {
        let mut settings = ViewSettings::default();
        settings.set_wi(self.theta_i, self.phi_i);
        settings.set_wavelength(self.wavelength);
        if let Some(steps) = self.zen_steps {
            settings.set_zen_steps(steps);
        }
        if let Some(steps) = self.azm_steps {
            settings.set_azm_steps(steps);
        }
        settings
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => config_loader::load_config(path)?,
        None => RtDataConfig::builtin(),
    };
    if let Some(level) = &args.log_level {
        config.logging.level = level.to_lowercase();
    }
    if let Some(format) = &args.log_format {
        config.logging.format = format.to_lowercase();
    }
    config_loader::validate_logging(&config.logging)?;

    init_tracing(&config)?;

    let registry = config
        .registry
        .build_registry()
        .context("Failed to build data registry")?;
    info!(
        categories = ?registry.categories(),
        search_paths = registry.resolver().paths().len(),
        "Loaded data registry"
    );

    match args.command {
        Command::Registered { category } => {
            println!("{}", commands::registered(&registry, &category)?);
        }
        Command::Find { category } => {
            println!("{}", commands::find(&registry, &category)?);
        }
        Command::Info => {
            println!("{}", commands::info(&registry)?);
        }
        Command::Open { category, id, path } => {
            let source =
                DataSource::from_parts(category.as_deref(), id.as_deref(), path.as_deref())?;
            let summary = commands::open(&registry, &source)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Brdf { view } => {
            let (kind, brdf_args) = match &view {
                BrdfCommand::Polar(a) => (ViewKind::Polar, a),
                BrdfCommand::PrincipalPlane(a) => (ViewKind::PrincipalPlane, a),
            };
            let adapter = commands::load_adapter(&registry, &brdf_args.source()?)?;
            let plot = commands::evaluate(&adapter, kind, &brdf_args.settings())?;
            if let Some(json) = commands::write_plot(&plot, brdf_args.output.as_deref())? {
                println!("{}", json);
            }
        }
    }

    Ok(())
}

fn init_tracing(config: &RtDataConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    let result = match config.logging.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.pretty().try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
