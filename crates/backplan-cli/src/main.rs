//! backplan - backup capacity and time planner
//!
//! Models a fleet of storage media (flash drives, optical discs, hard
//! disks) and computes how many devices and how much time a backup job
//! needs, from a layered configuration or built-in defaults.

use anyhow::Result;
use backplan_config::{Config, ConfigBuilder, LoggingConfig};
use backplan_engine::plan_for_config;
use backplan_types::Error;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

mod display;
mod json_output;

/// backplan - backup capacity and time planner
#[derive(Parser)]
#[command(
    name = "backplan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Backup capacity and time planner for storage media",
    long_about = "backplan models a fleet of storage media (flash drives, optical\n\
                  discs, hard disks) and reports how many devices of each kind a\n\
                  backup job needs and how long the copying takes."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Quiet mode - minimal output
    #[arg(short, long)]
    quiet: bool,

    /// Verbose mode - detailed output
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan the configured backup job across the device fleet
    Plan {
        /// Override the total data size in GB
        #[arg(long)]
        total_size: Option<f64>,
        /// Override the sample file size in GB
        #[arg(long)]
        file_size: Option<f64>,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the configured device fleet
    Devices,
    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    init_logging(&config.logging, cli.debug, cli.quiet, cli.verbose)?;

    info!("backplan v{} starting", env!("CARGO_PKG_VERSION"));

    // Running bare plans the configured job, so the tool works with no
    // arguments at all.
    match cli.command.unwrap_or(Commands::Plan {
        total_size: None,
        file_size: None,
        json: false,
    }) {
        Commands::Plan {
            total_size,
            file_size,
            json,
        } => plan_command(config, total_size, file_size, json)?,
        Commands::Devices => devices_command(&config),
        Commands::Config { default } => config_command(&config, default)?,
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> backplan_types::Result<Config> {
    let mut builder = ConfigBuilder::new();

    match path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::config(format!(
                    "configuration file '{}' not found",
                    path.display()
                )));
            }
            builder = builder.add_source_file(path);
        }
        None => builder = builder.add_source_file("backplan.toml"),
    }

    let config = builder.add_env_prefix("BACKPLAN").build()?;
    Ok(config)
}

fn init_logging(logging: &LoggingConfig, debug: bool, quiet: bool, verbose: bool) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else if quiet {
        "error"
    } else {
        logging.level.as_str()
    };

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    console::set_colors_enabled(logging.colored_output);
    Ok(())
}

fn plan_command(
    mut config: Config,
    total_size: Option<f64>,
    file_size: Option<f64>,
    json: bool,
) -> Result<()> {
    if let Some(total) = total_size {
        config.job.total_data_size_gb = total;
    }
    if let Some(file) = file_size {
        config.job.file_size_gb = file;
    }

    info!(
        "Planning backup of {} GB across {} devices",
        config.job.total_data_size_gb,
        config.devices.len()
    );

    let plan = plan_for_config(&config);

    if json {
        let document = json_output::PlanReportJson::new(&config, &plan);
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        display::print_backup_plan(&plan);
    }

    info!("Planning completed");
    Ok(())
}

fn devices_command(config: &Config) {
    display::display_device_list(&config.devices);
}

fn config_command(config: &Config, default: bool) -> Result<()> {
    let rendered = if default {
        Config::default().to_toml()?
    } else {
        config.to_toml()?
    };
    print!("{}", rendered);
    Ok(())
}
