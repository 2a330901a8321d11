//! Configuration management for backplan
//!
//! This crate provides the configuration surface for the planner: the
//! modeled device fleet, the backup job sizing, and logging options.
//! Configuration is layered from built-in defaults, an optional TOML or
//! YAML file, and `BACKPLAN_*` environment variables.
//!
//! The built-in defaults describe the reference fleet: a 128 GB flash
//! drive writing at 100 MB/s, a double-sided DVD at 56 MB/h, and a hard
//! disk with four 500 GB partitions at 60 MB/s, backing up a 565 GB job
//! sampled with a 780 MB file.
//!
//! # Examples
//!
//! ```rust
//! use backplan_config::{Config, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .add_source_file("backplan.toml")
//!     .add_env_prefix("BACKPLAN")
//!     .build_or_default();
//!
//! assert!(!config.devices.is_empty());
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use backplan_types::{BackupJob, DeviceProfile, Gigabytes};
use serde::{Deserialize, Serialize};

pub mod builder;
pub mod error;

pub use builder::ConfigBuilder;
pub use error::{ConfigError, ConfigResult};

/// Main configuration structure for backplan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backup job sizing
    #[serde(default)]
    pub job: JobConfig,
    /// Ordered device fleet the plan walks
    #[serde(default = "default_devices")]
    pub devices: Vec<DeviceProfile>,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            job: JobConfig::default(),
            devices: default_devices(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Render the configuration as TOML
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Backup job sizing
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JobConfig {
    /// Total amount of data to back up, in GB
    #[serde(default = "default_total_data_size")]
    pub total_data_size_gb: Gigabytes,
    /// Size of the sample file copied onto each device, in GB
    #[serde(default = "default_file_size")]
    pub file_size_gb: Gigabytes,
}

impl JobConfig {
    /// Convert into the planner's job description
    pub fn to_job(self) -> BackupJob {
        BackupJob::new(self.total_data_size_gb, self.file_size_gb)
    }
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            total_data_size_gb: default_total_data_size(),
            file_size_gb: default_file_size(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable colored output
    #[serde(default = "default_colored_output")]
    pub colored_output: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            colored_output: default_colored_output(),
        }
    }
}

fn default_total_data_size() -> Gigabytes {
    565.0
}

// 780 MB expressed in GB.
fn default_file_size() -> Gigabytes {
    780.0 / 1024.0
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_colored_output() -> bool {
    true
}

fn default_devices() -> Vec<DeviceProfile> {
    vec![
        DeviceProfile::Flash {
            name: None,
            model: None,
            speed_mbps: 100.0,
            capacity_gb: 128.0,
        },
        DeviceProfile::OpticalDisc {
            name: None,
            model: None,
            speed_mb_per_hour: 56.0,
            double_sided: true,
        },
        DeviceProfile::HardDisk {
            name: None,
            model: None,
            speed_mbps: 60.0,
            partitions: 4,
            partition_size_gb: 500.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use backplan_types::DeviceKind;

    #[test]
    fn test_default_job_sizing() {
        let config = Config::default();
        assert_eq!(config.job.total_data_size_gb, 565.0);
        assert_eq!(config.job.file_size_gb, 780.0 / 1024.0);

        let job = config.job.to_job();
        assert_eq!(job.total_data_size, 565.0);
        assert_eq!(job.file_size, 780.0 / 1024.0);
    }

    #[test]
    fn test_default_fleet_is_the_reference_trio() {
        let config = Config::default();
        let kinds: Vec<DeviceKind> = config.devices.iter().map(DeviceProfile::kind).collect();
        assert_eq!(
            kinds,
            vec![
                DeviceKind::Flash,
                DeviceKind::OpticalDisc,
                DeviceKind::HardDisk
            ]
        );

        match &config.devices[0] {
            DeviceProfile::Flash {
                speed_mbps,
                capacity_gb,
                ..
            } => {
                assert_eq!(*speed_mbps, 100.0);
                assert_eq!(*capacity_gb, 128.0);
            }
            other => panic!("expected flash profile, got {other:?}"),
        }
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let rendered = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.devices, config.devices);
        assert_eq!(parsed.job.total_data_size_gb, config.job.total_data_size_gb);
    }
}
