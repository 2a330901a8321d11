//! Configuration builder for flexible configuration loading

use crate::{Config, ConfigError, ConfigResult};
use backplan_types::DeviceProfile;
use config::{ConfigBuilder as ConfigBuilderInner, Environment, File, FileFormat};
use std::path::{Path, PathBuf};

/// Configuration builder layering defaults, files, and environment
/// variables
#[derive(Debug)]
pub struct ConfigBuilder {
    inner: ConfigBuilderInner<config::builder::DefaultState>,
    sources: Vec<ConfigSource>,
    env_separator: String,
}

#[derive(Debug, Clone)]
enum ConfigSource {
    File { path: PathBuf, format: FileFormat },
    Environment { prefix: String },
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self {
            inner: config::Config::builder(),
            sources: Vec::new(),
            env_separator: "__".to_string(),
        }
    }

    /// Add a configuration file source; the format is inferred from the
    /// file extension. Missing files are skipped.
    pub fn add_source_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let format = Self::detect_format(&path);
        self.sources.push(ConfigSource::File { path, format });
        self
    }

    /// Add a configuration file source with explicit format
    pub fn add_source_file_with_format<P: AsRef<Path>>(
        mut self,
        path: P,
        format: FileFormat,
    ) -> Self {
        let path = path.as_ref().to_path_buf();
        self.sources.push(ConfigSource::File { path, format });
        self
    }

    /// Add environment variable source with prefix
    pub fn add_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.sources.push(ConfigSource::Environment {
            prefix: prefix.into(),
        });
        self
    }

    /// Set environment variable separator (default: "__")
    pub fn env_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.env_separator = separator.into();
        self
    }

    /// Build the configuration
    pub fn build(mut self) -> ConfigResult<Config> {
        // Defaults form the base layer; files and environment override.
        let defaults = Config::default();
        let defaults_value = serde_yaml::to_value(&defaults)
            .map_err(|e| ConfigError::other(format!("Failed to serialize defaults: {}", e)))?;
        self.inner = self
            .inner
            .add_source(config::Config::try_from(&defaults_value)?);

        for source in &self.sources {
            match source {
                ConfigSource::File { path, format } => {
                    if path.exists() {
                        self.inner = self
                            .inner
                            .add_source(File::from(path.clone()).format(*format));
                    }
                }
                ConfigSource::Environment { prefix } => {
                    self.inner = self.inner.add_source(
                        Environment::with_prefix(prefix)
                            .separator(&self.env_separator)
                            .try_parsing(true),
                    );
                }
            }
        }

        let config = self.inner.build()?;
        let result: Config = config.try_deserialize()?;

        Self::validate(&result)?;

        Ok(result)
    }

    /// Try to build the configuration, returning defaults on error
    pub fn build_or_default(self) -> Config {
        self.build().unwrap_or_default()
    }

    fn detect_format(path: &Path) -> FileFormat {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => FileFormat::Yaml,
            _ => FileFormat::Toml,
        }
    }

    fn validate(config: &Config) -> ConfigResult<()> {
        if config.devices.is_empty() {
            return Err(ConfigError::validation("device fleet must not be empty"));
        }

        for (index, profile) in config.devices.iter().enumerate() {
            match profile {
                DeviceProfile::Flash { speed_mbps, .. }
                | DeviceProfile::HardDisk { speed_mbps, .. } => {
                    if *speed_mbps <= 0.0 {
                        return Err(ConfigError::invalid_value(
                            format!("devices[{index}].speed_mbps"),
                            "speed must be positive".to_string(),
                        ));
                    }
                }
                DeviceProfile::OpticalDisc {
                    speed_mb_per_hour, ..
                } => {
                    if *speed_mb_per_hour <= 0.0 {
                        return Err(ConfigError::invalid_value(
                            format!("devices[{index}].speed_mb_per_hour"),
                            "speed must be positive".to_string(),
                        ));
                    }
                }
            }

            if let DeviceProfile::HardDisk { partitions, .. } = profile {
                if *partitions == 0 {
                    return Err(ConfigError::invalid_value(
                        format!("devices[{index}].partitions"),
                        "at least one partition is required".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str, suffix: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("create temp config");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_build_without_sources_yields_defaults() {
        let config = ConfigBuilder::new().build().unwrap();
        assert_eq!(config.devices.len(), 3);
        assert_eq!(config.job.total_data_size_gb, 565.0);
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let config = ConfigBuilder::new()
            .add_source_file("does-not-exist.toml")
            .build()
            .unwrap();
        assert_eq!(config.devices.len(), 3);
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        let file = write_config(
            r#"
            [job]
            total_data_size_gb = 100.0
            file_size_gb = 0.5

            [[devices]]
            type = "flash"
            name = "usb-0"
            speed_mbps = 40.0
            capacity_gb = 64.0
            "#,
            ".toml",
        );

        let config = ConfigBuilder::new()
            .add_source_file(file.path())
            .build()
            .unwrap();

        assert_eq!(config.job.total_data_size_gb, 100.0);
        assert_eq!(config.devices.len(), 1);
        match &config.devices[0] {
            backplan_types::DeviceProfile::Flash {
                name,
                speed_mbps,
                capacity_gb,
                ..
            } => {
                assert_eq!(name.as_deref(), Some("usb-0"));
                assert_eq!(*speed_mbps, 40.0);
                assert_eq!(*capacity_gb, 64.0);
            }
            other => panic!("expected flash profile, got {other:?}"),
        }
    }

    #[test]
    fn test_yaml_file_overrides_defaults() {
        let file = write_config(
            r#"
job:
  total_data_size_gb: 200.0
devices:
  - type: optical-disc
    speed_mb_per_hour: 56.0
    double_sided: false
"#,
            ".yaml",
        );

        let config = ConfigBuilder::new()
            .add_source_file(file.path())
            .build()
            .unwrap();

        assert_eq!(config.job.total_data_size_gb, 200.0);
        // Fields absent from the file keep their defaults.
        assert_eq!(config.job.file_size_gb, 780.0 / 1024.0);
        assert_eq!(config.devices.len(), 1);
    }

    #[test]
    fn test_zero_speed_fails_validation() {
        let file = write_config(
            r#"
            [[devices]]
            type = "flash"
            speed_mbps = 0.0
            capacity_gb = 64.0
            "#,
            ".toml",
        );

        let result = ConfigBuilder::new().add_source_file(file.path()).build();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_empty_fleet_fails_validation() {
        let file = write_config("devices = []\n", ".toml");

        let result = ConfigBuilder::new().add_source_file(file.path()).build();
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn test_build_or_default_swallows_errors() {
        let file = write_config("devices = []\n", ".toml");

        let config = ConfigBuilder::new()
            .add_source_file(file.path())
            .build_or_default();
        assert_eq!(config.devices.len(), 3);
    }
}
