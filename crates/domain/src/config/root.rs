use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::zone::{default_zone, ZoneRecord};

/// Main configuration structure for minidns.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Role endpoints and timing.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Seed records for the authoritative table.
    #[serde(default)]
    pub zone: Vec<ZoneRecord>,
}

impl Config {
    /// Load configuration from file or use defaults.
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. minidns.toml in current directory
    /// 3. /etc/minidns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("minidns.toml").exists() {
            Self::from_file("minidns.toml")?
        } else if std::path::Path::new("/etc/minidns/config.toml").exists() {
            Self::from_file("/etc/minidns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.normalize_zone();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(addr) = overrides.resolver_addr {
            self.server.resolver_addr = addr;
        }
        if let Some(addr) = overrides.authoritative_addr {
            self.server.authoritative_addr = addr;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// An empty zone falls back to the built-in seed records.
    fn normalize_zone(&mut self) {
        if self.zone.is_empty() {
            self.zone = default_zone();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.resolver()?;
        self.server.authoritative()?;
        if self.server.sweep_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "sweep interval cannot be 0".to_string(),
            ));
        }
        if self.server.recv_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "receive timeout cannot be 0".to_string(),
            ));
        }
        for record in &self.zone {
            record.parsed_type()?;
        }
        Ok(())
    }
}

/// Command-line overrides for configuration.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub resolver_addr: Option<String>,
    pub authoritative_addr: Option<String>,
    pub log_level: Option<String>,
}
