use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::database::DatabaseConfig;
use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::jobs::JobsConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::host::{MAX_TTL, MIN_TTL};

const LOCAL_CONFIG_PATH: &str = "dyndns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dyndns/config.toml";

/// Upper bound for `jobs.clear_log_interval_days`.
pub const MAX_LOG_RETENTION_DAYS: u32 = 36_500;

/// Main configuration structure for dyndns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener ports and admin credentials
    #[serde(default)]
    pub server: ServerConfig,

    /// Authoritative zones and answer defaults
    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Background maintenance
    #[serde(default)]
    pub jobs: JobsConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dyndns.toml in current directory
    /// 3. /etc/dyndns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(zones) = overrides.zones {
            self.dns.zones = zones;
        }
        if let Some(ns) = overrides.parent_ns {
            self.dns.parent_ns = ns;
        }
        if let Some(ip) = overrides.external_ip {
            self.dns.external_ip = Some(ip);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.server.bind_address.trim().parse::<IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Bind address {:?} is not a valid address",
                self.server.bind_address
            )));
        }

        if self.dns.zone_matcher().zones().is_empty() {
            return Err(ConfigError::Validation("No zones configured".to_string()));
        }

        if self.dns.parent_ns.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Parent nameserver is not configured".to_string(),
            ));
        }

        if !(MIN_TTL..=MAX_TTL).contains(&self.dns.default_ttl) {
            return Err(ConfigError::Validation(format!(
                "Default TTL {} outside [{}, {}]",
                self.dns.default_ttl, MIN_TTL, MAX_TTL
            )));
        }

        if self.jobs.clear_log_interval_days > MAX_LOG_RETENTION_DAYS {
            return Err(ConfigError::Validation(format!(
                "Log retention of {} days exceeds {}",
                self.jobs.clear_log_interval_days, MAX_LOG_RETENTION_DAYS
            )));
        }

        if let Some(ip) = &self.dns.external_ip {
            if ip.trim().parse::<IpAddr>().is_err() {
                return Err(ConfigError::Validation(format!(
                    "External IP {:?} is not a valid address",
                    ip
                )));
            }
        }

        Ok(())
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
    pub zones: Option<Vec<String>>,
    pub parent_ns: Option<String>,
    pub external_ip: Option<String>,
}
