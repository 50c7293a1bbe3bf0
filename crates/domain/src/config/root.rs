use serde::{Deserialize, Serialize};

use super::aliases::AliasConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::mdns::MdnsConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-mdns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-mdns/config.toml";

/// Main configuration structure for Ferrous mDNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Socket configuration (interface, address family)
    #[serde(default)]
    pub server: ServerConfig,

    /// Responder behaviour
    #[serde(default)]
    pub mdns: MdnsConfig,

    /// Hostnames this responder answers for
    #[serde(default)]
    pub aliases: AliasConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-mdns.toml in current directory
    /// 3. /etc/ferrous-mdns/config.toml
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
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(interface) = overrides.interface {
            self.server.interface = Some(interface);
        }
        if overrides.ipv6 {
            self.server.ipv6 = true;
        }
        if let Some(file) = overrides.alias_file {
            self.aliases.file = Some(file);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("mDNS port cannot be 0".to_string()));
        }

        if self.mdns.max_datagram_size < 512 {
            return Err(ConfigError::Validation(format!(
                "max_datagram_size {} is below the 512 byte DNS minimum",
                self.mdns.max_datagram_size
            )));
        }

        if let Some(interface) = &self.server.interface {
            let addr = interface.parse::<std::net::IpAddr>().map_err(|_| {
                ConfigError::Validation(format!("interface '{}' is not an IP address", interface))
            })?;
            if addr.is_ipv6() != self.server.ipv6 {
                return Err(ConfigError::Validation(format!(
                    "interface {} does not match the configured address family",
                    interface
                )));
            }
        }

        for entry in &self.aliases.hosts {
            entry.to_alias()?;
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub interface: Option<String>,
    pub ipv6: bool,
    pub alias_file: Option<String>,
    pub log_level: Option<String>,
}
