//! API configuration

use core_kernel::{BillingMonth, CoreError};
use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Month billed by the sample endpoint when the request names none
    #[serde(default = "default_sample_month")]
    pub sample_month: String,
}

/// Default month of the sample bill
pub const SAMPLE_MONTH: &str = "2024-11";

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_sample_month() -> String {
    SAMPLE_MONTH.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            sample_month: default_sample_month(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_`-prefixed environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Checks that the configuration can start a server
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.host.trim().is_empty() {
            return Err(CoreError::configuration("host must not be empty"));
        }
        if self.port == 0 {
            return Err(CoreError::configuration("port must not be zero"));
        }
        self.sample_month.parse::<BillingMonth>()?;
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ApiConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_zero_port_is_rejected() {
        let config = ApiConfig {
            port: 0,
            ..ApiConfig::default()
        };

        assert!(matches!(config.validate(), Err(CoreError::Configuration(_))));
    }

    #[test]
    fn test_malformed_sample_month_is_rejected() {
        let config = ApiConfig {
            sample_month: "2024-13".to_string(),
            ..ApiConfig::default()
        };

        assert!(matches!(config.validate(), Err(CoreError::Temporal(_))));
    }
}
