//! Top-level configuration.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use crate::{ConfigError, LogFormat, LoggingConfig, ServerConfig};

/// Complete calculator service configuration.
///
/// Use [`ConfigLoader`](crate::ConfigLoader) to load it from files and
/// environment variables.
///
/// # Example
///
/// ```
/// use calculator_config::CalculatorConfig;
///
/// let config = CalculatorConfig::default();
/// assert_eq!(config.server.http_addr, "0.0.0.0:5000");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Server section.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging section.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CalculatorConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the bind address is not a socket
    /// address, the request timeout or body limit is zero, or the log level is not a valid
    /// filter directive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.http_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::invalid_value(
                "server.http_addr",
                format!("invalid socket address: {}", self.server.http_addr),
            ));
        }

        if self.server.request_timeout_ms == 0 {
            return Err(ConfigError::invalid_value(
                "server.request_timeout_ms",
                "must be greater than zero",
            ));
        }

        if self.server.max_body_bytes == 0 {
            return Err(ConfigError::invalid_value(
                "server.max_body_bytes",
                "must be greater than zero",
            ));
        }

        if let Err(e) = calculator_telemetry::create_env_filter(&self.logging.level) {
            return Err(ConfigError::invalid_value("logging.level", e.to_string()));
        }

        Ok(())
    }

    /// Local development preset: pretty debug logs with source locations.
    #[must_use]
    pub fn development() -> Self {
        let mut config = Self::default();
        config.logging.level = "debug".to_string();
        config.logging.format = LogFormat::Pretty;
        config.logging.file_line_info = true;
        config
    }

    /// Production preset: JSON logs at info level.
    #[must_use]
    pub fn production() -> Self {
        let mut config = Self::default();
        config.logging.level = "info".to_string();
        config.logging.format = LogFormat::Json;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(CalculatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_http_addr() {
        let mut config = CalculatorConfig::default();
        config.server.http_addr = "localhost".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "server.http_addr"));
    }

    #[test]
    fn test_zero_request_timeout() {
        let mut config = CalculatorConfig::default();
        config.server.request_timeout_ms = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_body_limit() {
        let mut config = CalculatorConfig::default();
        config.server.max_body_bytes = 0;

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "server.max_body_bytes"));
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = CalculatorConfig::default();
        config.logging.level = "calculator=loud".to_string();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "logging.level"));
    }

    #[test]
    fn test_presets() {
        let dev = CalculatorConfig::development();
        assert_eq!(dev.logging.format, LogFormat::Pretty);
        assert_eq!(dev.logging.level, "debug");

        let prod = CalculatorConfig::production();
        assert_eq!(prod.logging.format, LogFormat::Json);
        assert_eq!(prod.server, ServerConfig::default());
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result: Result<CalculatorConfig, _> = toml::from_str("[metrics]\nenabled = true");
        assert!(result.is_err());
    }
}
