//! Layered configuration loader.

use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::{CalculatorConfig, ConfigError, LogFormat};

/// Default prefix for environment overrides.
pub const ENV_PREFIX: &str = "CALCULATOR";

/// Configuration loader.
///
/// Layers are applied in call order, then environment overrides, then
/// validation:
/// 1. Defaults (or a preset)
/// 2. Configuration file (TOML or JSON)
/// 3. Environment variables `PREFIX__SECTION__KEY`
///
/// # Example
///
/// ```no_run
/// use calculator_config::{ConfigLoader, ENV_PREFIX};
///
/// # fn main() -> Result<(), calculator_config::ConfigError> {
/// let config = ConfigLoader::new()
///     .with_optional_file("calculator.toml")?
///     .with_dotenv()
///     .with_env_prefix(ENV_PREFIX)
///     .load()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConfigLoader {
    config: CalculatorConfig,
    env_prefix: Option<String>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Creates a loader starting from the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
            env_prefix: None,
        }
    }

    /// Starts from the development preset.
    #[must_use]
    pub fn with_development(mut self) -> Self {
        self.config = CalculatorConfig::development();
        self
    }

    /// Starts from the production preset.
    #[must_use]
    pub fn with_production(mut self) -> Self {
        self.config = CalculatorConfig::production();
        self
    }

    /// Loads a configuration file, choosing the format by extension.
    ///
    /// Fields missing from the file take their default values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing, unreadable, has an
    /// unsupported extension, or does not parse.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::file_not_found(path));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        self.config = parse(&content, format)
            .map_err(|e| match e {
                ConfigError::UnsupportedFormat(_) => {
                    ConfigError::UnsupportedFormat(path.display().to_string())
                }
                other => other,
            })?;
        Ok(self)
    }

    /// Loads a configuration file if it exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be loaded.
    pub fn with_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            self.with_file(path)
        } else {
            Ok(self)
        }
    }

    /// Loads configuration from a string in the given format ("toml" or
    /// "json").
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the format is unknown or parsing fails.
    pub fn with_string(mut self, content: &str, format: &str) -> Result<Self, ConfigError> {
        self.config = parse(content, format)?;
        Ok(self)
    }

    /// Sets the environment variable prefix for overrides.
    ///
    /// With prefix `CALCULATOR`:
    /// - `CALCULATOR__SERVER__HTTP_ADDR=127.0.0.1:9000`
    /// - `CALCULATOR__LOGGING__LEVEL=debug`
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_uppercase());
        self
    }

    /// Loads variables from a `.env` file into the process environment, if
    /// one exists.
    #[must_use]
    pub fn with_dotenv(self) -> Self {
        // A missing .env file is not an error.
        let _ = dotenvy::dotenv();
        self
    }

    /// Applies environment overrides and validates.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an override does not parse or validation fails.
    pub fn load(mut self) -> Result<CalculatorConfig, ConfigError> {
        if let Some(prefix) = self.env_prefix.take() {
            let vars: Vec<(String, String)> = env::vars()
                .filter(|(k, _)| k.starts_with(&format!("{prefix}__")))
                .collect();
            for (key, value) in vars {
                self.apply_env_var(&key, &value, &prefix)?;
            }
        }

        self.config.validate()?;
        Ok(self.config)
    }

    fn apply_env_var(&mut self, key: &str, value: &str, prefix: &str) -> Result<(), ConfigError> {
        let path = key
            .strip_prefix(prefix)
            .and_then(|k| k.strip_prefix("__"))
            .ok_or_else(|| ConfigError::env_override(key, "invalid key format"))?;

        let parts: Vec<&str> = path.split("__").collect();
        let server = &mut self.config.server;
        let logging = &mut self.config.logging;

        match parts.as_slice() {
            ["SERVER", "HTTP_ADDR"] => server.http_addr = value.to_string(),
            ["SERVER", "SHUTDOWN_TIMEOUT_SECS"] => {
                server.shutdown_timeout_secs = parse_int(key, value)?;
            }
            ["SERVER", "REQUEST_TIMEOUT_MS"] => {
                server.request_timeout_ms = parse_int(key, value)?;
            }
            ["SERVER", "MAX_BODY_BYTES"] => server.max_body_bytes = parse_int(key, value)?,
            ["SERVER", "SERVICE_NAME"] => server.service_name = value.to_string(),

            ["LOGGING", "ENABLED"] => logging.enabled = parse_bool(key, value)?,
            ["LOGGING", "LEVEL"] => logging.level = value.to_string(),
            ["LOGGING", "FORMAT"] => {
                logging.format = match value.to_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    "pretty" => LogFormat::Pretty,
                    _ => {
                        return Err(ConfigError::env_override(
                            key,
                            "expected 'json' or 'pretty'",
                        ))
                    }
                };
            }
            ["LOGGING", "FILE_LINE_INFO"] => logging.file_line_info = parse_bool(key, value)?,

            // Unknown keys are ignored.
            _ => {}
        }

        Ok(())
    }
}

fn parse(content: &str, format: &str) -> Result<CalculatorConfig, ConfigError> {
    match format.to_lowercase().as_str() {
        "toml" => Ok(toml::from_str(content)?),
        "json" => Ok(serde_json::from_str(content)?),
        other => Err(ConfigError::UnsupportedFormat(other.to_string())),
    }
}

fn parse_int<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::env_override(key, "expected integer"))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::env_override(key, "expected boolean")),
    }
}
