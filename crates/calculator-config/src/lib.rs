//! # Calculator Config
//!
//! Typed configuration for the calculator service.
//!
//! Configuration is layered, later layers overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. A TOML or JSON file
//! 3. Environment variables named `CALCULATOR__SECTION__KEY`
//!
//! Unknown fields in files are rejected.
//!
//! ```toml
//! [server]
//! http_addr = "0.0.0.0:5000"
//! request_timeout_ms = 30000
//!
//! [logging]
//! level = "debug"
//! format = "pretty"
//! ```
//!
//! ## Example
//!
//! ```
//! use calculator_config::ConfigLoader;
//!
//! let config = ConfigLoader::new()
//!     .with_string("[server]\nhttp_addr = \"127.0.0.1:8000\"", "toml")
//!     .unwrap()
//!     .load()
//!     .unwrap();
//!
//! assert_eq!(config.server.http_addr, "127.0.0.1:8000");
//! ```

#![doc(html_root_url = "https://docs.rs/calculator-config/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod loader;
mod schema;

pub use config::CalculatorConfig;
pub use error::ConfigError;
pub use loader::{ConfigLoader, ENV_PREFIX};
pub use schema::{LoggingConfig, ServerConfig};

pub use calculator_telemetry::LogFormat;
