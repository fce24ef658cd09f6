//! Structured logging for the calculator service.
//!
//! Logging goes through the [`tracing`] macros everywhere in the workspace.
//! This crate only installs the subscriber that formats them:
//!
//! - JSON lines for production ([`LogConfig::production`])
//! - Pretty multi-line output for development ([`LogConfig::development`])
//!
//! The level accepts any `EnvFilter` directive, so per-crate levels such as
//! `calculator=debug,hyper=warn` work.
//!
//! # Example
//!
//! ```rust,ignore
//! use calculator_telemetry::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::development())?;
//! tracing::info!(http_addr = "0.0.0.0:5000", "calculator starting");
//! ```

#![doc(html_root_url = "https://docs.rs/calculator-telemetry/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod logging;

pub use error::TelemetryError;
pub use logging::{create_env_filter, fields, init_logging, LogConfig, LogFormat};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
