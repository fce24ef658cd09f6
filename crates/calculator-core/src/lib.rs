//! # Calculator Core
//!
//! Core types shared by every crate of the calculator service.
//!
//! - [`CalculatorError`] - Service error taxonomy with stable client-facing keys
//! - [`ErrorResponse`] - The `{"key", "message"}` body returned for failures
//! - [`Registry`] - Name-keyed, lazily discovered collection of [`Element`]s
//! - [`RequestContext`] - Per-request identity and path parameters
//! - [`RequestId`] - UUID v7 request identifier

#![doc(html_root_url = "https://docs.rs/calculator-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod context;
mod error;
pub mod registry;

pub use context::{RequestContext, RequestId};
pub use error::{CalculatorError, CalculatorResult, ErrorCategory, ErrorResponse};
pub use registry::{Element, Registry, RegistryError};
