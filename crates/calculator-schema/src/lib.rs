//! # Calculator Schema
//!
//! Maps raw HTTP input onto the types a route declares for it.
//!
//! A route declares one type per role:
//!
//! | Role | Raw input | Declared type | Passthrough | Unused |
//! |------|-----------|---------------|-------------|--------|
//! | query | query string, first value per key | [`Typed<T>`] | [`Untyped<IndexMap<String, String>>`](Untyped) | `()` |
//! | body | JSON body, `null` when absent | [`Typed<T>`] | [`Untyped<serde_json::Value>`](Untyped) | `()` |
//!
//! Both roles are bundled in [`Validated<Q, B>`], which implements
//! [`FromRequest`]. The query role is validated first, and the first failure
//! is returned as a [`SchemaValidationError`].
//!
//! ## Example
//!
//! ```rust
//! use calculator_schema::{FromRequest, RequestParts, Typed, Validated};
//! use http::Method;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Pair {
//!     left: i64,
//!     right: i64,
//! }
//!
//! let parts = RequestParts::builder()
//!     .method(Method::POST)
//!     .uri("/sum")
//!     .header("content-type", "application/json")
//!     .body(r#"{"left": 1, "right": 2}"#)
//!     .build();
//!
//! let input = Validated::<(), Typed<Pair>>::from_request(&parts).unwrap();
//! assert_eq!(input.body.left + input.body.right, 3);
//! ```

#![doc(html_root_url = "https://docs.rs/calculator-schema/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod context;
mod error;
mod extractor;
mod raw;
mod schema;

pub use context::{RequestParts, RequestPartsBuilder};
pub use error::{SchemaComponent, SchemaFailure, SchemaValidationError};
pub use extractor::FromRequest;
pub use raw::{raw_body, raw_query};
pub use schema::{BodySchema, QuerySchema, Typed, Untyped, Validated};

// Re-exported so routes can name the passthrough query type.
pub use indexmap::IndexMap;
