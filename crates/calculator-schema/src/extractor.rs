//! Core extractor trait.

use crate::{RequestParts, SchemaValidationError};

/// Trait for types that can be built from an HTTP request.
///
/// Handler inputs implement this trait; the server calls it before the handler
/// runs and reports any error through its central error responder.
///
/// # Implementing `FromRequest`
///
/// ```rust
/// use calculator_schema::{
///     FromRequest, RequestParts, SchemaComponent, SchemaFailure, SchemaValidationError,
/// };
/// use serde_json::Value;
///
/// struct RawBody(Vec<u8>);
///
/// impl FromRequest for RawBody {
///     fn from_request(parts: &RequestParts) -> Result<Self, SchemaValidationError> {
///         if parts.body().is_empty() {
///             return Err(SchemaValidationError::new(
///                 SchemaComponent::Body,
///                 "RawBody",
///                 Value::Null,
///                 SchemaFailure::MissingBody,
///             ));
///         }
///         Ok(RawBody(parts.body().to_vec()))
///     }
/// }
/// ```
pub trait FromRequest: Sized {
    /// Builds this type from the request.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaValidationError`] if the request does not fit.
    fn from_request(parts: &RequestParts) -> Result<Self, SchemaValidationError>;
}

// Routes that take no input at all.
impl FromRequest for () {
    fn from_request(_parts: &RequestParts) -> Result<Self, SchemaValidationError> {
        Ok(())
    }
}
