//! Schema validation errors.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// The request role a schema was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaComponent {
    /// Query string parameters.
    Query,
    /// JSON request body.
    Body,
}

impl fmt::Display for SchemaComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => write!(f, "query"),
            Self::Body => write!(f, "body"),
        }
    }
}

/// Why a declared schema could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaFailure {
    /// No JSON body was sent, or it could not be decoded.
    #[error("request body must not be empty")]
    MissingBody,

    /// The JSON body is not an object.
    #[error("request body must be a JSON object")]
    NotAnObject,

    /// The fields did not fit the declared type.
    #[error("{0}")]
    Construction(String),
}

/// A declared schema could not be built from the request.
///
/// Carries the role, the declared type, the raw value it was built from and
/// the underlying failure. The message is suitable for clients.
///
/// # Example
///
/// ```rust
/// use calculator_schema::{SchemaComponent, SchemaFailure, SchemaValidationError};
/// use serde_json::Value;
///
/// let err = SchemaValidationError::new(
///     SchemaComponent::Body,
///     "Operands",
///     Value::Null,
///     SchemaFailure::MissingBody,
/// );
///
/// assert_eq!(
///     err.to_string(),
///     "\"body\" schema validation error: request body must not be empty"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("\"{component}\" schema validation error: {failure}")]
pub struct SchemaValidationError {
    component: SchemaComponent,
    schema: &'static str,
    value: Value,
    failure: SchemaFailure,
}

impl SchemaValidationError {
    /// Creates a new schema validation error.
    #[must_use]
    pub fn new(
        component: SchemaComponent,
        schema: &'static str,
        value: Value,
        failure: SchemaFailure,
    ) -> Self {
        Self {
            component,
            schema,
            value,
            failure,
        }
    }

    /// Returns the role that failed.
    #[must_use]
    pub const fn component(&self) -> SchemaComponent {
        self.component
    }

    /// Returns the name of the declared type.
    #[must_use]
    pub const fn schema(&self) -> &'static str {
        self.schema
    }

    /// Returns the raw value the schema was built from.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the underlying failure.
    #[must_use]
    pub const fn failure(&self) -> &SchemaFailure {
        &self.failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_error_message() {
        let err = SchemaValidationError::new(
            SchemaComponent::Query,
            "Paging",
            json!({"limit": "x"}),
            SchemaFailure::Construction("invalid digit found in string".to_string()),
        );

        assert_eq!(
            err.to_string(),
            "\"query\" schema validation error: invalid digit found in string"
        );
        assert_eq!(err.component(), SchemaComponent::Query);
        assert_eq!(err.schema(), "Paging");
        assert_eq!(err.value(), &json!({"limit": "x"}));
    }

    #[test]
    fn test_failure_kinds_are_distinct() {
        assert_ne!(SchemaFailure::MissingBody, SchemaFailure::NotAnObject);
        assert_eq!(
            SchemaFailure::NotAnObject.to_string(),
            "request body must be a JSON object"
        );
    }
}
