//! Error types for the calculator service.
//!
//! [`CalculatorError`] is the error every handler ultimately reports. Each
//! variant belongs to an [`ErrorCategory`], which fixes both the HTTP status and
//! the stable machine-readable key sent to clients:
//!
//! | `ErrorCategory` | Status | Key |
//! |---|---|---|
//! | `Validation` | 400 | `calculator.error.validation` |
//! | `Arithmetic` | 400 | `calculator.error.arithmetic` |
//! | `NotFound` | 404 | `calculator.error.not_found` |
//! | `MethodNotAllowed` | 405 | `calculator.error.method_not_allowed` |
//! | `PayloadTooLarge` | 413 | `calculator.error.payload_too_large` |
//! | `Timeout` | 504 | `calculator.error.timeout` |
//! | `Internal` | 500 | `calculator.error.internal` |

use crate::registry::RegistryError;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using [`CalculatorError`].
pub type CalculatorResult<T> = Result<T, CalculatorError>;

/// Categories of errors for classification and handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Client input could not be validated.
    Validation,
    /// The operands were valid but the arithmetic is undefined for them.
    Arithmetic,
    /// No route matches the request path.
    NotFound,
    /// The path exists but not for the request method.
    MethodNotAllowed,
    /// The request body exceeds the configured limit.
    PayloadTooLarge,
    /// The request did not complete in time.
    Timeout,
    /// Server-side failure.
    Internal,
}

impl ErrorCategory {
    /// Returns the HTTP status code for this category.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation | Self::Arithmetic => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the stable error key reported to clients.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Validation => "calculator.error.validation",
            Self::Arithmetic => "calculator.error.arithmetic",
            Self::NotFound => "calculator.error.not_found",
            Self::MethodNotAllowed => "calculator.error.method_not_allowed",
            Self::PayloadTooLarge => "calculator.error.payload_too_large",
            Self::Timeout => "calculator.error.timeout",
            Self::Internal => "calculator.error.internal",
        }
    }
}

/// Standard error type for the calculator service.
///
/// # Example
///
/// ```
/// use calculator_core::{CalculatorError, ErrorCategory};
///
/// let err = CalculatorError::validation("left is required");
/// assert_eq!(err.category(), ErrorCategory::Validation);
/// assert_eq!(err.to_response().key, "calculator.error.validation");
/// ```
#[derive(Error, Debug)]
pub enum CalculatorError {
    /// Request validation failed.
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable error message.
        message: String,
    },

    /// Arithmetic could not be carried out (division by zero, overflow).
    #[error("Arithmetic error: {message}")]
    Arithmetic {
        /// Human-readable error message.
        message: String,
    },

    /// Route not found.
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message.
        message: String,
    },

    /// Method not allowed for the path.
    #[error("Method not allowed: {message}")]
    MethodNotAllowed {
        /// Human-readable error message.
        message: String,
    },

    /// Request body too large.
    #[error("Payload too large: {message}")]
    PayloadTooLarge {
        /// Human-readable error message.
        message: String,
    },

    /// Request timed out.
    #[error("Timeout: {message}")]
    Timeout {
        /// Human-readable error message.
        message: String,
    },

    /// Internal server error.
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message.
        message: String,
        /// The underlying error (not exposed to clients).
        #[source]
        source: Option<anyhow::Error>,
    },
}

impl CalculatorError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates an arithmetic error.
    #[must_use]
    pub fn arithmetic(message: impl Into<String>) -> Self {
        Self::Arithmetic {
            message: message.into(),
        }
    }

    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Creates a method-not-allowed error.
    #[must_use]
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
        }
    }

    /// Creates a payload-too-large error.
    #[must_use]
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::PayloadTooLarge {
            message: message.into(),
        }
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an internal error wrapping an underlying cause.
    #[must_use]
    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } => ErrorCategory::Validation,
            Self::Arithmetic { .. } => ErrorCategory::Arithmetic,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::MethodNotAllowed { .. } => ErrorCategory::MethodNotAllowed,
            Self::PayloadTooLarge { .. } => ErrorCategory::PayloadTooLarge,
            Self::Timeout { .. } => ErrorCategory::Timeout,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.category().status_code()
    }

    /// Returns the client-facing message, without the category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::Arithmetic { message }
            | Self::NotFound { message }
            | Self::MethodNotAllowed { message }
            | Self::PayloadTooLarge { message }
            | Self::Timeout { message }
            | Self::Internal { message, .. } => message,
        }
    }

    /// Converts this error into the response body sent to clients.
    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            key: self.category().key().to_string(),
            message: self.message().to_string(),
        }
    }
}

impl From<RegistryError> for CalculatorError {
    fn from(err: RegistryError) -> Self {
        match err {
            // Lookups are driven by client input.
            RegistryError::ElementNotFound { .. } => Self::validation(err.to_string()),
            RegistryError::DuplicateName { .. } | RegistryError::InvalidElement { .. } => {
                Self::internal_with_source("operator registry is misconfigured", err)
            }
        }
    }
}

/// Error body returned to clients.
///
/// ```json
/// {"key": "calculator.error.validation", "message": "..."}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable error key.
    pub key: String,
    /// Human-readable detail.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_status_codes() {
        assert_eq!(
            ErrorCategory::Validation.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCategory::Arithmetic.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCategory::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCategory::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ErrorCategory::PayloadTooLarge.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ErrorCategory::Timeout.status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            ErrorCategory::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_response() {
        let err = CalculatorError::validation("left is required");
        let response = err.to_response();

        assert_eq!(response.key, "calculator.error.validation");
        assert_eq!(response.message, "left is required");
        assert_eq!(err.to_string(), "Validation error: left is required");
    }

    #[test]
    fn test_payload_too_large_response() {
        let err = CalculatorError::payload_too_large("request body exceeds 64 bytes");

        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.to_response().key, "calculator.error.payload_too_large");
        assert_eq!(err.message(), "request body exceeds 64 bytes");
    }

    #[test]
    fn test_internal_hides_source() {
        let err = CalculatorError::internal_with_source("boom", anyhow::anyhow!("secret"));
        let response = err.to_response();

        assert_eq!(response.key, "calculator.error.internal");
        assert_eq!(response.message, "boom");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_element_not_found_becomes_validation() {
        let err: CalculatorError = RegistryError::ElementNotFound {
            name: "modulo".to_string(),
            known: vec!["addition".to_string()],
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.message().contains("modulo"));
        assert!(err.message().contains("addition"));
    }

    #[test]
    fn test_duplicate_name_becomes_internal() {
        let err: CalculatorError = RegistryError::DuplicateName {
            name: "addition".to_string(),
        }
        .into();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_serialization() {
        let response = CalculatorError::arithmetic("division by zero").to_response();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "key": "calculator.error.arithmetic",
                "message": "division by zero"
            })
        );
    }
}
