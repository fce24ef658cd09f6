//! Handler registration and dispatch.
//!
//! Handlers are async functions bound to an operation ID. Each one declares
//! its input as a [`FromRequest`] type, usually
//! [`Validated`](calculator_schema::Validated), and the registry validates
//! the raw request into that type before the handler runs. A validation
//! failure never reaches the handler.
//!
//! ```rust
//! use calculator_core::RequestContext;
//! use calculator_schema::{Typed, Validated};
//! use calculator_server::{HandlerError, HandlerRegistry};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Deserialize)]
//! struct Pair {
//!     left: i64,
//!     right: i64,
//! }
//!
//! #[derive(Serialize)]
//! struct Product {
//!     result: i64,
//! }
//!
//! async fn multiply(
//!     _ctx: RequestContext,
//!     input: Validated<(), Typed<Pair>>,
//! ) -> Result<Product, HandlerError> {
//!     Ok(Product { result: input.body.left * input.body.right })
//! }
//!
//! let mut registry = HandlerRegistry::new();
//! registry.register("multiply", multiply);
//! assert!(registry.contains("multiply"));
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;

use calculator_core::{CalculatorError, RequestContext};
use calculator_schema::{FromRequest, RequestParts, SchemaValidationError};

/// Boxed future returned by an erased handler.
pub type BoxedHandlerResult = Pin<Box<dyn Future<Output = Result<Bytes, HandlerError>> + Send>>;

/// A type-erased handler.
pub type ErasedHandler =
    Arc<dyn Fn(RequestContext, RequestParts) -> BoxedHandlerResult + Send + Sync>;

/// Errors produced while running a handler.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The request did not satisfy the handler's declared schema.
    #[error(transparent)]
    Schema(#[from] SchemaValidationError),

    /// The handler itself failed.
    #[error(transparent)]
    Calculator(#[from] CalculatorError),

    /// The handler's output could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl HandlerError {
    /// Maps this error onto the service error model.
    #[must_use]
    pub fn into_calculator_error(self) -> CalculatorError {
        match self {
            Self::Schema(err) => CalculatorError::validation(err.to_string()),
            Self::Calculator(err) => err,
            Self::Serialization(message) => {
                CalculatorError::internal(format!("failed to serialize response: {message}"))
            }
        }
    }
}

/// Errors from [`HandlerRegistry::invoke`].
#[derive(Debug, Error)]
pub enum InvokeError {
    /// No handler is bound to the operation.
    #[error("no handler registered for operation: {0}")]
    HandlerNotFound(String),

    /// The handler ran and failed.
    #[error(transparent)]
    Handler(#[from] HandlerError),
}

impl InvokeError {
    /// Maps this error onto the service error model.
    #[must_use]
    pub fn into_calculator_error(self) -> CalculatorError {
        match self {
            Self::HandlerNotFound(_) => CalculatorError::internal(self.to_string()),
            Self::Handler(err) => err.into_calculator_error(),
        }
    }
}

/// Maps operation IDs to handlers.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, ErasedHandler>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Binds a handler to an operation ID, replacing any previous binding.
    ///
    /// The handler's input type is built from the request with
    /// [`FromRequest::from_request`]; its output is serialized as the JSON
    /// response body.
    pub fn register<I, Res, F, Fut>(&mut self, operation_id: impl Into<String>, handler: F)
    where
        I: FromRequest + Send + 'static,
        Res: Serialize + Send + 'static,
        F: Fn(RequestContext, I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Res, HandlerError>> + Send + 'static,
    {
        let handler = Arc::new(handler);
        let erased: ErasedHandler = Arc::new(
            move |ctx: RequestContext, parts: RequestParts| -> BoxedHandlerResult {
                Box::pin(run_handler(Arc::clone(&handler), ctx, parts))
            },
        );

        self.handlers.insert(operation_id.into(), erased);
    }

    /// Looks up a handler.
    #[must_use]
    pub fn get(&self, operation_id: &str) -> Option<&ErasedHandler> {
        self.handlers.get(operation_id)
    }

    /// Returns `true` if a handler is bound to the operation.
    #[must_use]
    pub fn contains(&self, operation_id: &str) -> bool {
        self.handlers.contains_key(operation_id)
    }

    /// Returns the number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Returns the registered operation IDs, sorted.
    #[must_use]
    pub fn operation_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Validates the request and runs the handler bound to `operation_id`.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::HandlerNotFound`] if nothing is bound to the
    /// operation, or [`InvokeError::Handler`] if validation or the handler
    /// fails.
    pub async fn invoke(
        &self,
        operation_id: &str,
        ctx: RequestContext,
        parts: RequestParts,
    ) -> Result<Bytes, InvokeError> {
        let handler = self
            .handlers
            .get(operation_id)
            .ok_or_else(|| InvokeError::HandlerNotFound(operation_id.to_string()))?;

        Ok(handler(ctx, parts).await?)
    }
}

async fn run_handler<I, Res, F, Fut>(
    handler: Arc<F>,
    ctx: RequestContext,
    parts: RequestParts,
) -> Result<Bytes, HandlerError>
where
    I: FromRequest,
    Res: Serialize,
    F: Fn(RequestContext, I) -> Fut,
    Fut: Future<Output = Result<Res, HandlerError>>,
{
    let input = I::from_request(&parts)?;
    let output = handler(ctx, input).await?;
    let bytes =
        serde_json::to_vec(&output).map_err(|e| HandlerError::Serialization(e.to_string()))?;
    Ok(Bytes::from(bytes))
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("operations", &self.operation_ids())
            .finish()
    }
}
