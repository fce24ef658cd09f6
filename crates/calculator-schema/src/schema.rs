//! Declared schemas for the query and body roles.

use crate::{
    raw_body, raw_query, FromRequest, RequestParts, SchemaComponent, SchemaFailure,
    SchemaValidationError,
};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::type_name;
use std::ops::Deref;

/// A type that can be built from the raw query map.
pub trait QuerySchema: Sized {
    /// Builds the value from the parsed query string.
    fn from_query(raw: IndexMap<String, String>) -> Result<Self, SchemaValidationError>;
}

/// A type that can be built from the raw JSON body.
pub trait BodySchema: Sized {
    /// Builds the value from the decoded body, `None` when absent.
    fn from_body(raw: Option<Value>) -> Result<Self, SchemaValidationError>;
}

/// A role the route does not use.
impl QuerySchema for () {
    fn from_query(_raw: IndexMap<String, String>) -> Result<Self, SchemaValidationError> {
        Ok(())
    }
}

impl BodySchema for () {
    fn from_body(_raw: Option<Value>) -> Result<Self, SchemaValidationError> {
        Ok(())
    }
}

/// Raw passthrough for a role without a declared type.
///
/// For the query role it holds the flat query map, for the body role the
/// decoded JSON value (`null` when absent).
#[derive(Debug, Clone, PartialEq)]
pub struct Untyped<T>(pub T);

impl<T> Untyped<T> {
    /// Consumes the wrapper and returns the raw value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Untyped<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl QuerySchema for Untyped<IndexMap<String, String>> {
    fn from_query(raw: IndexMap<String, String>) -> Result<Self, SchemaValidationError> {
        Ok(Self(raw))
    }
}

impl BodySchema for Untyped<Value> {
    fn from_body(raw: Option<Value>) -> Result<Self, SchemaValidationError> {
        Ok(Self(raw.unwrap_or(Value::Null)))
    }
}

/// A role with a declared type `T`.
///
/// The raw entries are treated as the named fields of `T`.
///
/// # Example
///
/// ```rust
/// use calculator_schema::{BodySchema, SchemaFailure, Typed};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Deserialize)]
/// struct Pair {
///     left: i64,
///     right: i64,
/// }
///
/// let Typed(pair) = Typed::<Pair>::from_body(Some(json!({"left": 4, "right": 2}))).unwrap();
/// assert_eq!(pair.left - pair.right, 2);
///
/// let err = Typed::<Pair>::from_body(Some(json!([4, 2]))).err().unwrap();
/// assert_eq!(err.failure(), &SchemaFailure::NotAnObject);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typed<T>(pub T);

impl<T> Typed<T> {
    /// Consumes the wrapper and returns the typed value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Typed<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: DeserializeOwned> QuerySchema for Typed<T> {
    fn from_query(raw: IndexMap<String, String>) -> Result<Self, SchemaValidationError> {
        let fail = |raw: &IndexMap<String, String>, message: String| {
            let value = raw
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect();
            SchemaValidationError::new(
                SchemaComponent::Query,
                type_name::<T>(),
                Value::Object(value),
                SchemaFailure::Construction(message),
            )
        };

        // serde_urlencoded coerces the string values into the field types.
        let encoded = serde_urlencoded::to_string(&raw).map_err(|e| fail(&raw, e.to_string()))?;
        serde_urlencoded::from_str(&encoded)
            .map(Self)
            .map_err(|e| fail(&raw, e.to_string()))
    }
}

impl<T: DeserializeOwned> BodySchema for Typed<T> {
    fn from_body(raw: Option<Value>) -> Result<Self, SchemaValidationError> {
        let fail = |value: Value, failure: SchemaFailure| {
            SchemaValidationError::new(SchemaComponent::Body, type_name::<T>(), value, failure)
        };

        // A literal `null` body counts as absent.
        let Some(value) = raw.filter(|v| !v.is_null()) else {
            return Err(fail(Value::Null, SchemaFailure::MissingBody));
        };
        if !value.is_object() {
            return Err(fail(value, SchemaFailure::NotAnObject));
        }

        match T::deserialize(&value) {
            Ok(typed) => Ok(Self(typed)),
            Err(e) => Err(fail(value, SchemaFailure::Construction(e.to_string()))),
        }
    }
}

/// Validated input for a route declaring query type `Q` and body type `B`.
///
/// Handlers receive the built values under the role names.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated<Q = (), B = ()> {
    /// The query role.
    pub query: Q,
    /// The body role.
    pub body: B,
}

impl<Q: QuerySchema, B: BodySchema> FromRequest for Validated<Q, B> {
    fn from_request(parts: &RequestParts) -> Result<Self, SchemaValidationError> {
        let query = Q::from_query(raw_query(parts))?;
        let body = B::from_body(raw_body(parts))?;
        Ok(Self { query, body })
    }
}
