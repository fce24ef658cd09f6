//! Method and path routing.
//!
//! Routes map a method plus a path template to an operation ID. Templates
//! use `{name}` for a single captured segment:
//!
//! ```rust
//! use calculator_server::Router;
//! use http::Method;
//!
//! let mut router = Router::new();
//! router.add_route(Method::POST, "/api/v2/calculator/{operation_name}", "v2_calculate");
//!
//! let m = router
//!     .match_route(&Method::POST, "/api/v2/calculator/addition")
//!     .unwrap();
//! assert_eq!(m.operation_id(), "v2_calculate");
//! assert_eq!(m.param("operation_name"), Some("addition"));
//! ```

use std::collections::HashMap;

use http::Method;

/// A matched route with its captured path parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    operation_id: String,
    params: HashMap<String, String>,
}

impl RouteMatch {
    /// Creates a new route match.
    #[must_use]
    pub fn new(operation_id: impl Into<String>, params: HashMap<String, String>) -> Self {
        Self {
            operation_id: operation_id.into(),
            params,
        }
    }

    /// Returns the operation ID of the matched route.
    #[must_use]
    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }

    /// Returns the captured path parameters.
    #[must_use]
    pub const fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Returns one captured path parameter.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Consumes the match, returning the operation ID and parameters.
    #[must_use]
    pub fn into_parts(self) -> (String, HashMap<String, String>) {
        (self.operation_id, self.params)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PathSegment {
    Literal(String),
    Param(String),
}

#[derive(Debug, Clone)]
struct Route {
    method: Method,
    segments: Vec<PathSegment>,
    operation_id: String,
}

impl Route {
    fn new(method: Method, pattern: &str, operation_id: impl Into<String>) -> Self {
        Self {
            method,
            segments: parse_segments(pattern),
            operation_id: operation_id.into(),
        }
    }

    fn match_path(&self, path: &str) -> Option<HashMap<String, String>> {
        let actual: Vec<&str> = split_path(path).collect();
        if actual.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, value) in self.segments.iter().zip(actual) {
            match segment {
                PathSegment::Literal(expected) if expected == value => {}
                PathSegment::Literal(_) => return None,
                PathSegment::Param(name) => {
                    params.insert(name.clone(), decode_segment(value));
                }
            }
        }

        Some(params)
    }
}

/// Percent-decodes a captured segment. Invalid UTF-8 is replaced, not
/// rejected.
fn decode_segment(raw: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn parse_segments(pattern: &str) -> Vec<PathSegment> {
    split_path(pattern)
        .map(|s| match s.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) => PathSegment::Param(name.to_string()),
            None => PathSegment::Literal(s.to_string()),
        })
        .collect()
}

/// HTTP request router.
///
/// Routes are tried in registration order and the first match wins, so
/// literal routes should be added before templates that would shadow them.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Creates an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Adds a route.
    pub fn add_route(
        &mut self,
        method: Method,
        pattern: impl AsRef<str>,
        operation_id: impl Into<String>,
    ) {
        self.routes
            .push(Route::new(method, pattern.as_ref(), operation_id));
    }

    /// Returns the number of registered routes.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Matches a request against the registered routes.
    #[must_use]
    pub fn match_route(&self, method: &Method, path: &str) -> Option<RouteMatch> {
        self.routes
            .iter()
            .filter(|route| route.method == *method)
            .find_map(|route| {
                route
                    .match_path(path)
                    .map(|params| RouteMatch::new(&route.operation_id, params))
            })
    }

    /// Returns the methods registered for a path, in registration order.
    ///
    /// An empty result means no route has this path at all.
    #[must_use]
    pub fn allowed_methods(&self, path: &str) -> Vec<Method> {
        let mut methods: Vec<Method> = Vec::new();
        for route in &self.routes {
            if !methods.contains(&route.method) && route.match_path(path).is_some() {
                methods.push(route.method.clone());
            }
        }
        methods
    }

    /// Returns `true` if any route maps to the operation ID.
    #[must_use]
    pub fn has_operation(&self, operation_id: &str) -> bool {
        self.routes.iter().any(|r| r.operation_id == operation_id)
    }

    /// Returns the registered operation IDs.
    #[must_use]
    pub fn operation_ids(&self) -> Vec<&str> {
        self.routes.iter().map(|r| r.operation_id.as_str()).collect()
    }
}
