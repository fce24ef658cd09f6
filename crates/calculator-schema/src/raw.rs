//! Raw, undeclared views of the query string and body.

use crate::RequestParts;
use indexmap::IndexMap;
use serde_json::Value;

/// Parses the query string into a flat map.
///
/// When a key repeats, the first value wins. A missing query string yields an
/// empty map.
///
/// ```rust
/// use calculator_schema::{raw_query, RequestParts};
///
/// let parts = RequestParts::builder().uri("/?a=1&b=2&a=3").build();
/// let query = raw_query(&parts);
///
/// assert_eq!(query.get("a").map(String::as_str), Some("1"));
/// assert_eq!(query.len(), 2);
/// ```
#[must_use]
pub fn raw_query(parts: &RequestParts) -> IndexMap<String, String> {
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(parts.query_string().unwrap_or("")).unwrap_or_default();

    let mut query = IndexMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        query.entry(key).or_insert(value);
    }
    query
}

/// Decodes the body as JSON.
///
/// Returns `None` unless the request declares a JSON content type
/// (`application/json` or a `+json` suffix) and the body decodes.
#[must_use]
pub fn raw_body(parts: &RequestParts) -> Option<Value> {
    if !is_json(parts.content_type()?) {
        return None;
    }
    serde_json::from_slice(parts.body()).ok()
}

fn is_json(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
