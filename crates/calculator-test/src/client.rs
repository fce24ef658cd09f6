//! The in-process client.

use std::sync::Arc;

use bytes::Bytes;
use http::{header, Method, Request};
use serde::Serialize;

use calculator_server::Server;

use crate::error::TestError;
use crate::response::TestResponse;

/// Sends requests straight into a [`Server`] without a network hop.
#[derive(Debug, Clone)]
#[must_use]
pub struct TestClient {
    server: Arc<Server>,
    default_headers: Vec<(String, String)>,
}

impl TestClient {
    /// Wraps a fully configured server.
    pub fn new(server: Server) -> Self {
        Self {
            server: Arc::new(server),
            default_headers: Vec::new(),
        }
    }

    /// Adds a header sent with every request.
    pub fn with_default_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Returns the wrapped server.
    #[must_use]
    pub fn server(&self) -> &Server {
        &self.server
    }

    /// Starts a GET request.
    pub fn get(&self, uri: impl Into<String>) -> TestRequest<'_> {
        self.request(Method::GET, uri)
    }

    /// Starts a POST request.
    pub fn post(&self, uri: impl Into<String>) -> TestRequest<'_> {
        self.request(Method::POST, uri)
    }

    /// Starts a request with any method.
    pub fn request(&self, method: Method, uri: impl Into<String>) -> TestRequest<'_> {
        TestRequest {
            client: self,
            method,
            uri: uri.into(),
            headers: self.default_headers.clone(),
            body: Bytes::new(),
            error: None,
        }
    }
}

/// A request being built against a [`TestClient`].
#[must_use]
pub struct TestRequest<'a> {
    client: &'a TestClient,
    method: Method,
    uri: String,
    headers: Vec<(String, String)>,
    body: Bytes,
    error: Option<TestError>,
}

impl TestRequest<'_> {
    /// Adds a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the raw body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Serializes `value` as the body and sets `Content-Type: application/json`.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(bytes) => self.body = Bytes::from(bytes),
            Err(e) => self.error = Some(TestError::Json(e)),
        }
        self.header(header::CONTENT_TYPE.as_str(), "application/json")
    }

    /// Sends the request.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the response cannot be read.
    /// Use [`try_send`](Self::try_send) to handle those cases.
    pub async fn send(self) -> TestResponse {
        match self.try_send().await {
            Ok(response) => response,
            Err(e) => panic!("test request failed: {e}"),
        }
    }

    /// Sends the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or the response
    /// body cannot be read.
    pub async fn try_send(self) -> Result<TestResponse, TestError> {
        if let Some(e) = self.error {
            return Err(e);
        }

        let mut builder = Request::builder().method(self.method).uri(self.uri);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let request = builder
            .body(self.body)
            .map_err(|e| TestError::RequestBuild(e.to_string()))?;

        let response = self.client.server.dispatch(request).await;
        TestResponse::from_http(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calculator_core::RequestContext;
    use calculator_schema::{Untyped, Validated};
    use calculator_server::HandlerError;
    use http::StatusCode;
    use serde_json::{json, Value};

    async fn echo(
        ctx: RequestContext,
        input: Validated<(), Untyped<Value>>,
    ) -> Result<Value, HandlerError> {
        Ok(json!({
            "body": input.body.into_inner(),
            "tag": ctx.param("tag"),
        }))
    }

    fn client() -> TestClient {
        let mut server = Server::builder().build();
        server
            .router_mut()
            .add_route(Method::POST, "/echo/{tag}", "echo");
        server.handlers_mut().register("echo", echo);
        TestClient::new(server)
    }

    #[tokio::test]
    async fn test_json_request() {
        let response = client()
            .post("/echo/blue")
            .json(&json!({"left": 1}))
            .send()
            .await;

        response.assert_status(StatusCode::OK);
        assert_eq!(
            response.json_value().unwrap(),
            json!({"body": {"left": 1}, "tag": "blue"})
        );
    }

    #[tokio::test]
    async fn test_raw_body_without_content_type_is_absent() {
        let response = client().post("/echo/red").body("{\"left\": 1}").send().await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.json_value().unwrap()["body"], Value::Null);
    }

    #[tokio::test]
    async fn test_default_header_applies() {
        let response = client()
            .with_default_header("content-type", "application/json")
            .post("/echo/green")
            .body("[1, 2]")
            .send()
            .await;

        assert_eq!(response.json_value().unwrap()["body"], json!([1, 2]));
    }

    #[tokio::test]
    async fn test_status_route() {
        let response = client().get("/status").send().await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.json_value().unwrap(), json!({"success": true}));
    }

    #[tokio::test]
    async fn test_invalid_uri() {
        let result = client().get("not a uri").try_send().await;
        assert!(matches!(result, Err(TestError::RequestBuild(_))));
    }
}
