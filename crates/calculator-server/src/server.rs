//! The HTTP server.
//!
//! A [`Server`] binds a TCP listener, serves each connection with Hyper's
//! HTTP/1 implementation, and hands every request to [`Server::dispatch`]:
//!
//! 1. `GET /status` answers the probe directly
//! 2. the [`Router`] resolves method and path to an operation ID
//! 3. the [`HandlerRegistry`] validates the request and runs the handler
//! 4. any failure becomes a `{"key", "message"}` body with the status of its
//!    [`ErrorCategory`](calculator_core::ErrorCategory)
//!
//! `dispatch` does not touch the network, so in-process test clients can
//! drive it directly.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;
use http::header::{HeaderValue, ALLOW, CONTENT_TYPE};
use http::{Method, Request, Response, StatusCode};
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::body::{Body, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use thiserror::Error;
use tokio::net::{TcpListener, TcpStream};
use tracing::Instrument;

use calculator_core::{CalculatorError, RequestContext, RequestId};
use calculator_schema::RequestParts;

use crate::config::{ServerConfig, ServerConfigBuilder};
use crate::handler::HandlerRegistry;
use crate::health::StatusCheck;
use crate::router::Router;
use crate::shutdown::{ConnectionTracker, ShutdownSignal};

/// Response body type.
pub type ResponseBody = Full<Bytes>;

/// HTTP response type.
pub type HttpResponse = Response<ResponseBody>;

const STATUS_PATH: &str = "/status";

/// Errors that stop the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The configured address is not a socket address.
    #[error("invalid bind address '{addr}': {source}")]
    InvalidAddress {
        /// The configured address.
        addr: String,
        /// Parse failure.
        #[source]
        source: std::net::AddrParseError,
    },

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// The address that was tried.
        addr: SocketAddr,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Listener I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The calculator HTTP server.
///
/// ```rust
/// use calculator_server::Server;
/// use std::time::Duration;
///
/// let server = Server::builder()
///     .http_addr("127.0.0.1:5000")
///     .request_timeout(Duration::from_secs(5))
///     .build();
///
/// assert_eq!(server.config().http_addr(), "127.0.0.1:5000");
/// assert!(server.handlers().is_empty());
/// ```
#[derive(Debug)]
pub struct Server {
    config: ServerConfig,
    router: Router,
    handlers: HandlerRegistry,
    status: StatusCheck,
}

impl Server {
    /// Creates a server with no routes.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            router: Router::new(),
            handlers: HandlerRegistry::new(),
            status: StatusCheck::new(),
        }
    }

    /// Creates a server builder.
    #[must_use]
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the router.
    #[must_use]
    pub const fn router(&self) -> &Router {
        &self.router
    }

    /// Returns the router for adding routes.
    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }

    /// Returns the handler registry.
    #[must_use]
    pub const fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    /// Returns the handler registry for binding handlers.
    pub fn handlers_mut(&mut self) -> &mut HandlerRegistry {
        &mut self.handlers
    }

    /// Returns the status probe state.
    #[must_use]
    pub const fn status(&self) -> &StatusCheck {
        &self.status
    }

    /// Serves until SIGTERM or SIGINT.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid or cannot be bound.
    pub async fn run(self) -> Result<(), ServerError> {
        self.run_with_shutdown(ShutdownSignal::with_os_signals())
            .await
    }

    /// Binds the configured address and serves until `shutdown` fires.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid or cannot be bound.
    pub async fn run_with_shutdown(self, shutdown: ShutdownSignal) -> Result<(), ServerError> {
        let addr = self
            .config
            .socket_addr()
            .map_err(|source| ServerError::InvalidAddress {
                addr: self.config.http_addr().to_string(),
                source,
            })?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        self.serve(listener, shutdown).await
    }

    /// Serves connections from an already bound listener until `shutdown`
    /// fires, then waits up to the shutdown timeout for open connections.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener's local address cannot be read.
    pub async fn serve(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), ServerError> {
        let local_addr = listener.local_addr()?;
        tracing::info!(
            service = %self.config.service_name(),
            addr = %local_addr,
            "server listening"
        );

        let server = Arc::new(self);
        let tracker = ConnectionTracker::new();

        loop {
            tokio::select! {
                accepted = listener.accept() => match accepted {
                    Ok((stream, remote_addr)) => {
                        let server = Arc::clone(&server);
                        let token = tracker.acquire();
                        let shutdown = shutdown.clone();

                        tokio::spawn(async move {
                            if let Err(e) = server.handle_connection(stream, remote_addr, shutdown).await {
                                tracing::debug!(remote_addr = %remote_addr, error = %e, "connection error");
                            }
                            drop(token);
                        });
                    }
                    Err(e) => tracing::error!(error = %e, "failed to accept connection"),
                },
                () = shutdown.recv() => {
                    tracing::info!("shutdown signal received, no longer accepting connections");
                    break;
                }
            }
        }

        server.status.set_ready(false);

        let grace = server.config.shutdown_timeout();
        tokio::select! {
            () = tracker.wait_for_shutdown() => tracing::info!("all connections closed"),
            () = tokio::time::sleep(grace) => tracing::warn!(
                active = tracker.active_connections(),
                "shutdown timeout reached with connections still open"
            ),
        }

        tracing::info!("server stopped");
        Ok(())
    }

    async fn handle_connection(
        self: &Arc<Self>,
        stream: TcpStream,
        remote_addr: SocketAddr,
        shutdown: ShutdownSignal,
    ) -> Result<(), hyper::Error> {
        let io = TokioIo::new(stream);
        let server = Arc::clone(self);

        let service = service_fn(move |req: Request<Incoming>| {
            let server = Arc::clone(&server);
            async move { Ok::<_, Infallible>(server.handle_request(req).await) }
        });

        let conn = http1::Builder::new().serve_connection(io, service);
        tokio::pin!(conn);

        tokio::select! {
            result = conn.as_mut() => result,
            () = shutdown.recv() => {
                tracing::debug!(remote_addr = %remote_addr, "draining connection for shutdown");
                conn.as_mut().graceful_shutdown();
                conn.await
            }
        }
    }

    async fn handle_request(&self, req: Request<Incoming>) -> HttpResponse {
        let (parts, body) = req.into_parts();

        match self.read_body(body).await {
            Ok(body) => self.dispatch(Request::from_parts(parts, body)).await,
            Err(e) => error_response(&e),
        }
    }

    /// Buffers a body, stopping as soon as it passes `max_body_bytes`.
    async fn read_body<B>(&self, body: B) -> Result<Bytes, CalculatorError>
    where
        B: Body,
        B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let limit = self.config.max_body_bytes();
        let collect = Limited::new(body, limit).collect();

        match tokio::time::timeout(self.config.request_timeout(), collect).await {
            Ok(Ok(collected)) => Ok(collected.to_bytes()),
            Ok(Err(e)) if e.is::<LengthLimitError>() => Err(body_too_large(limit)),
            Ok(Err(e)) => Err(CalculatorError::validation(format!(
                "failed to read request body: {e}"
            ))),
            Err(_) => Err(CalculatorError::timeout("timed out reading the request body")),
        }
    }

    /// Routes one request and produces its response.
    ///
    /// Never fails: every error is rendered as a JSON error body.
    pub async fn dispatch(&self, request: Request<Bytes>) -> HttpResponse {
        let request_id = RequestId::new();
        let started = Instant::now();
        let method = request.method().clone();
        let path = request.uri().path().to_string();

        let span = tracing::info_span!(
            "request",
            request_id = %request_id,
            http.method = %method,
            http.path = %path
        );

        async move {
            let response = self.route(request_id, request).await;
            let status = response.status();
            let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

            tracing::info!(
                http.status_code = status.as_u16(),
                duration_ms,
                "request completed"
            );
            response
        }
        .instrument(span)
        .await
    }

    async fn route(&self, request_id: RequestId, request: Request<Bytes>) -> HttpResponse {
        let (parts, body) = request.into_parts();
        let path = parts.uri.path();

        if body.len() > self.config.max_body_bytes() {
            return error_response(&body_too_large(self.config.max_body_bytes()));
        }

        if path == STATUS_PATH {
            return if parts.method == Method::GET {
                self.status_response()
            } else {
                method_not_allowed(&parts.method, path, &[Method::GET])
            };
        }

        let Some(route_match) = self.router.match_route(&parts.method, path) else {
            let allowed = self.router.allowed_methods(path);
            if allowed.is_empty() {
                return error_response(&CalculatorError::not_found(format!(
                    "no route for {path}"
                )));
            }
            return method_not_allowed(&parts.method, path, &allowed);
        };

        let (operation_id, params) = route_match.into_parts();
        tracing::debug!(operation_id = %operation_id, "route matched");

        let ctx = RequestContext::with_request_id(request_id)
            .with_operation_id(operation_id.as_str())
            .with_path_params(params);
        let request_parts = RequestParts::new(parts.method, parts.uri, parts.headers, body);

        let invocation = self.handlers.invoke(&operation_id, ctx, request_parts);
        match tokio::time::timeout(self.config.request_timeout(), invocation).await {
            Ok(Ok(body)) => json_response(StatusCode::OK, body),
            Ok(Err(e)) => error_response(&e.into_calculator_error()),
            Err(_) => error_response(&CalculatorError::timeout(format!(
                "operation {operation_id} did not complete within {}ms",
                self.config.request_timeout().as_millis()
            ))),
        }
    }

    fn status_response(&self) -> HttpResponse {
        let status = self.status.status();
        let code = if status.success {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };

        match serde_json::to_vec(&status) {
            Ok(body) => json_response(code, Bytes::from(body)),
            Err(e) => error_response(&CalculatorError::internal_with_source(
                "failed to serialize status",
                e,
            )),
        }
    }
}

fn json_response(status: StatusCode, body: Bytes) -> HttpResponse {
    let mut response = Response::new(Full::new(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

fn body_too_large(limit: usize) -> CalculatorError {
    CalculatorError::payload_too_large(format!("request body exceeds {limit} bytes"))
}

fn method_not_allowed(method: &Method, path: &str, allowed: &[Method]) -> HttpResponse {
    let mut response = error_response(&CalculatorError::method_not_allowed(format!(
        "{method} is not allowed for {path}"
    )));

    let allow = allowed
        .iter()
        .map(Method::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if let Ok(value) = HeaderValue::from_str(&allow) {
        response.headers_mut().insert(ALLOW, value);
    }
    response
}

/// Renders an error as its JSON body and status code.
///
/// Server-side errors are logged at `error` with their source chain, client
/// errors at `warn`.
#[must_use]
pub fn error_response(err: &CalculatorError) -> HttpResponse {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!(
            http.status_code = status.as_u16(),
            error = ?error_chain(err),
            "request failed"
        );
    } else {
        tracing::warn!(
            http.status_code = status.as_u16(),
            key = err.category().key(),
            error = %err.message(),
            "request rejected"
        );
    }

    match serde_json::to_vec(&err.to_response()) {
        Ok(body) => json_response(status, Bytes::from(body)),
        Err(_) => json_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            Bytes::from_static(
                br#"{"key":"calculator.error.internal","message":"internal error"}"#,
            ),
        ),
    }
}

fn error_chain(err: &CalculatorError) -> Vec<String> {
    let mut chain = vec![err.to_string()];
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        chain.push(cause.to_string());
        source = cause.source();
    }
    chain
}

/// Builder for [`Server`].
#[derive(Debug, Default)]
pub struct ServerBuilder {
    config: ServerConfigBuilder,
    router: Option<Router>,
    handlers: Option<HandlerRegistry>,
}

impl ServerBuilder {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    #[must_use]
    pub fn config(mut self, config: &ServerConfig) -> Self {
        self.config = ServerConfig::builder()
            .http_addr(config.http_addr())
            .shutdown_timeout(config.shutdown_timeout())
            .request_timeout(config.request_timeout())
            .max_body_bytes(config.max_body_bytes())
            .service_name(config.service_name());
        self
    }

    /// Sets the HTTP bind address.
    #[must_use]
    pub fn http_addr(mut self, addr: impl Into<String>) -> Self {
        self.config = self.config.http_addr(addr);
        self
    }

    /// Sets the graceful shutdown timeout.
    #[must_use]
    pub fn shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.shutdown_timeout(timeout);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.request_timeout(timeout);
        self
    }

    /// Sets the request body cap in bytes.
    #[must_use]
    pub fn max_body_bytes(mut self, bytes: usize) -> Self {
        self.config = self.config.max_body_bytes(bytes);
        self
    }

    /// Sets the service name used in logs.
    #[must_use]
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.config = self.config.service_name(name);
        self
    }

    /// Sets the router.
    #[must_use]
    pub fn router(mut self, router: Router) -> Self {
        self.router = Some(router);
        self
    }

    /// Sets the handler registry.
    #[must_use]
    pub fn handlers(mut self, handlers: HandlerRegistry) -> Self {
        self.handlers = Some(handlers);
        self
    }

    /// Builds the server.
    #[must_use]
    pub fn build(self) -> Server {
        let mut server = Server::new(self.config.build());
        if let Some(router) = self.router {
            server.router = router;
        }
        if let Some(handlers) = self.handlers {
            server.handlers = handlers;
        }
        server
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HandlerError;
    use calculator_schema::{Typed, Validated};
    use serde::{Deserialize, Serialize};
    use serde_json::{json, Value};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    #[derive(Deserialize)]
    struct Pair {
        left: i64,
        right: i64,
    }

    #[derive(Serialize)]
    struct Sum {
        result: i64,
        operation: String,
    }

    async fn add(ctx: RequestContext, input: Validated<(), Typed<Pair>>) -> Result<Sum, HandlerError> {
        Ok(Sum {
            result: input.body.left + input.body.right,
            operation: ctx.operation_id().unwrap_or_default().to_string(),
        })
    }

    async fn echo_name(ctx: RequestContext, _input: ()) -> Result<Value, HandlerError> {
        Ok(json!({ "name": ctx.param("name") }))
    }

    async fn slow(_ctx: RequestContext, _input: ()) -> Result<Value, HandlerError> {
        tokio::time::sleep(Duration::from_millis(500)).await;
        Ok(json!({}))
    }

    fn test_server() -> Server {
        let mut server = Server::builder()
            .http_addr("127.0.0.1:0")
            .request_timeout(Duration::from_millis(50))
            .shutdown_timeout(Duration::from_secs(1))
            .max_body_bytes(64)
            .build();

        server.router_mut().add_route(Method::POST, "/add", "add");
        server.router_mut().add_route(Method::GET, "/names/{name}", "echo_name");
        server.router_mut().add_route(Method::POST, "/slow", "slow");
        server.router_mut().add_route(Method::POST, "/unbound", "unbound");
        server.handlers_mut().register("add", add);
        server.handlers_mut().register("echo_name", echo_name);
        server.handlers_mut().register("slow", slow);
        server
    }

    fn request(method: Method, uri: &str, body: &'static str) -> Request<Bytes> {
        let mut request = Request::new(Bytes::from_static(body.as_bytes()));
        *request.method_mut() = method;
        *request.uri_mut() = uri.parse().unwrap();
        request
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        request
    }

    async fn body_json(response: HttpResponse) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_dispatch_success() {
        let response = test_server()
            .dispatch(request(Method::POST, "/add", r#"{"left": 2, "right": 3}"#))
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            body_json(response).await,
            json!({"result": 5, "operation": "add"})
        );
    }

    #[tokio::test]
    async fn test_dispatch_path_params_reach_handler() {
        let response = test_server()
            .dispatch(request(Method::GET, "/names/division", ""))
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"name": "division"}));
    }

    #[tokio::test]
    async fn test_dispatch_validation_error() {
        let response = test_server()
            .dispatch(request(Method::POST, "/add", r#"{"left": 2}"#))
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["key"], "calculator.error.validation");
        assert!(body["message"].as_str().unwrap().contains("body"));
    }

    #[tokio::test]
    async fn test_dispatch_not_found() {
        let response = test_server()
            .dispatch(request(Method::POST, "/nowhere", "{}"))
            .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["key"], "calculator.error.not_found");
    }

    #[tokio::test]
    async fn test_dispatch_method_not_allowed() {
        let response = test_server()
            .dispatch(request(Method::GET, "/add", ""))
            .await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(ALLOW).unwrap(), "POST");
        assert_eq!(
            body_json(response).await["key"],
            "calculator.error.method_not_allowed"
        );
    }

    #[tokio::test]
    async fn test_dispatch_unbound_operation_is_internal() {
        let response = test_server()
            .dispatch(request(Method::POST, "/unbound", "{}"))
            .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["key"], "calculator.error.internal");
    }

    #[tokio::test]
    async fn test_dispatch_timeout() {
        let response = test_server()
            .dispatch(request(Method::POST, "/slow", ""))
            .await;

        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body_json(response).await["key"], "calculator.error.timeout");
    }

    #[tokio::test]
    async fn test_status_probe() {
        let server = test_server();

        let response = server.dispatch(request(Method::GET, "/status", "")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"success": true}));

        let response = server.dispatch(request(Method::POST, "/status", "")).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        server.status().set_ready(false);
        let response = server.dispatch(request(Method::GET, "/status", "")).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await, json!({"success": false}));
    }

    #[tokio::test]
    async fn test_serve_over_tcp() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = ShutdownSignal::new();

        let handle = tokio::spawn(test_server().serve(listener, shutdown.clone()));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        let body = r#"{"left": 40, "right": 2}"#;
        let raw = format!(
            "POST /add HTTP/1.1\r\nHost: {addr}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(raw.as_bytes()).await.unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
        assert!(response.ends_with(r#"{"result":42,"operation":"add"}"#), "{response}");

        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("server should stop")
            .expect("server task should not panic")
            .expect("server should exit cleanly");
    }

    #[tokio::test]
    async fn test_read_body_enforces_limit() {
        let server = test_server();

        let at_limit = server.read_body(Full::new(Bytes::from(vec![b'x'; 64]))).await;
        assert_eq!(at_limit.unwrap().len(), 64);

        let err = server
            .read_body(Full::new(Bytes::from(vec![b'x'; 65])))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.message(), "request body exceeds 64 bytes");
    }

    #[tokio::test]
    async fn test_dispatch_rejects_oversized_body() {
        let body = format!(r#"{{"left": 1, "right": 2, "pad": "{}"}}"#, "x".repeat(100));
        let request = Request::builder()
            .method(Method::POST)
            .uri("/add")
            .header(CONTENT_TYPE, "application/json")
            .body(Bytes::from(body))
            .unwrap();

        let response = test_server().dispatch(request).await;
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["key"], "calculator.error.payload_too_large");
    }

    #[tokio::test]
    async fn test_serve_rejects_oversized_body_over_tcp() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = ShutdownSignal::new();

        let handle = tokio::spawn(test_server().serve(listener, shutdown.clone()));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        let body = format!(r#"{{"left": 40, "right": 2, "pad": "{}"}}"#, "x".repeat(200));
        let raw = format!(
            "POST /add HTTP/1.1\r\nHost: {addr}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(raw.as_bytes()).await.unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 413"), "{response}");
        assert!(response.contains("calculator.error.payload_too_large"), "{response}");

        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .expect("server should stop")
            .expect("server task should not panic")
            .expect("server should exit cleanly");
    }

    #[tokio::test]
    async fn test_run_with_invalid_address() {
        let server = Server::builder().http_addr("not-an-address").build();
        let err = server
            .run_with_shutdown(ShutdownSignal::new())
            .await
            .unwrap_err();

        assert!(matches!(err, ServerError::InvalidAddress { .. }));
    }
}
