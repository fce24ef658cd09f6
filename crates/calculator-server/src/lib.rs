//! # Calculator Server
//!
//! HTTP server for the calculator service, built on Hyper and Tokio.
//!
//! - [`Router`] maps method and path templates (`/items/{id}`) to operation IDs
//! - [`HandlerRegistry`] maps operation IDs to typed handlers; each handler's
//!   input is validated through [`calculator_schema::FromRequest`] before it runs
//! - [`Server`] owns both, answers `GET /status`, and turns every failure into
//!   a `{"key", "message"}` JSON body
//! - [`ShutdownSignal`] drives graceful shutdown
//!
//! ## Example
//!
//! ```rust
//! use calculator_core::RequestContext;
//! use calculator_schema::{Typed, Validated};
//! use calculator_server::{HandlerError, Server};
//! use http::Method;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Deserialize)]
//! struct Pair {
//!     left: i64,
//!     right: i64,
//! }
//!
//! #[derive(Serialize)]
//! struct Sum {
//!     result: i64,
//! }
//!
//! async fn sum(_ctx: RequestContext, input: Validated<(), Typed<Pair>>) -> Result<Sum, HandlerError> {
//!     Ok(Sum { result: input.body.left + input.body.right })
//! }
//!
//! let mut server = Server::builder().http_addr("127.0.0.1:5000").build();
//! server.router_mut().add_route(Method::POST, "/sum", "sum");
//! server.handlers_mut().register("sum", sum);
//! ```

#![doc(html_root_url = "https://docs.rs/calculator-server/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod handler;
pub mod health;
pub mod router;
pub mod server;
pub mod shutdown;

pub use config::{ServerConfig, ServerConfigBuilder};
pub use handler::{HandlerError, HandlerRegistry};
pub use health::{StatusCheck, StatusResponse};
pub use router::{RouteMatch, Router};
pub use server::{HttpResponse, Server, ServerBuilder, ServerError};
pub use shutdown::{ShutdownReceiver, ShutdownSignal};
