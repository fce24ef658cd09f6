//! # Calculator Test
//!
//! In-process HTTP testing for the calculator service. Requests go through
//! [`Server::dispatch`](calculator_server::Server::dispatch), so routing,
//! validation, handlers and error rendering all run exactly as they would
//! behind a socket, without binding a port.
//!
//! ```ignore
//! use calculator_test::TestClient;
//! use http::StatusCode;
//! use serde_json::json;
//!
//! #[tokio::test]
//! async fn adds() {
//!     let client = TestClient::new(app);
//!
//!     let response = client
//!         .post("/api/v1/calculator/addition")
//!         .json(&json!({"left": 1, "right": 2}))
//!         .send()
//!         .await;
//!
//!     response.assert_status(StatusCode::OK);
//!     assert_eq!(response.json_value().unwrap()["result"], 3);
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/calculator-test/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod response;

pub use client::{TestClient, TestRequest};
pub use error::TestError;
pub use response::TestResponse;
