//! # Calculator
//!
//! An HTTP service for integer arithmetic.
//!
//! Two API versions are mounted side by side:
//!
//! | Route | Dispatch |
//! |---|---|
//! | `POST /api/v1/calculator/{addition,subtraction,multiplication,division}` | one fixed route per operator |
//! | `POST /api/v2/calculator/{operation_name}` | operator looked up by name in the [`operators()`](domain::operators) registry |
//!
//! Both take `{"left": <int>, "right": <int>}` and answer with an
//! [`Operation`](domain::Operation):
//!
//! ```json
//! {
//!   "operands": {"left": -1, "right": 2},
//!   "name": "addition",
//!   "symbol": "+",
//!   "result": 1,
//!   "expression": "(-1) + 2 = 1"
//! }
//! ```
//!
//! Operators register themselves at link time (see
//! [`OperatorRegistration`](domain::OperatorRegistration)), so adding one
//! never touches the v2 dispatch code.

#![doc(html_root_url = "https://docs.rs/calculator/0.1.0")]
#![warn(missing_docs)]

pub mod api;
mod app;
pub mod domain;

pub use app::create_app;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
