//! Version 1: one fixed route per operator.
//!
//! | Route | Operation ID |
//! |---|---|
//! | `POST /api/v1/calculator/addition` | `v1_addition` |
//! | `POST /api/v1/calculator/subtraction` | `v1_subtraction` |
//! | `POST /api/v1/calculator/multiplication` | `v1_multiplication` |
//! | `POST /api/v1/calculator/division` | `v1_division` |

use calculator_core::RequestContext;
use calculator_server::Server;
use http::Method;

use super::{execute, OperandsInput};
use crate::domain::operators::{Addition, Division, Multiplication, Subtraction};
use crate::domain::Operator;

/// Path prefix of the v1 routes.
pub const PREFIX: &str = "/api/v1/calculator";

const OPERATORS: [&dyn Operator; 4] = [&Addition, &Subtraction, &Multiplication, &Division];

/// Returns the operation ID bound to an operator's v1 route.
#[must_use]
pub fn operation_id(operator_name: &str) -> String {
    format!("v1_{operator_name}")
}

/// Mounts the v1 routes and handlers.
pub fn mount(server: &mut Server) {
    for operator in OPERATORS {
        let operation_id = operation_id(operator.name());

        server.router_mut().add_route(
            Method::POST,
            format!("{PREFIX}/{}", operator.name()),
            operation_id.clone(),
        );
        server.handlers_mut().register(
            operation_id,
            move |_ctx: RequestContext, input: OperandsInput| async move { execute(operator, input) },
        );
    }
}
