//! Version 2: a single route dispatching through the operator registry.

use calculator_core::{CalculatorError, RequestContext};
use calculator_server::{HandlerError, Server};
use http::Method;

use super::{execute, OperandsInput};
use crate::domain::{operators, Operation};

/// Route pattern of the v2 endpoint.
pub const ROUTE: &str = "/api/v2/calculator/{operation_name}";

/// Operation ID bound to [`ROUTE`].
pub const OPERATION_ID: &str = "v2_calculate";

/// Mounts the v2 route and handler.
pub fn mount(server: &mut Server) {
    server.router_mut().add_route(Method::POST, ROUTE, OPERATION_ID);
    server.handlers_mut().register(OPERATION_ID, calculate);
}

async fn calculate(ctx: RequestContext, input: OperandsInput) -> Result<Operation, HandlerError> {
    let name = ctx.param("operation_name").unwrap_or_default();
    let operator = operators().get(name).map_err(CalculatorError::from)?;

    execute(operator, input)
}
