//! HTTP surface of the calculator.
//!
//! Both API versions accept the same [`OperandsInput`] and answer with an
//! [`Operation`]. They differ only in how the operator is chosen: [`v1`]
//! binds one route per operator, [`v2`] resolves the operator by name at
//! request time.

pub mod v1;
pub mod v2;

use calculator_core::CalculatorError;
use calculator_schema::{Typed, Validated};
use calculator_server::{HandlerError, Server};

use crate::domain::{Operands, Operation, Operator};

/// Handler input shared by every calculator route: no query parameters and a
/// JSON body holding both operands.
pub type OperandsInput = Validated<(), Typed<Operands>>;

/// Mounts the routes and handlers of both API versions.
pub fn mount(server: &mut Server) {
    v1::mount(server);
    v2::mount(server);
}

fn execute(operator: &dyn Operator, input: OperandsInput) -> Result<Operation, HandlerError> {
    let operation = operator
        .run(input.body.into_inner())
        .map_err(CalculatorError::from)?;

    tracing::debug!(
        operator = operation.name(),
        expression = operation.expression(),
        "operation computed"
    );
    Ok(operation)
}
