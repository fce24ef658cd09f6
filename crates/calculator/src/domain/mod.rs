//! Calculator domain: values, the operator contract, and the operator registry.

mod models;
mod operator;
pub mod operators;
mod registry;

pub use models::{InvalidOperand, Operand, Operands, Operation};
pub use operator::{ComputeError, Operator, OperatorRegistration};
pub use registry::{discover_operators, operators, OperatorRegistry};
