//! The operator contract.

use std::any::TypeId;
use std::fmt;

use thiserror::Error;

use calculator_core::CalculatorError;

use super::models::{Operands, Operation};

/// Why an operator could not produce a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComputeError {
    /// The right operand of a division was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The result does not fit in a 64-bit signed integer.
    #[error("result of {operation} overflows a 64-bit integer")]
    Overflow {
        /// Name of the operator that overflowed.
        operation: &'static str,
    },
}

impl From<ComputeError> for CalculatorError {
    fn from(err: ComputeError) -> Self {
        Self::arithmetic(err.to_string())
    }
}

/// A binary integer operation, resolvable by name.
///
/// Implementations are stateless. To make one reachable through
/// [`operators()`](super::operators), submit an [`OperatorRegistration`]
/// for it next to its definition:
///
/// ```
/// use calculator::domain::{ComputeError, Operator, OperatorRegistration};
///
/// struct Modulo;
///
/// impl Operator for Modulo {
///     fn name(&self) -> &'static str {
///         "modulo"
///     }
///
///     fn symbol(&self) -> &'static str {
///         "%"
///     }
///
///     fn compute(&self, left: i64, right: i64) -> Result<i64, ComputeError> {
///         if right == 0 {
///             return Err(ComputeError::DivisionByZero);
///         }
///         left.checked_rem_euclid(right)
///             .ok_or(ComputeError::Overflow { operation: "modulo" })
///     }
/// }
///
/// inventory::submit! { OperatorRegistration::new(&Modulo) }
/// ```
pub trait Operator: Send + Sync + 'static {
    /// Unique name the operator is looked up by.
    fn name(&self) -> &'static str;

    /// Symbol used when rendering the expression.
    fn symbol(&self) -> &'static str;

    /// Computes `left <op> right`.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeError`] when the result is undefined or out of range.
    fn compute(&self, left: i64, right: i64) -> Result<i64, ComputeError>;

    /// Identifies the implementing type. Two operators with the same
    /// implementation ID are interchangeable.
    fn implementation_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Computes the result and wraps it with its operands and expression.
    ///
    /// # Errors
    ///
    /// Propagates the error from [`compute`](Self::compute).
    fn run(&self, operands: Operands) -> Result<Operation, ComputeError> {
        let result = self.compute(operands.left().value(), operands.right().value())?;
        Ok(Operation::new(operands, self.name(), self.symbol(), result))
    }
}

impl fmt::Debug for dyn Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("name", &self.name())
            .field("symbol", &self.symbol())
            .finish()
    }
}

/// A link-time registration of an [`Operator`].
///
/// Every registration submitted with `inventory::submit!` anywhere in the
/// final binary is picked up by [`discover_operators`](super::discover_operators).
#[derive(Debug, Clone, Copy)]
pub struct OperatorRegistration {
    operator: &'static dyn Operator,
}

impl OperatorRegistration {
    /// Wraps an operator for submission.
    #[must_use]
    pub const fn new(operator: &'static dyn Operator) -> Self {
        Self { operator }
    }

    /// Returns the registered operator.
    #[must_use]
    pub fn operator(&self) -> &'static dyn Operator {
        self.operator
    }
}


inventory::collect!(OperatorRegistration);
