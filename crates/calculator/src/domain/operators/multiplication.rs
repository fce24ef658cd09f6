use crate::domain::{ComputeError, Operator, OperatorRegistration};

/// `left * right`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Multiplication;

impl Operator for Multiplication {
    fn name(&self) -> &'static str {
        "multiplication"
    }

    fn symbol(&self) -> &'static str {
        "*"
    }

    fn compute(&self, left: i64, right: i64) -> Result<i64, ComputeError> {
        left.checked_mul(right).ok_or(ComputeError::Overflow {
            operation: self.name(),
        })
    }
}

inventory::submit! { OperatorRegistration::new(&Multiplication) }
