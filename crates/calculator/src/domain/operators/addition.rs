use crate::domain::{ComputeError, Operator, OperatorRegistration};

/// `left + right`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Addition;

impl Operator for Addition {
    fn name(&self) -> &'static str {
        "addition"
    }

    fn symbol(&self) -> &'static str {
        "+"
    }

    fn compute(&self, left: i64, right: i64) -> Result<i64, ComputeError> {
        left.checked_add(right).ok_or(ComputeError::Overflow {
            operation: self.name(),
        })
    }
}

inventory::submit! { OperatorRegistration::new(&Addition) }
