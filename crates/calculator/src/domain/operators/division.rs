use crate::domain::{ComputeError, Operator, OperatorRegistration};

/// Floor division: the quotient is rounded toward negative infinity, so
/// `-7 // 2 == -4` and `7 // -2 == -4`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Division;

impl Operator for Division {
    fn name(&self) -> &'static str {
        "division"
    }

    fn symbol(&self) -> &'static str {
        "//"
    }

    fn compute(&self, left: i64, right: i64) -> Result<i64, ComputeError> {
        if right == 0 {
            return Err(ComputeError::DivisionByZero);
        }

        let overflow = ComputeError::Overflow {
            operation: self.name(),
        };
        let quotient = left.checked_div(right).ok_or(overflow)?;
        let remainder = left.checked_rem(right).ok_or(overflow)?;

        // Truncation rounded toward zero; step down when the signs differ.
        if remainder != 0 && (remainder < 0) != (right < 0) {
            Ok(quotient - 1)
        } else {
            Ok(quotient)
        }
    }
}

inventory::submit! { OperatorRegistration::new(&Division) }
