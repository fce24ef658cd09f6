use crate::domain::{ComputeError, Operator, OperatorRegistration};

/// `left - right`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Subtraction;

impl Operator for Subtraction {
    fn name(&self) -> &'static str {
        "subtraction"
    }

    fn symbol(&self) -> &'static str {
        "-"
    }

    fn compute(&self, left: i64, right: i64) -> Result<i64, ComputeError> {
        left.checked_sub(right).ok_or(ComputeError::Overflow {
            operation: self.name(),
        })
    }
}

inventory::submit! { OperatorRegistration::new(&Subtraction) }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Operands;
    use proptest::prelude::*;

    #[test]
    fn test_expressions() {
        for (left, right, result, expression) in [
            (1, 2, -1, "1 - 2 = -1"),
            (-1, 2, -3, "(-1) - 2 = -3"),
            (1, -2, 3, "1 - (-2) = 3"),
            (-1, -2, 1, "(-1) - (-2) = 1"),
        ] {
            let op = Subtraction.run(Operands::new(left, right)).unwrap();
            assert_eq!(op.symbol(), "-");
            assert_eq!(op.result(), result);
            assert_eq!(op.expression(), expression);
        }
    }

    #[test]
    fn test_overflow() {
        assert!(Subtraction.compute(i64::MIN, 1).is_err());
    }

    proptest! {
        #[test]
        fn prop_matches_difference(a in -(1_i64 << 62)..(1_i64 << 62), b in -(1_i64 << 62)..(1_i64 << 62)) {
            prop_assert_eq!(Subtraction.compute(a, b), Ok(a - b));
        }
    }
}
