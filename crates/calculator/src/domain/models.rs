//! Input and output values.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Error for text that does not hold a 64-bit signed integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{input:?} is not a valid integer")]
pub struct InvalidOperand {
    input: String,
}

/// One integer input of a binary operation.
///
/// Displays negative values in parentheses so they read unambiguously after
/// an operator symbol:
///
/// ```
/// use calculator::domain::Operand;
///
/// assert_eq!(Operand::new(3).to_string(), "3");
/// assert_eq!(Operand::new(-3).to_string(), "(-3)");
/// ```
///
/// Deserializes from a JSON integer or from a string holding one
/// (`"-10"`, `" 7 "`). Floats, booleans and non-numeric strings are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Operand(i64);

impl Operand {
    /// Wraps an integer.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the integer value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Operand> for i64 {
    fn from(operand: Operand) -> Self {
        operand.0
    }
}

impl FromStr for Operand {
    type Err = InvalidOperand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self).map_err(|_| InvalidOperand {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

struct OperandVisitor;

impl Visitor<'_> for OperandVisitor {
    type Value = Operand;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a string holding an integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Operand, E> {
        Ok(Operand(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Operand, E> {
        i64::try_from(v)
            .map(Operand)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Operand, E> {
        v.parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Operand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OperandVisitor)
    }
}

/// The ordered pair of inputs to an operation.
///
/// Extra fields in the request body are ignored; `left` and `right` are both
/// required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operands {
    left: Operand,
    right: Operand,
}

impl Operands {
    /// Creates a pair from anything convertible to [`Operand`].
    #[must_use]
    pub fn new(left: impl Into<Operand>, right: impl Into<Operand>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Creates a pair from integer text.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOperand`] for the first side that is not an integer.
    pub fn parse(left: &str, right: &str) -> Result<Self, InvalidOperand> {
        Ok(Self {
            left: left.parse()?,
            right: right.parse()?,
        })
    }

    /// Returns the left operand.
    #[must_use]
    pub const fn left(&self) -> Operand {
        self.left
    }

    /// Returns the right operand.
    #[must_use]
    pub const fn right(&self) -> Operand {
        self.right
    }
}

/// The record of one computed operation.
///
/// `expression` is derived from the other fields when the value is built
/// and cannot be set on its own, including when deserializing.
///
/// ```
/// use calculator::domain::{Operands, Operation};
///
/// let op = Operation::new(Operands::new(3, -2), "subtraction", "-", 5);
/// assert_eq!(op.expression(), "3 - (-2) = 5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OperationFields")]
pub struct Operation {
    operands: Operands,
    name: String,
    symbol: String,
    result: i64,
    expression: String,
}

#[derive(Deserialize)]
struct OperationFields {
    operands: Operands,
    name: String,
    symbol: String,
    result: i64,
}

impl From<OperationFields> for Operation {
    fn from(fields: OperationFields) -> Self {
        Self::new(fields.operands, fields.name, fields.symbol, fields.result)
    }
}

impl Operation {
    /// Builds the record and renders its expression.
    #[must_use]
    pub fn new(
        operands: Operands,
        name: impl Into<String>,
        symbol: impl Into<String>,
        result: i64,
    ) -> Self {
        let symbol = symbol.into();
        let expression = format!(
            "{} {symbol} {} = {result}",
            operands.left(),
            operands.right()
        );

        Self {
            operands,
            name: name.into(),
            symbol,
            result,
            expression,
        }
    }

    /// Returns the inputs.
    #[must_use]
    pub const fn operands(&self) -> &Operands {
        &self.operands
    }

    /// Returns the operator name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the operator symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the computed value.
    #[must_use]
    pub const fn result(&self) -> i64 {
        self.result
    }

    /// Returns `"<left> <symbol> <right> = <result>"`.
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }
}
