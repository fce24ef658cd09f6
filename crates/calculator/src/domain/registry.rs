//! The process-wide operator registry.

use std::sync::OnceLock;

use calculator_core::{Element, Registry};

use super::operator::{Operator, OperatorRegistration};

impl Element for &'static dyn Operator {
    fn name(&self) -> &str {
        Operator::name(*self)
    }

    fn is_same(&self, other: &Self) -> bool {
        self.implementation_id() == other.implementation_id()
    }
}

/// Registry of operators keyed by [`Operator::name`].
pub type OperatorRegistry = Registry<&'static dyn Operator>;

/// Returns every operator submitted as an [`OperatorRegistration`], sorted
/// by name.
#[must_use]
pub fn discover_operators() -> Vec<&'static dyn Operator> {
    let mut found: Vec<&'static dyn Operator> = inventory::iter::<OperatorRegistration>
        .into_iter()
        .map(OperatorRegistration::operator)
        .collect();
    found.sort_by_key(|op| Operator::name(*op));
    found
}

/// Returns the shared operator registry.
///
/// The registry collects [`discover_operators`] on first lookup.
///
/// ```
/// use calculator::domain::operators;
///
/// let division = operators().get("division").unwrap();
/// assert_eq!(division.symbol(), "//");
/// assert!(operators().get("modulo").is_err());
/// ```
pub fn operators() -> &'static OperatorRegistry {
    static OPERATORS: OnceLock<OperatorRegistry> = OnceLock::new();
    OPERATORS.get_or_init(|| Registry::with_discovery(discover_operators))
}
