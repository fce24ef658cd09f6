//! Built-in operators.
//!
//! Each operator registers itself with `inventory::submit!`, so this module
//! only has to exist in the build for them to be discoverable.

mod addition;
mod division;
mod multiplication;
mod subtraction;

pub use addition::Addition;
pub use division::Division;
pub use multiplication::Multiplication;
pub use subtraction::Subtraction;
