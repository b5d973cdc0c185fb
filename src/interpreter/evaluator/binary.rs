/// Operand dispatch for binary operators.
pub mod core;

/// Number-number arithmetic.
pub mod arithmetic;

/// Ordering and equality for numbers and strings.
pub mod comparison;

/// `&` and `|`.
pub mod logic;

/// String and mixed string/number operands.
pub mod string;
