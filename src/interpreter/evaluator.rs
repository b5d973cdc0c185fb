/// The interpreter: runtime state, statement execution and expression
/// evaluation.
pub mod core;

/// Binary operator evaluation.
///
/// Handles arithmetic, comparisons, logical operators and string
/// concatenation, dispatching on the kinds of the two operands.
pub mod binary;

/// Unary operator evaluation: `+`, `-` and `~`.
pub mod unary;

/// The category registry and the `run` statement.
pub mod category;

/// Variable lookup, output and foreign delegation helpers.
pub mod utils;
