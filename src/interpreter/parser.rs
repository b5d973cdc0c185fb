/// Parser entry points and error recovery.
///
/// Holds the `Parser` driver that yields one top-level statement at a time
/// and resynchronizes after a syntax error, plus the expression entry point.
pub mod core;

/// Prefix operators and primary expressions.
///
/// Literals, variable references, parenthesized expressions and the unary
/// `+`, `-` and `~` operators.
pub mod unary;

/// Binary operator precedence levels.
///
/// Multiplicative, additive, comparison and logical tiers, each delegating to
/// the next tighter one.
pub mod binary;

/// Statement sequences and category bodies.
///
/// `;`-chains, `/`-terminated sequences and `func ... end` definitions.
pub mod block;

/// Single statements.
///
/// Dispatches on the leading keyword: `write`, `num write`, `re`, `sunum`,
/// `run`, `call`, `func`, assignment, or an if-statement.
pub mod statement;

/// Token-level helpers shared by the other parser modules.
pub mod utils;
