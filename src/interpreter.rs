/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces the complete token buffer
/// up front: sigil numbers, quoted strings, keywords, identifiers and
/// operators, each tagged with its line and column.
///
/// # Responsibilities
/// - Converts the input character stream into located tokens.
/// - Recognizes two-character operators before their one-character prefixes.
/// - Ends the buffer with an error token at the first unrecognized character.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Recursive descent with one precedence level per function. The parser
/// yields one top-level statement at a time and recovers from syntax errors
/// by skipping to the next terminator.
pub mod parser;
/// The evaluator module executes statements and evaluates expressions.
///
/// Holds the `Interpreter`, which owns the variable tables, the category
/// registry and the output sink, and reports runtime errors as diagnostics
/// instead of stopping.
pub mod evaluator;
/// The value module defines the runtime data types: numbers and strings.
pub mod value;
/// The local and shared variable tables.
pub mod environment;
/// Interpreter limits.
pub mod config;
/// Delegation of `call` statements to other languages.
pub mod foreign;
