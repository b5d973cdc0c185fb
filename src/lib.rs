//! # sunum
//!
//! sunum is an interpreter for a small line-oriented scripting language.
//! Programs are sequences of `/`-terminated statements working on numbers and
//! strings, with two variable tables (local and shared), if-statements, named
//! statement groups called categories, and a `call` hook for other languages.
//!
//! Errors never stop a program: a statement that fails to parse is skipped,
//! and a runtime error substitutes `0` or does nothing. Both are collected as
//! diagnostics.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use tracing::warn;

use crate::{
    error::Diagnostic,
    interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::core::Parser},
};

/// Defines the structure of parsed code.
///
/// Declares the expression and statement trees built by the parser and walked
/// by the evaluator. Every node carries the location of its first token.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator,
///   foreign runtimes).
/// - Attaches line and column for context.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// Ties together lexing, parsing, evaluation, values and variable storage.
pub mod interpreter;
/// Number formatting helpers shared by the value and evaluator modules.
pub mod util;

/// Runs a complete program and returns everything that went wrong.
///
/// The source is tokenized in one go, then parsed and executed one top-level
/// statement at a time, so output from earlier statements is produced before
/// later ones are parsed. Each statement's AST is dropped right after it runs;
/// categories it defined stay registered in the interpreter. Statements
/// nested deeper than the interpreter's `max_nesting` are reported as parse
/// errors and never run.
///
/// Diagnostics are returned in the order they occurred, parse errors and
/// runtime errors interleaved.
///
/// # Examples
/// ```
/// use sunum::{interpreter::evaluator::core::Interpreter, run_source};
///
/// let mut interpreter = Interpreter::new(Vec::new());
/// let diagnostics = run_source("x = '5 / write x / write '1 \\ '0 /", &mut interpreter);
///
/// assert_eq!(interpreter.output(), b"5\n0\n");
/// assert_eq!(diagnostics.len(), 1);
/// ```
pub fn run_source<W: Write>(source: &str, interpreter: &mut Interpreter<W>) -> Vec<Diagnostic> {
    let tokens = tokenize(source);
    let mut diagnostics = Vec::new();

    let max_nesting = interpreter.config().max_nesting;

    for result in Parser::with_max_nesting(&tokens, max_nesting) {
        match result {
            Ok(statement) => {
                interpreter.execute(&statement);
                diagnostics.extend(interpreter.take_diagnostics()
                                              .into_iter()
                                              .map(Diagnostic::from));
            },
            Err(error) => {
                warn!(%error, "parse error");
                diagnostics.push(Diagnostic::from(error));
            },
        }
    }

    diagnostics
}
