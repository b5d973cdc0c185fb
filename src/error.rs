use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unrecognized characters, unexpected tokens and premature end of
/// input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include undefined names, type mismatches, division by zero
/// and rejected external calls. They are diagnostics, never fatal.
pub mod runtime_error;
/// Errors reported by foreign-language runtimes behind `call`.
pub mod foreign_error;

pub use foreign_error::ForeignError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Anything reported while running a program.
///
/// Neither kind stops execution. Parse errors drop the offending statement,
/// runtime errors substitute a default and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Diagnostic {
    #[must_use]
    pub const fn location(&self) -> crate::interpreter::lexer::Location {
        match self {
            Self::Parse(err) => err.location(),
            Self::Runtime(err) => err.location(),
        }
    }
}
