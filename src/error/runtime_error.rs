use thiserror::Error;

use crate::interpreter::lexer::Location;

/// Represents all errors that can occur during evaluation and execution.
///
/// None of these abort a program. The interpreter records the error as a
/// diagnostic, substitutes a safe default and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    #[error("Error at {location}: Undefined variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// Where it was referenced.
        location: Location,
    },
    /// `re` targeted a name that was never assigned.
    #[error("Error at {location}: Cannot reassign undeclared variable '{name}'.")]
    UndeclaredReassignment {
        /// The name of the variable.
        name:     String,
        /// Where the reassignment was attempted.
        location: Location,
    },
    /// `sunum` targeted a name with no local binding.
    #[error("Error at {location}: No local variable '{name}' to share.")]
    UnknownLocal {
        /// The name of the variable.
        name:     String,
        /// Where the promotion was attempted.
        location: Location,
    },
    /// Ran a category that was never defined.
    #[error("Error at {location}: Undefined category '{name}'.")]
    UnknownCategory {
        /// The name of the category.
        name:     String,
        /// Where it was run.
        location: Location,
    },
    /// An operator was applied to operand kinds it does not support.
    #[error("Error at {location}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details:  String,
        /// Where the operator was applied.
        location: Location,
    },
    /// Attempted division by zero.
    #[error("Error at {location}: Division by zero.")]
    DivisionByZero {
        /// Where the division happened.
        location: Location,
    },
    /// Attempted modulo by zero.
    #[error("Error at {location}: Modulo by zero.")]
    ModuloByZero {
        /// Where the modulo happened.
        location: Location,
    },
    /// `call` named a language that is not on the allow-list.
    #[error("Error at {location}: Unsupported external language '{language}'.")]
    UnsupportedLanguage {
        /// The rejected language tag.
        language: String,
        /// Where the call was made.
        location: Location,
    },
    /// The foreign runtime refused or failed to run delegated code.
    #[error("Error at {location}: External call failed: {reason}.")]
    ForeignExecution {
        /// What the foreign runtime reported.
        reason:   String,
        /// Where the call was made.
        location: Location,
    },
    /// Nested `run` statements went deeper than the configured limit.
    #[error("Error at {location}: Category '{name}' exceeds the nesting limit of {limit}.")]
    NestingLimit {
        /// The category that would have been entered.
        name:     String,
        /// The configured limit.
        limit:    usize,
        /// Where the run was attempted.
        location: Location,
    },
    /// Output could not be written.
    #[error("Error at {location}: Failed to write output: {details}.")]
    Output {
        /// The underlying I/O error message.
        details:  String,
        /// Where the write was attempted.
        location: Location,
    },
}

impl RuntimeError {
    /// The location the error refers to.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::UnknownVariable { location, .. }
            | Self::UndeclaredReassignment { location, .. }
            | Self::UnknownLocal { location, .. }
            | Self::UnknownCategory { location, .. }
            | Self::TypeError { location, .. }
            | Self::DivisionByZero { location }
            | Self::ModuloByZero { location }
            | Self::UnsupportedLanguage { location, .. }
            | Self::ForeignExecution { location, .. }
            | Self::NestingLimit { location, .. }
            | Self::Output { location, .. } => *location,
        }
    }
}
