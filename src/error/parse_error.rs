use thiserror::Error;

use crate::interpreter::lexer::Location;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The lexer met a character it does not recognize. Parsing stops here.
    #[error("Error at {location}: Unrecognized input '{text}'.")]
    Lex {
        /// The offending text.
        text:     String,
        /// Where it was found.
        location: Location,
    },
    /// Found an unexpected token while parsing.
    #[error("Error at {location}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// What the grammar required at this point.
        expected: String,
        /// The token encountered.
        found:    String,
        /// Where it was found.
        location: Location,
    },
    /// A token that cannot begin a statement.
    #[error("Error at {location}: Unexpected statement start {found}.")]
    UnexpectedStatementStart {
        /// The token encountered.
        found:    String,
        /// Where it was found.
        location: Location,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error at {location}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Where the input ended.
        location: Location,
    },
    /// A statement nests deeper than the configured limit.
    #[error("Error at {location}: Nesting exceeds the limit of {limit}.")]
    TooDeep {
        /// The configured limit.
        limit:    usize,
        /// The token that would have opened one level too many.
        location: Location,
    },
}

impl ParseError {
    /// The location the error refers to.
    #[must_use]
    pub const fn location(&self) -> Location {
        match self {
            Self::Lex { location, .. }
            | Self::UnexpectedToken { location, .. }
            | Self::UnexpectedStatementStart { location, .. }
            | Self::UnexpectedEndOfInput { location }
            | Self::TooDeep { location, .. } => *location,
        }
    }
}
