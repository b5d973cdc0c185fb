use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        config::DEFAULT_MAX_NESTING,
        lexer::{Location, Spanned, Token},
        parser::core::ParseResult,
    },
};

/// Per-statement parser state: how deeply the current position is nested and
/// how many `func` bodies are open around it.
///
/// Every construct that makes the syntax tree deeper enters one level before
/// parsing its inner part: a parenthesis, a prefix operator, each binary
/// operator of a chain, an if-statement and a `func` body. Going past the
/// limit is a [`ParseError::TooDeep`], so no input can recurse the parser,
/// the evaluator or the tree's destructor without bound.
///
/// # Example
/// ```
/// use sunum::{
///     error::ParseError,
///     interpreter::{lexer::Location, parser::utils::Nesting},
/// };
///
/// let mut nesting = Nesting::new(1);
/// assert!(nesting.enter(Location::new(1, 1)).is_ok());
/// assert!(matches!(nesting.enter(Location::new(1, 2)), Err(ParseError::TooDeep { limit: 1, .. })));
///
/// nesting.leave(1);
/// assert_eq!(nesting.depth(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nesting {
    depth:  usize,
    limit:  usize,
    bodies: usize,
}

impl Default for Nesting {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NESTING)
    }
}

impl Nesting {
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { depth: 0,
               limit,
               bodies: 0 }
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Opens one more level at `location`.
    ///
    /// # Errors
    /// Returns [`ParseError::TooDeep`] if the limit is already reached.
    pub fn enter(&mut self, location: Location) -> ParseResult<()> {
        if self.depth >= self.limit {
            return Err(ParseError::TooDeep { limit: self.limit,
                                             location });
        }
        self.depth += 1;
        Ok(())
    }

    /// Closes `levels` levels opened with [`enter`](Self::enter).
    pub const fn leave(&mut self, levels: usize) {
        self.depth = self.depth.saturating_sub(levels);
    }

    /// `true` while parsing inside a `func` body, where `end` may stand in
    /// for a statement's `/`.
    #[must_use]
    pub const fn in_body(&self) -> bool {
        self.bodies > 0
    }

    pub(in crate::interpreter::parser) const fn open_body(&mut self) {
        self.bodies += 1;
    }

    pub(in crate::interpreter::parser) const fn close_body(&mut self) {
        self.bodies = self.bodies.saturating_sub(1);
    }
}

/// Builds the error for a token that does not fit the grammar here.
///
/// An error token from the lexer becomes a [`ParseError::Lex`] and the end of
/// input becomes [`ParseError::UnexpectedEndOfInput`], whatever was expected.
pub(in crate::interpreter::parser) fn unexpected((token, location): &Spanned,
                                                 expected: &str)
                                                 -> ParseError {
    match token {
        Token::Error(text) => ParseError::Lex { text:     text.clone(),
                                                location: *location, },
        Token::EndOfInput => ParseError::UnexpectedEndOfInput { location: *location },
        _ => ParseError::UnexpectedToken { expected: expected.to_string(),
                                           found:    format!("'{token}'"),
                                           location: *location, },
    }
}

/// Location of the next token, or the default location if the stream is
/// exhausted.
pub(in crate::interpreter::parser) fn peek_location<'a, I>(tokens: &mut Peekable<I>) -> Location
    where I: Iterator<Item = &'a Spanned>
{
    tokens.peek().map_or_else(Location::default, |(_, location)| *location)
}

/// Consumes the next token if it equals `expected`.
///
/// # Returns
/// The location of the consumed token.
///
/// # Errors
/// Returns a `ParseError` naming `what` if the next token is anything else or
/// the input has ended.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    what: &str)
                                                    -> ParseResult<Location>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((token, location)) if token == expected => Ok(*location),
        Some(spanned) => Err(unexpected(spanned, what)),
        None => Err(ParseError::UnexpectedEndOfInput { location: Location::default() }),
    }
}

/// Parses a plain identifier and returns its name and location.
///
/// Keywords are separate token kinds, so a reserved word can never come back
/// from here.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the input
/// ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              what: &str)
                                                              -> ParseResult<(String, Location)>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((Token::Identifier(name), location)) => Ok((name.clone(), *location)),
        Some(spanned) => Err(unexpected(spanned, what)),
        None => Err(ParseError::UnexpectedEndOfInput { location: Location::default() }),
    }
}
