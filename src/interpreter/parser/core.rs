use std::{iter::Peekable, slice};

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        config::DEFAULT_MAX_NESTING,
        lexer::{Spanned, Token},
        parser::{binary::parse_logical, block::parse_sequence, utils::Nesting},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, the logical operators, and recursively descends
/// through the precedence hierarchy.
///
/// Grammar: `expression := logical`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, nesting: &mut Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    parse_logical(tokens, nesting)
}

/// Turns a token buffer into top-level statements, one at a time.
///
/// `Parser` is an iterator: each item is either a complete `/`-terminated
/// statement or the error that stopped one. After an error the parser rewinds
/// to the first token of the failed statement and skips forward to the next
/// top-level terminator, so one bad line does not hide the rest of the
/// program. A lexer error token ends the iteration.
///
/// Statements nested deeper than the limit (256 levels unless set with
/// [`with_max_nesting`](Self::with_max_nesting)) are reported as
/// [`ParseError::TooDeep`] and skipped like any other syntax error.
///
/// # Example
/// ```
/// use sunum::interpreter::{lexer::tokenize, parser::core::Parser};
///
/// let tokens = tokenize("x = '1 / write @ / write x /");
/// let results: Vec<_> = Parser::new(&tokens).collect();
///
/// assert_eq!(results.len(), 3);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// assert!(results[2].is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    tokens:      Peekable<slice::Iter<'a, Spanned>>,
    finished:    bool,
    max_nesting: usize,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(tokens: &'a [Spanned]) -> Self {
        Self::with_max_nesting(tokens, DEFAULT_MAX_NESTING)
    }

    #[must_use]
    pub fn with_max_nesting(tokens: &'a [Spanned], max_nesting: usize) -> Self {
        Self { tokens: tokens.iter().peekable(),
               finished: false,
               max_nesting }
    }

    /// Parses the next top-level statement.
    ///
    /// # Returns
    /// - `None` once the input is exhausted or a lexer error was reported.
    /// - `Some(Ok(statement))` for a well-formed statement.
    /// - `Some(Err(error))` for a statement that failed to parse. The parser
    ///   has already resynchronized and can be asked for the next one.
    pub fn parse_statement(&mut self) -> Option<ParseResult<Statement>> {
        if self.finished {
            return None;
        }
        if matches!(self.tokens.peek(), None | Some((Token::EndOfInput, _))) {
            self.finished = true;
            return None;
        }

        let start = self.tokens.clone();
        match parse_sequence(&mut self.tokens, &mut Nesting::new(self.max_nesting)) {
            Ok(statement) => Some(Ok(statement)),
            Err(err @ ParseError::Lex { .. }) => {
                self.finished = true;
                Some(Err(err))
            },
            Err(err) => {
                self.tokens = start;
                self.synchronize();
                Some(Err(err))
            },
        }
    }

    /// Skips past the statement that starts at the current position.
    ///
    /// Stops after a `/` outside any category body, or after the `end` (and
    /// its optional `/`) that closes the outermost body. An error token or
    /// the end of input is left in place for the next call to report.
    fn synchronize(&mut self) {
        let mut depth = 0usize;
        while let Some((token, _)) = self.tokens.peek() {
            match token {
                Token::EndOfInput | Token::Error(_) => return,
                Token::Func => depth += 1,
                Token::BlockEnd if depth <= 1 => {
                    self.tokens.next();
                    if depth == 1 {
                        self.tokens.next_if(|(token, _)| *token == Token::Slash);
                    }
                    return;
                },
                Token::BlockEnd => depth -= 1,
                Token::Slash if depth == 0 => {
                    self.tokens.next();
                    return;
                },
                _ => {},
            }
            self.tokens.next();
        }
    }
}

impl Iterator for Parser<'_> {
    type Item = ParseResult<Statement>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_statement()
    }
}

/// Parses a whole token buffer, keeping every statement that parsed and every
/// error that was reported, each in source order.
///
/// # Example
/// ```
/// use sunum::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let (statements, errors) = parse_program(&tokenize("write '1 / ? / write '2 /"));
///
/// assert_eq!(statements.len(), 2);
/// assert_eq!(errors.len(), 1);
/// ```
#[must_use]
pub fn parse_program(tokens: &[Spanned]) -> (Vec<Statement>, Vec<ParseError>) {
    let mut statements = Vec::new();
    let mut errors = Vec::new();

    for result in Parser::new(tokens) {
        match result {
            Ok(statement) => statements.push(statement),
            Err(err) => errors.push(err),
        }
    }

    (statements, errors)
}
