use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{CategoryDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Location, Spanned, Token},
        parser::{
            core::ParseResult,
            statement::parse_simple_statement,
            utils::{Nesting, expect, parse_identifier, peek_location, unexpected},
        },
    },
};

/// Parses simple statements joined by `;`.
///
/// A single statement is returned as is. Two or more become one flat
/// [`Statement::Compound`]; nested chains never produce nested compounds
/// because an if-statement's branch swallows every `;` that follows it.
///
/// Grammar: `chain := simple (";" simple)*`
pub fn parse_chain<'a, I>(tokens: &mut Peekable<I>, nesting: &mut Nesting) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let location = peek_location(tokens);
    let mut statements = vec![parse_simple_statement(tokens, nesting)?];

    while tokens.next_if(|(token, _)| *token == Token::Semicolon).is_some() {
        // `a ? b ; ! c` is accepted: the `;` before an else branch is dropped.
        if matches!(tokens.peek(), Some((Token::Bang, _))) {
            break;
        }
        statements.push(parse_simple_statement(tokens, nesting)?);
    }

    if statements.len() == 1 {
        return Ok(statements.remove(0));
    }
    Ok(Statement::Compound { statements, location })
}

/// Parses a terminated statement sequence, the unit the parser hands to the
/// interpreter.
///
/// The closing `/` may be left out after a category definition and before the
/// `end` of an enclosing body. Outside any body an `end` is not a terminator.
///
/// Grammar: `sequence := chain "/"`
pub fn parse_sequence<'a, I>(tokens: &mut Peekable<I>, nesting: &mut Nesting) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let statement = parse_chain(tokens, nesting)?;

    match tokens.peek() {
        Some((Token::Slash, _)) => {
            tokens.next();
        },
        Some((Token::BlockEnd, _)) if nesting.in_body() => {},
        _ if ends_with_category(&statement) => {},
        Some(spanned) => return Err(unexpected(spanned, "'/' to end the statement")),
        None => return Err(ParseError::UnexpectedEndOfInput { location: Location::default() }),
    }

    Ok(statement)
}

/// Parses a category definition: `func name() ... end`.
///
/// The body holds any number of sequences and is closed by `end` or `//`.
/// It opens one nesting level.
///
/// # Errors
/// Returns a `ParseError` if the header is malformed, a body statement fails
/// to parse, or the input ends before the body is closed.
pub fn parse_category_definition<'a, I>(tokens: &mut Peekable<I>,
                                        nesting: &mut Nesting)
                                        -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let location = expect(tokens, &Token::Func, "'func'")?;
    let (name, _) = parse_identifier(tokens, "a category name")?;
    expect(tokens, &Token::LParen, "'(' after the category name")?;
    expect(tokens, &Token::RParen, "')'")?;

    nesting.enter(location)?;
    nesting.open_body();
    let mut body = Vec::new();
    while !matches!(tokens.peek(), Some((Token::BlockEnd, _))) {
        body.push(parse_sequence(tokens, nesting)?);
    }
    expect(tokens, &Token::BlockEnd, "'end'")?;
    nesting.close_body();
    nesting.leave(1);

    Ok(Statement::Category(CategoryDef { name,
                                         body: Rc::from(body),
                                         location }))
}

fn ends_with_category(statement: &Statement) -> bool {
    match statement {
        Statement::Category(_) => true,
        Statement::Compound { statements, .. } => statements.last().is_some_and(ends_with_category),
        Statement::If { then_branch,
                        else_branch, .. } => {
            ends_with_category(else_branch.as_deref().unwrap_or(then_branch))
        },
        _ => false,
    }
}
