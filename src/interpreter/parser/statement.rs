use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Location, Spanned, Token},
        parser::{
            block::{parse_category_definition, parse_chain},
            core::{ParseResult, parse_expression},
            utils::{Nesting, expect, parse_identifier, unexpected},
        },
    },
};

/// Parses a single statement, without its terminator.
///
/// The leading token decides the form:
/// - `write <expr>`
/// - `num write <name>`
/// - `re <name> [=] <expr>`
/// - `sunum <name>`
/// - `run <name>`
/// - `call <language> "<code>"`
/// - `func <name>() ... end`
/// - `<name> = <expr>`
/// - `<condition> ? <chain> [! <chain>]`
///
/// Telling an assignment from an if-statement that starts with a variable
/// needs two tokens of lookahead, done on a clone of the iterator.
///
/// # Errors
/// Returns [`ParseError::UnexpectedStatementStart`] for a token that can
/// begin neither a statement nor an expression, and propagates any error from
/// the form being parsed.
pub fn parse_simple_statement<'a, I>(tokens: &mut Peekable<I>,
                                     nesting: &mut Nesting)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let Some(spanned) = tokens.peek().copied() else {
        return Err(ParseError::UnexpectedEndOfInput { location: Location::default() });
    };
    let (token, location) = spanned;
    let location = *location;

    match token {
        Token::Write => {
            tokens.next();
            let expr = parse_expression(tokens, nesting)?;
            Ok(Statement::Write { expr, location })
        },
        Token::Num => {
            tokens.next();
            expect(tokens, &Token::Write, "'write' after 'num'")?;
            let (name, _) = parse_identifier(tokens, "a variable name")?;
            Ok(Statement::WriteVariable { name, location })
        },
        Token::Re => {
            tokens.next();
            let (name, _) = parse_identifier(tokens, "a variable name")?;
            tokens.next_if(|(token, _)| *token == Token::Equals);
            let value = parse_expression(tokens, nesting)?;
            Ok(Statement::Reassignment { name,
                                         value,
                                         location })
        },
        Token::Sunum => {
            tokens.next();
            let (name, _) = parse_identifier(tokens, "a variable name")?;
            Ok(Statement::MarkShared { name, location })
        },
        Token::Run => {
            tokens.next();
            let (name, _) = parse_identifier(tokens, "a category name")?;
            Ok(Statement::Run { name, location })
        },
        Token::Call => parse_call(tokens, location),
        Token::Func => parse_category_definition(tokens, nesting),
        Token::Identifier(_) if is_assignment(tokens) => parse_assignment(tokens, nesting, location),
        Token::Number(_)
        | Token::Str(_)
        | Token::Identifier(_)
        | Token::LParen
        | Token::Plus
        | Token::Minus
        | Token::Tilde => parse_if(tokens, nesting, location),
        Token::Error(_) | Token::EndOfInput => Err(unexpected(spanned, "a statement")),
        _ => Err(ParseError::UnexpectedStatementStart { found: format!("'{token}'"),
                                                        location }),
    }
}

/// `true` if the stream holds an identifier directly followed by `=`.
fn is_assignment<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();
    matches!(lookahead.next(), Some((Token::Equals, _)))
}

/// Parses `name = <expr>`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           nesting: &mut Nesting,
                           location: Location)
                           -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let (name, _) = parse_identifier(tokens, "a variable name")?;
    expect(tokens, &Token::Equals, "'='")?;
    let value = parse_expression(tokens, nesting)?;

    Ok(Statement::Assignment { name,
                               value,
                               location })
}

/// Parses `call <language> "<code>"`.
///
/// The language tag is not checked here; an unknown tag is a runtime error.
fn parse_call<'a, I>(tokens: &mut Peekable<I>, location: Location) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    expect(tokens, &Token::Call, "'call'")?;
    let (language, _) = parse_identifier(tokens, "a language name")?;

    let code = match tokens.next() {
        Some((Token::Str(code), _)) => code.clone(),
        Some(spanned) => return Err(unexpected(spanned, "a quoted code string")),
        None => return Err(ParseError::UnexpectedEndOfInput { location }),
    };

    Ok(Statement::Call { language,
                         code,
                         location })
}

/// Parses an if-statement.
///
/// Syntax:
/// ```text
///     <condition> ? <chain>
///     <condition> ? <chain> ! <chain>
/// ```
/// Each branch is a `;`-chain, so a `;` always belongs to the innermost open
/// branch. An if-statement opens one nesting level for its condition and
/// branches.
///
/// # Errors
/// Returns a `ParseError` if the `?` is missing after the condition. A bare
/// expression is not a statement.
fn parse_if<'a, I>(tokens: &mut Peekable<I>,
                   nesting: &mut Nesting,
                   location: Location)
                   -> ParseResult<Statement>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    nesting.enter(location)?;
    let condition = parse_expression(tokens, nesting)?;
    expect(tokens, &Token::Question, "'?' after the condition")?;
    let then_branch = parse_chain(tokens, nesting)?;

    let else_branch = if tokens.next_if(|(token, _)| *token == Token::Bang).is_some() {
        Some(Box::new(parse_chain(tokens, nesting)?))
    } else {
        None
    };
    nesting.leave(1);

    Ok(Statement::If { condition,
                       then_branch: Box::new(then_branch),
                       else_branch,
                       location })
}
