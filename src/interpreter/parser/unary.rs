use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Location, Spanned, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{Nesting, expect, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+`  (identity)
/// - `-`  (numeric negation)
/// - `~`  (logical not)
///
/// Unary operators are right-associative, so an input like `~-x` is parsed as
/// `~( -x )`. Each prefix opens one nesting level.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-" | "~") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, nesting: &mut Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        Some((Token::Minus, _)) => UnaryOperator::Negate,
        Some((Token::Tilde, _)) => UnaryOperator::Not,
        _ => return parse_primary(tokens, nesting),
    };

    let location = tokens.next().map(|(_, location)| *location).unwrap_or_default();
    nesting.enter(location)?;
    let expr = parse_unary(tokens, nesting)?;
    nesting.leave(1);

    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       location })
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER | STRING | IDENTIFIER | "(" expression ")"
/// ```
///
/// # Errors
/// Returns a `ParseError` for any other token, including a lexer error token.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, nesting: &mut Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    match tokens.peek() {
        Some((Token::Number(n), location)) => {
            let expr = Expr::Literal { value:    LiteralValue::Number(*n),
                                       location: *location, };
            tokens.next();
            Ok(expr)
        },
        Some((Token::Str(s), location)) => {
            let expr = Expr::Literal { value:    LiteralValue::Str(s.clone()),
                                       location: *location, };
            tokens.next();
            Ok(expr)
        },
        Some((Token::Identifier(name), location)) => {
            let expr = Expr::Variable { name:     name.clone(),
                                        location: *location, };
            tokens.next();
            Ok(expr)
        },
        Some((Token::LParen, _)) => parse_grouping(tokens, nesting),
        Some(spanned) => Err(unexpected(spanned, "an expression")),
        None => Err(ParseError::UnexpectedEndOfInput { location: Location::default() }),
    }
}

/// Parses a parenthesized expression: `"(" expression ")"`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, nesting: &mut Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let location = expect(tokens, &Token::LParen, "'('")?;
    nesting.enter(location)?;
    let expr = parse_expression(tokens, nesting)?;
    expect(tokens, &Token::RParen, "')'")?;
    nesting.leave(1);
    Ok(expr)
}
