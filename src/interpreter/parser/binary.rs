use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Location, Spanned, Token},
        parser::{core::ParseResult, unary::parse_unary, utils::Nesting},
    },
};

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators.
///
/// # Example
/// ```
/// use sunum::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::At), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(&Token::Yen), Some(BinaryOperator::YenDiv));
/// assert_eq!(token_to_binary_operator(&Token::Slash), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::At | Token::PlusStar => Some(BinaryOperator::Mul),
        Token::Backslash | Token::MinusStar => Some(BinaryOperator::Div),
        Token::Yen => Some(BinaryOperator::YenDiv),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Ampersand => Some(BinaryOperator::And),
        Token::Pipe => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Consumes the next token if it is a binary operator accepted by `accept`.
fn next_operator<'a, I>(tokens: &mut Peekable<I>,
                        accept: fn(BinaryOperator) -> bool)
                        -> Option<(BinaryOperator, Location)>
    where I: Iterator<Item = &'a Spanned>
{
    let (token, location) = tokens.peek()?;
    let op = token_to_binary_operator(token).filter(|op| accept(*op))?;
    let location = *location;
    tokens.next();
    Some((op, location))
}

/// Parses multiplication-level expressions.
///
/// Each operator in a chain opens one nesting level, since the left operand
/// grows one node deeper per operator.
///
/// Handles left-associative operators: `@` and `+*` (multiply), `\`, `¥` and
/// `-*` (divide), `%` (remainder).
///
/// The rule is: `multiplicative := unary (("@" | "\" | "¥" | "%") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, nesting: &mut Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut left = parse_unary(tokens, nesting)?;
    let mut levels = 0;
    while let Some((op, location)) =
        next_operator(tokens, |op| {
            matches!(op,
                     BinaryOperator::Mul
                     | BinaryOperator::Div
                     | BinaryOperator::YenDiv
                     | BinaryOperator::Mod)
        })
    {
        nesting.enter(location)?;
        levels += 1;
        let right = parse_unary(tokens, nesting)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                location };
    }
    nesting.leave(levels);
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, nesting: &mut Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut left = parse_multiplicative(tokens, nesting)?;
    let mut levels = 0;
    while let Some((op, location)) =
        next_operator(tokens, |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub))
    {
        nesting.enter(location)?;
        levels += 1;
        let right = parse_multiplicative(tokens, nesting)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                location };
    }
    nesting.leave(levels);
    Ok(left)
}

/// Parses a relational or equality comparison.
///
/// Comparisons do not chain: at most one of `>`, `<`, `>=`, `<=`, `==`, `!=`
/// is consumed. In `a < b < c` the second `<` is left for the caller, which
/// reports it as unexpected.
///
/// The rule is: `comparison := additive (relop additive)?`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, nesting: &mut Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let left = parse_additive(tokens, nesting)?;

    let Some((op, location)) = next_operator(tokens, BinaryOperator::is_comparison) else {
        return Ok(left);
    };

    nesting.enter(location)?;
    let right = parse_additive(tokens, nesting)?;
    nesting.leave(1);
    Ok(Expr::BinaryOp { left: Box::new(left),
                        op,
                        right: Box::new(right),
                        location })
}

/// Parses logical expressions.
///
/// `&` and `|` share one precedence tier and associate to the left, so
/// `a | b & c` is `(a | b) & c`.
///
/// Grammar: `logical := comparison (("&" | "|") comparison)*`
pub fn parse_logical<'a, I>(tokens: &mut Peekable<I>, nesting: &mut Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut left = parse_comparison(tokens, nesting)?;
    let mut levels = 0;
    while let Some((op, location)) =
        next_operator(tokens, |op| matches!(op, BinaryOperator::And | BinaryOperator::Or))
    {
        nesting.enter(location)?;
        levels += 1;
        let right = parse_comparison(tokens, nesting)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                location };
    }
    nesting.leave(levels);
    Ok(left)
}
