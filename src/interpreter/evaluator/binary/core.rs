use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{
                arithmetic::eval_numeric,
                string::{eval_mixed, eval_string},
            },
            core::EvalResult,
        },
        lexer::Location,
        value::core::Value,
    },
};

/// Evaluates a binary operation between two values.
///
/// Dispatches on the pair of operand kinds: two numbers go to
/// [`eval_numeric`], two strings to [`eval_string`] and anything mixed to
/// [`eval_mixed`].
///
/// # Errors
/// Returns a `RuntimeError` for division or modulo by zero and for operators
/// the operand kinds do not support. The caller substitutes `0`.
///
/// # Example
/// ```
/// use sunum::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, lexer::Location, value::core::Value},
/// };
///
/// let location = Location::new(1, 1);
///
/// let sum = eval_binary(BinaryOperator::Add, &Value::Number(3.0), &Value::Number(4.0), location);
/// assert_eq!(sum.unwrap(), Value::Number(7.0));
///
/// let joined = eval_binary(BinaryOperator::Add, &Value::from("n="), &Value::Number(1.5), location);
/// assert_eq!(joined.unwrap(), Value::from("n=1.5"));
///
/// let bad = eval_binary(BinaryOperator::Sub, &Value::from("a"), &Value::Number(1.0), location);
/// assert!(bad.is_err());
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   location: Location)
                   -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => eval_numeric(op, *l, *r, location),
        (Value::Str(l), Value::Str(r)) => eval_string(op, l, r, location),
        _ => eval_mixed(op, left, right, location),
    }
}
