use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Location, value::core::Value},
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Plus`: identity, numbers only.
/// - `Negate`: arithmetic negation, numbers only.
/// - `Not`: `1` for a falsy operand (`0` or the empty string), else `0`.
///
/// # Errors
/// Returns [`RuntimeError::TypeError`] when `+` or `-` is applied to a
/// string.
///
/// # Example
/// ```
/// use sunum::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, lexer::Location, value::core::Value},
/// };
///
/// let at = Location::new(1, 1);
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, &Value::Number(5.0), at), Ok(Value::Number(-5.0)));
/// assert_eq!(eval_unary(UnaryOperator::Not, &Value::from(""), at), Ok(Value::Number(1.0)));
/// assert!(eval_unary(UnaryOperator::Negate, &Value::from("x"), at).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, location: Location) -> EvalResult<Value> {
    match (op, value) {
        (UnaryOperator::Not, _) => Ok(Value::from(!value.is_truthy())),
        (UnaryOperator::Plus, Value::Number(n)) => Ok(Value::Number(*n)),
        (UnaryOperator::Negate, Value::Number(n)) => Ok(Value::Number(-n)),
        (op, Value::Str(_)) => Err(RuntimeError::TypeError { details: format!("unary '{op}' is not defined for strings"),
                                                             location }),
    }
}
