use crate::{ast::BinaryOperator, interpreter::value::core::Value};

/// Evaluates `&` or `|` on two numbers, treating non-zero as true.
///
/// Both operands have already been evaluated; there is no short circuit.
///
/// # Example
/// ```
/// use sunum::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::logic::eval_logic, value::core::Value},
/// };
///
/// assert_eq!(eval_logic(BinaryOperator::And, 2.0, -1.0), Value::Number(1.0));
/// assert_eq!(eval_logic(BinaryOperator::And, 2.0, 0.0), Value::Number(0.0));
/// assert_eq!(eval_logic(BinaryOperator::Or, 0.0, 0.5), Value::Number(1.0));
/// ```
#[must_use]
pub fn eval_logic(op: BinaryOperator, left: f64, right: f64) -> Value {
    let (left, right) = (left != 0.0, right != 0.0);

    Value::from(match op {
                    BinaryOperator::And => left && right,
                    BinaryOperator::Or => left || right,
                    _ => false,
                })
}
