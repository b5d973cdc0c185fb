use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::comparison::compare, core::EvalResult},
        lexer::Location,
        value::core::Value,
    },
};

/// Evaluates an operator on two strings.
///
/// `+` concatenates and the six comparisons are lexicographic.
///
/// # Errors
/// Returns [`RuntimeError::TypeError`] for arithmetic other than `+` and for
/// the logical operators.
pub fn eval_string(op: BinaryOperator, left: &str, right: &str, location: Location) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok(Value::Str(format!("{left}{right}"))),
        op if op.is_comparison() => Ok(Value::from(compare(op, left, right))),
        op => Err(RuntimeError::TypeError { details: format!("operator '{op}' is not defined for strings"),
                                            location }),
    }
}

/// Evaluates an operator on a string and a number, in either order.
///
/// Only `+` is defined: the number is formatted in shortest round-trip form
/// and the two texts are joined in operand order.
///
/// # Errors
/// Returns [`RuntimeError::TypeError`] for every other operator.
pub fn eval_mixed(op: BinaryOperator, left: &Value, right: &Value, location: Location) -> EvalResult<Value> {
    if op == BinaryOperator::Add {
        let mut joined = left.to_concat_string();
        joined.push_str(&right.to_concat_string());
        return Ok(Value::Str(joined));
    }

    Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                                   left.type_name(),
                                                   right.type_name()),
                                  location })
}
