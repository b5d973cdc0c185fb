use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{comparison::compare, logic::eval_logic},
            core::EvalResult,
        },
        lexer::Location,
        value::core::Value,
    },
};

/// Evaluates an operator on two numbers.
///
/// Arithmetic follows IEEE-754 except that a zero divisor is an error rather
/// than an infinity. `%` is the floating remainder, with the sign of the
/// dividend. Comparisons and logical operators yield `1` or `0`.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] for `\`, `¥` or `-*` by zero.
/// - [`RuntimeError::ModuloByZero`] for `%` by zero.
pub fn eval_numeric(op: BinaryOperator, left: f64, right: f64, location: Location) -> EvalResult<Value> {
    use BinaryOperator::{Add, And, Div, Mod, Mul, Or, Sub, YenDiv};

    match op {
        Add => Ok(Value::Number(left + right)),
        Sub => Ok(Value::Number(left - right)),
        Mul => Ok(Value::Number(left * right)),
        Div | YenDiv => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { location });
            }
            Ok(Value::Number(left / right))
        },
        Mod => {
            if right == 0.0 {
                return Err(RuntimeError::ModuloByZero { location });
            }
            Ok(Value::Number(left % right))
        },
        And | Or => Ok(eval_logic(op, left, right)),
        _ => Ok(Value::from(compare(op, &left, &right))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(op: BinaryOperator, left: f64, right: f64) -> EvalResult<Value> {
        eval_numeric(op, left, right, Location::new(1, 1))
    }

    #[test]
    fn both_division_spellings_divide() {
        assert_eq!(numeric(BinaryOperator::Div, 7.0, 2.0), Ok(Value::Number(3.5)));
        assert_eq!(numeric(BinaryOperator::YenDiv, 9.0, 3.0), Ok(Value::Number(3.0)));
    }

    #[test]
    fn zero_divisors_are_errors() {
        assert!(matches!(numeric(BinaryOperator::Div, 1.0, 0.0),
                         Err(RuntimeError::DivisionByZero { .. })));
        assert!(matches!(numeric(BinaryOperator::YenDiv, 1.0, -0.0),
                         Err(RuntimeError::DivisionByZero { .. })));
        assert!(matches!(numeric(BinaryOperator::Mod, 1.0, 0.0),
                         Err(RuntimeError::ModuloByZero { .. })));
    }

    #[test]
    fn remainder_keeps_the_dividend_sign() {
        assert_eq!(numeric(BinaryOperator::Mod, 7.5, 2.0), Ok(Value::Number(1.5)));
        assert_eq!(numeric(BinaryOperator::Mod, -7.0, 3.0), Ok(Value::Number(-1.0)));
    }

    #[test]
    fn comparisons_yield_one_or_zero() {
        assert_eq!(numeric(BinaryOperator::Greater, 5.0, 3.0), Ok(Value::Number(1.0)));
        assert_eq!(numeric(BinaryOperator::LessEqual, 5.0, 3.0), Ok(Value::Number(0.0)));
        assert_eq!(numeric(BinaryOperator::NotEqual, f64::NAN, f64::NAN), Ok(Value::Number(1.0)));
    }
}
