use crate::ast::BinaryOperator;

/// Applies one of the six comparison operators.
///
/// Works for anything partially ordered, so numbers and strings share it.
/// Strings compare by bytes. With a NaN operand every ordering is false and
/// `!=` is true.
///
/// Non-comparison operators compare as false.
///
/// # Example
/// ```
/// use sunum::{ast::BinaryOperator, interpreter::evaluator::binary::comparison::compare};
///
/// assert!(compare(BinaryOperator::Less, &1.0, &2.0));
/// assert!(compare(BinaryOperator::Less, "abc", "abd"));
/// assert!(compare(BinaryOperator::Greater, "b", "B"));
/// assert!(!compare(BinaryOperator::Equal, &f64::NAN, &f64::NAN));
/// ```
#[must_use]
pub fn compare<T: PartialOrd + ?Sized>(op: BinaryOperator, left: &T, right: &T) -> bool {
    match op {
        BinaryOperator::Less => left < right,
        BinaryOperator::Greater => left > right,
        BinaryOperator::LessEqual => left <= right,
        BinaryOperator::GreaterEqual => left >= right,
        BinaryOperator::Equal => left == right,
        BinaryOperator::NotEqual => left != right,
        _ => false,
    }
}
