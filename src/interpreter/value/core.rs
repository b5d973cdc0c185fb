use crate::{
    ast::LiteralValue,
    util::num::{format_general, format_shortest},
};

/// Represents a runtime value in the interpreter.
///
/// This is both what expressions evaluate to and what the variable tables
/// store. Comparisons and logical operators produce numbers (`1` or `0`);
/// there is no separate boolean kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    Str(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Number(if v { 1.0 } else { 0.0 })
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(s.clone()),
        }
    }
}

impl Value {
    /// The fallback substituted wherever evaluation fails.
    pub const ZERO: Self = Self::Number(0.0);

    /// Condition truthiness: non-zero numbers and non-empty strings.
    ///
    /// # Example
    /// ```
    /// use sunum::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(-1.0).is_truthy());
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(Value::from("a").is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0,
            Self::Str(s) => !s.is_empty(),
        }
    }

    /// Name of the value's kind, used in type error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
        }
    }

    /// Text used when the value takes part in a concatenation. Numbers use
    /// the shortest round-trip format.
    #[must_use]
    pub fn to_concat_string(&self) -> String {
        match self {
            Self::Number(n) => format_shortest(*n),
            Self::Str(s) => s.clone(),
        }
    }
}

/// Prints the value the way `write` does: numbers in compact general format,
/// strings verbatim.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_general(*n)),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}
