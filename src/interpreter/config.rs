/// Nesting limit for `run` used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Syntactic nesting limit used when none is configured.
pub const DEFAULT_MAX_NESTING: usize = 256;

/// Tunable limits of an [`Interpreter`](crate::interpreter::evaluator::core::Interpreter).
///
/// # Example
/// ```
/// use sunum::interpreter::config::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_NESTING, InterpreterConfig};
///
/// assert_eq!(InterpreterConfig::default().max_depth, DEFAULT_MAX_DEPTH);
/// assert_eq!(InterpreterConfig::default().max_nesting, DEFAULT_MAX_NESTING);
/// assert_eq!(InterpreterConfig::default().with_max_depth(8).max_depth, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// How many `run` statements may be active at once. Entering one more is
    /// a runtime error and the category body is skipped.
    pub max_depth:   usize,
    /// How deeply a single statement may nest parentheses, prefix operators,
    /// binary operators, if-statements and `func` bodies. Deeper input is a
    /// parse error, which keeps parsing, evaluation and teardown of the tree
    /// within the native stack.
    pub max_nesting: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self { max_depth:   DEFAULT_MAX_DEPTH,
               max_nesting: DEFAULT_MAX_NESTING, }
    }
}

impl InterpreterConfig {
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }
}
