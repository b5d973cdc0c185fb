use std::io::Write;

use tracing::{trace, warn};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        config::InterpreterConfig,
        environment::Environment,
        evaluator::{binary::core::eval_binary, category::CategoryRegistry, unary::eval_unary},
        foreign::{ForeignRuntime, NoForeignRuntime},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// Every fallible operation returns either a value of type `T` or a
/// `RuntimeError` describing the failure. The interpreter turns the error into
/// a diagnostic at the point it occurs.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the complete runtime state of one program run.
///
/// The interpreter owns both variable tables, the category registry, the
/// output sink and the foreign runtime. Nothing is global: two interpreters
/// never see each other's variables. Dropping the interpreter releases all of
/// it.
///
/// Runtime errors never abort execution. Each is logged, appended to the
/// diagnostics list and replaced by a safe default (`0` for a value, nothing
/// for a statement), then execution moves on.
///
/// ## Usage
/// ```
/// use sunum::{
///     ast::{Expr, LiteralValue, Statement},
///     interpreter::{evaluator::core::Interpreter, lexer::Location},
/// };
///
/// let mut interpreter = Interpreter::new(Vec::new());
/// let write = Statement::Write { expr:     Expr::Literal { value:    LiteralValue::from("hi"),
///                                                          location: Location::new(1, 7), },
///                                location: Location::new(1, 1), };
///
/// interpreter.execute(&write);
///
/// assert_eq!(interpreter.output(), b"hi\n");
/// assert!(interpreter.diagnostics().is_empty());
/// ```
pub struct Interpreter<W: Write> {
    pub(in crate::interpreter::evaluator) environment: Environment,
    pub(in crate::interpreter::evaluator) categories:  CategoryRegistry,
    pub(in crate::interpreter::evaluator) config:      InterpreterConfig,
    pub(in crate::interpreter::evaluator) output:      W,
    pub(in crate::interpreter::evaluator) foreign:     Box<dyn ForeignRuntime>,
    /// Number of `run` statements currently executing.
    pub(in crate::interpreter::evaluator) depth:       usize,
    diagnostics:                                       Vec<RuntimeError>,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter with empty tables and the default configuration,
    /// writing program output to `output`.
    #[must_use]
    pub fn new(output: W) -> Self {
        Self::with_config(InterpreterConfig::default(), output)
    }

    #[must_use]
    pub fn with_config(config: InterpreterConfig, output: W) -> Self {
        Self { environment: Environment::new(),
               categories: CategoryRegistry::default(),
               config,
               output,
               foreign: Box::new(NoForeignRuntime),
               depth: 0,
               diagnostics: Vec::new() }
    }

    /// Replaces the runtime that `call` statements delegate to.
    #[must_use]
    pub fn with_foreign_runtime(mut self, runtime: Box<dyn ForeignRuntime>) -> Self {
        self.foreign = runtime;
        self
    }

    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    #[must_use]
    pub const fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    #[must_use]
    pub const fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    #[must_use]
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the interpreter and hands back its output sink.
    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runtime errors recorded since the last [`take_diagnostics`](Self::take_diagnostics).
    #[must_use]
    pub fn diagnostics(&self) -> &[RuntimeError] {
        &self.diagnostics
    }

    /// Removes and returns the recorded runtime errors.
    pub fn take_diagnostics(&mut self) -> Vec<RuntimeError> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Records a runtime error. Execution always continues afterwards.
    pub(in crate::interpreter::evaluator) fn report(&mut self, error: RuntimeError) {
        warn!(%error, "runtime error");
        self.diagnostics.push(error);
    }

    /// Unwraps a fallible result, reporting the error and substituting
    /// [`Value::ZERO`].
    pub(in crate::interpreter::evaluator) fn recover(&mut self, result: EvalResult<Value>) -> Value {
        result.unwrap_or_else(|error| {
                  self.report(error);
                  Value::ZERO
              })
    }

    /// Evaluates an expression to a value.
    ///
    /// Evaluation never fails as a whole: a failing node is reported and
    /// evaluates to `0`, and the enclosing expression carries on with that.
    /// Both operands of a binary operator are always evaluated, left first.
    ///
    /// # Example
    /// ```
    /// use sunum::{
    ///     ast::{BinaryOperator, Expr, LiteralValue},
    ///     interpreter::{evaluator::core::Interpreter, lexer::Location, value::core::Value},
    /// };
    ///
    /// let mut interpreter = Interpreter::new(Vec::new());
    /// let literal = |n: f64| Expr::Literal { value:    LiteralValue::from(n),
    ///                                        location: Location::default(), };
    /// let division = Expr::BinaryOp { left:     Box::new(literal(1.0)),
    ///                                 op:       BinaryOperator::Div,
    ///                                 right:    Box::new(literal(0.0)),
    ///                                 location: Location::new(1, 4), };
    ///
    /// assert_eq!(interpreter.evaluate(&division), Value::Number(0.0));
    /// assert_eq!(interpreter.diagnostics().len(), 1);
    /// ```
    pub fn evaluate(&mut self, expr: &Expr) -> Value {
        match expr {
            Expr::Literal { value, .. } => Value::from(value),
            Expr::Variable { name, location } => {
                let result = self.lookup(name, *location);
                self.recover(result)
            },
            Expr::UnaryOp { op, expr, location } => {
                let value = self.evaluate(expr);
                self.recover(eval_unary(*op, &value, *location))
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             location, } => {
                let left = self.evaluate(left);
                let right = self.evaluate(right);
                self.recover(eval_binary(*op, &left, &right, *location))
            },
        }
    }

    /// Executes a single statement against the environment.
    ///
    /// Errors are reported as diagnostics; execution of a compound statement
    /// continues with the next statement after one fails.
    pub fn execute(&mut self, statement: &Statement) {
        trace!(location = %statement.location(), depth = self.depth, "executing statement");

        match statement {
            Statement::Write { expr, location } => {
                let value = self.evaluate(expr);
                self.write_value(&value, *location);
            },
            Statement::WriteVariable { name, location } => match self.lookup(name, *location) {
                Ok(value) => self.write_value(&value, *location),
                Err(error) => self.report(error),
            },
            Statement::Assignment { name, value, .. } => {
                let value = self.evaluate(value);
                self.environment.assign(name, value);
            },
            Statement::Reassignment { name,
                                      value,
                                      location, } => {
                let value = self.evaluate(value);
                if !self.environment.reassign(name, value) {
                    self.report(RuntimeError::UndeclaredReassignment { name:     name.clone(),
                                                                       location: *location, });
                }
            },
            Statement::MarkShared { name, location } => {
                if !self.environment.mark_shared(name) {
                    self.report(RuntimeError::UnknownLocal { name:     name.clone(),
                                                             location: *location, });
                }
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.evaluate(condition).is_truthy() {
                    self.execute(then_branch);
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch);
                }
            },
            Statement::Compound { statements, .. } => {
                for statement in statements {
                    self.execute(statement);
                }
            },
            Statement::Category(def) => self.define_category(def),
            Statement::Run { name, location } => self.run_category(name, *location),
            Statement::Call { language,
                              code,
                              location, } => self.call_foreign(language, code, *location),
        }
    }
}
