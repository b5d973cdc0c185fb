use std::{collections::HashMap, io::Write, rc::Rc};

use tracing::debug;

use crate::{
    ast::{CategoryDef, Statement},
    error::RuntimeError,
    interpreter::{evaluator::core::Interpreter, lexer::Location},
};

/// Named statement lists registered by `func` and executed by `run`.
///
/// Bodies are shared with the AST node that declared them, so a category
/// stays runnable after the statement that defined it is gone.
#[derive(Debug, Default, Clone)]
pub struct CategoryRegistry {
    categories: HashMap<String, Rc<[Statement]>>,
}

impl CategoryRegistry {
    /// Registers `body` under `name`, returning the body it replaced, if any.
    pub fn define(&mut self, name: &str, body: Rc<[Statement]>) -> Option<Rc<[Statement]>> {
        self.categories.insert(name.to_string(), body)
    }

    /// A handle to the body registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Rc<[Statement]>> {
        self.categories.get(name).cloned()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<W: Write> Interpreter<W> {
    /// Registers a category definition. A later definition with the same name
    /// replaces the earlier one.
    pub(in crate::interpreter::evaluator) fn define_category(&mut self, def: &CategoryDef) {
        let replaced = self.categories.define(&def.name, Rc::clone(&def.body));
        debug!(name = %def.name,
               statements = def.body.len(),
               replaced = replaced.is_some(),
               "registered category");
    }

    /// Executes the body registered under `name` against the current
    /// environment.
    ///
    /// The body handle is held for the whole run, so a category that redefines
    /// itself finishes the body it started with.
    pub(in crate::interpreter::evaluator) fn run_category(&mut self,
                                                          name: &str,
                                                          location: Location) {
        let Some(body) = self.categories.get(name) else {
            self.report(RuntimeError::UnknownCategory { name: name.to_string(),
                                                        location });
            return;
        };

        if self.depth >= self.config.max_depth {
            self.report(RuntimeError::NestingLimit { name: name.to_string(),
                                                     limit: self.config.max_depth,
                                                     location });
            return;
        }

        self.depth += 1;
        for statement in body.iter() {
            self.execute(statement);
        }
        self.depth -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{Expr, LiteralValue},
        interpreter::config::InterpreterConfig,
    };

    fn write_text(text: &str) -> Statement {
        Statement::Write { expr:     Expr::Literal { value:    LiteralValue::from(text),
                                                     location: Location::default(), },
                           location: Location::default(), }
    }

    fn run(name: &str) -> Statement {
        Statement::Run { name:     name.to_string(),
                         location: Location::default(), }
    }

    fn category(name: &str, body: Vec<Statement>) -> Statement {
        Statement::Category(CategoryDef { name:     name.to_string(),
                                          body:     Rc::from(body),
                                          location: Location::default(), })
    }

    #[test]
    fn registered_body_outlives_the_definition() {
        let mut interpreter = Interpreter::new(Vec::new());
        {
            let definition = category("greet", vec![write_text("hello")]);
            interpreter.execute(&definition);
        }
        interpreter.execute(&run("greet"));

        assert_eq!(interpreter.output(), b"hello\n");
        assert!(interpreter.categories().contains("greet"));
    }

    #[test]
    fn redefinition_replaces_the_body() {
        let mut interpreter = Interpreter::new(Vec::new());
        interpreter.execute(&category("c", vec![write_text("old")]));
        interpreter.execute(&category("c", vec![write_text("new")]));
        interpreter.execute(&run("c"));

        assert_eq!(interpreter.output(), b"new\n");
        assert_eq!(interpreter.categories().len(), 1);
    }

    #[test]
    fn unknown_category_is_reported() {
        let mut interpreter = Interpreter::new(Vec::new());
        interpreter.execute(&run("nowhere"));

        assert!(matches!(interpreter.diagnostics(), [RuntimeError::UnknownCategory { .. }]));
    }

    #[test]
    fn recursion_stops_at_the_nesting_limit() {
        let config = InterpreterConfig::default().with_max_depth(3);
        let mut interpreter = Interpreter::with_config(config, Vec::new());
        interpreter.execute(&category("loop", vec![write_text("x"), run("loop")]));
        interpreter.execute(&run("loop"));

        assert_eq!(interpreter.output(), b"x\nx\nx\n");
        assert!(matches!(interpreter.diagnostics(),
                         [RuntimeError::NestingLimit { limit: 3, .. }]));
        assert_eq!(interpreter.depth, 0);
    }
}
