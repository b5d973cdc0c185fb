use std::io::Write;

use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        foreign::is_supported,
        lexer::Location,
        value::core::Value,
    },
};

impl<W: Write> Interpreter<W> {
    /// Resolves a variable by name, local table first, then shared.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownVariable`] if neither table binds the
    /// name.
    pub(in crate::interpreter::evaluator) fn lookup(&self,
                                                    name: &str,
                                                    location: Location)
                                                    -> EvalResult<Value> {
        self.environment
            .lookup(name)
            .map(|variable| variable.value.clone())
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           location })
    }

    /// Prints a value followed by a line break.
    pub(in crate::interpreter::evaluator) fn write_value(&mut self,
                                                         value: &Value,
                                                         location: Location) {
        if let Err(error) = writeln!(self.output, "{value}") {
            self.report(RuntimeError::Output { details: error.to_string(),
                                               location });
        }
    }

    /// Hands `code` to the foreign runtime if `language` is on the
    /// allow-list. Unknown tags are reported without delegating.
    pub(in crate::interpreter::evaluator) fn call_foreign(&mut self,
                                                          language: &str,
                                                          code: &str,
                                                          location: Location) {
        if !is_supported(language) {
            self.report(RuntimeError::UnsupportedLanguage { language: language.to_string(),
                                                            location });
            return;
        }

        debug!(language, bytes = code.len(), %location, "delegating external call");
        if let Err(error) = self.foreign.execute(language, code) {
            self.report(RuntimeError::ForeignExecution { reason: error.to_string(),
                                                         location });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, io, rc::Rc};

    use super::*;
    use crate::{
        ast::Statement,
        error::ForeignError,
        interpreter::foreign::ForeignRuntime,
    };

    #[derive(Default, Clone)]
    struct Recorder {
        calls: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl ForeignRuntime for Recorder {
        fn execute(&mut self, language: &str, code: &str) -> Result<(), ForeignError> {
            self.calls
                .borrow_mut()
                .push((language.to_string(), code.to_string()));
            Ok(())
        }
    }

    fn call(language: &str, code: &str) -> Statement {
        Statement::Call { language: language.to_string(),
                          code:     code.to_string(),
                          location: Location::new(1, 1), }
    }

    #[test]
    fn unknown_language_is_never_delegated() {
        let recorder = Recorder::default();
        let mut interpreter =
            Interpreter::new(Vec::new()).with_foreign_runtime(Box::new(recorder.clone()));
        interpreter.execute(&call("ruby", "puts 1"));

        assert!(recorder.calls.borrow().is_empty());
        assert!(matches!(interpreter.diagnostics(),
                         [RuntimeError::UnsupportedLanguage { language, .. }] if language == "ruby"));
    }

    #[test]
    fn known_language_is_delegated_verbatim() {
        let recorder = Recorder::default();
        let mut interpreter =
            Interpreter::new(Vec::new()).with_foreign_runtime(Box::new(recorder.clone()));
        interpreter.execute(&call("py", "print('x')"));

        assert_eq!(*recorder.calls.borrow(),
                   vec![("py".to_string(), "print('x')".to_string())]);
        assert!(interpreter.diagnostics().is_empty());
    }

    #[test]
    fn default_runtime_failure_becomes_a_diagnostic() {
        let mut interpreter = Interpreter::new(Vec::new());
        interpreter.execute(&call("lua", "print(1)"));

        assert!(matches!(interpreter.diagnostics(), [RuntimeError::ForeignExecution { .. }]));
    }

    struct Failing;

    impl ForeignRuntime for Failing {
        fn execute(&mut self, language: &str, code: &str) -> Result<(), ForeignError> {
            Err(ForeignError::Failed { language: language.to_string(),
                                       details:  format!("{code} raised") })
        }
    }

    #[test]
    fn failing_foreign_code_is_reported_and_execution_continues() {
        let mut interpreter = Interpreter::new(Vec::new()).with_foreign_runtime(Box::new(Failing));
        interpreter.execute(&call("py", "boom()"));
        interpreter.write_value(&Value::Number(2.0), Location::new(2, 1));

        let [error] = interpreter.diagnostics() else {
            panic!("expected one diagnostic, found {:?}", interpreter.diagnostics());
        };
        assert_eq!(*error,
                   RuntimeError::ForeignExecution { reason:   "py code failed: boom() raised".to_string(),
                                                    location: Location::new(1, 1), });
        assert_eq!(error.to_string(),
                   "Error at line 1, column 1: External call failed: py code failed: boom() raised.");
        assert_eq!(interpreter.output(), b"2\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn output_failure_is_reported() {
        let mut interpreter = Interpreter::new(BrokenPipe);
        interpreter.write_value(&Value::Number(1.0), Location::new(2, 1));

        assert!(matches!(interpreter.diagnostics(), [RuntimeError::Output { .. }]));
    }
}
