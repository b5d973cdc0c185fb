use std::fs;

use sunum::{
    error::{Diagnostic, ForeignError, ParseError, RuntimeError},
    interpreter::{
        config::InterpreterConfig, evaluator::core::Interpreter, foreign::ForeignRuntime,
        value::core::Value,
    },
    run_source,
};
use walkdir::WalkDir;

#[test]
fn demo_scripts_match_their_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "sn"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        let (output, diagnostics) = run(&source);
        count += 1;

        assert!(diagnostics.is_empty(),
                "Demo {path:?} reported errors:\n{}",
                diagnostics.iter()
                           .map(ToString::to_string)
                           .collect::<Vec<_>>()
                           .join("\n"));
        assert_eq!(output, expected, "Demo {path:?} printed the wrong output");
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

fn run(source: &str) -> (String, Vec<Diagnostic>) {
    run_with(source, Interpreter::new(Vec::new()))
}

fn run_with(source: &str, mut interpreter: Interpreter<Vec<u8>>) -> (String, Vec<Diagnostic>) {
    let diagnostics = run_source(source, &mut interpreter);
    let output = String::from_utf8(interpreter.into_output()).expect("output is UTF-8");
    (output, diagnostics)
}

fn assert_output(source: &str, expected: &str) {
    let (output, diagnostics) = run(source);
    assert!(diagnostics.is_empty(), "Script reported errors: {diagnostics:?}");
    assert_eq!(output, expected);
}

#[test]
fn assignment_and_write() {
    assert_output("x = '5 /\nwrite x /", "5\n");
    assert_output("x = '5 / num write x /", "5\n");
    assert_output("s = \"text\" / write s /", "text\n");
}

#[test]
fn arithmetic_and_precedence() {
    assert_output("write '1 + '2 @ '3 /", "7\n");
    assert_output("write ('1 + '2) @ '3 /", "9\n");
    assert_output("write '10 - '4 - '3 /", "3\n");
    assert_output("write - - '2 /", "2\n");
    assert_output("write '7.5 % '2 /", "1.5\n");
}

#[test]
fn numbers_print_in_general_format() {
    assert_output("write '1 \\ '3 /", "0.333333\n");
    assert_output("write '1000000 /", "1e+06\n");
    assert_output("write '123456 /", "123456\n");
    assert_output("write '0.0001 /", "0.0001\n");
}

#[test]
fn if_statement_takes_the_right_branch() {
    assert_output("'5 > '3 ? write \"yes\" ! write \"no\" /", "yes\n");
    assert_output("'5 < '3 ? write \"yes\" ! write \"no\" /", "no\n");
    assert_output("'0 ? write \"yes\" /", "");
    assert_output("\"\" ? write \"yes\" ! write \"empty\" /", "empty\n");
}

#[test]
fn semicolon_binds_to_the_innermost_branch() {
    assert_output("'1 ? write \"a\"; write \"b\" ! write \"c\" /", "a\nb\n");
    assert_output("'0 ? write \"a\" ! write \"b\"; write \"c\" /", "b\nc\n");
}

#[test]
fn string_operations() {
    assert_output("write \"hello\" + \"world\" /", "helloworld\n");
    assert_output("write \"b\" > \"a\" /", "1\n");
    assert_output("write \"x\" + '0.1 /", "x0.1\n");
    assert_output("write '3 + \"x\" /", "3x\n");
}

#[test]
fn string_arithmetic_is_a_type_error() {
    let (output, diagnostics) = run("write \"a\" - \"b\" /");

    assert_eq!(output, "0\n");
    assert!(matches!(diagnostics.as_slice(),
                     [Diagnostic::Runtime(RuntimeError::TypeError { .. })]));
}

#[test]
fn division_by_zero_reports_and_continues() {
    let (output, diagnostics) = run("write '1 \\ '0 /\nwrite \"after\" /");

    assert_eq!(output, "0\nafter\n");
    assert!(matches!(diagnostics.as_slice(),
                     [Diagnostic::Runtime(RuntimeError::DivisionByZero { .. })]));
    assert_eq!(diagnostics[0].location().line, 1);
}

#[test]
fn modulo_by_zero_reports_and_continues() {
    let (output, diagnostics) = run("x = '5 % '0 / write x /");

    assert_eq!(output, "0\n");
    assert!(matches!(diagnostics.as_slice(),
                     [Diagnostic::Runtime(RuntimeError::ModuloByZero { .. })]));
}

#[test]
fn reassignment_requires_a_declaration() {
    let (output, diagnostics) = run("re ghost '1 / num write ghost /");

    assert!(output.is_empty());
    assert!(matches!(diagnostics.as_slice(),
                     [Diagnostic::Runtime(RuntimeError::UndeclaredReassignment { .. }),
                      Diagnostic::Runtime(RuntimeError::UnknownVariable { .. })]));
}

#[test]
fn reassignment_may_change_the_kind() {
    assert_output("x = '1 / re x \"one\" / write x /", "one\n");
}

#[test]
fn shared_copy_is_independent_of_the_local() {
    let mut interpreter = Interpreter::new(Vec::new());
    let diagnostics = run_source("x = '1 / sunum x / x = '2 /", &mut interpreter);

    assert!(diagnostics.is_empty());
    let env = interpreter.environment();
    assert_eq!(env.local().get("x").map(|v| v.value.clone()), Some(Value::Number(2.0)));
    assert_eq!(env.shared().get("x").map(|v| v.value.clone()), Some(Value::Number(1.0)));
    assert_eq!(env.shared().get("x").map(|v| v.is_shared), Some(true));
}

#[test]
fn sunum_of_unknown_local_is_reported() {
    let (_, diagnostics) = run("sunum nothing /");
    assert!(matches!(diagnostics.as_slice(),
                     [Diagnostic::Runtime(RuntimeError::UnknownLocal { .. })]));
}

#[test]
fn compound_statement_continues_after_an_error() {
    let (output, diagnostics) = run("write missing; write \"next\" /");

    assert_eq!(output, "0\nnext\n");
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn category_survives_its_defining_statement() {
    let mut interpreter = Interpreter::new(Vec::new());
    run_source("func greet() write \"hi\" / end", &mut interpreter);
    let diagnostics = run_source("run greet / run greet /", &mut interpreter);

    assert!(diagnostics.is_empty());
    assert_eq!(interpreter.output(), b"hi\nhi\n");
}

#[test]
fn category_sees_the_callers_variables() {
    assert_output("func show() num write v / end\nv = '3 /\nrun show /\nre v '4 /\nrun show /",
                  "3\n4\n");
}

#[test]
fn unknown_category_is_reported() {
    let (_, diagnostics) = run("run nothing /");
    assert!(matches!(diagnostics.as_slice(),
                     [Diagnostic::Runtime(RuntimeError::UnknownCategory { .. })]));
}

#[test]
fn runaway_recursion_hits_the_nesting_limit() {
    let interpreter =
        Interpreter::with_config(InterpreterConfig::default().with_max_depth(4), Vec::new());
    let (output, diagnostics) = run_with("func r() write \".\" / run r / end\nrun r /", interpreter);

    assert_eq!(output, ".\n".repeat(4));
    assert!(matches!(diagnostics.as_slice(),
                     [Diagnostic::Runtime(RuntimeError::NestingLimit { limit: 4, .. })]));
}

#[derive(Default)]
struct Recorder {
    calls: std::rc::Rc<std::cell::RefCell<Vec<(String, String)>>>,
}

impl ForeignRuntime for Recorder {
    fn execute(&mut self, language: &str, code: &str) -> Result<(), ForeignError> {
        self.calls
            .borrow_mut()
            .push((language.to_string(), code.to_string()));
        Ok(())
    }
}

#[test]
fn call_with_unknown_language_is_not_delegated() {
    let recorder = Recorder::default();
    let calls = std::rc::Rc::clone(&recorder.calls);
    let interpreter = Interpreter::new(Vec::new()).with_foreign_runtime(Box::new(recorder));
    let (_, diagnostics) = run_with("call ruby \"puts 1\" / call py \"print(1)\" /", interpreter);

    assert_eq!(*calls.borrow(), vec![("py".to_string(), "print(1)".to_string())]);
    assert!(matches!(diagnostics.as_slice(),
                     [Diagnostic::Runtime(RuntimeError::UnsupportedLanguage { language, .. })]
                     if language == "ruby"));
}

#[test]
fn call_without_a_runtime_is_reported() {
    let (_, diagnostics) = run("call lua \"print(1)\" /");
    assert!(matches!(diagnostics.as_slice(),
                     [Diagnostic::Runtime(RuntimeError::ForeignExecution { .. })]));
}

#[test]
fn parse_errors_skip_only_the_bad_statement() {
    let (output, diagnostics) = run("write '1 /\nwrite @ /\nwrite '3 /");

    assert_eq!(output, "1\n3\n");
    assert!(matches!(diagnostics.as_slice(),
                     [Diagnostic::Parse(ParseError::UnexpectedToken { .. })]));
    assert_eq!(diagnostics[0].location().line, 2);
}

#[test]
fn end_outside_a_category_is_not_a_terminator() {
    let (output, diagnostics) = run("write '1 end write '2 /");

    assert_eq!(output, "2\n");
    assert!(matches!(diagnostics.as_slice(),
                     [Diagnostic::Parse(ParseError::UnexpectedToken { found, .. })] if found == "'end'"));
}

fn repeat_around(open: &str, inner: &str, close: &str, times: usize) -> String {
    format!("{}{inner}{}", open.repeat(times), close.repeat(times))
}

#[test]
fn deeply_nested_input_is_a_diagnostic_not_a_crash() {
    const LEVELS: usize = 100_000;

    let scripts = vec![format!("write {} /", repeat_around("(", "'1", ")", LEVELS)),
                       format!("write {}'1 /", "~".repeat(2 * LEVELS)),
                       format!("write '1{} /", " + '1".repeat(LEVELS)),
                       format!("{}/", repeat_around("func f() ", "", "end ", LEVELS)),
                       format!("{}write '1 /", "x ? ".repeat(LEVELS)),];

    let handle = std::thread::Builder::new().stack_size(8 * 1024 * 1024)
                                            .spawn(move || {
                                                scripts.iter()
                                                       .map(|script| run(&format!("{script}\nwrite \"after\" /")))
                                                       .collect::<Vec<_>>()
                                            })
                                            .expect("spawn test thread");
    let results = handle.join().expect("nested input must not overflow the stack");

    for (output, diagnostics) in results {
        assert_eq!(output, "after\n");
        assert!(matches!(diagnostics.as_slice(),
                         [Diagnostic::Parse(ParseError::TooDeep { limit: 256, .. })]),
                "{diagnostics:?}");
    }
}

#[test]
fn nesting_below_the_limit_still_runs() {
    assert_output(&format!("write {} /", repeat_around("(", "'7", ")", 64)), "7\n");
    assert_output(&format!("write {}'1 /", "~".repeat(64)), "1\n");
}

#[test]
fn nesting_limit_is_configurable() {
    let interpreter =
        Interpreter::with_config(InterpreterConfig::default().with_max_nesting(2), Vec::new());
    let (output, diagnostics) = run_with("write (('1)) /\nwrite ((('2))) /", interpreter);

    assert_eq!(output, "1\n");
    assert!(matches!(diagnostics.as_slice(),
                     [Diagnostic::Parse(ParseError::TooDeep { limit: 2, .. })]));
}

#[test]
fn lex_error_stops_the_program_after_earlier_output() {
    let (output, diagnostics) = run("write '1 /\nwrite $ /\nwrite '3 /");

    assert_eq!(output, "1\n");
    assert!(matches!(diagnostics.as_slice(), [Diagnostic::Parse(ParseError::Lex { .. })]));
}

#[test]
fn bare_numbers_are_not_literals() {
    let (output, diagnostics) = run("write 5 /");

    assert!(output.is_empty());
    assert!(matches!(diagnostics.as_slice(), [Diagnostic::Parse(ParseError::Lex { .. })]));
}

#[test]
fn diagnostics_render_with_locations() {
    let (_, diagnostics) = run("\n  write nope /");

    assert_eq!(diagnostics.iter().map(ToString::to_string).collect::<Vec<_>>(),
               vec!["Error at line 2, column 9: Undefined variable 'nope'.".to_string()]);
}
