//! Property-based tests for the lexer, parser and evaluator.
//!
//! 1. The lexer never panics and always ends with exactly one terminal token.
//! 2. The parser never panics and always terminates on any token buffer.
//! 3. Number arithmetic matches IEEE-754 for non-zero divisors.
//! 4. Comparisons always yield `1` or `0`.
//! 5. String concatenation is associative.

use proptest::prelude::*;
use sunum::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{binary::core::eval_binary, core::Interpreter},
        lexer::{Location, Token, tokenize},
        parser::core::parse_program,
        value::core::Value,
    },
    run_source,
    util::num::format_general,
};

const COMPARISONS: [BinaryOperator; 6] = [BinaryOperator::Less,
                                          BinaryOperator::Greater,
                                          BinaryOperator::LessEqual,
                                          BinaryOperator::GreaterEqual,
                                          BinaryOperator::Equal,
                                          BinaryOperator::NotEqual];

fn is_terminal(token: &Token) -> bool {
    matches!(token, Token::EndOfInput | Token::Error(_))
}

fn numeric(op: BinaryOperator, left: f64, right: f64) -> Value {
    eval_binary(op, &Value::Number(left), &Value::Number(right), Location::default())
        .expect("numeric operation succeeds")
}

proptest! {
    #[test]
    fn lexer_ends_with_one_terminal_token(s in "\\PC*") {
        let tokens = tokenize(&s);

        prop_assert!(tokens.last().is_some_and(|(token, _)| is_terminal(token)));
        prop_assert_eq!(tokens.iter().filter(|(token, _)| is_terminal(token)).count(), 1);
    }

    #[test]
    fn lexer_locations_are_one_based(s in "\\PC*") {
        for (_, location) in tokenize(&s) {
            prop_assert!(location.line >= 1);
            prop_assert!(location.column >= 1);
        }
    }

    #[test]
    fn parser_never_panics(s in "[a-z'0-9 ./;?!=+@\\\\%<>&|~()\"\n-]{0,64}") {
        let tokens = tokenize(&s);
        let (statements, errors) = parse_program(&tokens);

        // Every top-level statement consumes at least one token.
        prop_assert!(statements.len() + errors.len() <= tokens.len());
    }

    #[test]
    fn interpreter_never_panics(s in "[a-z'0-9 ./;?!=+@\\\\%<>&|~()\"\n-]{0,64}") {
        let mut interpreter = Interpreter::new(Vec::new());
        let _ = run_source(&s, &mut interpreter);
    }

    #[test]
    fn arithmetic_matches_ieee754(a in -1e9f64..1e9, b in -1e9f64..1e9) {
        prop_assert_eq!(numeric(BinaryOperator::Add, a, b), Value::Number(a + b));
        prop_assert_eq!(numeric(BinaryOperator::Sub, a, b), Value::Number(a - b));
        prop_assert_eq!(numeric(BinaryOperator::Mul, a, b), Value::Number(a * b));
        if b != 0.0 {
            prop_assert_eq!(numeric(BinaryOperator::Div, a, b), Value::Number(a / b));
            prop_assert_eq!(numeric(BinaryOperator::Mod, a, b), Value::Number(a % b));
        }
    }

    #[test]
    fn comparisons_yield_one_or_zero(a in any::<f64>(), b in any::<f64>()) {
        for op in COMPARISONS {
            let result = numeric(op, a, b);
            prop_assert!(result == Value::Number(1.0) || result == Value::Number(0.0));
        }
    }

    #[test]
    fn string_comparisons_yield_one_or_zero(a in "\\PC{0,8}", b in "\\PC{0,8}") {
        for op in COMPARISONS {
            let result = eval_binary(op, &Value::from(a.as_str()), &Value::from(b.as_str()), Location::default());
            prop_assert!(matches!(result, Ok(Value::Number(n)) if n == 1.0 || n == 0.0));
        }
    }

    #[test]
    fn concatenation_is_associative(a in "\\PC{0,8}", b in "\\PC{0,8}", c in "\\PC{0,8}") {
        let at = Location::default();
        let (a, b, c) = (Value::from(a), Value::from(b), Value::from(c));

        let left = eval_binary(BinaryOperator::Add, &a, &b, at)
            .and_then(|ab| eval_binary(BinaryOperator::Add, &ab, &c, at));
        let right = eval_binary(BinaryOperator::Add, &b, &c, at)
            .and_then(|bc| eval_binary(BinaryOperator::Add, &a, &bc, at));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn written_numbers_use_general_format(n in -1e12f64..1e12) {
        let source = format!("x = '{} / write x /", n.abs());
        let mut interpreter = Interpreter::new(Vec::new());
        let diagnostics = run_source(&source, &mut interpreter);

        prop_assert!(diagnostics.is_empty());
        let expected = format!("{}\n", format_general(n.abs()));
        prop_assert_eq!(String::from_utf8_lossy(interpreter.output()).into_owned(), expected);
    }
}
