use std::fs;

use ltrcalc::{
    Evaluator, Options, Precedence, evaluate, evaluate_with_status,
    error::{EvalError, ParseError, RuntimeError},
    interpreter::operator::Operator,
};
use walkdir::WalkDir;

fn init_test_logger() {
    let _ = env_logger::builder().is_test(true)
                                 .filter_level(log::LevelFilter::Trace)
                                 .try_init();
}

#[test]
fn corpus_cases_hold() {
    init_test_logger();
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (expression, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            let actual = evaluate(&expression);
            match expected {
                Some(value) => assert_eq!(actual,
                                          Ok(value),
                                          "case {} in {:?}: {expression:?}",
                                          i + 1,
                                          path),
                None => assert!(actual.is_err(),
                                "case {} in {:?}: {expression:?} evaluated to {actual:?}",
                                i + 1,
                                path),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Each case line reads `expression => value` or `expression => error`.
fn extract_cases(content: &str) -> Vec<(String, Option<i64>)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .map(|line| {
               let (expression, expected) =
                   line.rsplit_once("=>")
                       .unwrap_or_else(|| panic!("Malformed case line: {line}"));
               let expected = match expected.trim() {
                   "error" => None,
                   value => Some(value.parse()
                                      .unwrap_or_else(|e| panic!("Bad expected value in {line}: {e}"))),
               };
               (expression.to_string(), expected)
           })
           .collect()
}

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "expression {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = evaluate(src) {
        panic!("Expression {src:?} evaluated to {value} but was expected to fail")
    }
    assert_eq!(evaluate_with_status(src), (0, false));
}

#[test]
fn addition_and_subtraction_run_left_to_right() {
    assert_value("2+3-4", 1);
    assert_value("2-3+4", 3);
    assert_value("7 - 3 - 2", 2);
}

#[test]
fn multiplication_does_not_bind_tighter() {
    assert_value("2+3*4", 20);
    assert_value("1+2*3-4/2", 2);
    assert_value("100 / 10 / 5", 2);
}

#[test]
fn parentheses_override_order() {
    assert_value("2+(3*4)", 14);
    assert_value("(1+2)*(3+4)", 21);
    assert_value("((2))", 2);
    assert_value("2 * (3 + 4) - 5", 9);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("10/3", 3);
    assert_value("-10/3", -3);
    assert_value("10/-3", -3);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("5/0");
    assert_eq!(evaluate("1 + 2 / (3 - 3)"),
               Err(EvalError::Runtime(RuntimeError::DivisionByZero)));
}

#[test]
fn unary_signs() {
    assert_value("-5+3", -2);
    assert_value("3+-2", 1);
    assert_value("(-3+2)", -1);
    assert_value("- 5", -5);
    assert_value("+7", 7);
    assert_value("1 - -5", 6);
    assert_value("1--5", 6);
}

#[test]
fn signed_parentheses() {
    assert_value("-(4)", -4);
    assert_value("+(4)", 4);
    assert_value("2*-(3+1)", -8);
    assert_value("-(-(2))", 2);
}

#[test]
fn malformed_input_fails() {
    assert_failure("");
    assert_failure("(");
    assert_failure("1+");
    assert_failure("1 2");
    assert_failure("a+1");
    assert_failure("()");
    assert_failure("--5");
    assert_failure("*3");
}

#[test]
fn error_kinds_are_distinguishable() {
    use EvalError::{Parse, Runtime};

    assert_eq!(evaluate(""), Err(Parse(ParseError::EmptyExpression)));
    assert_eq!(evaluate(" \t\n"), Err(Parse(ParseError::EmptyExpression)));
    assert_eq!(evaluate("a+1"),
               Err(Parse(ParseError::UnexpectedCharacter { found: 'a' })));
    assert_eq!(evaluate("1 + -"), Err(Parse(ParseError::DanglingSign { sign: '-' })));
    assert_eq!(evaluate("99999999999999999999"),
               Err(Parse(ParseError::LiteralTooLarge { literal:
                                                           "99999999999999999999".to_string(), })));
    assert_eq!(evaluate("1+"), Err(Runtime(RuntimeError::StackUnderflow { op: '+' })));
    assert_eq!(evaluate("-()"), Err(Runtime(RuntimeError::StackUnderflow { op: '-' })));
    assert_eq!(evaluate("("), Err(Runtime(RuntimeError::UnclosedParen)));
    assert_eq!(evaluate("1)"), Err(Runtime(RuntimeError::UnmatchedParen)));
    assert_eq!(evaluate("1 2"), Err(Runtime(RuntimeError::UnbalancedResult { operands: 2 })));
    assert_eq!(evaluate("()"), Err(Runtime(RuntimeError::UnbalancedResult { operands: 0 })));
}

#[test]
fn overflow_is_error() {
    assert_value("-9223372036854775808", i64::MIN);
    assert_eq!(evaluate("9223372036854775807 + 1"),
               Err(EvalError::Runtime(RuntimeError::Overflow { op: '+' })));
    assert_eq!(evaluate("-9223372036854775808 / -1"),
               Err(EvalError::Runtime(RuntimeError::Overflow { op: '/' })));
    assert_eq!(evaluate("-(-9223372036854775808)"),
               Err(EvalError::Runtime(RuntimeError::Overflow { op: '-' })));
}

#[test]
fn lenient_parens_ignore_stray_close() {
    let lenient = Evaluator::new(Options { strict_parens: false });

    assert_eq!(lenient.evaluate("1)"), Ok(1));
    assert_eq!(lenient.evaluate("(1+2))*3"), Ok(9));
    assert_eq!(lenient.evaluate("("),
               Err(EvalError::Runtime(RuntimeError::UnclosedParen)));
}

#[test]
fn whitespace_is_ignored() {
    assert_eq!(evaluate("1+2"), evaluate(" 1 + 2 "));
    assert_eq!(evaluate("1+2"), evaluate("\t1 +\n2\r\n"));
    assert_eq!(evaluate("(4-1)*2"), evaluate(" ( 4 - 1 ) * 2 "));
}

#[test]
fn evaluation_keeps_no_state() {
    let evaluator = Evaluator::new(Options::default());

    for _ in 0..3 {
        assert_eq!(evaluator.evaluate("2+3*4"), Ok(20));
        assert!(evaluator.evaluate("(1+").is_err());
        assert_eq!(evaluator.evaluate("2-3+4"), Ok(3));
    }

    std::thread::scope(|scope| {
        for n in 0..4_i64 {
            let evaluator = &evaluator;
            scope.spawn(move || {
                     assert_eq!(evaluator.evaluate(&format!("{n} + 1 * 2")), Ok((n + 1) * 2));
                 });
        }
    });
}

#[test]
fn status_contract() {
    assert_eq!(evaluate_with_status("2+3*4"), (20, true));
    assert_eq!(evaluate_with_status("0"), (0, true));
    assert_eq!(evaluate_with_status("5/0"), (0, false));
}

struct MulFirst;

impl Precedence for MulFirst {
    fn rank(&self, op: Operator) -> u8 {
        match op {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }
}

#[test]
fn precedence_is_pluggable() {
    let evaluator = Evaluator::with_precedence(MulFirst, Options::default());

    assert_eq!(evaluator.evaluate("2+3*4"), Ok(14));
    assert_eq!(evaluator.evaluate("2*3+4"), Ok(10));
    assert_eq!(evaluator.evaluate("(2+3)*4"), Ok(20));
}

#[test]
fn errors_display_messages() {
    assert_eq!(RuntimeError::DivisionByZero.to_string(), "Error: Division by zero.");
    assert_eq!(EvalError::from(ParseError::UnexpectedCharacter { found: '$' }).to_string(),
               "Error: Unexpected character '$'.");
}

#[test]
fn negated_group_only_touches_its_own_operands() {
    use ltrcalc::interpreter::evaluator::apply::Stacks;

    let mut stacks = Stacks::default();
    stacks.operands.push(5);

    assert_eq!(stacks.close_group(true, 1), Err(RuntimeError::StackUnderflow { op: '-' }));
    assert_eq!(stacks.operands, vec![5]);

    stacks.close_group(true, 0).unwrap();
    assert_eq!(stacks.operands, vec![-5]);

    assert_failure("5 * -()");
}
