//! # ltrcalc
//!
//! ltrcalc evaluates integer arithmetic expressions written as text.
//! It supports `+`, `-`, `*` and `/`, unary signs and parentheses. Operators
//! are applied strictly from left to right, so `2 + 3 * 4` is `20`; only
//! parentheses change the order.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for tokenizing and evaluation.
///
/// This module defines every error that can be raised while turning text into
/// tokens or while reducing those tokens to a value. Errors are tagged so the
/// caller can tell a malformed expression from a division by zero, even
/// though the command line only reports success or failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tokenizer, evaluator).
/// - Wraps both families in [`EvalError`].
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of an expression.
///
/// This module ties together the lexer, the tokenizer, the operator set and
/// the two-stack evaluator.
///
/// # Responsibilities
/// - Converts text into classified tokens.
/// - Reduces tokens with an operand stack and an operator stack.
/// - Exposes the precedence scheme as the single point of customization.
pub mod interpreter;
/// Checked numeric helpers shared by the tokenizer and the evaluator.
pub mod util;

pub use error::EvalError;
pub use interpreter::evaluator::{
    core::{Evaluator, Options},
    precedence::{LeftToRight, Precedence},
};

/// Evaluates an expression with the default left-to-right precedence and
/// strict parenthesis matching.
///
/// # Errors
/// Returns an [`EvalError`] if the expression is empty or malformed, divides
/// by zero, overflows, or does not reduce to exactly one value.
///
/// # Examples
/// ```
/// use ltrcalc::evaluate;
///
/// // No operator binds tighter than another.
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 20);
/// assert_eq!(evaluate("2 + (3 * 4)").unwrap(), 14);
///
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<i64, EvalError> {
    Evaluator::new(Options::default()).evaluate(expression)
}

/// Evaluates an expression and reports the outcome as a value and a success
/// flag.
///
/// On failure the value is always `0`. This is the contract the command line
/// prints as `Result => <value>:<flag>`.
///
/// # Examples
/// ```
/// use ltrcalc::evaluate_with_status;
///
/// assert_eq!(evaluate_with_status("-5 + 3"), (-2, true));
/// assert_eq!(evaluate_with_status("1 +"), (0, false));
/// ```
#[must_use]
pub fn evaluate_with_status(expression: &str) -> (i64, bool) {
    match evaluate(expression) {
        Ok(value) => (value, true),
        Err(_) => (0, false),
    }
}
