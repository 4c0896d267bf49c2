use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{evaluator::core::EvalResult, tokenizer::ParseResult},
};

/// Parses a run of decimal digits, optionally preceded by a sign, into an
/// `i64`.
///
/// ## Errors
/// Returns `ParseError::LiteralTooLarge` if the signed value does not fit.
///
/// ## Parameters
/// - `sign`: The sign written before the digits, if any (`'+'` or `'-'`).
/// - `digits`: The digit run as it appears in the source.
///
/// ## Example
/// ```
/// use ltrcalc::{error::ParseError, util::num::parse_literal};
///
/// assert_eq!(parse_literal(None, "42").unwrap(), 42);
/// assert_eq!(parse_literal(Some('-'), "7").unwrap(), -7);
///
/// // The most negative value is only reachable with its sign attached.
/// assert_eq!(parse_literal(Some('-'), "9223372036854775808").unwrap(), i64::MIN);
/// assert!(matches!(parse_literal(None, "9223372036854775808"),
///                  Err(ParseError::LiteralTooLarge { .. })));
/// ```
pub fn parse_literal(sign: Option<char>, digits: &str) -> ParseResult<i64> {
    let literal = match sign {
        Some(sign) => format!("{sign}{digits}"),
        None => digits.to_string(),
    };

    match literal.parse() {
        Ok(value) => Ok(value),
        Err(_) => Err(ParseError::LiteralTooLarge { literal }),
    }
}

/// Negates a value, failing instead of wrapping for `i64::MIN`.
///
/// ## Example
/// ```
/// use ltrcalc::{error::RuntimeError, util::num::negate_checked};
///
/// assert_eq!(negate_checked(5).unwrap(), -5);
/// assert_eq!(negate_checked(i64::MIN), Err(RuntimeError::Overflow { op: '-' }));
/// ```
pub const fn negate_checked(value: i64) -> EvalResult<i64> {
    match value.checked_neg() {
        Some(negated) => Ok(negated),
        None => Err(RuntimeError::Overflow { op: '-' }),
    }
}
