use log::{debug, trace};

use crate::{
    error::{EvalError, ParseError, RuntimeError},
    interpreter::{
        evaluator::{
            apply::{Pending, Stacks},
            precedence::{LeftToRight, Precedence},
        },
        operator::Operator,
        tokenizer::{Spanned, Token, Tokenizer},
    },
};

/// Result type used by the evaluator.
///
/// All reduction functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Reject a `)` that has no matching `(`.
    ///
    /// When disabled, such a `)` only applies the pending operators and is
    /// otherwise ignored, so `1 + 2) * 3` evaluates to `9`.
    pub strict_parens: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { strict_parens: true }
    }
}

/// Evaluates expressions with an operand stack and an operator stack.
///
/// The evaluator holds only its configuration. Every call to
/// [`Evaluator::evaluate`] creates fresh stacks, so one evaluator can be
/// reused and shared freely.
///
/// ## Usage
///
/// ```
/// use ltrcalc::{Evaluator, Options};
///
/// let evaluator = Evaluator::new(Options::default());
/// assert_eq!(evaluator.evaluate("2 + 3 * 4").unwrap(), 20);
/// assert_eq!(evaluator.evaluate("(-3 + 2)").unwrap(), -1);
///
/// let lenient = Evaluator::new(Options { strict_parens: false });
/// assert_eq!(lenient.evaluate("1 + 2) * 3").unwrap(), 9);
/// assert!(evaluator.evaluate("1 + 2) * 3").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Evaluator<P = LeftToRight> {
    precedence: P,
    options:    Options,
}

impl Evaluator {
    /// Creates an evaluator with left-to-right precedence.
    #[must_use]
    pub const fn new(options: Options) -> Self {
        Self { precedence: LeftToRight,
               options }
    }
}

impl<P: Precedence> Evaluator<P> {
    /// Creates an evaluator with a custom precedence scheme.
    #[must_use]
    pub const fn with_precedence(precedence: P, options: Options) -> Self {
        Self { precedence,
               options }
    }

    /// Evaluates an expression and returns its value.
    ///
    /// Tokens are handled as they are produced:
    /// - numbers are pushed onto the operand stack;
    /// - `(` pushes a sentinel onto the operator stack;
    /// - `)` applies pending operators down to the matching sentinel;
    /// - an operator first applies every pending operator of greater or equal
    ///   rank, then is pushed.
    ///
    /// Once the input is exhausted the remaining operators are applied and
    /// exactly one operand must be left.
    ///
    /// # Errors
    /// Any parse or runtime error aborts the evaluation; no partial result is
    /// returned.
    pub fn evaluate(&self, expression: &str) -> Result<i64, EvalError> {
        debug!("evaluating {expression:?}");

        let mut stacks = Stacks::default();
        let mut tokens = Tokenizer::new(expression).peekable();

        if tokens.peek().is_none() {
            return Err(ParseError::EmptyExpression.into());
        }

        for spanned in tokens {
            let Spanned { token, .. } = spanned?;

            match token {
                Token::Number(value) => stacks.operands.push(value),
                Token::OpenParen { negated } => {
                    stacks.operators.push(Pending::OpenParen { negated,
                                                               depth: stacks.operands.len() });
                },
                Token::CloseParen => self.eval_close_paren(&mut stacks)?,
                Token::Operator(op) => self.eval_operator(&mut stacks, op)?,
            }
        }

        let value = Self::finish(stacks)?;
        debug!("{expression:?} => {value}");
        Ok(value)
    }

    /// Applies pending operators down to the nearest open parenthesis and
    /// removes it.
    fn eval_close_paren(&self, stacks: &mut Stacks) -> EvalResult<()> {
        loop {
            match stacks.operators.pop() {
                Some(Pending::Operator(op)) => stacks.apply(op)?,
                Some(Pending::OpenParen { negated, depth }) => {
                    return stacks.close_group(negated, depth);
                },
                None if self.options.strict_parens => return Err(RuntimeError::UnmatchedParen),
                None => {
                    trace!("ignoring unmatched ')'");
                    return Ok(());
                },
            }
        }
    }

    /// Applies every pending operator that ranks at least as high as `op`,
    /// then pushes `op`.
    fn eval_operator(&self, stacks: &mut Stacks, op: Operator) -> EvalResult<()> {
        let rank = self.precedence.rank(op);

        while let Some(&Pending::Operator(top)) = stacks.operators.last()
              && self.precedence.rank(top) >= rank
        {
            stacks.operators.pop();
            stacks.apply(top)?;
        }

        stacks.operators.push(Pending::Operator(op));
        Ok(())
    }

    /// Drains the operator stack and extracts the single remaining value.
    fn finish(mut stacks: Stacks) -> EvalResult<i64> {
        while let Some(pending) = stacks.operators.pop() {
            match pending {
                Pending::Operator(op) => stacks.apply(op)?,
                Pending::OpenParen { .. } => return Err(RuntimeError::UnclosedParen),
            }
        }

        match stacks.operands.as_slice() {
            [value] => Ok(*value),
            rest => Err(RuntimeError::UnbalancedResult { operands: rest.len() }),
        }
    }
}
