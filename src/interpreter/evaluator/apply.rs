use log::trace;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, operator::Operator},
    util::num::negate_checked,
};

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// A binary operator waiting for its right-hand operand to complete.
    Operator(Operator),
    /// An open parenthesis. Only a matching `)` removes it.
    OpenParen {
        /// Negate the group's value when it closes.
        negated: bool,
        /// Operand stack depth when the group opened.
        depth:   usize,
    },
}

/// The operand and operator stacks of a single evaluation.
#[derive(Debug, Default)]
pub struct Stacks {
    /// Intermediate and final values.
    pub operands:  Vec<i64>,
    /// Pending operators and open-parenthesis sentinels.
    pub operators: Vec<Pending>,
}

impl Stacks {
    /// Applies `op` to the top two operands.
    ///
    /// The right-hand operand is the top of the stack, the left-hand one sits
    /// below it. Both are replaced by the result. On failure the operand stack
    /// is left untouched.
    ///
    /// # Example
    /// ```
    /// use ltrcalc::{
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::apply::Stacks, operator::Operator},
    /// };
    ///
    /// let mut stacks = Stacks::default();
    /// stacks.operands.extend([10, 3]);
    ///
    /// stacks.apply(Operator::Sub).unwrap();
    /// assert_eq!(stacks.operands, vec![7]);
    ///
    /// assert_eq!(stacks.apply(Operator::Add), Err(RuntimeError::StackUnderflow { op: '+' }));
    /// ```
    pub fn apply(&mut self, op: Operator) -> EvalResult<()> {
        let len = self.operands.len();
        if len < 2 {
            return Err(RuntimeError::StackUnderflow { op: op.symbol() });
        }

        let (left, right) = (self.operands[len - 2], self.operands[len - 1]);
        let value = op.apply(left, right)?;
        trace!("reduce {left} {op} {right} = {value}");

        self.operands.truncate(len - 2);
        self.operands.push(value);
        Ok(())
    }

    /// Closes a group opened at operand depth `depth`, negating its value if
    /// requested.
    pub fn close_group(&mut self, negated: bool, depth: usize) -> EvalResult<()> {
        if !negated {
            return Ok(());
        }

        // Only operands pushed since the group opened belong to it.
        let Some(value) = self.operands.get_mut(depth..).and_then(<[i64]>::last_mut) else {
            return Err(RuntimeError::StackUnderflow { op: '-' });
        };

        *value = negate_checked(*value)?;
        Ok(())
    }
}
