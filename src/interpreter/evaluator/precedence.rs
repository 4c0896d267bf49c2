use crate::interpreter::operator::Operator;

/// Ranks operators to decide the order of reduction.
///
/// Before a new operator is pushed, every pending operator whose rank is
/// greater than or equal to the new one's is applied. Open parentheses rank
/// below every operator and are never reduced this way.
pub trait Precedence {
    /// Returns the rank of `op`.
    fn rank(&self, op: Operator) -> u8;
}

/// All four operators share rank 1, so pending operators are always applied
/// before the next one is pushed: evaluation runs strictly left to right.
///
/// ```
/// use ltrcalc::{LeftToRight, Precedence, interpreter::operator::Operator};
///
/// assert!(Operator::ALL.iter().all(|&op| LeftToRight.rank(op) == 1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeftToRight;

impl Precedence for LeftToRight {
    fn rank(&self, _op: Operator) -> u8 {
        1
    }
}
