use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// One of the four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
}

impl Operator {
    /// All operators, in symbol order `+ - * /`.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Returns the character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Looks up an operator by its character.
    ///
    /// ```
    /// use ltrcalc::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('*'), Some(Operator::Mul));
    /// assert_eq!(Operator::from_symbol('('), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Integer division truncates toward zero. Overflow is reported instead
    /// of wrapping, which includes `i64::MIN / -1`.
    ///
    /// # Parameters
    /// - `left`: Left-hand operand.
    /// - `right`: Right-hand operand.
    ///
    /// # Returns
    /// The computed value, `RuntimeError::DivisionByZero` when dividing by
    /// zero, or `RuntimeError::Overflow` when the result does not fit.
    ///
    /// # Example
    /// ```
    /// use ltrcalc::{error::RuntimeError, interpreter::operator::Operator};
    ///
    /// assert_eq!(Operator::Div.apply(-7, 2).unwrap(), -3);
    /// assert_eq!(Operator::Div.apply(1, 0), Err(RuntimeError::DivisionByZero));
    /// assert_eq!(Operator::Add.apply(i64::MAX, 1), Err(RuntimeError::Overflow { op: '+' }));
    /// ```
    pub const fn apply(self, left: i64, right: i64) -> EvalResult<i64> {
        let result = match self {
            Self::Add => left.checked_add(right),
            Self::Sub => left.checked_sub(right),
            Self::Mul => left.checked_mul(right),
            Self::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                left.checked_div(right)
            },
        };

        match result {
            Some(value) => Ok(value),
            None => Err(RuntimeError::Overflow { op: self.symbol() }),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
