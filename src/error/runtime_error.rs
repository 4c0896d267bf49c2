#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reducing the stacks.
pub enum RuntimeError {
    /// An operator was applied with fewer than two operands available.
    StackUnderflow {
        /// The operator symbol.
        op: char,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Arithmetic operation overflowed.
    Overflow {
        /// The operator symbol, `-` for sign negation.
        op: char,
    },
    /// A closing parenthesis `)` had no matching `(`.
    UnmatchedParen,
    /// An opening parenthesis `(` was never closed.
    UnclosedParen,
    /// After full reduction the operand stack did not hold exactly one value.
    UnbalancedResult {
        /// How many operands were left.
        operands: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackUnderflow { op } => {
                write!(f, "Error: Operator '{op}' needs two operands.")
            },
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::Overflow { op } => write!(f,
                                            "Error: Integer overflow while applying '{op}'."),
            Self::UnmatchedParen => {
                write!(f, "Error: Closing parenthesis ')' has no matching '('.")
            },
            Self::UnclosedParen => {
                write!(f, "Error: Expected closing parenthesis ')' but none found.")
            },
            Self::UnbalancedResult { operands } => write!(f,
                                                          "Error: Expression reduced to {operands} values instead of one."),
        }
    }
}

impl std::error::Error for RuntimeError {}
