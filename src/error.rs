/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an expression:
/// characters outside the grammar, signs with nothing to attach to, and
/// literals that do not fit the integer type.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while reducing the operand and
/// operator stacks, such as division by zero, stack underflow, overflow and
/// mismatched parentheses.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error produced while evaluating an expression.
pub enum EvalError {
    /// The expression could not be tokenized.
    Parse(ParseError),
    /// The tokens could not be reduced to a single value.
    Runtime(RuntimeError),
}

impl From<ParseError> for EvalError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
