#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum ParseError {
    /// The expression was empty or contained only whitespace.
    EmptyExpression,
    /// Found a character that is not whitespace, a digit, an operator or a
    /// parenthesis.
    UnexpectedCharacter {
        /// The offending character.
        found: char,
    },
    /// A unary sign was not followed by a number or an opening parenthesis.
    DanglingSign {
        /// The sign character, `+` or `-`.
        sign: char,
    },
    /// A literal value was too large to be represented safely.
    LiteralTooLarge {
        /// The literal as written, including its sign.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Error: Expression is empty."),
            Self::UnexpectedCharacter { found } => {
                write!(f, "Error: Unexpected character '{}'.", found.escape_default())
            },
            Self::DanglingSign { sign } => {
                write!(f, "Error: Sign '{sign}' must be followed by a number or '('.")
            },
            Self::LiteralTooLarge { literal } => {
                write!(f, "Error: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
