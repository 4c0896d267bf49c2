use std::{iter::FusedIterator, ops::Range};

use log::trace;
use logos::{Lexer, Logos};

use crate::{
    error::ParseError,
    interpreter::{lexer::Lexeme, operator::Operator},
    util::num::parse_literal,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A classified unit of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// An integer literal, including a sign that was written directly before
    /// it where an operand was expected (`-5` in `3 * -5`).
    Number(i64),
    /// A binary operator.
    Operator(Operator),
    /// `(`. `negated` is set when a `-` sign was written directly before it,
    /// as in `-(4)`.
    OpenParen {
        /// Whether the value of the group is negated once it closes.
        negated: bool,
    },
    /// `)`
    CloseParen,
}

/// A token together with the byte range of the source it was produced from.
///
/// `span.end` is the cursor position right after the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    /// The classified token.
    pub token: Token,
    /// Byte offsets into the source, leading whitespace excluded.
    pub span:  Range<usize>,
}

/// What the tokenizer expects to read next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A value is expected: at the start, after an operator or after `(`.
    /// `+` and `-` are signs here.
    ExpectOperand,
    /// A value just completed: after a number or `)`. `+` and `-` are binary
    /// operators here.
    ExpectOperator,
}

/// Produces classified tokens from an expression, one per call.
///
/// The tokenizer is a finite, lazy iterator over an immutable source. Every
/// yielded token consumes at least one character. After the first error it
/// yields nothing more.
///
/// # Example
/// ```
/// use ltrcalc::interpreter::{
///     operator::Operator,
///     tokenizer::{Token, Tokenizer},
/// };
///
/// let tokens: Vec<Token> = Tokenizer::new("3 + -2").map(|t| t.unwrap().token).collect();
/// assert_eq!(tokens,
///            vec![Token::Number(3), Token::Operator(Operator::Add), Token::Number(-2)]);
/// ```
pub struct Tokenizer<'src> {
    lexer:    Lexer<'src, Lexeme>,
    mode:     Mode,
    finished: bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `source`, expecting an
    /// operand.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:    Lexeme::lexer(source),
               mode:     Mode::ExpectOperand,
               finished: false, }
    }

    /// Returns what the tokenizer expects to read next.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the byte offset the tokenizer has consumed up to.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.lexer.span().end
    }

    /// Reads one token.
    ///
    /// A `+` or `-` in operand position is absorbed into the number or
    /// parenthesis that follows it; whitespace may separate the two.
    fn next_token(&mut self) -> Option<ParseResult<Spanned>> {
        let lexeme = match self.lexer.next()? {
            Ok(lexeme) => lexeme,
            Err(()) => return Some(Err(self.unexpected_character())),
        };
        let start = self.lexer.span().start;

        let token = match (lexeme, self.mode) {
            (Lexeme::Plus, Mode::ExpectOperand) => self.signed('+'),
            (Lexeme::Minus, Mode::ExpectOperand) => self.signed('-'),
            (Lexeme::Plus, Mode::ExpectOperator) => Ok(Token::Operator(Operator::Add)),
            (Lexeme::Minus, Mode::ExpectOperator) => Ok(Token::Operator(Operator::Sub)),
            (Lexeme::Star, _) => Ok(Token::Operator(Operator::Mul)),
            (Lexeme::Slash, _) => Ok(Token::Operator(Operator::Div)),
            (Lexeme::LParen, _) => Ok(Token::OpenParen { negated: false }),
            (Lexeme::RParen, _) => Ok(Token::CloseParen),
            (Lexeme::Digits, _) => parse_literal(None, self.lexer.slice()).map(Token::Number),
        };

        let token = match token {
            Ok(token) => token,
            Err(e) => return Some(Err(e)),
        };

        self.mode = match token {
            Token::Number(_) | Token::CloseParen => Mode::ExpectOperator,
            Token::Operator(_) | Token::OpenParen { .. } => Mode::ExpectOperand,
        };

        let span = start..self.lexer.span().end;
        trace!("token {token:?} at {span:?}");
        Some(Ok(Spanned { token, span }))
    }

    fn signed(&mut self, sign: char) -> ParseResult<Token> {
        match self.lexer.next() {
            Some(Ok(Lexeme::Digits)) => {
                parse_literal(Some(sign), self.lexer.slice()).map(Token::Number)
            },
            Some(Ok(Lexeme::LParen)) => Ok(Token::OpenParen { negated: sign == '-' }),
            Some(Err(())) => Err(self.unexpected_character()),
            Some(Ok(_)) | None => Err(ParseError::DanglingSign { sign }),
        }
    }

    fn unexpected_character(&self) -> ParseError {
        ParseError::UnexpectedCharacter { found: self.lexer.slice().chars().next().unwrap_or_default() }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = ParseResult<Spanned>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let item = self.next_token();
        if !matches!(item, Some(Ok(_))) {
            self.finished = true;
        }
        item
    }
}

impl FusedIterator for Tokenizer<'_> {}
