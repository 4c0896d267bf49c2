use logos::Logos;

/// Represents a raw lexical unit in the source input.
///
/// Lexemes carry no context: a `-` is always [`Lexeme::Minus`], whether it
/// ends up as a sign or as a subtraction. The tokenizer decides which.
/// Whitespace (spaces, tabs, newlines, vertical tabs and feeds) is skipped.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
pub enum Lexeme {
    /// A run of decimal digits, such as `42`. The value is parsed by the
    /// tokenizer once the sign is known.
    #[regex(r"[0-9]+")]
    Digits,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}
