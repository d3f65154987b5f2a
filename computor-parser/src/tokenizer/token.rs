use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("^")]
    Exp,

    #[token("=")]
    Eq,

    /// The variable of the equation, `X` or `x`.
    #[token("x", priority = 3, ignore(case))]
    Var,

    /// Any other run of letters. Only one variable is supported, so these are always rejected by
    /// the parser.
    #[regex(r"[a-zA-Z_]+")]
    Name,

    #[regex(r"[0-9]+(\.[0-9]*)?|\.[0-9]+")]
    Num,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns the canonical text of this token kind in a normalized equation, or [`None`] if the
    /// token's text is kept as written.
    pub fn canonical(self) -> Option<&'static str> {
        match self {
            TokenKind::Whitespace => Some(""),
            TokenKind::Add => Some("+"),
            TokenKind::Sub => Some("-"),
            TokenKind::Mul => Some("*"),
            TokenKind::Exp => Some("^"),
            TokenKind::Eq => Some("="),
            TokenKind::Var => Some("x"),
            TokenKind::Name | TokenKind::Num | TokenKind::Symbol => None,
        }
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns the text of this token as it appears in a normalized equation.
    pub fn text(&self) -> &str {
        self.kind.canonical().unwrap_or(self.lexeme)
    }
}
