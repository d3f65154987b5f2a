use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use std::fmt::{self, Display, Formatter};

/// A canonical token stream for an equation.
///
/// Whitespace and `*` tokens are removed, and a `+` separator is inserted before every `-` that
/// does not follow a `^`, so that every term boundary is marked by a `+`. Every token keeps the
/// span of the raw input it came from; inserted separators share the span of their `-`.
///
/// The [`Display`] implementation writes the normalized text, such as `5x^0+4x^1+-9.3x^2=1x^0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<'source> {
    tokens: Vec<Token<'source>>,
}

impl<'source> Normalized<'source> {
    /// Returns the normalized tokens.
    pub fn tokens(&self) -> &[Token<'source>] {
        &self.tokens
    }
}

impl Display for Normalized<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.tokens.iter().try_for_each(|token| f.write_str(token.text()))
    }
}

/// Normalizes the given raw equation. This never fails; malformed input is reported by the
/// later stages.
pub fn normalize(input: &str) -> Normalized {
    let mut tokens: Vec<Token> = Vec::new();

    for token in tokenize_complete(input).into_vec() {
        match token.kind {
            TokenKind::Whitespace | TokenKind::Mul => continue,
            TokenKind::Sub if tokens.last().map(|t| t.kind) != Some(TokenKind::Exp) => {
                tokens.push(Token {
                    span: token.span.clone(),
                    kind: TokenKind::Add,
                    lexeme: "+",
                });
            },
            _ => (),
        }
        tokens.push(token);
    }

    Normalized { tokens }
}
