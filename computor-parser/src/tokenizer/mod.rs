pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, including
/// whitespace.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            // every character matches `Symbol`, so this only happens on malformed input
            kind: kind.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_term() {
        compare_tokens(
            "5 * X^0",
            [
                (TokenKind::Num, "5"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Mul, "*"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Var, "X"),
                (TokenKind::Exp, "^"),
                (TokenKind::Num, "0"),
            ],
        );
    }

    #[test]
    fn lower_case_variable_and_decimals() {
        compare_tokens(
            "-9.3x^2=.5",
            [
                (TokenKind::Sub, "-"),
                (TokenKind::Num, "9.3"),
                (TokenKind::Var, "x"),
                (TokenKind::Exp, "^"),
                (TokenKind::Num, "2"),
                (TokenKind::Eq, "="),
                (TokenKind::Num, ".5"),
            ],
        );
    }

    #[test]
    fn names_and_symbols() {
        compare_tokens(
            "3 xy $",
            [
                (TokenKind::Num, "3"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "xy"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "$"),
            ],
        );
    }

    #[test]
    fn variable_against_names() {
        compare_tokens(
            "X x xX Xa",
            [
                (TokenKind::Var, "X"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Var, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "xX"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "Xa"),
            ],
        );
    }

    #[test]
    fn repeated_decimal_points() {
        compare_tokens(
            "5.5.5",
            [
                (TokenKind::Num, "5.5"),
                (TokenKind::Num, ".5"),
            ],
        );
    }

    #[test]
    fn complete_keeps_spans() {
        let tokens = tokenize_complete("2 X");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].span, 2..3);
        assert_eq!(tokens[2].text(), "x");
    }
}
