use crate::{polynomial::Polynomial, tokenizer::{Token, TokenKind}};
use std::ops::Range;
use super::{
    error::{Error, InvalidCoefficient, UnexpectedToken, UnknownVariable},
    validate::read_exponent,
};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A single term of a polynomial, such as `-4.2 * X^2`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Term {
    /// The signed coefficient of the term.
    pub coefficient: f64,

    /// The exponent of the variable. Constant terms have exponent `0`.
    pub exponent: usize,

    /// The region of the source code that this term was parsed from.
    pub span: Range<usize>,
}

/// Returns the span covering all the given tokens.
fn span_of(tokens: &[Token]) -> Range<usize> {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => first.span.start..last.span.end,
        _ => 0..0,
    }
}

/// Builds the error for a token that cannot appear where it was found.
fn unexpected(token: &Token) -> Error {
    if token.kind == TokenKind::Name {
        Error::new(vec![token.span.clone()], UnknownVariable { name: token.lexeme.to_string() })
    } else {
        Error::new(vec![token.span.clone()], UnexpectedToken { found: token.kind })
    }
}

impl Term {
    /// Parses a term from the tokens between two `+` separators. Returns [`None`] if there are no
    /// tokens.
    pub fn parse(tokens: &[Token]) -> Result<Option<Self>, Error> {
        if tokens.is_empty() {
            return Ok(None);
        }

        let (sign, rest) = match tokens.split_first() {
            Some((first, rest)) if first.kind == TokenKind::Sub => (-1.0, rest),
            _ => (1.0, tokens),
        };

        let var = rest.iter().position(|token| token.kind == TokenKind::Var);
        let (coeff_tokens, exponent) = match var {
            Some(i) => {
                let exponent = match rest[i + 1..].split_first() {
                    None => 1,
                    Some((caret, exp_tokens)) if caret.kind == TokenKind::Exp => {
                        let (exponent, consumed) = read_exponent(caret, exp_tokens)?;
                        if let Some(extra) = exp_tokens.get(consumed) {
                            return Err(unexpected(extra));
                        }
                        exponent
                    },
                    Some((other, _)) => return Err(unexpected(other)),
                };
                (&rest[..i], exponent)
            },
            None => (rest, 0),
        };

        let magnitude = match coeff_tokens {
            [] if var.is_some() => 1.0,
            [number] if number.kind == TokenKind::Num => match number.lexeme.parse::<f64>() {
                // numerals too long for an `f64` parse as infinity
                Ok(value) if value.is_finite() => value,
                _ => return Err(Error::new(vec![number.span.clone()], InvalidCoefficient {
                    found: number.lexeme.to_string(),
                })),
            },
            _ => {
                if let Some(name) = coeff_tokens.iter().find(|token| token.kind == TokenKind::Name) {
                    return Err(unexpected(name));
                }

                // a lone `-` has no coefficient tokens at all; point at the whole term instead
                let culprit = if coeff_tokens.is_empty() { tokens } else { coeff_tokens };
                return Err(Error::new(vec![span_of(culprit)], InvalidCoefficient {
                    found: culprit.iter().map(Token::text).collect::<Vec<_>>().join(" "),
                }));
            },
        };

        Ok(Some(Self {
            coefficient: sign * magnitude,
            exponent,
            span: span_of(tokens),
        }))
    }
}

/// Parses the terms of one side of a normalized equation. Empty terms, such as the one before
/// the `+` that precedes a leading `-`, are skipped.
///
/// Every invalid term is reported.
pub fn parse_terms(tokens: &[Token]) -> Result<Vec<Term>, Vec<Error>> {
    let mut terms = Vec::new();
    let mut errors = Vec::new();

    for group in tokens.split(|token| token.kind == TokenKind::Add) {
        match Term::parse(group) {
            Ok(Some(term)) => terms.push(term),
            Ok(None) => (),
            Err(err) => errors.push(err),
        }
    }

    if errors.is_empty() {
        Ok(terms)
    } else {
        Err(errors)
    }
}

/// Returns the number of coefficients needed to hold every given term.
pub(crate) fn width_of<'a>(terms: impl IntoIterator<Item = &'a Term>) -> usize {
    terms.into_iter().map(|term| term.exponent + 1).max().unwrap_or(1)
}

/// Builds a dense polynomial from already parsed terms, with at least `min_width` coefficients.
pub(crate) fn side_from_terms(terms: &[Term], min_width: usize) -> Polynomial {
    Polynomial::from_terms(
        terms.iter().map(|term| (term.coefficient, term.exponent)),
        min_width,
    )
}

/// Parses one side of a normalized equation into a dense polynomial, with at least `min_width`
/// coefficients. Terms with the same exponent are summed.
pub fn parse_side(tokens: &[Token], min_width: usize) -> Result<Polynomial, Vec<Error>> {
    Ok(side_from_terms(&parse_terms(tokens)?, min_width))
}
