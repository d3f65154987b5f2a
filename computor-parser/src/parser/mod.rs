pub mod error;
pub mod normalize;
pub mod term;
pub mod validate;

use crate::{polynomial::Polynomial, tokenizer::TokenKind};
use error::{Error, MalformedEquation};
use normalize::normalize;
use std::ops::Range;
use term::{parse_terms, side_from_terms, width_of, Term};
use tracing::debug;
use validate::validate;

#[cfg(feature = "serde")]
use serde::Serialize;

/// An equation `<polynomial> = <polynomial>`, with both sides parsed into dense polynomials of
/// the same length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Equation {
    /// The left-hand side.
    pub lhs: Polynomial,

    /// The right-hand side.
    pub rhs: Polynomial,

    /// The region of the source code that the left-hand side was parsed from.
    pub lhs_span: Range<usize>,

    /// The region of the source code that the right-hand side was parsed from.
    pub rhs_span: Range<usize>,
}

impl Equation {
    /// Parses an equation from raw input.
    ///
    /// The input is normalized, its exponents are validated, and then both sides are parsed.
    /// Every error found in one stage is returned together; later stages do not run once a stage
    /// has failed.
    pub fn parse(input: &str) -> Result<Self, Vec<Error>> {
        let normalized = normalize(input);
        debug!(%normalized, "normalized equation");

        let tokens = normalized.tokens();
        let eq_signs = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.kind == TokenKind::Eq)
            .map(|(i, _)| i)
            .collect::<Vec<_>>();

        let eq = match eq_signs.as_slice() {
            [eq] => *eq,
            [] => return Err(vec![Error::new(vec![0..input.len()], MalformedEquation { found: 0 })]),
            [_, extra, ..] => return Err(vec![Error::new(
                vec![tokens[*extra].span.clone()],
                MalformedEquation { found: eq_signs.len() },
            )]),
        };

        validate(&normalized)?;

        let (lhs_tokens, rhs_tokens) = (&tokens[..eq], &tokens[eq + 1..]);
        let (lhs_terms, rhs_terms) = match (parse_terms(lhs_tokens), parse_terms(rhs_tokens)) {
            (Ok(lhs), Ok(rhs)) => (lhs, rhs),
            (lhs, rhs) => {
                return Err(lhs.err().into_iter().chain(rhs.err()).flatten().collect());
            },
        };

        let eq_span = tokens[eq].span.clone();
        let side_span = |terms: &[Term]| -> Result<Range<usize>, Error> {
            match (terms.first(), terms.last()) {
                (Some(first), Some(last)) => Ok(first.span.start..last.span.end),
                _ => Err(Error::new(vec![eq_span.clone()], MalformedEquation { found: 1 })),
            }
        };
        let (lhs_span, rhs_span) = match (side_span(&lhs_terms), side_span(&rhs_terms)) {
            (Ok(lhs), Ok(rhs)) => (lhs, rhs),
            (lhs, rhs) => return Err(lhs.err().into_iter().chain(rhs.err()).take(1).collect()),
        };

        let width = width_of(lhs_terms.iter().chain(&rhs_terms));
        let equation = Self {
            lhs: side_from_terms(&lhs_terms, width),
            rhs: side_from_terms(&rhs_terms, width),
            lhs_span,
            rhs_span,
        };
        debug!(lhs = ?equation.lhs.coeffs(), rhs = ?equation.rhs.coeffs(), "parsed equation");
        Ok(equation)
    }
}
