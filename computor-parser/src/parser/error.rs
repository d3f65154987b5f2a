//! The kinds of errors that can occur while reading an equation.

use ariadne::Fmt;
use computor_attrs::ErrorKind;
use computor_error::HIGHLIGHT;
use crate::tokenizer::TokenKind;

pub use computor_error::Error;

/// The input is not of the form `<polynomial> = <polynomial>`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "malformed equation",
    labels = [match self.found {
        0 => "I could not find an `=` sign in this equation".to_string(),
        1 => "I expected to see a polynomial here".to_string(),
        n => format!("this is one of {} `=` signs", n),
    }],
    help = format!("write the equation as {}", "<polynomial> = <polynomial>".fg(HIGHLIGHT)),
)]
pub struct MalformedEquation {
    /// The number of `=` signs found in the equation.
    pub found: usize,
}

/// An exponent that is not a decimal number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid exponent",
    labels = ["I expected a whole number after this `^`"],
    help = format!("exponents look like {}", "X^2".fg(HIGHLIGHT)),
)]
pub struct InvalidExponent;

/// An exponent with a fractional part.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid float exponent `{}`", self.exponent),
    labels = ["this exponent has a fractional part"],
    help = "only whole exponents are supported",
)]
pub struct FractionalExponent {
    /// The exponent as written.
    pub exponent: String,
}

/// A negative exponent.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid exponent `{}`", self.exponent),
    labels = ["this exponent is negative"],
    help = "only non-negative exponents are supported",
)]
pub struct NegativeExponent {
    /// The exponent as written.
    pub exponent: String,
}

/// An exponent too large to be represented.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("exponent `{}` is too large", self.exponent),
    labels = [format!("exponents can be at most {}", self.max)],
)]
pub struct ExponentTooLarge {
    /// The exponent as written.
    pub exponent: String,

    /// The largest supported exponent.
    pub max: usize,
}

/// A term whose coefficient is not a single number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid coefficient",
    labels = [format!("I could not read `{}` as a number", self.found)],
    help = format!("terms look like {}, {} or {}", "4.2 * X^2".fg(HIGHLIGHT), "-X".fg(HIGHLIGHT), "7".fg(HIGHLIGHT)),
)]
pub struct InvalidCoefficient {
    /// The text that was found in place of the coefficient.
    pub found: String,
}

/// A variable other than `X`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown variable `{}`", self.name),
    labels = ["this is not `X`"],
    help = "equations can only use the single variable `X`",
)]
pub struct UnknownVariable {
    /// The name that was found.
    pub name: String,
}

/// A token in a position where it cannot appear.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("I did not expect {:?} here", self.found)],
    help = "each term is a number, optionally followed by `X` and an exponent",
)]
pub struct UnexpectedToken {
    /// The token that was found.
    pub found: TokenKind,
}
