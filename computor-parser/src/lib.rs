//! Reads single-variable polynomial equations such as `5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0`.
//!
//! The raw text goes through three stages:
//!
//! 1. [`normalize`] turns it into a canonical token stream,
//! 2. [`validate`] rejects exponents that are not whole, non-negative numbers,
//! 3. [`parse_side`] turns each side of the equation into a dense [`Polynomial`].
//!
//! [`Equation::parse`] runs all of them.

pub mod parser;
pub mod polynomial;
pub mod tokenizer;

pub use parser::{
    error::Error,
    normalize::{normalize, Normalized},
    term::{parse_side, parse_terms, Term},
    validate::{validate, MAX_EXPONENT},
    Equation,
};
pub use polynomial::Polynomial;
