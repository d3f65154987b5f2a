//! Reduces parsed polynomial equations and solves them in closed form when their degree is at
//! most 2.

pub mod fmt;
pub mod reduce;
pub mod solve;

use computor_parser::{Equation, Polynomial};
use tracing::debug;

pub use reduce::{reduce, reduce_equation};
pub use solve::{solve, Solution, Solved, SolveOptions, UnsupportedDegree, MAX_DEGREE};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Everything known about an equation after reducing and attempting to solve it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Resolution {
    /// The reduced form `lhs - rhs`, without trailing zero coefficients.
    pub reduced: Polynomial,

    /// The true degree of the equation.
    pub degree: usize,

    /// The solutions, or the reason the equation could not be solved.
    pub outcome: Result<Solved, UnsupportedDegree>,
}

/// Reduces the given equation and solves it.
pub fn resolve(equation: &Equation, options: SolveOptions) -> Resolution {
    let reduced = reduce_equation(equation);
    let degree = reduced.degree();
    debug!(reduced = ?reduced.coeffs(), degree, "reduced equation");

    let outcome = solve(&reduced, options);
    Resolution { reduced, degree, outcome }
}
