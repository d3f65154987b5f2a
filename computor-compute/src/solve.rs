//! Closed-form solutions of polynomial equations of degree 0, 1, and 2.

use computor_parser::Polynomial;
use std::fmt::{self, Display, Formatter};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The highest degree that can be solved.
pub const MAX_DEGREE: usize = 2;

/// Options for [`solve`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SolveOptions {
    /// A discriminant whose absolute value is at most `epsilon` is treated as zero.
    ///
    /// The default of `0.0` only treats an exactly zero discriminant as zero.
    pub epsilon: f64,
}

/// The set of values of `X` that satisfy an equation `P(X) = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Solution {
    /// Every real number is a solution (`0 = 0`).
    AllReals,

    /// No value is a solution (`c = 0` with `c != 0`).
    NoSolution,

    /// Exactly one real solution.
    OneReal { x: f64 },

    /// Two distinct real solutions. The order of the pair is not meaningful.
    TwoReal { x1: f64, x2: f64 },

    /// Two complex conjugate solutions, `real - i * imaginary` and `real + i * imaginary`.
    /// `imaginary` is always positive.
    TwoComplex { real: f64, imaginary: f64 },
}

/// The result of solving an equation of degree at most 2.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Solved {
    /// The discriminant `b² - 4ac`, for equations of degree 2.
    pub discriminant: Option<f64>,

    /// The solutions.
    pub solution: Solution,
}

/// The equation has a degree higher than [`MAX_DEGREE`]. This is not a failure to read the
/// equation: its reduced form and degree are still known.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct UnsupportedDegree {
    /// The degree of the equation.
    pub degree: usize,
}

impl Display for UnsupportedDegree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot solve an equation of degree {}; the degree must be at most {}",
            self.degree,
            MAX_DEGREE,
        )
    }
}

impl std::error::Error for UnsupportedDegree {}

/// Solves `a*X² + b*X + c = 0`, with `a != 0`.
fn solve_quadratic(a: f64, b: f64, c: f64, options: SolveOptions) -> Solved {
    let discriminant = b * b - 4.0 * a * c;
    debug!(discriminant, "solving quadratic");

    let solution = if discriminant.abs() <= options.epsilon {
        Solution::OneReal { x: -b / (2.0 * a) }
    } else if discriminant > 0.0 {
        let sqrt = discriminant.sqrt();
        Solution::TwoReal {
            x1: (-b - sqrt) / (2.0 * a),
            x2: (-b + sqrt) / (2.0 * a),
        }
    } else {
        Solution::TwoComplex {
            real: -b / (2.0 * a),
            imaginary: ((-discriminant).sqrt() / (2.0 * a)).abs(),
        }
    };

    Solved {
        discriminant: Some(discriminant),
        solution,
    }
}

/// Solves `P(X) = 0` for the given polynomial `P`.
///
/// Trailing zero coefficients are ignored, so the polynomial does not need to be reduced first.
/// Returns [`UnsupportedDegree`] if the degree is higher than [`MAX_DEGREE`].
pub fn solve(poly: &Polynomial, options: SolveOptions) -> Result<Solved, UnsupportedDegree> {
    let poly = poly.clone().trimmed();
    let coeffs = poly.coeffs();

    let solved = match *coeffs {
        [c] => Solved {
            discriminant: None,
            solution: if c == 0.0 { Solution::AllReals } else { Solution::NoSolution },
        },
        // trimming guarantees the highest coefficient is non-zero
        [c, b] => Solved {
            discriminant: None,
            solution: Solution::OneReal { x: -c / b },
        },
        [c, b, a] => solve_quadratic(a, b, c, options),
        _ => return Err(UnsupportedDegree { degree: poly.degree() }),
    };

    debug!(?solved, "solved equation");
    Ok(solved)
}
