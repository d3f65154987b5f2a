//! Dense single-variable polynomials.

#[cfg(feature = "serde")]
use serde::Serialize;

/// A polynomial in one variable, stored as a dense list of coefficients indexed by exponent:
/// `coeffs[i]` is the coefficient of `X^i`.
///
/// A polynomial always has at least one coefficient. The zero polynomial is `[0.0]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from the given coefficients, lowest exponent first. An empty list is
    /// treated as the zero polynomial.
    pub fn new(mut coeffs: Vec<f64>) -> Self {
        if coeffs.is_empty() {
            coeffs.push(0.0);
        }
        Self { coeffs }
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::new(vec![0.0])
    }

    /// Creates a polynomial from `(coefficient, exponent)` pairs. Coefficients that share an
    /// exponent are summed.
    ///
    /// The result has at least `min_width` coefficients, and enough to hold the highest exponent.
    pub fn from_terms(terms: impl IntoIterator<Item = (f64, usize)>, min_width: usize) -> Self {
        let mut coeffs = vec![0.0; min_width.max(1)];
        for (coefficient, exponent) in terms {
            if exponent >= coeffs.len() {
                coeffs.resize(exponent + 1, 0.0);
            }
            coeffs[exponent] += coefficient;
        }
        Self { coeffs }
    }

    /// Returns the coefficients, lowest exponent first.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Returns the coefficient of `X^exponent`, which is zero past the end of the list.
    pub fn coeff(&self, exponent: usize) -> f64 {
        self.coeffs.get(exponent).copied().unwrap_or(0.0)
    }

    /// Returns the number of stored coefficients.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Always false: a polynomial holds at least one coefficient.
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the nominal degree, `len - 1`. This is only the true degree once trailing zero
    /// coefficients have been removed with [`Polynomial::trimmed`].
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0.0)
    }

    /// Removes zero coefficients from the high-exponent end, stopping when only one coefficient
    /// is left or the highest one is non-zero.
    pub fn trimmed(mut self) -> Self {
        while self.coeffs.len() > 1 && self.coeffs.last() == Some(&0.0) {
            self.coeffs.pop();
        }
        self
    }

    /// Evaluates the polynomial at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }
}
