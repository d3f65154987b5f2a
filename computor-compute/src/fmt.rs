//! Formatting of numbers and reduced polynomials for display.

use computor_parser::Polynomial;
use std::fmt::{self, Display, Formatter, Write};

/// The number of decimal places used for solutions and discriminants.
pub const SOLUTION_PRECISION: usize = 6;

/// The number of decimal places used for the coefficients of a reduced form. This only affects
/// display; solving always uses the exact coefficients.
pub const COEFFICIENT_PRECISION: usize = 2;

/// Trims trailing zeros, and then a trailing decimal point, from a number in decimal notation.
fn trim_trailing(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Writes a number the way results are displayed: integral values without a fractional part,
/// other values rounded to `precision` decimal places with trailing zeros removed.
pub fn fmt_number<F: Write>(f: &mut F, n: f64, precision: usize) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    } else if n.is_infinite() {
        return write!(f, "{}∞", if n.is_sign_negative() { "-" } else { "" });
    } else if n == 0.0 {
        // includes -0
        return f.write_str("0");
    } else if n.fract() == 0.0 {
        return write!(f, "{}", n);
    }

    let rounded = format!("{:.*}", precision, n);
    match trim_trailing(&rounded) {
        // small negative values can round to zero
        "-0" => f.write_str("0"),
        s => f.write_str(s),
    }
}

/// A number paired with the precision it should be displayed with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    pub value: f64,
    pub precision: usize,
}

impl Number {
    /// A number displayed with [`SOLUTION_PRECISION`].
    pub fn solution(value: f64) -> Self {
        Self { value, precision: SOLUTION_PRECISION }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt_number(f, self.value, self.precision)
    }
}

/// The order in which the terms of a reduced form are written.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Order {
    /// Highest exponent first: `c_n * X^n + ... + c_0 * X^0 = 0`.
    ///
    /// This is the default option.
    #[default]
    Descending,

    /// Lowest exponent first: `c_0 * X^0 + ... + c_n * X^n = 0`.
    Ascending,
}

/// Formatting options for reduced forms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatOptions {
    /// The order of the terms.
    pub order: Order,

    /// The number of decimal places of each coefficient.
    pub precision: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            order: Order::default(),
            precision: COEFFICIENT_PRECISION,
        }
    }
}

/// Displays a polynomial as the equation `P(X) = 0`, such as `-9.3 * X^2 + 4 * X^1 + 4 * X^0 = 0`.
///
/// Every term is written, including those with a zero coefficient. The first term carries its
/// sign directly (`-4`), while later terms are joined with ` + ` or ` - `.
#[derive(Debug, Clone, Copy)]
pub struct ReducedForm<'a> {
    pub poly: &'a Polynomial,
    pub options: FormatOptions,
}

impl<'a> ReducedForm<'a> {
    pub fn new(poly: &'a Polynomial, options: FormatOptions) -> Self {
        Self { poly, options }
    }
}

impl Display for ReducedForm<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let terms = self.poly.coeffs().iter().copied().enumerate();
        let terms: Box<dyn Iterator<Item = (usize, f64)>> = match self.options.order {
            Order::Descending => Box::new(terms.rev()),
            Order::Ascending => Box::new(terms),
        };

        for (i, (exponent, coeff)) in terms.enumerate() {
            let magnitude = Number { value: coeff.abs(), precision: self.options.precision }.to_string();
            let negative = coeff < 0.0 && magnitude != "0";

            match (i, negative) {
                (0, true) => write!(f, "-{}", magnitude)?,
                (0, false) => write!(f, "{}", magnitude)?,
                (_, true) => write!(f, " - {}", magnitude)?,
                (_, false) => write!(f, " + {}", magnitude)?,
            }
            write!(f, " * X^{}", exponent)?;
        }

        f.write_str(" = 0")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn fmt(n: f64, precision: usize) -> String {
        Number { value: n, precision }.to_string()
    }

    fn reduced(coeffs: &[f64], order: Order) -> String {
        let poly = Polynomial::new(coeffs.to_vec());
        ReducedForm::new(&poly, FormatOptions { order, ..Default::default() }).to_string()
    }

    #[test]
    fn integral_values() {
        assert_eq!(fmt(5.0, 6), "5");
        assert_eq!(fmt(-4.0, 6), "-4");
        assert_eq!(fmt(-0.0, 6), "0");
        assert_eq!(fmt(1e20, 6), "100000000000000000000");
    }

    #[test]
    fn rounded_values() {
        assert_eq!(fmt(1.0 / 7.0, 6), "0.142857");
        assert_eq!(fmt(-0.25, 6), "-0.25");
        assert_eq!(fmt(2.0 / 3.0, 2), "0.67");
        assert_eq!(fmt(9.3, 2), "9.3");
        assert_eq!(fmt(-1e-9, 6), "0");
        assert_eq!(fmt(0.9999999, 6), "1");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(fmt(f64::NAN, 6), "NaN");
        assert_eq!(fmt(f64::INFINITY, 6), "∞");
        assert_eq!(fmt(f64::NEG_INFINITY, 6), "-∞");
    }

    #[test]
    fn descending_reduced_form() {
        assert_eq!(
            reduced(&[4.0, 4.0, -9.3], Order::Descending),
            "-9.3 * X^2 + 4 * X^1 + 4 * X^0 = 0",
        );
    }

    #[test]
    fn ascending_reduced_form() {
        assert_eq!(
            reduced(&[4.0, 4.0, -9.3], Order::Ascending),
            "4 * X^0 + 4 * X^1 - 9.3 * X^2 = 0",
        );
    }

    #[test]
    fn zero_coefficients_are_written() {
        assert_eq!(
            reduced(&[5.0, -6.0, 0.0, -5.6], Order::Ascending),
            "5 * X^0 - 6 * X^1 + 0 * X^2 - 5.6 * X^3 = 0",
        );
        assert_eq!(reduced(&[0.0], Order::Descending), "0 * X^0 = 0");
        assert_eq!(reduced(&[-4.0], Order::Descending), "-4 * X^0 = 0");
    }

    #[test]
    fn tiny_negative_coefficient_has_no_sign() {
        assert_eq!(reduced(&[1.0, -0.001], Order::Descending), "0 * X^1 + 1 * X^0 = 0");
    }
}
