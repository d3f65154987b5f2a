use computor_parser::{Equation, Polynomial};

/// Moves every term of `rhs` to the left-hand side, returning the polynomial `lhs - rhs` with
/// its trailing zero coefficients removed.
///
/// The degree of the result is the true degree of the equation, which can be lower than the
/// degree either side was written with when the leading terms cancel out.
pub fn reduce(lhs: &Polynomial, rhs: &Polynomial) -> Polynomial {
    let len = lhs.len().max(rhs.len());
    let coeffs = (0..len)
        .map(|i| lhs.coeff(i) - rhs.coeff(i))
        .collect();
    Polynomial::new(coeffs).trimmed()
}

/// Reduces both sides of the given equation into a single polynomial.
pub fn reduce_equation(equation: &Equation) -> Polynomial {
    reduce(&equation.lhs, &equation.rhs)
}
