use crate::tokenizer::{Token, TokenKind};
use std::ops::Range;
use super::{
    error::{Error, ExponentTooLarge, FractionalExponent, InvalidExponent, NegativeExponent},
    normalize::Normalized,
};

/// The largest exponent accepted in an equation. Polynomials are stored densely, so this bounds
/// the memory used for a single term.
pub const MAX_EXPONENT: usize = 1 << 16;

/// Reads the exponent that follows the `^` token `caret`. `tokens` are the tokens right after the
/// `^`.
///
/// Returns the value of the exponent and the number of tokens it was made of.
pub(crate) fn read_exponent(caret: &Token, tokens: &[Token]) -> Result<(usize, usize), Error> {
    let (negative, number) = match tokens {
        [sign, number, ..] if sign.kind == TokenKind::Sub && number.kind == TokenKind::Num => (true, number),
        [number, ..] if number.kind == TokenKind::Num => (false, number),
        _ => {
            let end = tokens.first().map_or(caret.span.end, |token| token.span.end);
            return Err(Error::new(vec![caret.span.start..end], InvalidExponent));
        },
    };

    let consumed = if negative { 2 } else { 1 };
    let span: Range<usize> = tokens[0].span.start..number.span.end;
    let text = format!("{}{}", if negative { "-" } else { "" }, number.lexeme);

    let value = match number.lexeme.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => return Err(Error::new(vec![caret.span.start..span.end], InvalidExponent)),
    };

    if value.fract() != 0.0 {
        Err(Error::new(vec![span], FractionalExponent { exponent: text }))
    } else if negative && value != 0.0 {
        Err(Error::new(vec![span], NegativeExponent { exponent: text }))
    } else if value > MAX_EXPONENT as f64 {
        Err(Error::new(vec![span], ExponentTooLarge { exponent: text, max: MAX_EXPONENT }))
    } else {
        Ok((value as usize, consumed))
    }
}

/// Checks every `X^<exponent>` in the normalized equation, reporting each exponent that is not a
/// whole, non-negative number.
pub fn validate(normalized: &Normalized) -> Result<(), Vec<Error>> {
    let tokens = normalized.tokens();
    let errors = tokens
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0].kind == TokenKind::Var && pair[1].kind == TokenKind::Exp)
        .filter_map(|(i, pair)| read_exponent(&pair[1], &tokens[i + 2..]).err())
        .collect::<Vec<_>>();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{error::*, normalize::normalize};
    use super::*;

    fn validate_str(input: &str) -> Result<(), Vec<Error>> {
        validate(&normalize(input))
    }

    #[test]
    fn whole_exponents() {
        assert!(validate_str("5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0").is_ok());
        assert!(validate_str("X^2.0 = X^-0").is_ok());
    }

    #[test]
    fn fractional_exponent() {
        let errs = validate_str("X^2.5 = 0").unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(
            errs[0].downcast_ref::<FractionalExponent>(),
            Some(&FractionalExponent { exponent: "2.5".to_string() }),
        );
        assert_eq!(errs[0].spans, vec![2..5]);
    }

    #[test]
    fn negative_exponent() {
        let errs = validate_str("3 * X^-2 = 0").unwrap_err();
        assert_eq!(
            errs[0].downcast_ref::<NegativeExponent>(),
            Some(&NegativeExponent { exponent: "-2".to_string() }),
        );
        assert_eq!(errs[0].spans, vec![6..8]);
    }

    #[test]
    fn negative_fraction_is_fractional() {
        let errs = validate_str("X^-1.5 = 0").unwrap_err();
        assert!(errs[0].is::<FractionalExponent>());
    }

    #[test]
    fn missing_exponent() {
        assert!(validate_str("X^ = 0").unwrap_err()[0].is::<InvalidExponent>());
        assert!(validate_str("X^y = 0").unwrap_err()[0].is::<InvalidExponent>());
        assert!(validate_str("1 = X^").unwrap_err()[0].is::<InvalidExponent>());
    }

    #[test]
    fn huge_exponent() {
        let errs = validate_str("X^99999999 = 0").unwrap_err();
        assert!(errs[0].is::<ExponentTooLarge>());
    }

    #[test]
    fn overflowing_exponent() {
        let input = format!("X^{} = 0", "9".repeat(400));
        let errs = validate_str(&input).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert!(errs[0].is::<InvalidExponent>());
        assert_eq!(errs[0].spans, vec![1..402]);
    }

    #[test]
    fn every_bad_exponent_is_reported() {
        let errs = validate_str("X^0.5 + X^-1 = X^").unwrap_err();
        assert_eq!(errs.len(), 3);
        assert!(errs[0].is::<FractionalExponent>());
        assert!(errs[1].is::<NegativeExponent>());
        assert!(errs[2].is::<InvalidExponent>());
    }
}
