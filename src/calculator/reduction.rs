//! Left-to-right, precedence-aware reduction of a flat token list.
//!
//! No tree is built. Each step scans from the left, skipping `+`/`-` while
//! a `*` or `/` remains anywhere in the list, and collapses the first
//! eligible `a op b` window into a single numeral. Once no priority
//! operator is left, the remaining `+`/`-` collapse strictly left to right.

use super::error::CalcError;
use super::expression::has_priority_operator;
use super::format::format_result;
use super::token::Token;

/// Collapse one `a op b` window in place.
///
/// Returns the unformatted value of the collapsed window. On error the
/// token list is left untouched.
pub fn collapse_once(
    tokens: &mut Vec<Token>,
    max_fraction_digits: usize,
) -> Result<f64, CalcError> {
    let has_priority = has_priority_operator(tokens);
    let mut cursor = 0;

    let op = loop {
        let op = match tokens.get(cursor + 1) {
            Some(Token::Operator(op)) => *op,
            Some(Token::Numeral(text)) => {
                tracing::error!(
                    token = %text,
                    position = cursor + 1,
                    "numeral found in operator position"
                );
                return Err(CalcError::UnknownOperator);
            }
            None => return Err(CalcError::MissingElement),
        };

        if op.is_priority() || !has_priority {
            break op;
        }
        cursor += 2;
    };

    let left = match tokens.get(cursor) {
        Some(Token::Numeral(text)) => parse_numeral(text).ok_or(CalcError::LeftOperandInvalid)?,
        _ => return Err(CalcError::LeftOperandInvalid),
    };
    let right = match tokens.get(cursor + 2) {
        Some(Token::Numeral(text)) => parse_numeral(text).ok_or(CalcError::RightOperandInvalid)?,
        Some(Token::Operator(_)) => return Err(CalcError::RightOperandInvalid),
        None => return Err(CalcError::MissingElement),
    };

    let value = op.apply(left, right).ok_or(CalcError::DivisionByZero)?;
    let numeral = format_result(value, max_fraction_digits);
    tracing::trace!(%left, %op, %right, result = %numeral, "collapsed window");

    tokens[cursor] = Token::Numeral(numeral);
    tokens.remove(cursor + 1);
    tokens.remove(cursor + 1);
    Ok(value)
}

/// Parse a numeral token, accepting only plain decimal text.
///
/// `f64::from_str` also takes `inf`, `NaN` and exponents; none of those can
/// be typed on a keypad.
pub fn parse_numeral(text: &str) -> Option<f64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let plain = !digits.is_empty()
        && digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1;

    if !plain {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Expression;

    fn tokens(text: &str) -> Vec<Token> {
        text.parse::<Expression>().unwrap().tokens().to_vec()
    }

    fn render(tokens: &[Token]) -> String {
        Expression::from_tokens(tokens.to_vec()).to_string()
    }

    #[test]
    fn test_simple_addition() {
        let mut t = tokens("4 + 2");
        assert_eq!(collapse_once(&mut t, 5), Ok(6.0));
        assert_eq!(render(&t), "6");
    }

    #[test]
    fn test_priority_first() {
        let mut t = tokens("4 + 2 * 3");
        collapse_once(&mut t, 5).unwrap();
        assert_eq!(render(&t), "4 + 6");
        collapse_once(&mut t, 5).unwrap();
        assert_eq!(render(&t), "10");
    }

    #[test]
    fn test_priority_operators_left_to_right() {
        let mut t = tokens("1 + 8 / 4 * 3 - 2");
        collapse_once(&mut t, 5).unwrap();
        assert_eq!(render(&t), "1 + 2 * 3 - 2");
        collapse_once(&mut t, 5).unwrap();
        assert_eq!(render(&t), "1 + 6 - 2");
        collapse_once(&mut t, 5).unwrap();
        assert_eq!(render(&t), "7 - 2");
    }

    #[test]
    fn test_subtraction_left_to_right() {
        let mut t = tokens("10 - 4 - 3");
        collapse_once(&mut t, 5).unwrap();
        assert_eq!(render(&t), "6 - 3");
    }

    #[test]
    fn test_division_by_zero_leaves_tokens() {
        let mut t = tokens("1 + 4 / 0");
        assert_eq!(collapse_once(&mut t, 5), Err(CalcError::DivisionByZero));
        assert_eq!(render(&t), "1 + 4 / 0");
    }

    #[test]
    fn test_invalid_operands() {
        let mut t = tokens("abc + 2");
        assert_eq!(collapse_once(&mut t, 5), Err(CalcError::LeftOperandInvalid));

        let mut t = tokens("2 * 1.2.3");
        assert_eq!(collapse_once(&mut t, 5), Err(CalcError::RightOperandInvalid));

        let mut t = tokens("2 + +");
        assert_eq!(collapse_once(&mut t, 5), Err(CalcError::RightOperandInvalid));
    }

    #[test]
    fn test_numeral_in_operator_position() {
        let mut t = tokens("4 4 + 2");
        assert_eq!(collapse_once(&mut t, 5), Err(CalcError::UnknownOperator));
    }

    #[test]
    fn test_missing_right_operand() {
        let mut t = tokens("4 +");
        assert_eq!(collapse_once(&mut t, 5), Err(CalcError::MissingElement));
    }

    #[test]
    fn test_parse_numeral() {
        assert_eq!(parse_numeral("12"), Some(12.0));
        assert_eq!(parse_numeral("0."), Some(0.0));
        assert_eq!(parse_numeral("-3.5"), Some(-3.5));
        assert_eq!(parse_numeral("inf"), None);
        assert_eq!(parse_numeral("NaN"), None);
        assert_eq!(parse_numeral("1e5"), None);
        assert_eq!(parse_numeral("."), None);
        assert_eq!(parse_numeral("3..4"), None);
        assert_eq!(parse_numeral(""), None);
    }
}
