//! Result formatting.

/// Most fractional digits a result is ever shown with.
pub const MAX_FRACTION_DIGITS: usize = 5;

/// Format a reduction result as a numeral token.
///
/// Fixed-point with up to `max_fraction_digits` fractional digits (capped
/// at [`MAX_FRACTION_DIGITS`]), trailing zeros trimmed, `.` as decimal
/// separator and no grouping separator.
pub fn format_result(value: f64, max_fraction_digits: usize) -> String {
    let digits = max_fraction_digits.min(MAX_FRACTION_DIGITS);
    let formatted = format!("{value:.digits$}");

    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    // Rounding can leave a signed zero behind ("-0" from -0.000001).
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_result(6.0, 5), "6");
        assert_eq!(format_result(-3.0, 5), "-3");
        assert_eq!(format_result(1_000_000.0, 5), "1000000");
        assert_eq!(format_result(0.0, 5), "0");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_result(0.25, 5), "0.25");
        assert_eq!(format_result(1.0 / 3.0, 5), "0.33333");
        assert_eq!(format_result(2.0 / 3.0, 5), "0.66667");
        assert_eq!(format_result(0.1 + 0.2, 5), "0.3");
    }

    #[test]
    fn test_precision() {
        assert_eq!(format_result(1.0 / 3.0, 2), "0.33");
        assert_eq!(format_result(2.4, 0), "2");
        assert_eq!(format_result(1.0 / 3.0, 12), "0.33333");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_result(-0.0, 5), "0");
        assert_eq!(format_result(-0.000001, 5), "0");
    }
}
