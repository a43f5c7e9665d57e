//! Display formatting for the two calculator lines

use crate::core::number::Number;
use serde::Serialize;

/// Number of significant characters at which the display switches to
/// exponential notation
pub const EXPONENTIAL_THRESHOLD: usize = 10;

/// Fractional digits shown in exponential notation
pub const EXPONENTIAL_DIGITS: usize = 3;

/// The two lines shown by the calculator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayPair {
    /// Pending operand and operator, e.g. `"1,234 +"`, or empty
    pub previous: String,
    /// The entry being composed, or the last result
    pub current: String,
}

impl DisplayPair {
    /// Creates a display pair
    #[must_use]
    pub fn new(previous: impl Into<String>, current: impl Into<String>) -> Self {
        Self {
            previous: previous.into(),
            current: current.into(),
        }
    }
}

/// Formats an entry or operand text for the display
///
/// Long values (ten or more characters once the decimal point is dropped)
/// render in exponential notation with three fractional digits. Everything
/// else gets thousands grouping on the integer part, with the fractional
/// part, including an empty one after a trailing point, copied verbatim.
#[must_use]
pub fn format_for_display(text: &str) -> String {
    let significant = text.replacen('.', "", 1).chars().count();
    if significant >= EXPONENTIAL_THRESHOLD {
        return Number::parse_prefix(text).map_or_else(
            || "NaN".to_string(),
            |n| n.to_exponential(EXPONENTIAL_DIGITS),
        );
    }

    let mut parts = text.split('.');
    let int_text = parts.next().unwrap_or_default();
    let int_display = Number::parse_prefix(int_text)
        .map(Number::to_grouped_integer)
        .unwrap_or_default();

    match parts.next() {
        Some(fraction) => format!("{int_display}.{fraction}"),
        None => int_display,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_entry() {
        assert_eq!(format_for_display(""), "");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_for_display("7"), "7");
        assert_eq!(format_for_display("1234"), "1,234");
        assert_eq!(format_for_display("123456789"), "123,456,789");
    }

    #[test]
    fn test_leading_zeros_collapse() {
        assert_eq!(format_for_display("007"), "7");
    }

    #[test]
    fn test_fraction_is_kept_verbatim() {
        assert_eq!(format_for_display("1234.50"), "1,234.50");
        assert_eq!(format_for_display("0.5"), "0.5");
        assert_eq!(format_for_display("-0.5"), "-0.5");
    }

    #[test]
    fn test_trailing_decimal_point() {
        assert_eq!(format_for_display("3."), "3.");
        assert_eq!(format_for_display("1000."), "1,000.");
    }

    #[test]
    fn test_lone_decimal_point() {
        assert_eq!(format_for_display("."), ".");
    }

    #[test]
    fn test_ten_digits_go_exponential() {
        assert_eq!(format_for_display("1234567890"), "1.235e+9");
        assert_eq!(format_for_display("12345678901"), "1.235e+10");
    }

    #[test]
    fn test_decimal_point_does_not_count() {
        // nine digits plus a point stays grouped
        assert_eq!(format_for_display("12345.6789"), "12,345.6789");
        assert_eq!(format_for_display("12345.67891"), "1.235e+4");
    }

    #[test]
    fn test_long_fraction_result() {
        assert_eq!(format_for_display("0.30000000000000004"), "3.000e-1");
    }

    #[test]
    fn test_infinity() {
        assert_eq!(format_for_display("Infinity"), "∞");
        assert_eq!(format_for_display("-Infinity"), "-∞");
    }

    #[test]
    fn test_short_exponent_text_is_grouped() {
        assert_eq!(
            format_for_display("1e+21"),
            "1,000,000,000,000,000,000,000"
        );
    }

    #[test]
    fn test_not_a_number_renders_empty() {
        assert_eq!(format_for_display("NaN"), "");
    }

    #[test]
    fn test_display_pair_new() {
        let pair = DisplayPair::new("3 +", "4");
        assert_eq!(pair.previous, "3 +");
        assert_eq!(pair.current, "4");
        assert_eq!(DisplayPair::default(), DisplayPair::new("", ""));
    }

    #[test]
    fn test_display_pair_serializes() {
        let json = serde_json::to_value(DisplayPair::new("3 +", "4")).unwrap();
        assert_eq!(json["previous"], "3 +");
        assert_eq!(json["current"], "4");
    }
}
