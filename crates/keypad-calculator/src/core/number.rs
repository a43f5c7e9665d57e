//! Numeric text conversions
//!
//! The engine keeps its operands as text and only turns them into numbers
//! when it has to compute. Every conversion between the two worlds lives
//! here so the rules stay in one place:
//!
//! - parsing reads the longest numeric prefix of a string
//! - printing uses the shortest text that round-trips
//! - display helpers produce exponential and thousands-grouped forms

use serde::Serialize;
use std::fmt;

/// Decimal exponent at which plain notation switches to exponential
const PLAIN_EXPONENT_MAX: i32 = 21;

/// Decimal exponent below which small values switch to exponential
const PLAIN_EXPONENT_MIN: i32 = -6;

/// A numeric value produced by parsing an entry or by arithmetic
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Number(f64);

impl Number {
    /// Wraps a raw floating-point value
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw floating-point value
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Parses the longest numeric prefix of `text`
    ///
    /// Leading whitespace is skipped and trailing characters that cannot
    /// continue a number are ignored, so `"3."` parses as 3 and `"12abc"`
    /// as 12. Returns `None` when no digits (or `Infinity`) start the text.
    #[must_use]
    pub fn parse_prefix(text: &str) -> Option<Self> {
        let text = text.trim_start();
        let len = numeric_prefix_len(text)?;
        text[..len].parse::<f64>().ok().map(Self)
    }

    /// Returns true if the value is positive or negative infinity
    #[must_use]
    pub fn is_infinite(self) -> bool {
        self.0.is_infinite()
    }

    /// Returns true if the value is NaN
    #[must_use]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Renders `d.ddde±x` with exactly `fraction_digits` digits after the point
    #[must_use]
    pub fn to_exponential(self, fraction_digits: usize) -> String {
        if let Some(special) = self.special_text() {
            return special.to_string();
        }
        // -0 has no sign in exponential form
        let sign = if self.0 < 0.0 { "-" } else { "" };
        let mut magnitude = self.0.abs();
        // ties round away from zero; `{:e}` alone would round them to even
        if is_rounding_tie(magnitude, fraction_digits) {
            magnitude = f64::from_bits(magnitude.to_bits() + 1);
        }

        let formatted = format!("{magnitude:.fraction_digits$e}");
        let (mantissa, exponent) = formatted.split_once('e').unwrap_or((&formatted, "0"));
        let exponent_sign = if exponent.starts_with('-') { "" } else { "+" };
        format!("{sign}{mantissa}e{exponent_sign}{exponent}")
    }

    /// Rounds to an integer and renders it with `,` thousands grouping
    ///
    /// Halves round away from zero. Infinities render as `∞` and keep their
    /// sign, and a negative value that rounds to zero renders as `-0`.
    #[must_use]
    pub fn to_grouped_integer(self) -> String {
        if self.0.is_nan() {
            return "NaN".to_string();
        }
        let sign = if self.0.is_sign_negative() { "-" } else { "" };
        if self.0.is_infinite() {
            return format!("{sign}∞");
        }
        let digits = format!("{:.0}", self.0.round().abs());
        format!("{sign}{}", group_thousands(&digits))
    }

    fn special_text(self) -> Option<&'static str> {
        if self.0.is_nan() {
            Some("NaN")
        } else if self.0 == f64::INFINITY {
            Some("Infinity")
        } else if self.0 == f64::NEG_INFINITY {
            Some("-Infinity")
        } else {
            None
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(special) = self.special_text() {
            return f.write_str(special);
        }
        if self.0 == 0.0 {
            return f.write_str("0");
        }

        // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3"
        let scientific = format!("{:e}", self.0.abs());
        let (mantissa, exponent) = scientific
            .split_once('e')
            .ok_or(fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
        let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

        if self.0.is_sign_negative() {
            f.write_str("-")?;
        }
        f.write_str(&place_decimal_point(&digits, exponent + 1))
    }
}

/// Positions the decimal point for a digit string whose point sits after
/// `point` digits, switching to exponential form outside the plain range.
fn place_decimal_point(digits: &str, point: i32) -> String {
    let count = digits.len() as i32;

    if count <= point && point <= PLAIN_EXPONENT_MAX {
        format!("{digits}{}", "0".repeat((point - count) as usize))
    } else if 0 < point && point <= PLAIN_EXPONENT_MAX {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{int_part}.{frac_part}")
    } else if PLAIN_EXPONENT_MIN < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let exponent = point - 1;
        let sign = if exponent < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{}", exponent.abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", exponent.abs())
        }
    }
}

/// Length in bytes of the numeric prefix of `text`, if there is one
fn numeric_prefix_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }
    if text[pos..].starts_with("Infinity") {
        return Some(pos + "Infinity".len());
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;
    let mut mantissa_digits = int_digits;

    if bytes.get(pos) == Some(&b'.') {
        let frac_digits = count_digits(&bytes[pos + 1..]);
        mantissa_digits += frac_digits;
        if mantissa_digits > 0 {
            pos += 1 + frac_digits;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(&bytes[exp_pos..]);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    Some(pos)
}

/// Significant decimal digits in the longest exact expansion of an f64
const MAX_EXACT_DIGITS: usize = 767;

/// True if `magnitude` sits exactly halfway between two values with
/// `fraction_digits` digits after the point in exponential form.
///
/// Works on the exact decimal expansion of `magnitude`, so a value just off
/// the halfway point never counts as a tie.
fn is_rounding_tie(magnitude: f64, fraction_digits: usize) -> bool {
    let expanded = format!(
        "{magnitude:.precision$e}",
        precision = fraction_digits.max(MAX_EXACT_DIGITS)
    );
    let digits: Vec<u8> = expanded
        .bytes()
        .take_while(|b| *b != b'e')
        .filter(u8::is_ascii_digit)
        .collect();
    match digits.get(fraction_digits + 1..) {
        Some([b'5', rest @ ..]) => rest.iter().all(|d| *d == b'0'),
        _ => false,
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Inserts `,` between every group of three digits, counting from the right
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
