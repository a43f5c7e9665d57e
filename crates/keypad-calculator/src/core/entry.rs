//! The number currently being composed on the keypad

use crate::core::number::Number;
use serde::Serialize;
use std::fmt;

/// Textual entry built one key at a time
///
/// Kept as text so that in-progress forms such as `"3."` or `"007"` survive
/// until the engine needs a value. At most one decimal point is ever stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Entry(String);

impl Entry {
    /// Creates an empty entry
    #[must_use]
    pub const fn new() -> Self {
        Self(String::new())
    }

    /// Creates the entry that holds a computed result
    #[must_use]
    pub fn from_number(number: Number) -> Self {
        Self(number.to_string())
    }

    /// Returns the entry text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if nothing has been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the entry already holds a decimal point
    #[must_use]
    pub fn has_decimal_point(&self) -> bool {
        self.0.contains('.')
    }

    /// Appends a digit or a decimal point
    ///
    /// Returns false without touching the entry when `token` is a second
    /// decimal point or is neither an ASCII digit nor `.`.
    pub fn push(&mut self, token: char) -> bool {
        let accepted = match token {
            '.' => !self.has_decimal_point(),
            c => c.is_ascii_digit(),
        };
        if accepted {
            self.0.push(token);
        }
        accepted
    }

    /// Removes and returns the last character
    pub fn pop(&mut self) -> Option<char> {
        self.0.pop()
    }

    /// Parses the entry into a number, if it holds one
    #[must_use]
    pub fn parse(&self) -> Option<Number> {
        Number::parse_prefix(&self.0)
    }

    /// Empties the entry
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Entry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_of(keys: &str) -> Entry {
        let mut entry = Entry::new();
        for key in keys.chars() {
            entry.push(key);
        }
        entry
    }

    #[test]
    fn test_new_entry_is_empty() {
        let entry = Entry::new();
        assert!(entry.is_empty());
        assert_eq!(entry, Entry::default());
        assert!(entry.parse().is_none());
    }

    #[test]
    fn test_push_digits() {
        assert_eq!(entry_of("1234").as_str(), "1234");
    }

    #[test]
    fn test_push_keeps_leading_zeros() {
        let entry = entry_of("007");
        assert_eq!(entry.as_str(), "007");
        assert_eq!(entry.parse(), Some(Number::new(7.0)));
    }

    #[test]
    fn test_second_decimal_point_is_ignored() {
        let mut entry = entry_of("3.");
        assert!(!entry.push('.'));
        assert_eq!(entry.as_str(), "3.");
        entry.push('5');
        assert!(!entry.push('.'));
        assert_eq!(entry.as_str(), "3.5");
    }

    #[test]
    fn test_push_rejects_other_characters() {
        let mut entry = entry_of("1");
        assert!(!entry.push('+'));
        assert!(!entry.push('a'));
        assert_eq!(entry.as_str(), "1");
    }

    #[test]
    fn test_pop() {
        let mut entry = entry_of("12");
        assert_eq!(entry.pop(), Some('2'));
        assert_eq!(entry.pop(), Some('1'));
        assert_eq!(entry.pop(), None);
        assert!(entry.is_empty());
    }

    #[test]
    fn test_lone_decimal_point_does_not_parse() {
        let entry = entry_of(".");
        assert!(!entry.is_empty());
        assert!(entry.parse().is_none());
    }

    #[test]
    fn test_from_number_uses_shortest_text() {
        assert_eq!(Entry::from_number(Number::new(7.0)).as_str(), "7");
        assert_eq!(Entry::from_number(Number::new(0.5)).as_str(), "0.5");
        assert_eq!(
            Entry::from_number(Number::new(f64::INFINITY)).as_str(),
            "Infinity"
        );
    }

    #[test]
    fn test_computed_entry_can_be_extended() {
        let mut entry = Entry::from_number(Number::new(7.0));
        entry.push('5');
        assert_eq!(entry.parse(), Some(Number::new(75.0)));

        // Already holds a decimal point
        let mut entry = Entry::from_number(Number::new(0.5));
        assert!(!entry.push('.'));
    }

    #[test]
    fn test_clear() {
        let mut entry = entry_of("99");
        entry.clear();
        assert!(entry.is_empty());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&entry_of("3.")).unwrap();
        assert_eq!(json, "\"3.\"");
    }
}
