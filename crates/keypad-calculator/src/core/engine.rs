//! Calculator state machine
//!
//! Tracks the entry being typed plus an optional pending operation, and
//! turns button presses into state transitions. Out-of-sequence input never
//! fails: it is ignored and logged at trace level.

use crate::core::display::{format_for_display, DisplayPair};
use crate::core::entry::Entry;
use crate::core::number::Number;
use crate::core::operations::{Operator, OperatorKey};
use serde::Serialize;
use tracing::{debug, trace};

/// A left operand captured together with the operator that will consume it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingOperation {
    /// Operand captured when the operator was pressed
    pub operand: Entry,
    /// Operator awaiting a right operand
    pub operator: Operator,
}

/// Four-function calculator engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalculatorEngine {
    entry: Entry,
    pending: Option<PendingOperation>,
}

impl CalculatorEngine {
    /// Creates an engine with an empty entry and nothing pending
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entry: Entry::new(),
            pending: None,
        }
    }

    /// Returns the current entry
    #[must_use]
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Returns the pending operation, if any
    #[must_use]
    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// Resets to the freshly constructed state
    pub fn clear_all(&mut self) {
        debug!("clear all");
        self.entry.clear();
        self.pending = None;
    }

    /// Removes the last character of the entry
    pub fn delete_last_char(&mut self) {
        match self.entry.pop() {
            Some(removed) => trace!(%removed, entry = %self.entry, "deleted last character"),
            None => trace!("delete ignored: entry is empty"),
        }
    }

    /// Appends a digit or decimal point to the entry
    ///
    /// A second decimal point is ignored, as is anything that is not an
    /// ASCII digit or `.`.
    pub fn append_digit_or_dot(&mut self, token: char) {
        if self.entry.push(token) {
            trace!(%token, entry = %self.entry, "appended");
        } else {
            trace!(%token, entry = %self.entry, "append ignored");
        }
    }

    /// Applies an operator key
    ///
    /// Percent divides the entry by 100 in place. A binary operator first
    /// evaluates any pending operation (so `3 + 4 +` shows 7), then moves the
    /// entry into a new pending operation. Does nothing on an empty entry.
    pub fn apply_operator(&mut self, key: OperatorKey) {
        if self.entry.is_empty() {
            trace!(%key, "operator ignored: entry is empty");
            return;
        }

        match key {
            OperatorKey::Percent => self.apply_percent(),
            OperatorKey::Binary(operator) => {
                if self.pending.is_some() {
                    self.compute();
                }
                let operand = std::mem::take(&mut self.entry);
                debug!(%operator, %operand, "operation pending");
                self.pending = Some(PendingOperation { operand, operator });
            }
        }
    }

    fn apply_percent(&mut self) {
        let Some(value) = self.entry.parse() else {
            trace!(entry = %self.entry, "percent ignored: entry is not a number");
            return;
        };
        let result = Number::new(value.value() / 100.0);
        debug!(%value, %result, "percent");
        self.entry = Entry::from_number(result);
    }

    /// Evaluates the pending operation against the entry
    ///
    /// Returns the result, which also becomes the new entry. Returns `None`
    /// and leaves the state untouched when nothing is pending or either
    /// operand does not parse.
    pub fn compute(&mut self) -> Option<Number> {
        let Some(pending) = &self.pending else {
            trace!("compute ignored: no pending operation");
            return None;
        };
        let (Some(lhs), Some(rhs)) = (pending.operand.parse(), self.entry.parse()) else {
            trace!(
                operand = %pending.operand,
                entry = %self.entry,
                "compute ignored: incomplete expression"
            );
            return None;
        };

        let result = pending.operator.apply(lhs, rhs);
        debug!(%lhs, operator = %pending.operator, %rhs, %result, "computed");
        self.entry = Entry::from_number(result);
        self.pending = None;
        Some(result)
    }

    /// Renders the previous and current display lines
    #[must_use]
    pub fn render_display(&self) -> DisplayPair {
        let previous = self.pending.as_ref().map_or_else(String::new, |pending| {
            format!(
                "{} {}",
                format_for_display(pending.operand.as_str()),
                pending.operator.symbol()
            )
        });
        DisplayPair {
            previous,
            current: format_for_display(self.entry.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_keys(engine: &mut CalculatorEngine, keys: &str) {
        for key in keys.chars() {
            engine.append_digit_or_dot(key);
        }
    }

    fn op(symbol: &str) -> OperatorKey {
        symbol.parse().unwrap()
    }

    // ===== Construction and clearing =====

    #[test]
    fn test_new_engine_is_empty() {
        let engine = CalculatorEngine::new();
        assert!(engine.entry().is_empty());
        assert!(engine.pending().is_none());
        assert_eq!(engine.render_display(), DisplayPair::default());
        assert_eq!(engine, CalculatorEngine::default());
    }

    #[test]
    fn test_clear_all_matches_fresh_engine() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "12");
        engine.apply_operator(op("+"));
        type_keys(&mut engine, "3.");
        engine.clear_all();
        assert_eq!(engine, CalculatorEngine::new());
    }

    // ===== Entry editing =====

    #[test]
    fn test_append_digits_renders_grouped() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "1234");
        assert_eq!(engine.render_display().current, "1,234");
    }

    #[test]
    fn test_double_decimal_point_is_ignored() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "..");
        assert_eq!(engine.entry().as_str(), ".");
    }

    #[test]
    fn test_delete_last_char() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "123");
        engine.delete_last_char();
        assert_eq!(engine.entry().as_str(), "12");
    }

    #[test]
    fn test_delete_on_empty_entry_keeps_pending() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "5");
        engine.apply_operator(op("*"));
        engine.delete_last_char();
        assert!(engine.entry().is_empty());
        assert_eq!(engine.render_display().previous, "5 *");
    }

    #[test]
    fn test_delete_trims_computed_result() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "10");
        engine.apply_operator(op("/"));
        type_keys(&mut engine, "4");
        engine.compute();
        engine.delete_last_char();
        assert_eq!(engine.entry().as_str(), "2.");
        assert_eq!(engine.render_display().current, "2.");
    }

    // ===== Operators =====

    #[test]
    fn test_operator_on_empty_entry_is_ignored() {
        let mut engine = CalculatorEngine::new();
        engine.apply_operator(op("+"));
        assert_eq!(engine, CalculatorEngine::new());
    }

    #[test]
    fn test_operator_moves_entry_to_pending() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "1234");
        engine.apply_operator(op("-"));
        assert!(engine.entry().is_empty());
        let pending = engine.pending().unwrap();
        assert_eq!(pending.operand.as_str(), "1234");
        assert_eq!(pending.operator, Operator::Subtract);
        assert_eq!(engine.render_display(), DisplayPair::new("1,234 -", ""));
    }

    #[test]
    fn test_repeated_operator_without_digits_is_ignored() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "3");
        engine.apply_operator(op("+"));
        let before = engine.clone();
        engine.apply_operator(op("+"));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_chaining_computes_before_next_operator() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "3");
        engine.apply_operator(op("+"));
        type_keys(&mut engine, "4");
        engine.apply_operator(op("*"));
        assert_eq!(engine.render_display(), DisplayPair::new("7 *", ""));
        type_keys(&mut engine, "2");
        assert_eq!(engine.compute(), Some(Number::new(14.0)));
    }

    #[test]
    fn test_chaining_with_unparseable_entry_still_replaces_pending() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "5");
        engine.apply_operator(op("+"));
        type_keys(&mut engine, ".");
        engine.apply_operator(op("-"));
        let pending = engine.pending().unwrap();
        assert_eq!(pending.operand.as_str(), ".");
        assert_eq!(pending.operator, Operator::Subtract);
        assert!(engine.entry().is_empty());
    }

    #[test]
    fn test_percent_divides_entry() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "50");
        engine.apply_operator(op("%"));
        assert_eq!(engine.entry().as_str(), "0.5");
        assert!(engine.pending().is_none());
        assert_eq!(engine.render_display(), DisplayPair::new("", "0.5"));
    }

    #[test]
    fn test_percent_leaves_pending_untouched() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "200");
        engine.apply_operator(op("+"));
        type_keys(&mut engine, "10");
        engine.apply_operator(op("%"));
        assert_eq!(engine.render_display(), DisplayPair::new("200 +", "0.1"));
        assert_eq!(engine.compute(), Some(Number::new(200.1)));
    }

    #[test]
    fn test_percent_on_lone_decimal_point_is_ignored() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, ".");
        engine.apply_operator(op("%"));
        assert_eq!(engine.entry().as_str(), ".");
    }

    // ===== Compute =====

    #[test]
    fn test_compute_addition() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "3");
        engine.apply_operator(op("+"));
        type_keys(&mut engine, "4");
        assert_eq!(engine.compute(), Some(Number::new(7.0)));
        assert_eq!(engine.render_display(), DisplayPair::new("", "7"));
        assert!(engine.pending().is_none());
    }

    #[test]
    fn test_compute_all_operators() {
        for (symbol, expected) in [("+", 8.0), ("-", 4.0), ("*", 12.0), ("/", 3.0)] {
            let mut engine = CalculatorEngine::new();
            type_keys(&mut engine, "6");
            engine.apply_operator(op(symbol));
            type_keys(&mut engine, "2");
            assert_eq!(engine.compute(), Some(Number::new(expected)), "6 {symbol} 2");
        }
    }

    #[test]
    fn test_compute_without_operator_is_ignored() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "42");
        assert_eq!(engine.compute(), None);
        assert_eq!(engine.entry().as_str(), "42");
    }

    #[test]
    fn test_compute_with_empty_entry_is_ignored() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "9");
        engine.apply_operator(op("/"));
        let before = engine.clone();
        assert_eq!(engine.compute(), None);
        assert_eq!(engine, before);
    }

    #[test]
    fn test_division_by_zero_shows_infinity() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "5");
        engine.apply_operator(op("/"));
        type_keys(&mut engine, "0");
        let result = engine.compute().unwrap();
        assert!(result.is_infinite());
        assert_eq!(engine.entry().as_str(), "Infinity");
        assert_eq!(engine.render_display(), DisplayPair::new("", "∞"));
    }

    #[test]
    fn test_result_with_long_fraction_renders_exponential() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, ".1");
        engine.apply_operator(op("+"));
        type_keys(&mut engine, ".2");
        engine.compute();
        assert_eq!(engine.render_display().current, "3.000e-1");
    }

    #[test]
    fn test_result_can_start_next_operation() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "3");
        engine.apply_operator(op("+"));
        type_keys(&mut engine, "4");
        engine.compute();
        engine.apply_operator(op("*"));
        type_keys(&mut engine, "10");
        assert_eq!(engine.compute(), Some(Number::new(70.0)));
    }

    // ===== Display =====

    #[test]
    fn test_long_entry_renders_exponential() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "12345678901");
        assert_eq!(engine.render_display().current, "1.235e+10");
    }

    #[test]
    fn test_previous_line_formats_operand() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "1234.5");
        engine.apply_operator(op("/"));
        assert_eq!(engine.render_display().previous, "1,234.5 /");
    }

    #[test]
    fn test_render_display_does_not_mutate() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "8");
        engine.apply_operator(op("-"));
        let before = engine.clone();
        let _ = engine.render_display();
        assert_eq!(engine, before);
    }

    #[test]
    fn test_engine_serializes_state() {
        let mut engine = CalculatorEngine::new();
        type_keys(&mut engine, "8");
        engine.apply_operator(op("-"));
        type_keys(&mut engine, "2.");
        let json = serde_json::to_value(&engine).unwrap();
        assert_eq!(json["entry"], "2.");
        assert_eq!(json["pending"]["operand"], "8");
        assert_eq!(json["pending"]["operator"], "Subtract");
    }
}
