//! Keypad buttons and layout
//!
//! Every front end speaks in buttons. A button knows its label, its element
//! id and which engine operation it triggers.

use crate::core::{CalculatorEngine, Operator, OperatorKey};
use crate::error::{KeypadError, KeypadResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A calculator button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Button {
    /// Digit key (0-9)
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Operator key, binary or percent
    Operator(OperatorKey),
    /// Evaluate the pending operation
    Equals,
    /// Delete the last character of the entry
    Delete,
    /// Reset everything
    ClearAll,
}

impl Button {
    /// Returns the label printed on the button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(key) => key.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::ClearAll => "AC".to_string(),
        }
    }

    /// Returns the DOM element id for this button
    #[must_use]
    pub fn element_id(&self) -> String {
        match self {
            Self::Digit(d) => format!("btn-{d}"),
            Self::Decimal => "btn-decimal".to_string(),
            Self::Operator(key) => format!("btn-{}", operator_name(*key)),
            Self::Equals => "btn-equals".to_string(),
            Self::Delete => "btn-delete".to_string(),
            Self::ClearAll => "btn-clear-all".to_string(),
        }
    }

    /// Returns the character this button appends to the entry, if any
    #[must_use]
    pub fn entry_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            _ => None,
        }
    }

    /// Runs the engine operation bound to this button
    pub fn apply_to(self, engine: &mut CalculatorEngine) {
        match self {
            Self::Digit(_) | Self::Decimal => {
                if let Some(token) = self.entry_char() {
                    engine.append_digit_or_dot(token);
                }
            }
            Self::Operator(key) => engine.apply_operator(key),
            Self::Equals => {
                engine.compute();
            }
            Self::Delete => engine.delete_last_char(),
            Self::ClearAll => engine.clear_all(),
        }
    }
}

impl FromStr for Button {
    type Err = KeypadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "." => Ok(Self::Decimal),
            "=" => Ok(Self::Equals),
            "DEL" => Ok(Self::Delete),
            "AC" | "C" => Ok(Self::ClearAll),
            digit if digit.len() == 1 && digit.as_bytes()[0].is_ascii_digit() => {
                Ok(Self::Digit(digit.as_bytes()[0] - b'0'))
            }
            other => other
                .parse::<OperatorKey>()
                .map(Self::Operator)
                .map_err(|_| KeypadError::UnknownButton(other.to_string())),
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Returns a name for an operator key (for element ids)
fn operator_name(key: OperatorKey) -> &'static str {
    match key {
        OperatorKey::Binary(Operator::Add) => "plus",
        OperatorKey::Binary(Operator::Subtract) => "minus",
        OperatorKey::Binary(Operator::Multiply) => "times",
        OperatorKey::Binary(Operator::Divide) => "divide",
        OperatorKey::Percent => "percent",
    }
}

/// A button placed on the keypad grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeypadButton {
    /// The button
    pub button: Button,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

/// Keypad layout
///
/// ```text
/// [ AC ] [DEL ] [ %  ] [ /  ]
/// [ 7  ] [ 8  ] [ 9  ] [ *  ]
/// [ 4  ] [ 5  ] [ 6  ] [ -  ]
/// [ 1  ] [ 2  ] [ 3  ] [ +  ]
/// [ 0  ] [ .  ] [ =  ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use Button::{ClearAll, Decimal, Delete, Digit, Equals};
        let op = |o: Operator| Button::Operator(OperatorKey::Binary(o));

        let layout: [&[Button]; 5] = [
            &[ClearAll, Delete, Button::Operator(OperatorKey::Percent), op(Operator::Divide)],
            &[Digit(7), Digit(8), Digit(9), op(Operator::Multiply)],
            &[Digit(4), Digit(5), Digit(6), op(Operator::Subtract)],
            &[Digit(1), Digit(2), Digit(3), op(Operator::Add)],
            &[Digit(0), Decimal, Equals],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, keys)| {
                keys.iter().enumerate().map(move |(col, &button)| KeypadButton {
                    button,
                    row,
                    col,
                })
            })
            .collect();

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all placed buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets a button by its row-major index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the button at a grid position
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_by_element_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.button.element_id() == id)
    }

    /// Finds a button by label
    pub fn find_by_label(&self, label: &str) -> KeypadResult<&KeypadButton> {
        let button: Button = label.parse()?;
        self.buttons
            .iter()
            .find(|b| b.button == button)
            .ok_or_else(|| KeypadError::UnknownButton(label.to_string()))
    }

    /// Renders the layout as a text grid, one row per line
    #[must_use]
    pub fn render_grid(&self) -> String {
        (0..self.rows)
            .map(|row| {
                self.buttons
                    .iter()
                    .filter(|b| b.row == row)
                    .map(|b| format!("[{:^5}]", b.button.label()))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
