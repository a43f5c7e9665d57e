//! Output formatting

use crate::error::CliResult;
use console::Style;
use keypad_calculator::core::DisplayPair;
use keypad_calculator::keypad::{Button, Keypad};
use serde::{Deserialize, Serialize};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// The display as it stood after one button press
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PressStep {
    /// Label of the pressed button
    pub button: String,
    /// Previous-line text
    pub previous: String,
    /// Current-line text
    pub current: String,
}

impl PressStep {
    /// Records `display` as the result of pressing `button`
    #[must_use]
    pub fn new(button: Button, display: DisplayPair) -> Self {
        Self {
            button: button.label(),
            previous: display.previous,
            current: display.current,
        }
    }
}

/// One keypad button as printed by `layout --format json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutEntry {
    /// Button label
    pub label: String,
    /// DOM element id
    pub element_id: String,
    /// Grid row
    pub row: usize,
    /// Grid column
    pub col: usize,
}

/// Renders text with `style` when colors are enabled
fn paint(text: &str, style: &Style, use_color: bool) -> String {
    if use_color {
        style.apply_to(text).to_string()
    } else {
        text.to_string()
    }
}

fn previous_style() -> Style {
    Style::new().dim().force_styling(true)
}

fn current_style() -> Style {
    Style::new().bold().force_styling(true)
}

/// Renders the two display lines, previous line first
#[must_use]
pub fn render_display(display: &DisplayPair, use_color: bool) -> String {
    format!(
        "{}\n{}",
        paint(&display.previous, &previous_style(), use_color),
        paint(&display.current, &current_style(), use_color)
    )
}

/// Renders one line per press: the label, then both display lines
#[must_use]
pub fn render_steps(steps: &[PressStep], use_color: bool) -> String {
    let label_style = Style::new().cyan().force_styling(true);
    let width = steps.iter().map(|s| s.previous.chars().count()).max().unwrap_or(0);

    steps
        .iter()
        .map(|step| {
            let label = format!("{:<3}", step.button);
            let previous = format!("{:>width$}", step.previous);
            format!(
                "{} | {} | {}",
                paint(&label, &label_style, use_color),
                paint(&previous, &previous_style(), use_color),
                paint(&step.current, &current_style(), use_color)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the keypad grid, operator keys highlighted
#[must_use]
pub fn render_layout(keypad: &Keypad, use_color: bool) -> String {
    let operator_style = Style::new().yellow().force_styling(true);
    let (rows, _) = keypad.dimensions();

    (0..rows)
        .map(|row| {
            keypad
                .buttons()
                .iter()
                .filter(|b| b.row == row)
                .map(|b| {
                    let cell = format!("[{:^5}]", b.button.label());
                    match b.button {
                        Button::Digit(_) | Button::Decimal => cell,
                        _ => paint(&cell, &operator_style, use_color),
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lists the keypad buttons for JSON output
#[must_use]
pub fn layout_entries(keypad: &Keypad) -> Vec<LayoutEntry> {
    keypad
        .buttons()
        .iter()
        .map(|b| LayoutEntry {
            label: b.button.label(),
            element_id: b.button.element_id(),
            row: b.row,
            col: b.col,
        })
        .collect()
}

/// Serializes `value` as pretty-printed JSON
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
