//! Unified Calculator Driver
//!
//! Write the behaviour checks once, run them against every front end.
//! A driver accepts button presses and exposes what the two display lines
//! currently show.

use crate::core::{CalculatorEngine, DisplayPair};
use crate::error::KeypadResult;
use crate::keypad::Button;

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use keypad_calculator::driver::{CalculatorDriver, EngineDriver};
///
/// let mut driver = EngineDriver::new();
/// driver.press_sequence(&["3", "+", "4", "="]).unwrap();
/// assert_eq!(driver.display().current, "7");
/// ```
pub trait CalculatorDriver {
    /// Presses one button
    fn press(&mut self, button: Button) -> KeypadResult<()>;

    /// Returns the two display lines
    fn display(&self) -> DisplayPair;

    /// Returns the calculator to its initial state
    fn reset(&mut self);

    /// Presses the button with the given label
    fn press_label(&mut self, label: &str) -> KeypadResult<()> {
        self.press(label.parse()?)
    }

    /// Presses a sequence of labelled buttons, stopping at the first unknown label
    fn press_sequence(&mut self, labels: &[&str]) -> KeypadResult<()> {
        labels.iter().try_for_each(|label| self.press_label(label))
    }
}

/// Headless driver working directly on an engine
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: CalculatorEngine,
}

impl EngineDriver {
    /// Creates a driver over a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, button: Button) -> KeypadResult<()> {
        button.apply_to(&mut self.engine);
        Ok(())
    }

    fn display(&self) -> DisplayPair {
        self.engine.render_display()
    }

    fn reset(&mut self) {
        self.engine.clear_all();
    }
}

// ===== Shared Behaviour Checks =====
// These checks work with ANY CalculatorDriver implementation

fn press_all<D: CalculatorDriver>(driver: &mut D, labels: &[&str]) {
    driver.reset();
    let pressed = driver.press_sequence(labels);
    assert!(pressed.is_ok(), "{pressed:?} while pressing {labels:?}");
}

/// Verifies typed digits show with thousands grouping
pub fn verify_digit_grouping<D: CalculatorDriver>(driver: &mut D) {
    press_all(driver, &["1", "2", "3", "4"]);
    assert_eq!(driver.display(), DisplayPair::new("", "1,234"));

    press_all(driver, &["9", "8", "7", "6", "5", "4", "3", "2", "1"]);
    assert_eq!(driver.display().current, "987,654,321");
}

/// Verifies a second decimal point is ignored
pub fn verify_decimal_guard<D: CalculatorDriver>(driver: &mut D) {
    press_all(driver, &["3", ".", ".", "5", "."]);
    assert_eq!(driver.display().current, "3.5");

    press_all(driver, &["0", "."]);
    assert_eq!(driver.display().current, "0.");
}

/// Verifies binary operators, equals and chaining
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    press_all(driver, &["3", "+", "4", "="]);
    assert_eq!(driver.display(), DisplayPair::new("", "7"));

    press_all(driver, &["3", "+", "4", "+"]);
    assert_eq!(driver.display(), DisplayPair::new("7 +", ""));

    // a second operator with nothing typed changes nothing
    press_all(driver, &["3", "+", "+"]);
    assert_eq!(driver.display(), DisplayPair::new("3 +", ""));

    press_all(driver, &["1", "2", "-", "2", "*", "3", "="]);
    assert_eq!(driver.display().current, "30");
}

/// Verifies percent rewrites the entry immediately
pub fn verify_percent<D: CalculatorDriver>(driver: &mut D) {
    press_all(driver, &["5", "0", "%"]);
    assert_eq!(driver.display(), DisplayPair::new("", "0.5"));

    press_all(driver, &["8", "+", "5", "0", "%", "="]);
    assert_eq!(driver.display().current, "8.5");
}

/// Verifies division by zero shows infinity rather than an error
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    press_all(driver, &["5", "/", "0", "="]);
    assert_eq!(driver.display(), DisplayPair::new("", "∞"));
}

/// Verifies long values switch to exponential notation
pub fn verify_exponential<D: CalculatorDriver>(driver: &mut D) {
    press_all(driver, &["1", "2", "3", "4", "5", "6", "7", "8", "9", "0", "1"]);
    assert_eq!(driver.display().current, "1.235e+10");

    press_all(driver, &["9", "9", "9", "9", "9", "*", "9", "9", "9", "9", "9", "="]);
    // 9999800001 rounds up into the next power of ten
    assert_eq!(driver.display().current, "1.000e+10");

    press_all(driver, &["1", "2", "3", "4", "5", "0", "0", "0", "0", "0"]);
    assert_eq!(driver.display().current, "1.235e+9");
}

/// Verifies delete and all-clear
pub fn verify_clearing<D: CalculatorDriver>(driver: &mut D) {
    press_all(driver, &["4", "2", "DEL"]);
    assert_eq!(driver.display().current, "4");

    press_all(driver, &["DEL"]);
    assert_eq!(driver.display(), DisplayPair::default());

    press_all(driver, &["7", "*", "6", "AC"]);
    assert_eq!(driver.display(), DisplayPair::default());
}

/// Complete verification suite - runs every check
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_grouping(driver);
    verify_decimal_guard(driver);
    verify_chaining(driver);
    verify_percent(driver);
    verify_division_by_zero(driver);
    verify_exponential(driver);
    verify_clearing(driver);
}
