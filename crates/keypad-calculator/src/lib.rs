//! Keypad Calculator - button-driven four-function calculator
//!
//! The engine keeps the number being typed plus an optional pending
//! operation, and renders both as the two lines of a calculator display.
//! Front ends translate their input into [`keypad::Button`] presses.
//!
//! # Layers
//!
//! - [`core`]: entry text, number formatting and the state machine
//! - [`keypad`]: the 19-button layout and label parsing
//! - [`web`]: a mock DOM page whose clicks drive the engine
//! - [`driver`]: one behaviour suite, run against every front end
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! for label in ["1", "2", "3", "4", "+", "6"] {
//!     label.parse::<Button>().unwrap().apply_to(&mut engine);
//! }
//! assert_eq!(engine.render_display(), DisplayPair::new("1,234 +", "6"));
//!
//! engine.compute();
//! assert_eq!(engine.render_display().current, "1,240");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod error;
pub mod keypad;

/// Headless web front end
/// (Mock DOM allows testing the page wiring without browser bindings)
pub mod web;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        format_for_display, CalculatorEngine, DisplayPair, Entry, Number, Operator, OperatorKey,
        PendingOperation,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::error::{KeypadError, KeypadResult};
    pub use crate::keypad::{Button, Keypad, KeypadButton};
    pub use crate::web::{DomDriver, DomElement, DomEvent, MockDom};
}
