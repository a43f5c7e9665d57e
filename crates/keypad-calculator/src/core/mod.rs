//! Core calculator: entry text, numbers, operators and the engine
//!
//! Nothing in here can fail. Malformed or out-of-sequence input degrades
//! to a no-op, and division by zero produces an infinity.

pub mod display;
pub mod engine;
pub mod entry;
pub mod number;
mod operations;

pub use display::{format_for_display, DisplayPair};
pub use engine::{CalculatorEngine, PendingOperation};
pub use entry::Entry;
pub use number::Number;
pub use operations::{Operator, OperatorKey};
