//! Command handlers
//!
//! Each handler writes to a caller-supplied sink so it can be tested
//! without capturing stdout.

pub mod layout;
pub mod press;

pub use layout::execute_layout;
pub use press::{execute_press, parse_buttons};
