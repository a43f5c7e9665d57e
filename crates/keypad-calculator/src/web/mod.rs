//! Headless web front end
//!
//! A mock DOM page with data-attribute tagged buttons, and the driver that
//! wires those buttons to a calculator engine.

mod dom;
mod driver;

pub use dom::{
    DomElement, DomEvent, MockDom, CALCULATOR_ROOT_ID, CURRENT_DISPLAY_ID, DATA_CLEAR_ALL, DATA_CLEAR_DIGIT,
    DATA_CURRENT_DISPLAY, DATA_DIGIT, DATA_EQUALS, DATA_OPERATOR, DATA_PREVIOUS_DISPLAY,
    PREVIOUS_DISPLAY_ID,
};
pub use driver::DomDriver;
