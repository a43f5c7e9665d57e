//! Errors raised at the keypad boundary
//!
//! The engine itself never fails; these only arise when text coming from a
//! front end has to be turned into a button or an element.

use thiserror::Error;

/// Result type for keypad operations
pub type KeypadResult<T> = Result<T, KeypadError>;

/// Errors that can occur while mapping input onto keypad buttons
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeypadError {
    /// Label does not name any keypad button
    #[error("Unknown button: {0:?}")]
    UnknownButton(String),

    /// Symbol does not name an operator
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),

    /// No element with this id exists in the DOM
    #[error("Unknown element: {0}")]
    UnknownElement(String),
}
