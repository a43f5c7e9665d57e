//! Calculator operators
//!
//! Binary operators combine the pending operand with the entry. Percent is
//! not one of them: it rewrites the entry in place as soon as it is pressed.

use crate::core::number::Number;
use crate::error::KeypadError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Type-safe binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// All binary operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Applies the operator with IEEE-754 semantics
    ///
    /// Division by zero is not an error: it yields an infinity (or NaN for
    /// `0 / 0`), exactly as floating-point division does.
    #[must_use]
    pub fn apply(self, lhs: Number, rhs: Number) -> Number {
        let (a, b) = (lhs.value(), rhs.value());
        let result = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        };
        Number::new(result)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// What an operator key sends to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OperatorKey {
    /// One of the four binary operators
    Binary(Operator),
    /// Percent (%), divides the entry by 100 immediately
    Percent,
}

impl OperatorKey {
    /// Returns the key symbol
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Binary(op) => op.symbol(),
            Self::Percent => "%",
        }
    }
}

impl From<Operator> for OperatorKey {
    fn from(op: Operator) -> Self {
        Self::Binary(op)
    }
}

impl FromStr for OperatorKey {
    type Err = KeypadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Binary(Operator::Add)),
            "-" => Ok(Self::Binary(Operator::Subtract)),
            "*" => Ok(Self::Binary(Operator::Multiply)),
            "/" => Ok(Self::Binary(Operator::Divide)),
            "%" => Ok(Self::Percent),
            other => Err(KeypadError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for OperatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
