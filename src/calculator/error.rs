//! Error types surfaced by the expression engine.
//!
//! Every [`CalcError`] has a short message that replaces the calculator
//! display when a reduction fails.

use thiserror::Error;

/// Failure while reducing an expression.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// Fewer than one full `a op b` group, or a trailing operator.
    #[error("Missing element")]
    MissingElement,
    #[error("Invalid left operand")]
    LeftOperandInvalid,
    #[error("Invalid right operand")]
    RightOperandInvalid,
    #[error("Cannot divide by zero")]
    DivisionByZero,
    /// A token in operator position is not an operator.
    #[error("Unknown operator")]
    UnknownOperator,
}

/// A keystroke rejected before it reaches the expression.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("empty numeral input")]
    Empty,
    #[error("invalid character '{0}' in numeral input")]
    InvalidCharacter(char),
    #[error("numeral already contains a decimal point")]
    RepeatedDecimalPoint,
}

/// Failure while loading an expression from text.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expression text is empty")]
    Empty,
}
