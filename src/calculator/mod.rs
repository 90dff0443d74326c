//! Calculator module holding the expression engine.
//!
//! This module provides functionality to:
//! - Classify keypad input into keystrokes
//! - Build an expression token by token, correcting malformed input
//! - Reduce the expression with `*`/`/` before `+`/`-`, without a parse tree

mod engine;
mod error;
mod expression;
mod format;
mod keys;
mod reduction;
mod token;

pub use engine::CalculatorEngine;
pub use error::{CalcError, InputError, ParseError};
pub use expression::{Expression, Validity};
pub use format::{MAX_FRACTION_DIGITS, format_result};
pub use keys::{Keystroke, looks_like_keystrokes, parse_keystrokes};
pub use reduction::{collapse_once, parse_numeral};
pub use token::{Operator, Token};
