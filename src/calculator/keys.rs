//! Keystroke classification.
//!
//! Turns a line of raw keypad input into the keystrokes the engine
//! understands. Digits and the decimal point are one keystroke each, just
//! like pressing the buttons one at a time.

use lazy_static::lazy_static;
use regex::Regex;

use super::token::Operator;

lazy_static! {
    /// Matches lines made only of calculator keys and whitespace.
    static ref CALCULATOR_KEYS: Regex = Regex::new(
        r"^(?:\s|AC|ac|[cC]|[0-9.]|[+\-*/x×÷]|=)*$"
    ).unwrap();

    /// Matches a single key. Clear keys come first so `AC` is one key.
    static ref KEY: Regex = Regex::new(
        r"AC|ac|[cC]|[0-9.]|[+\-*/x×÷]|="
    ).unwrap();
}

/// One press of a calculator button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Keystroke {
    /// A digit or the decimal point.
    Numeral(String),
    Operator(Operator),
    Equals,
    Clear,
}

impl Keystroke {
    /// Classify a single key label.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "=" => Some(Self::Equals),
            "AC" | "ac" | "C" | "c" => Some(Self::Clear),
            _ => {
                let mut chars = key.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                if c.is_ascii_digit() || c == '.' {
                    Some(Self::Numeral(c.to_string()))
                } else {
                    Operator::from_symbol(c).map(Self::Operator)
                }
            }
        }
    }
}

/// Check if input consists only of calculator keys.
///
/// Blank input does not count.
pub fn looks_like_keystrokes(input: &str) -> bool {
    !input.trim().is_empty() && CALCULATOR_KEYS.is_match(input)
}

/// Split a line of keypad input into keystrokes.
///
/// Returns `None` if the line contains anything that is not a calculator
/// key, so that other commands can be tried instead.
pub fn parse_keystrokes(input: &str) -> Option<Vec<Keystroke>> {
    if !looks_like_keystrokes(input) {
        return None;
    }

    KEY.find_iter(input)
        .map(|key| Keystroke::from_key(key.as_str()))
        .collect()
}
