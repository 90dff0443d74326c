//! The in-progress expression and its input-mutation rules.
//!
//! The token list is the source of truth; the displayed text is derived
//! from it on demand.

use std::fmt;
use std::str::FromStr;

use super::error::{InputError, ParseError};
use super::token::{Operator, Token};

/// Outcome of checking whether an expression can be reduced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validity {
    Valid,
    /// Fewer than one full `a op b` group.
    TooFewTokens,
    TrailingOperator,
}

impl Validity {
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

/// An ordered sequence of alternating numerals and operators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression {
    tokens: Vec<Token>,
}

impl Default for Expression {
    fn default() -> Self {
        Self::zero()
    }
}

impl Expression {
    /// The initial expression: the single numeral `"0"`.
    pub fn zero() -> Self {
        Self {
            tokens: vec![Token::Numeral("0".to_string())],
        }
    }

    /// An expression with no tokens at all.
    pub fn empty() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub(crate) fn tokens_mut(&mut self) -> &mut Vec<Token> {
        &mut self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn ends_with_operator(&self) -> bool {
        self.tokens.last().is_some_and(Token::is_operator)
    }

    /// Whether any `*` or `/` remains in the expression.
    pub fn has_priority_operator(&self) -> bool {
        has_priority_operator(&self.tokens)
    }

    /// Append one keystroke's worth of digits and decimal point.
    ///
    /// Digits extend the trailing numeral, or start a new one after an
    /// operator. A lone `"0"` placeholder is replaced by the first digit.
    pub fn push_numeral(&mut self, text: &str) -> Result<(), InputError> {
        validate_numeral_input(text)?;

        match self.tokens.last_mut() {
            Some(Token::Numeral(current)) => {
                if text.contains('.') && current.contains('.') {
                    return Err(InputError::RepeatedDecimalPoint);
                }
                if current == "0" && !text.starts_with('.') {
                    current.clear();
                }
                current.push_str(text);
            }
            _ => {
                let numeral = if text.starts_with('.') {
                    format!("0{text}")
                } else {
                    text.to_string()
                };
                self.tokens.push(Token::Numeral(numeral));
            }
        }

        Ok(())
    }

    /// Append an operator, replacing a trailing one.
    ///
    /// An operator cannot open an expression: if it would become the first
    /// token, the expression falls back to `"0"`.
    pub fn push_operator(&mut self, op: Operator) {
        if self.ends_with_operator() {
            self.tokens.pop();
        }
        self.tokens.push(Token::Operator(op));

        if self.tokens.first().is_some_and(Token::is_operator) {
            *self = Self::zero();
        }
    }

    /// Check whether the expression is ready to be reduced.
    pub fn validity(&self) -> Validity {
        if self.tokens.len() < 3 {
            Validity::TooFewTokens
        } else if self.ends_with_operator() {
            Validity::TrailingOperator
        } else {
            Validity::Valid
        }
    }
}

pub(crate) fn has_priority_operator(tokens: &[Token]) -> bool {
    tokens
        .iter()
        .any(|token| token.as_operator().is_some_and(Operator::is_priority))
}

fn validate_numeral_input(text: &str) -> Result<(), InputError> {
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    if let Some(c) = text.chars().find(|c| !c.is_ascii_digit() && *c != '.') {
        return Err(InputError::InvalidCharacter(c));
    }
    if text.matches('.').count() > 1 {
        return Err(InputError::RepeatedDecimalPoint);
    }
    Ok(())
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    /// Split on whitespace. Operator symbols become operators and every
    /// other word a numeral; numerals are only checked when reduced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<Token> = s.split_whitespace().map(Token::from_word).collect();
        if tokens.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(Self { tokens })
    }
}
