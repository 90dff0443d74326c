//! Token model for calculator expressions.

use std::fmt;

/// One of the four arithmetic operators understood by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// The single-character symbol used in the displayed expression.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Look up an operator from its symbol.
    ///
    /// Also accepts the keypad glyphs `x`, `×` and `÷`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | 'x' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Multiplication and division are reduced before addition and subtraction.
    pub fn is_priority(self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }

    /// Apply the operator to two operands.
    ///
    /// Returns `None` when dividing by exactly zero.
    pub fn apply(self, left: f64, right: f64) -> Option<f64> {
        match self {
            Self::Add => Some(left + right),
            Self::Subtract => Some(left - right),
            Self::Multiply => Some(left * right),
            Self::Divide if right == 0.0 => None,
            Self::Divide => Some(left / right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An indivisible unit of an expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Decimal number text, possibly still being typed (e.g. `"3."`).
    Numeral(String),
    Operator(Operator),
}

impl Token {
    /// Classify a whitespace-free word. Known operator symbols become
    /// operators, everything else is kept as a numeral.
    pub fn from_word(word: &str) -> Self {
        let mut chars = word.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(op) = Operator::from_symbol(c)
            && op.symbol() == c
        {
            return Self::Operator(op);
        }
        Self::Numeral(word.to_string())
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Self::Operator(op) => Some(*op),
            Self::Numeral(_) => None,
        }
    }

    pub fn as_numeral(&self) -> Option<&str> {
        match self {
            Self::Numeral(text) => Some(text),
            Self::Operator(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeral(text) => f.write_str(text),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}
