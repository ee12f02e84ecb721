//! The keypad alphabet.
//!
//! Three kinds of keys reach the engine: digits (including the decimal point),
//! unary operators that act on the left operand alone, and binary operators
//! that combine the left and right operands.

use std::fmt;
use std::str::FromStr;

use super::error::CalcError;

/// A digit or decimal point key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DigitKey {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Point,
}

impl DigitKey {
    /// All digit keys in numeric order, followed by the point.
    pub const ALL: [DigitKey; 11] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Point,
    ];

    /// The character this key appends to the entry buffer.
    pub fn as_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Point => '.',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Point => ".",
        }
    }

    /// Numeric value of the key, `None` for the point.
    pub fn value(self) -> Option<f64> {
        self.as_char().to_digit(10).map(f64::from)
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Point),
            _ => c.to_digit(10).map(|d| Self::ALL[d as usize]),
        }
    }

    pub fn is_point(self) -> bool {
        matches!(self, Self::Point)
    }
}

/// An operator applied to the left operand alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    AllClear,
    ReverseSign,
    Percentage,
}

impl UnaryOperator {
    pub const ALL: [UnaryOperator; 3] = [Self::AllClear, Self::ReverseSign, Self::Percentage];

    pub fn label(self) -> &'static str {
        match self {
            Self::AllClear => "AC",
            Self::ReverseSign => "+/-",
            Self::Percentage => "%",
        }
    }

    /// Apply the operator to a value.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::AllClear => 0.0,
            Self::ReverseSign => -value,
            Self::Percentage => value * 0.01,
        }
    }
}

/// An operator combining two operands, or `Equal` to evaluate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equal,
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 5] = [
        Self::Divide,
        Self::Multiply,
        Self::Subtract,
        Self::Add,
        Self::Equal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Equal => "=",
        }
    }

    /// The arithmetic this key schedules, `None` for `Equal`.
    pub fn operation(self) -> Option<Operation> {
        match self {
            Self::Add => Some(Operation::Add),
            Self::Subtract => Some(Operation::Subtract),
            Self::Multiply => Some(Operation::Multiply),
            Self::Divide => Some(Operation::Divide),
            Self::Equal => None,
        }
    }
}

/// One of the four arithmetic operations a pending binary operator can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Evaluate `left op right` with plain IEEE-754 arithmetic.
    ///
    /// Division by zero is not guarded and yields an infinity or NaN.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }
}

impl From<Operation> for BinaryOperator {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Add => Self::Add,
            Operation::Subtract => Self::Subtract,
            Operation::Multiply => Self::Multiply,
            Operation::Divide => Self::Divide,
        }
    }
}

/// Any key on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Digit(DigitKey),
    Unary(UnaryOperator),
    Binary(BinaryOperator),
}

impl Key {
    pub fn label(self) -> &'static str {
        match self {
            Self::Digit(d) => d.label(),
            Self::Unary(op) => op.label(),
            Self::Binary(op) => op.label(),
        }
    }

    /// Every key, digits first, then unary and binary operators.
    pub fn all() -> impl Iterator<Item = Key> {
        DigitKey::ALL
            .into_iter()
            .map(Key::Digit)
            .chain(UnaryOperator::ALL.into_iter().map(Key::Unary))
            .chain(BinaryOperator::ALL.into_iter().map(Key::Binary))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<DigitKey> for Key {
    fn from(key: DigitKey) -> Self {
        Self::Digit(key)
    }
}

impl From<UnaryOperator> for Key {
    fn from(op: UnaryOperator) -> Self {
        Self::Unary(op)
    }
}

impl From<BinaryOperator> for Key {
    fn from(op: BinaryOperator) -> Self {
        Self::Binary(op)
    }
}

impl FromStr for Key {
    type Err = CalcError;

    /// Parse a single key from its label or a keyboard-friendly alias.
    ///
    /// The word aliases `c`, `+-` and `neg` are only recognised as a whole
    /// word, never inside a run of glued keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(digit) = DigitKey::from_char(c)
        {
            return Ok(Self::Digit(digit));
        }

        let key = match trimmed.to_ascii_lowercase().as_str() {
            "ac" | "c" => UnaryOperator::AllClear.into(),
            "+/-" | "+-" | "±" | "neg" => UnaryOperator::ReverseSign.into(),
            "%" => UnaryOperator::Percentage.into(),
            "+" => BinaryOperator::Add.into(),
            "-" | "−" => BinaryOperator::Subtract.into(),
            "×" | "*" | "x" => BinaryOperator::Multiply.into(),
            "÷" | "/" => BinaryOperator::Divide.into(),
            "=" => BinaryOperator::Equal.into(),
            _ => return Err(CalcError::unknown_key(trimmed)),
        };
        Ok(key)
    }
}
