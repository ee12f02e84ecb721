//! The calculator state machine.
//!
//! The engine keeps a running left operand and an [`Entry`] describing what
//! the next key press edits. Binary operators evaluate strictly left to
//! right as soon as both operands are present, so `2 + 3 × 4 =` gives 20.

use tracing::{debug, trace, warn};

use super::error::{CalcError, Result};
use super::format::format_number;
use super::keys::{BinaryOperator, DigitKey, Key, Operation, UnaryOperator};

/// What the next key press is editing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entry {
    /// No operator pending, digits edit the left operand.
    Idle,
    /// An operator is pending and the right operand has not been started.
    AwaitingRight(Operation),
    /// An operator is pending and digits edit the right operand.
    EditingRight(Operation, f64),
    /// `=` was the last operator; the next digit starts a fresh left operand.
    JustEvaluated,
}

impl Entry {
    /// Entry after recording `op` as the pending operator.
    fn pending(op: BinaryOperator) -> Self {
        match op.operation() {
            Some(operation) => Self::AwaitingRight(operation),
            None => Self::JustEvaluated,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingRight(_) => "awaiting-right",
            Self::EditingRight(..) => "editing-right",
            Self::JustEvaluated => "just-evaluated",
        }
    }
}

/// Display-only text that follows the formatted operand.
///
/// The operand is stored as an `f64`, which cannot remember a point typed
/// with nothing after it or zeros typed at the end of a fraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Suffix {
    #[default]
    None,
    Point,
    Zeros(usize),
}

/// Four-function calculator engine.
///
/// Every key handler is total: keys that would produce a malformed number are
/// ignored rather than reported.
#[derive(Clone, Debug)]
pub struct CalculatorEngine {
    left: f64,
    entry: Entry,
    suffix: Suffix,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self {
            left: 0.0,
            entry: Entry::Idle,
            suffix: Suffix::None,
        }
    }
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch any key to its handler.
    pub fn press(&mut self, key: Key) {
        trace!(key = key.label(), state = self.entry.name(), "key pressed");
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::Unary(op) => self.apply_unary_operator(op),
            Key::Binary(op) => self.apply_binary_operator(op),
        }
    }

    /// Handle a digit or point key.
    pub fn input_digit(&mut self, key: DigitKey) {
        match self.entry {
            Entry::JustEvaluated => {
                self.left = key.value().unwrap_or(0.0);
                self.entry = Entry::Idle;
                self.suffix = if key.is_point() {
                    Suffix::Point
                } else {
                    Suffix::None
                };
                debug!(left = self.left, "started new operand after evaluation");
            }
            _ if key.is_point() => self.input_point(),
            Entry::AwaitingRight(op) => {
                let right = key.value().unwrap_or(0.0);
                self.entry = Entry::EditingRight(op, right);
                self.suffix = Suffix::None;
                debug!(right, "started right operand");
            }
            Entry::Idle => {
                if let Some(value) = self.append_or_ignore(key) {
                    self.left = value;
                }
            }
            Entry::EditingRight(op, _) => {
                if let Some(value) = self.append_or_ignore(key) {
                    self.entry = Entry::EditingRight(op, value);
                }
            }
        }
    }

    fn input_point(&mut self) {
        if !self.active_value().is_finite() {
            warn!(display = %self.display_value(), "ignoring point on non-finite value");
            return;
        }

        if self.display_value().contains('.') {
            trace!("display already has a point");
            return;
        }
        self.suffix = Suffix::Point;
    }

    /// Append a digit to the display text and reparse it, logging and
    /// returning `None` when the result is not a number.
    fn append_or_ignore(&mut self, key: DigitKey) -> Option<f64> {
        match self.append(key) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key = key.label(), "ignoring keystroke: {}", e);
                None
            }
        }
    }

    fn append(&mut self, key: DigitKey) -> Result<f64> {
        let current = self.active_value();
        if !current.is_finite() {
            return Err(CalcError::malformed_number(self.display_value()));
        }

        let mut text = self.display_value();
        text.push(key.as_char());
        let value: f64 = text
            .parse()
            .map_err(|_| CalcError::malformed_number(text.as_str()))?;

        self.suffix = match trailing_fraction_zeros(&text) {
            0 => Suffix::None,
            n => Suffix::Zeros(n),
        };
        trace!(text = %text, value, "appended digit");
        Ok(value)
    }

    /// Handle AC, +/- or %. Any pending binary entry is abandoned.
    pub fn apply_unary_operator(&mut self, op: UnaryOperator) {
        self.entry = Entry::Idle;
        self.suffix = Suffix::None;
        self.left = op.apply(self.left);
        debug!(op = op.label(), left = self.left, "applied unary operator");
    }

    /// Handle +, -, ×, ÷ or =.
    pub fn apply_binary_operator(&mut self, op: BinaryOperator) {
        self.suffix = Suffix::None;
        if let Entry::EditingRight(pending, right) = self.entry {
            self.left = pending.apply(self.left, right);
            debug!(
                op = BinaryOperator::from(pending).label(),
                right,
                result = self.left,
                "evaluated"
            );
        }
        self.entry = Entry::pending(op);
        trace!(op = op.label(), state = self.entry.name(), "operator recorded");
    }

    /// Text to show: the active operand plus any pending point or zeros.
    pub fn display_value(&self) -> String {
        let mut text = format_number(self.active_value());
        match self.suffix {
            Suffix::None => {}
            Suffix::Point => {
                if !text.ends_with('.') {
                    text.push('.');
                }
            }
            Suffix::Zeros(n) => {
                if !text.contains('.') {
                    text.push('.');
                }
                text.extend(std::iter::repeat_n('0', n));
            }
        }
        text
    }

    /// The operand on display: the right operand if started, else the left.
    fn active_value(&self) -> f64 {
        self.right_value().unwrap_or(self.left)
    }

    pub fn left_value(&self) -> f64 {
        self.left
    }

    pub fn right_value(&self) -> Option<f64> {
        match self.entry {
            Entry::EditingRight(_, right) => Some(right),
            _ => None,
        }
    }

    /// The pending binary operator; `Equal` right after an evaluation.
    pub fn pending_operator(&self) -> Option<BinaryOperator> {
        match self.entry {
            Entry::Idle => None,
            Entry::AwaitingRight(op) | Entry::EditingRight(op, _) => Some(op.into()),
            Entry::JustEvaluated => Some(BinaryOperator::Equal),
        }
    }

    pub fn has_trailing_point(&self) -> bool {
        self.suffix == Suffix::Point
    }

    pub fn entry(&self) -> Entry {
        self.entry
    }
}

/// Count zeros at the end of the fraction part of a decimal string.
fn trailing_fraction_zeros(text: &str) -> usize {
    match text.split_once('.') {
        Some((_, fraction)) => fraction.len() - fraction.trim_end_matches('0').len(),
        None => 0,
    }
}
