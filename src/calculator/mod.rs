//! Calculator engine for a four-function keypad.
//!
//! This module provides:
//! - The key alphabet and a parser for typed key sequences
//! - The state machine turning key presses into a display string
//! - Display formatting, including infinities and NaN
//! - Copying the display to the clipboard

mod clipboard;
mod detection;
mod engine;
mod error;
mod format;
mod keys;

pub use clipboard::copy_to_clipboard;
pub use detection::{KeyParser, looks_like_key_sequence, tokenize_keys};
pub use engine::{CalculatorEngine, Entry};
pub use error::{CalcError, Result};
pub use format::{MAX_FRACTION_DIGITS, format_number, is_error_display};
pub use keys::{BinaryOperator, DigitKey, Key, Operation, UnaryOperator};
