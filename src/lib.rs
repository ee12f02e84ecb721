//! keycalc - a four-function keypad calculator.
//!
//! The [`calculator`] module holds the engine: it accepts digit, unary and
//! binary operator keys and produces the string a keypad display would show.
//! [`session`] wraps the engine for a front-end and [`config`] reads the
//! user's settings.
//!
//! ```
//! use keycalc::calculator::{BinaryOperator, CalculatorEngine, DigitKey};
//!
//! let mut engine = CalculatorEngine::new();
//! engine.input_digit(DigitKey::Two);
//! engine.apply_binary_operator(BinaryOperator::Add);
//! engine.input_digit(DigitKey::Three);
//! engine.apply_binary_operator(BinaryOperator::Multiply);
//! engine.input_digit(DigitKey::Four);
//! engine.apply_binary_operator(BinaryOperator::Equal);
//! assert_eq!(engine.display_value(), "20");
//! ```

pub mod calculator;
pub mod config;
pub mod session;
