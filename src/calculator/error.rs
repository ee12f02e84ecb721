//! Error types for the calculator.

use thiserror::Error;

/// Calculator errors.
///
/// Key handlers on the engine never return these; they surface from parsing
/// user input, configuration and the clipboard.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    #[error("Malformed number: {0}")]
    MalformedNumber(String),

    #[error("Invalid alias '{alias}': {reason}")]
    InvalidAlias { alias: String, reason: String },

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl CalcError {
    pub fn unknown_key(text: impl Into<String>) -> Self {
        Self::UnknownKey(text.into())
    }

    pub fn malformed_number(text: impl Into<String>) -> Self {
        Self::MalformedNumber(text.into())
    }

    pub fn invalid_alias(alias: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAlias {
            alias: alias.into(),
            reason: reason.into(),
        }
    }

    pub fn clipboard(msg: impl Into<String>) -> Self {
        Self::Clipboard(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
