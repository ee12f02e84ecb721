//! A calculator session as seen by a front-end.
//!
//! The session owns the engine and turns typed lines into key presses. After
//! each input the front-end asks for a [`Snapshot`] and renders it.

use serde::Serialize;
use tracing::debug;

use crate::calculator::{CalcError, CalculatorEngine, Key, KeyParser, is_error_display};

/// What a front-end needs to render the calculator.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    /// The display text.
    pub display: String,
    /// Name of the entry state (`idle`, `awaiting-right`, ...).
    pub state: &'static str,
    /// Label of the pending binary operator, if any.
    pub pending_operator: Option<&'static str>,
    /// Whether the display shows an infinity or NaN.
    pub is_error: bool,
    /// Text to copy, or `None` for error displays.
    pub clipboard: Option<String>,
}

impl Snapshot {
    /// Capture the current state of an engine.
    pub fn from_engine(engine: &CalculatorEngine) -> Self {
        let display = engine.display_value();
        let is_error = is_error_display(&display);
        Self {
            clipboard: (!is_error).then(|| display.clone()),
            display,
            state: engine.entry().name(),
            pending_operator: engine.pending_operator().map(|op| op.label()),
            is_error,
        }
    }

    /// Get the text to copy to clipboard.
    /// Falls back to the display for errors so the message can still be copied.
    pub fn text_for_clipboard(&self) -> &str {
        self.clipboard.as_deref().unwrap_or(&self.display)
    }
}

/// An engine plus the parser used to read typed keys.
#[derive(Clone, Debug, Default)]
pub struct Session {
    engine: CalculatorEngine,
    parser: KeyParser,
}

impl Session {
    pub fn new(parser: KeyParser) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            parser,
        }
    }

    /// Press every key on a line, in order.
    ///
    /// A line containing anything that is not a key is rejected before any
    /// key reaches the engine.
    pub fn feed_line(&mut self, line: &str) -> Result<Snapshot, CalcError> {
        let keys = self.parser.tokenize(line)?;
        debug!(count = keys.len(), "feeding keys");
        for key in keys {
            self.engine.press(key);
        }
        Ok(self.snapshot())
    }

    pub fn press(&mut self, key: Key) -> Snapshot {
        self.engine.press(key);
        self.snapshot()
    }

    /// Return to the application-start state.
    pub fn reset(&mut self) {
        self.engine = CalculatorEngine::new();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_engine(&self.engine)
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }
}
