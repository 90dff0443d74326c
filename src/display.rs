//! Display-side types: the observer capability and a renderable snapshot.

use serde::Serialize;

use crate::calculator::CalculatorEngine;

/// Something that renders the calculator display.
///
/// The engine calls [`DisplayObserver::display_updated`] synchronously, on
/// the caller's thread, after every state mutation. Any `Fn(&str)` closure
/// is an observer.
pub trait DisplayObserver: Send + Sync {
    /// Called with the engine's current display text.
    fn display_updated(&self, text: &str);
}

impl<F> DisplayObserver for F
where
    F: Fn(&str) + Send + Sync,
{
    fn display_updated(&self, text: &str) {
        self(text)
    }
}

/// A point-in-time copy of what the calculator shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplaySnapshot {
    /// The expression text, or the error message.
    pub text: String,
    /// Whether `text` is an error message.
    pub is_error: bool,
    /// Whether `text` is a finished result (or error) rather than live input.
    pub result_displayed: bool,
}

impl DisplaySnapshot {
    /// Capture the current state of an engine.
    pub fn from_engine(engine: &CalculatorEngine) -> Self {
        Self {
            text: engine.current_text(),
            is_error: engine.error().is_some(),
            result_displayed: engine.result_displayed(),
        }
    }

    /// The text worth copying to the clipboard: a finished numeric result.
    pub fn result_for_clipboard(&self) -> Option<&str> {
        (self.result_displayed && !self.is_error).then_some(self.text.as_str())
    }
}
