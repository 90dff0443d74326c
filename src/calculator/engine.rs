//! The expression engine behind the calculator display.

use std::sync::Arc;

use super::error::{CalcError, InputError};
use super::expression::{Expression, Validity};
use super::format::MAX_FRACTION_DIGITS;
use super::keys::Keystroke;
use super::reduction::collapse_once;
use super::token::Operator;
use crate::display::DisplayObserver;

/// Owns the in-progress expression and reduces it on demand.
///
/// Every mutation notifies the optional [`DisplayObserver`] synchronously,
/// before the mutating call returns. The engine is not meant to be shared:
/// all operations take `&mut self`, so callers serialize access.
pub struct CalculatorEngine {
    expression: Expression,
    /// The display shows a finished result or an error, not live input.
    result_displayed: bool,
    /// Set when the last reduction failed; the display shows its message.
    error: Option<CalcError>,
    max_fraction_digits: usize,
    observer: Option<Arc<dyn DisplayObserver>>,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self {
            expression: Expression::zero(),
            result_displayed: false,
            error: None,
            max_fraction_digits: MAX_FRACTION_DIGITS,
            observer: None,
        }
    }

    /// Create an engine that reports to `observer`.
    pub fn with_observer(observer: impl DisplayObserver + 'static) -> Self {
        let mut engine = Self::new();
        engine.set_observer(observer);
        engine
    }

    /// Set the observer notified after every mutation.
    pub fn set_observer(&mut self, observer: impl DisplayObserver + 'static) {
        self.observer = Some(Arc::new(observer));
    }

    /// Share an observer that other parts of the UI also hold.
    pub fn set_shared_observer(&mut self, observer: Arc<dyn DisplayObserver>) {
        self.observer = Some(observer);
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Limit the fractional digits of results (at most five).
    pub fn set_max_fraction_digits(&mut self, digits: usize) {
        self.max_fraction_digits = digits.min(MAX_FRACTION_DIGITS);
    }

    pub fn max_fraction_digits(&self) -> usize {
        self.max_fraction_digits
    }

    /// The displayed text: the expression, or the active error message.
    pub fn current_text(&self) -> String {
        match self.error {
            Some(err) => err.to_string(),
            None => self.expression.to_string(),
        }
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// The error currently on display, if any.
    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    pub fn result_displayed(&self) -> bool {
        self.result_displayed
    }

    /// Replace the whole expression, e.g. to restore a saved session.
    pub fn set_expression(&mut self, expression: Expression) {
        self.expression = expression;
        self.result_displayed = false;
        self.error = None;
        self.notify();
    }

    /// Append a keystroke's worth of digits and decimal point.
    ///
    /// A displayed result is cleared first, so new digits start a new
    /// expression. Rejected input leaves the engine untouched.
    pub fn append_numeral(&mut self, text: &str) -> Result<(), InputError> {
        let mut next = if self.result_displayed {
            Expression::empty()
        } else {
            self.expression.clone()
        };

        if let Err(err) = next.push_numeral(text) {
            tracing::debug!(input = text, %err, "rejected numeral input");
            return Err(err);
        }

        self.expression = next;
        self.result_displayed = false;
        self.error = None;
        self.notify();
        Ok(())
    }

    /// Append an operator, replacing a trailing one.
    ///
    /// After a successful reduction the result becomes the left operand of
    /// the new expression. After an error the expression restarts at `"0"`.
    pub fn append_operator(&mut self, op: Operator) {
        // A failed reduction already emptied the expression.
        self.result_displayed = false;
        self.error = None;

        self.expression.push_operator(op);
        self.notify();
    }

    /// Go back to the initial `"0"` display.
    pub fn reset(&mut self) {
        self.expression = Expression::zero();
        self.result_displayed = false;
        self.error = None;
        self.notify();
    }

    /// Reduce the expression to a single numeral.
    ///
    /// The observer is notified after each collapsed `a op b` window. On
    /// failure the display shows the error message instead. Returns the
    /// unrounded value of the last collapse.
    ///
    /// Reducing an already reduced result reports
    /// [`CalcError::MissingElement`] but keeps the result on display.
    pub fn reduce(&mut self) -> Result<f64, CalcError> {
        let showing_result = self.result_displayed && self.error.is_none();
        self.result_displayed = true;

        let validity = self.expression.validity();
        if validity != Validity::Valid {
            if showing_result && self.expression.len() == 1 {
                tracing::debug!(result = %self.expression, "expression already reduced");
                self.notify();
                return Err(CalcError::MissingElement);
            }
            tracing::debug!(?validity, expression = %self.expression, "expression not ready");
            return Err(self.fail(CalcError::MissingElement));
        }

        tracing::debug!(expression = %self.expression, "reducing");
        let mut value = 0.0;
        while self.expression.len() > 1 {
            match collapse_once(self.expression.tokens_mut(), self.max_fraction_digits) {
                Ok(collapsed) => value = collapsed,
                Err(err) => return Err(self.fail(err)),
            }
            self.notify();
        }

        Ok(value)
    }

    /// Dispatch a classified keystroke.
    ///
    /// Reduction errors are shown on the display, so only rejected numeral
    /// input is returned as an error.
    pub fn press(&mut self, keystroke: &Keystroke) -> Result<(), InputError> {
        match keystroke {
            Keystroke::Numeral(text) => self.append_numeral(text)?,
            Keystroke::Operator(op) => self.append_operator(*op),
            Keystroke::Equals => {
                let _ = self.reduce();
            }
            Keystroke::Clear => self.reset(),
        }
        Ok(())
    }

    fn fail(&mut self, err: CalcError) -> CalcError {
        tracing::debug!(%err, "reduction failed");
        self.expression.clear();
        self.error = Some(err);
        self.notify();
        err
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            observer.display_updated(&self.current_text());
        }
    }
}
