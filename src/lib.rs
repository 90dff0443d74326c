//! Expression engine for a pocket calculator.
//!
//! [`calculator::CalculatorEngine`] keeps the in-progress expression as a
//! flat list of tokens and reduces it with `*`/`/` before `+`/`-`. A UI
//! forwards keystrokes into the engine and renders the text it reports
//! through a [`display::DisplayObserver`].

pub mod calculator;
pub mod clipboard;
pub mod config;
pub mod display;
