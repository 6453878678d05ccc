//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Optionen, die sowohl `app` als auch `ui` lesen.

pub mod options;

pub use options::CalculatorOptions;
pub use options::{HIGHLIGHT_DURATION_MS, WINDOW_SIZE};
