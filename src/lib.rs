//! Steigungsrechner Library.
//! App-, UI- und Options-Schicht als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState};
pub use shared::CalculatorOptions;
pub use slope_engine::{
    compute_line, format_number, present, CoordinateField, Language, LineResult, ResultView,
};
