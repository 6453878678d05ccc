//! Rechenkern des Steigungsrechners.
//!
//! Reine Funktionen ohne UI-Abhängigkeit: Geraden-Klassifikation, Zahlenformat,
//! Gleichungs-Tokens, Eingabe-Parsing/-Bereinigung, Texte und Ergebnis-Aufbereitung.

pub mod equation;
pub mod format;
/// Geraden durch zwei Punkte
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - Point: Kartesischer Punkt (glam `DVec2`)
/// - LineResult: Klassifiziertes Ergebnis einer Berechnung
pub mod geometry;
pub mod i18n;
pub mod input;
pub mod presentation;

pub use equation::{
    numeric_equation, render_line, slope_equation, symbolic_equation, vertical_equation, Equation,
    EquationToken, LineRendering, SlopeText, TermRole, INTERCEPT_THRESHOLD, MINUS_SIGN,
};
pub use format::format_number;
pub use geometry::{compute_line, compute_line_between, LineResult, Point};
pub use i18n::{message, Language, MessageKey};
pub use input::{
    compute_line_from_input, extract_pasted_number, merge_pasted_text, parse_coordinate,
    sanitize_numeric_input, CoordinateField, CoordinateInput,
};
pub use presentation::{classification, present, ResultView};
