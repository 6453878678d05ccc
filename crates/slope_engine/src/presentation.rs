//! Aufbereitung eines `LineResult` zu lokalisierten Anzeige-Daten.

use crate::equation::{
    numeric_equation, slope_equation, symbolic_equation, vertical_equation, Equation,
};
use crate::geometry::LineResult;
use crate::i18n::{message, Language, MessageKey};

/// Anzeige-fertiges Ergebnis, alle Texte in der gewählten Sprache
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    /// Ungültige Eingabe oder identische Punkte
    Error { message: &'static str },
    /// Senkrechte Gerade, Steigung undefiniert
    VerticalLine {
        title: &'static str,
        attention: &'static str,
        intro: &'static str,
        equation: Equation,
        undefined_note: &'static str,
    },
    /// Allgemeine Gerade mit Steigung und Gleichung
    GeneralLine {
        title: &'static str,
        slope_label: &'static str,
        slope: Equation,
        equation_label: &'static str,
        symbolic: Equation,
        numeric: Equation,
    },
}

impl ResultView {
    /// `true` für Fehlermeldungen.
    pub fn is_error(&self) -> bool {
        matches!(self, ResultView::Error { .. })
    }
}

/// Lokalisierte Kurzbezeichnung der Ergebnis-Art (z.B. für die Status-Bar).
pub fn classification(result: &LineResult, language: Language) -> &'static str {
    let key = match result {
        LineResult::InvalidInput => MessageKey::KindInvalidInput,
        LineResult::IdenticalPoints { .. } => MessageKey::KindIdenticalPoints,
        LineResult::VerticalLine { .. } => MessageKey::KindVerticalLine,
        LineResult::GeneralLine { .. } => MessageKey::KindGeneralLine,
    };
    message(language, key)
}

/// Baut die Anzeige-Daten für `result` in `language`.
pub fn present(result: &LineResult, language: Language) -> ResultView {
    let text = |key| message(language, key);

    match *result {
        LineResult::InvalidInput => ResultView::Error {
            message: text(MessageKey::InvalidValues),
        },
        LineResult::IdenticalPoints { .. } => ResultView::Error {
            message: text(MessageKey::IdenticalPoints),
        },
        LineResult::VerticalLine { x } => ResultView::VerticalLine {
            title: text(MessageKey::ResultTitle),
            attention: text(MessageKey::VerticalLineAttention),
            intro: text(MessageKey::VerticalLineText),
            equation: vertical_equation(x),
            undefined_note: text(MessageKey::VerticalLineUndefined),
        },
        LineResult::GeneralLine { slope, intercept } => ResultView::GeneralLine {
            title: text(MessageKey::ResultTitle),
            slope_label: text(MessageKey::SlopeText),
            slope: slope_equation(slope),
            equation_label: text(MessageKey::EquationText),
            symbolic: symbolic_equation(intercept),
            numeric: numeric_equation(slope, intercept),
        },
    }
}
