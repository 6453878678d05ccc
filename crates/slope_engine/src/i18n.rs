//! Sprachauswahl und Text-Katalog (Spanisch/Englisch).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anzeigesprache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Spanisch (Standard)
    #[default]
    Es,
    /// Englisch
    En,
}

impl Language {
    /// Alle Sprachen in Anzeige-Reihenfolge.
    pub const ALL: [Language; 2] = [Language::Es, Language::En];

    /// Sprach-Tag (`"es"` / `"en"`).
    pub fn tag(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            other => Err(anyhow::anyhow!("Unbekannte Sprache: '{other}'")),
        }
    }
}

/// Schlüssel aller übersetzten Texte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    // ── Ergebnis ────────────────────────────────────────────────
    InvalidValues,
    IdenticalPoints,
    VerticalLineAttention,
    VerticalLineText,
    VerticalLineUndefined,
    ResultTitle,
    SlopeText,
    EquationText,

    // ── Formular ────────────────────────────────────────────────
    WindowTitle,
    Subtitle,
    FirstPoint,
    SecondPoint,
    CoordinateHint,
    Calculate,
    Clear,
    Language,

    // ── Status-Bar ──────────────────────────────────────────────
    KindInvalidInput,
    KindIdenticalPoints,
    KindVerticalLine,
    KindGeneralLine,
    NoResult,
    SlopeUndefinedShort,
    Calculations,
}

impl MessageKey {
    /// Alle Schlüssel, z.B. für Vollständigkeits-Prüfungen.
    pub const ALL: [MessageKey; 23] = [
        MessageKey::InvalidValues,
        MessageKey::IdenticalPoints,
        MessageKey::VerticalLineAttention,
        MessageKey::VerticalLineText,
        MessageKey::VerticalLineUndefined,
        MessageKey::ResultTitle,
        MessageKey::SlopeText,
        MessageKey::EquationText,
        MessageKey::WindowTitle,
        MessageKey::Subtitle,
        MessageKey::FirstPoint,
        MessageKey::SecondPoint,
        MessageKey::CoordinateHint,
        MessageKey::Calculate,
        MessageKey::Clear,
        MessageKey::Language,
        MessageKey::KindInvalidInput,
        MessageKey::KindIdenticalPoints,
        MessageKey::KindVerticalLine,
        MessageKey::KindGeneralLine,
        MessageKey::NoResult,
        MessageKey::SlopeUndefinedShort,
        MessageKey::Calculations,
    ];
}

/// Liefert den Text zu `key` in `language`.
pub fn message(language: Language, key: MessageKey) -> &'static str {
    match language {
        Language::Es => spanish(key),
        Language::En => english(key),
    }
}

fn spanish(key: MessageKey) -> &'static str {
    match key {
        MessageKey::InvalidValues => {
            "⚠ Por favor ingresa valores numéricos válidos en todos los campos."
        }
        MessageKey::IdenticalPoints => {
            "⚠ Los dos puntos son idénticos. Por favor ingresa dos puntos diferentes."
        }
        MessageKey::VerticalLineAttention => {
            "⚠ ¡Atención! Los dos puntos tienen la misma coordenada X."
        }
        MessageKey::VerticalLineText => "Esto forma una línea VERTICAL con ecuación:",
        MessageKey::VerticalLineUndefined => {
            "Las líneas verticales tienen pendiente INDEFINIDA (no se puede calcular)."
        }
        MessageKey::ResultTitle => "Resultado:",
        MessageKey::SlopeText => "La pendiente de esta recta es",
        MessageKey::EquationText => "La ecuación de tu recta es:",
        MessageKey::WindowTitle => "Calculadora de Pendiente",
        MessageKey::Subtitle => "Ingresa dos puntos para calcular la pendiente y la ecuación de la recta.",
        MessageKey::FirstPoint => "Punto 1",
        MessageKey::SecondPoint => "Punto 2",
        MessageKey::CoordinateHint => "Ej: 3.5",
        MessageKey::Calculate => "Calcular pendiente",
        MessageKey::Clear => "Limpiar",
        MessageKey::Language => "Idioma:",
        MessageKey::KindInvalidInput => "valores no válidos",
        MessageKey::KindIdenticalPoints => "puntos idénticos",
        MessageKey::KindVerticalLine => "recta vertical",
        MessageKey::KindGeneralLine => "recta con pendiente",
        MessageKey::NoResult => "sin resultado",
        MessageKey::SlopeUndefinedShort => "m: indefinida",
        MessageKey::Calculations => "Cálculos:",
    }
}

fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::InvalidValues => "⚠ Please enter valid numeric values in all fields.",
        MessageKey::IdenticalPoints => {
            "⚠ Both points are identical. Please enter two different points."
        }
        MessageKey::VerticalLineAttention => "⚠ Attention! Both points have the same X coordinate.",
        MessageKey::VerticalLineText => "This forms a VERTICAL line with equation:",
        MessageKey::VerticalLineUndefined => {
            "Vertical lines have UNDEFINED slope (cannot be calculated)."
        }
        MessageKey::ResultTitle => "Result:",
        MessageKey::SlopeText => "The slope of this line is",
        MessageKey::EquationText => "The equation of your line is:",
        MessageKey::WindowTitle => "Slope Calculator",
        MessageKey::Subtitle => "Enter two points to calculate the slope and the equation of the line.",
        MessageKey::FirstPoint => "Point 1",
        MessageKey::SecondPoint => "Point 2",
        MessageKey::CoordinateHint => "e.g. 3.5",
        MessageKey::Calculate => "Calculate slope",
        MessageKey::Clear => "Clear",
        MessageKey::Language => "Language:",
        MessageKey::KindInvalidInput => "invalid values",
        MessageKey::KindIdenticalPoints => "identical points",
        MessageKey::KindVerticalLine => "vertical line",
        MessageKey::KindGeneralLine => "sloped line",
        MessageKey::NoResult => "no result",
        MessageKey::SlopeUndefinedShort => "m: undefined",
        MessageKey::Calculations => "Calculations:",
    }
}
