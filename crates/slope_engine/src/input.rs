//! Eingabe-Verarbeitung: Formularfelder, Parsing und Bereinigung von Zahlentext.

use crate::geometry::{compute_line, LineResult};
use regex::Regex;
use std::sync::LazyLock;

/// Erste Zahl am Anfang eines eingefügten Textes (optional negativ, optional Dezimalpunkt).
static PASTED_NUMBER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"-?[0-9]*\.?[0-9]*").ok());

/// Eines der vier Koordinatenfelder im Formular
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateField {
    X1,
    Y1,
    X2,
    Y2,
}

impl CoordinateField {
    /// Alle Felder in Formular-Reihenfolge.
    pub const ALL: [CoordinateField; 4] = [
        CoordinateField::X1,
        CoordinateField::Y1,
        CoordinateField::X2,
        CoordinateField::Y2,
    ];

    /// Kurzbezeichnung für Label und Log (z.B. `x₁`).
    pub fn label(self) -> &'static str {
        match self {
            CoordinateField::X1 => "x₁",
            CoordinateField::Y1 => "y₁",
            CoordinateField::X2 => "x₂",
            CoordinateField::Y2 => "y₂",
        }
    }
}

/// Rohtexte der vier Koordinatenfelder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinateInput {
    pub x1: String,
    pub y1: String,
    pub x2: String,
    pub y2: String,
}

impl CoordinateInput {
    /// Erstellt eine Eingabe aus vier Texten.
    pub fn new(
        x1: impl Into<String>,
        y1: impl Into<String>,
        x2: impl Into<String>,
        y2: impl Into<String>,
    ) -> Self {
        Self {
            x1: x1.into(),
            y1: y1.into(),
            x2: x2.into(),
            y2: y2.into(),
        }
    }

    /// Text eines Feldes.
    pub fn get(&self, field: CoordinateField) -> &str {
        match field {
            CoordinateField::X1 => &self.x1,
            CoordinateField::Y1 => &self.y1,
            CoordinateField::X2 => &self.x2,
            CoordinateField::Y2 => &self.y2,
        }
    }

    /// Setzt den Text eines Feldes.
    pub fn set(&mut self, field: CoordinateField, text: String) {
        match field {
            CoordinateField::X1 => self.x1 = text,
            CoordinateField::Y1 => self.y1 = text,
            CoordinateField::X2 => self.x2 = text,
            CoordinateField::Y2 => self.y2 = text,
        }
    }

    /// Leert alle Felder.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// `true`, wenn mindestens ein Feld Text enthält.
    pub fn has_any_value(&self) -> bool {
        CoordinateField::ALL
            .iter()
            .any(|&field| !self.get(field).is_empty())
    }
}

/// Parst eine Koordinate. Leere, nicht-numerische und nicht-endliche Werte ergeben `None`.
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parst alle vier Felder und berechnet die Gerade.
///
/// Schlägt das Parsing eines Feldes fehl, ist das Ergebnis `InvalidInput`.
pub fn compute_line_from_input(input: &CoordinateInput) -> LineResult {
    let parsed = (
        parse_coordinate(&input.x1),
        parse_coordinate(&input.y1),
        parse_coordinate(&input.x2),
        parse_coordinate(&input.y2),
    );

    match parsed {
        (Some(x1), Some(y1), Some(x2), Some(y2)) => compute_line(x1, y1, x2, y2),
        _ => LineResult::InvalidInput,
    }
}

/// Bereinigt Tastatureingaben eines Zahlenfeldes.
///
/// Erlaubt sind Ziffern, `.` und `-`. Nur der erste Dezimalpunkt bleibt erhalten,
/// ein Minus nur, wenn der Text damit beginnt.
pub fn sanitize_numeric_input(raw: &str) -> String {
    let filtered: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let single_dot = match filtered.split_once('.') {
        Some((head, tail)) => format!("{head}.{}", tail.replace('.', "")),
        None => filtered,
    };

    if !single_dot.contains('-') {
        return single_dot;
    }

    let unsigned = single_dot.replace('-', "");
    if single_dot.starts_with('-') {
        format!("-{unsigned}")
    } else {
        unsigned
    }
}

/// Liefert die Zahl am Anfang eines eingefügten Textes.
///
/// Führende Leerzeichen werden vor der Suche entfernt, `"  7"` ergibt also `"7"`
/// statt eines leeren Treffers. Beginnt der Text danach nicht mit einer Zahl, ist das
/// Ergebnis leer.
pub fn extract_pasted_number(text: &str) -> String {
    let Some(regex) = PASTED_NUMBER.as_ref() else {
        log::error!("Regex für eingefügte Zahlen konnte nicht kompiliert werden");
        return String::new();
    };

    regex
        .find(text.trim_start())
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Ersetzt im bearbeiteten Feldtext den eingefügten Abschnitt durch dessen führende Zahl.
///
/// `previous` ist der Text vor dem Einfügen, `edited` der Text danach (Einfügung an der
/// Schreibmarke, Auswahl ersetzt). Der eingefügte Abschnitt ist das, was zwischen dem
/// gemeinsamen Anfang und dem gemeinsamen Ende beider Texte steht.
pub fn merge_pasted_text(previous: &str, edited: &str, pasted: &str) -> String {
    let before: Vec<char> = previous.chars().collect();
    let after: Vec<char> = edited.chars().collect();

    let prefix = before
        .iter()
        .zip(&after)
        .take_while(|(a, b)| a == b)
        .count();
    let max_suffix = before.len().min(after.len()) - prefix;
    let suffix = before
        .iter()
        .rev()
        .zip(after.iter().rev())
        .take(max_suffix)
        .take_while(|(a, b)| a == b)
        .count();

    let mut merged: String = after[..prefix].iter().collect();
    merged.push_str(&extract_pasted_number(pasted));
    merged.extend(&after[after.len() - suffix..]);
    merged
}
