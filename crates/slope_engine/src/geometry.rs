//! Klassifikation und Berechnung einer Geraden durch zwei Punkte.

use glam::DVec2;

/// Kartesischer Punkt (x, y).
pub type Point = DVec2;

/// Ergebnis einer Geraden-Berechnung.
///
/// Jeder Ausgang ist ein Wert dieses Enums; die Berechnung selbst schlägt nie fehl.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineResult {
    /// Mindestens eine Koordinate ist keine gültige, endliche Zahl
    InvalidInput,
    /// Beide Punkte sind identisch (keine eindeutige Gerade)
    IdenticalPoints { point: Point },
    /// Senkrechte Gerade `x = konstant`, Steigung undefiniert
    VerticalLine { x: f64 },
    /// Gerade `y = m·x + b`
    GeneralLine { slope: f64, intercept: f64 },
}

impl LineResult {
    /// `true` für die beiden Fehlerfälle (ungültige Eingabe, identische Punkte).
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            LineResult::InvalidInput | LineResult::IdenticalPoints { .. }
        )
    }

    /// Kurzname der Klassifikation, für Log-Ausgaben.
    pub fn kind_name(&self) -> &'static str {
        match self {
            LineResult::InvalidInput => "invalid-input",
            LineResult::IdenticalPoints { .. } => "identical-points",
            LineResult::VerticalLine { .. } => "vertical-line",
            LineResult::GeneralLine { .. } => "general-line",
        }
    }

    /// Berechnet y an Stelle `x` für eine allgemeine Gerade.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match *self {
            LineResult::GeneralLine { slope, intercept } => Some(slope * x + intercept),
            _ => None,
        }
    }
}

/// Berechnet die Gerade durch `(x1, y1)` und `(x2, y2)`.
///
/// Reihenfolge der Prüfungen: nicht-endliche Werte, identische Punkte, gleiche x-Koordinate
/// (senkrecht), sonst Steigung und Achsenabschnitt. Vergleiche sind exakt, ohne Toleranz.
/// Eine Division durch Null ist durch die Senkrecht-Prüfung ausgeschlossen.
pub fn compute_line(x1: f64, y1: f64, x2: f64, y2: f64) -> LineResult {
    compute_line_between(DVec2::new(x1, y1), DVec2::new(x2, y2))
}

/// Punkt-basierte Variante von [`compute_line`].
pub fn compute_line_between(a: Point, b: Point) -> LineResult {
    if !a.is_finite() || !b.is_finite() {
        return LineResult::InvalidInput;
    }

    if a == b {
        return LineResult::IdenticalPoints { point: a };
    }

    if a.x == b.x {
        return LineResult::VerticalLine { x: a.x };
    }

    let slope = (b.y - a.y) / (b.x - a.x);
    let intercept = a.y - slope * a.x;

    // Überlauf bei extremen Eingaben
    if !slope.is_finite() || !intercept.is_finite() {
        log::warn!("Geraden-Berechnung übergelaufen: {a} → {b}");
        return LineResult::InvalidInput;
    }

    LineResult::GeneralLine { slope, intercept }
}

#[cfg(test)]
mod tests;
