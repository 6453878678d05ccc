//! Gleichungs-Aufbau als Token-Folge.
//!
//! Statt fertigem Markup liefert der Renderer Tokens mit Rolle (y, x, m, b, Operator),
//! die das UI einfärben kann. `Display` ergibt die reine Textform, z.B. `y = 1x + 1`.

use crate::format::format_number;
use crate::geometry::LineResult;
use std::fmt;

/// Ab diesem Betrag wird der Achsenabschnitt in beiden Gleichungsformen angezeigt.
pub const INTERCEPT_THRESHOLD: f64 = 0.01;

/// Typografisches Minus (U+2212) für Gleichungen.
pub const MINUS_SIGN: &str = "−";

/// Rolle eines Gleichungs-Tokens (bestimmt die Einfärbung)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermRole {
    /// Variable y
    Y,
    /// Variable x
    X,
    /// Steigung m (Symbol oder Wert)
    Slope,
    /// Achsenabschnitt b (Symbol oder Wert)
    Intercept,
    /// `=`, `+`, `−` inkl. Leerzeichen
    Operator,
    /// Konstante ohne Variablen-Bezug (z.B. `x = 2`)
    Constant,
}

/// Ein Textstück der Gleichung mit seiner Rolle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquationToken {
    pub role: TermRole,
    pub text: String,
}

/// Gleichung als geordnete Token-Folge
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Equation {
    tokens: Vec<EquationToken>,
}

impl Equation {
    fn push(mut self, role: TermRole, text: impl Into<String>) -> Self {
        self.tokens.push(EquationToken {
            role,
            text: text.into(),
        });
        self
    }

    /// Read-only Sicht auf alle Tokens.
    pub fn tokens(&self) -> &[EquationToken] {
        &self.tokens
    }

    /// `true`, wenn ein Token mit der Rolle vorkommt.
    pub fn contains_role(&self, role: TermRole) -> bool {
        self.tokens.iter().any(|t| t.role == role)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(&token.text)?;
        }
        Ok(())
    }
}

/// Anzeige der Steigung: Zahlenwert oder ausdrücklich undefiniert (senkrechte Gerade).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlopeText {
    Value(String),
    Undefined,
}

/// Darstellungsdaten einer gültigen Gerade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRendering {
    /// Steigung (undefiniert bei senkrechter Gerade)
    pub slope: SlopeText,
    /// Symbolische Vorlage `y = mx + b` (nur bei allgemeiner Gerade)
    pub symbolic: Option<Equation>,
    /// Gleichung mit eingesetzten Werten
    pub equation: Equation,
}

/// Operator-Text für den Achsenabschnitt, `None` wenn `|b| < INTERCEPT_THRESHOLD`.
fn intercept_operator(intercept: f64) -> Option<String> {
    if intercept.abs() < INTERCEPT_THRESHOLD {
        return None;
    }
    let sign = if intercept > 0.0 { "+" } else { MINUS_SIGN };
    Some(format!(" {sign} "))
}

fn line_head(slope_text: impl Into<String>) -> Equation {
    Equation::default()
        .push(TermRole::Y, "y")
        .push(TermRole::Operator, " = ")
        .push(TermRole::Slope, slope_text)
        .push(TermRole::X, "x")
}

/// Symbolische Vorlage: `y = mx`, `y = mx + b` oder `y = mx − b`.
pub fn symbolic_equation(intercept: f64) -> Equation {
    let equation = line_head("m");
    match intercept_operator(intercept) {
        Some(op) => equation
            .push(TermRole::Operator, op)
            .push(TermRole::Intercept, "b"),
        None => equation,
    }
}

/// Gleichung mit Werten, z.B. `y = 2x − 0.5`. Der Achsenabschnitt erscheint als Betrag.
pub fn numeric_equation(slope: f64, intercept: f64) -> Equation {
    let equation = line_head(format_number(slope));
    match intercept_operator(intercept) {
        Some(op) => equation
            .push(TermRole::Operator, op)
            .push(TermRole::Intercept, format_number(intercept.abs())),
        None => equation,
    }
}

/// Gleichung einer senkrechten Gerade: `x = c`.
pub fn vertical_equation(x: f64) -> Equation {
    Equation::default()
        .push(TermRole::X, "x")
        .push(TermRole::Operator, " = ")
        .push(TermRole::Constant, format_number(x))
}

/// Anzeige `m = <Wert>` für die Steigung.
pub fn slope_equation(slope: f64) -> Equation {
    Equation::default()
        .push(TermRole::Slope, "m")
        .push(TermRole::Operator, " = ")
        .push(TermRole::Slope, format_number(slope))
}

/// Baut die Darstellungsdaten für gültige Geraden; `None` für die Fehlerfälle.
pub fn render_line(result: &LineResult) -> Option<LineRendering> {
    match *result {
        LineResult::InvalidInput | LineResult::IdenticalPoints { .. } => None,
        LineResult::VerticalLine { x } => Some(LineRendering {
            slope: SlopeText::Undefined,
            symbolic: None,
            equation: vertical_equation(x),
        }),
        LineResult::GeneralLine { slope, intercept } => Some(LineRendering {
            slope: SlopeText::Value(format_number(slope)),
            symbolic: Some(symbolic_equation(intercept)),
            equation: numeric_equation(slope, intercept),
        }),
    }
}
