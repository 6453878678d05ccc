//! Zahlenformat für Ergebnis-Anzeigen.

/// Anzahl Nachkommastellen für nicht-ganzzahlige Werte.
pub const DISPLAY_DECIMALS: usize = 2;

/// Ab diesem Betrag werden Zahlen in Exponentenschreibweise ausgegeben (`1e+21`).
pub const EXPONENT_THRESHOLD: f64 = 1e21;

/// Formatiert eine Zahl für die Anzeige.
///
/// Ganze Zahlen ohne Nachkommastellen, sonst auf zwei Stellen gerundet und ohne
/// abschließende Nullen (`3.10` → `"3.1"`). Exakte Halbwerte im Binärwert
/// (`0.125`) runden von Null weg; `2.675` liegt binär knapp darunter und wird zu `2.67`.
/// Werte, die auf Null fallen, ergeben `"0"` (kein `"-0"`). Beträge ab `1e21`
/// erscheinen als `"1e+21"`.
pub fn format_number(value: f64) -> String {
    let shown = if value.fract() == 0.0 {
        value
    } else {
        round_to_display(value)
    };

    if shown == 0.0 {
        return "0".to_string();
    }
    if shown.abs() >= EXPONENT_THRESHOLD {
        return format!("{shown:e}").replacen('e', "e+", 1);
    }
    shown.to_string()
}

/// Rundet auf `DISPLAY_DECIMALS` Stellen anhand des exakten Binärwerts.
fn round_to_display(value: f64) -> f64 {
    // Exakte Halbwerte auf zwei Stellen sind genau die ungeraden Achtel (.125, .375, ...)
    let eighths = value * 8.0;
    let is_exact_tie = eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    if is_exact_tie {
        return (value * 100.0).round() / 100.0;
    }

    // `{:.2}` rundet den exakten Dezimalwert; ohne Halbwert ist das eindeutig
    format!("{:.*}", DISPLAY_DECIMALS, value)
        .parse::<f64>()
        .unwrap_or(value)
}
