//! Handler für Koordinatenfelder, Berechnung und Zurücksetzen.

use crate::app::AppState;
use slope_engine::{compute_line_from_input, render_line, CoordinateField, LineResult};
use std::time::Instant;

/// Übernimmt den (bereits bereinigten) Text eines Feldes.
pub fn set_field_text(state: &mut AppState, field: CoordinateField, text: String) {
    state.fields.set(field, text);
}

/// Parst die Felder, berechnet die Gerade und speichert das Ergebnis.
///
/// Nur eine allgemeine Gerade startet die Hervorhebung der Eingabefelder.
pub fn compute_line(state: &mut AppState) {
    let result = compute_line_from_input(&state.fields);

    match render_line(&result) {
        Some(rendering) => log::info!(
            "Berechnung: {} → {}",
            result.kind_name(),
            rendering.equation
        ),
        None => log::info!("Berechnung: {}", result.kind_name()),
    }

    state.ui.highlight_started = match result {
        LineResult::GeneralLine { .. } => Some(Instant::now()),
        _ => None,
    };
    state.result = Some(result);
}

/// Leert alle Felder, das Ergebnis und die Hervorhebung.
pub fn clear(state: &mut AppState) {
    state.fields.clear();
    state.result = None;
    state.ui.highlight_started = None;
}
