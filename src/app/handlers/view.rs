//! Handler für Sprache und Anwendungs-Lebenszyklus.

use crate::app::AppState;
use slope_engine::Language;

/// Wechselt die Anzeigesprache. Ein angezeigtes Ergebnis wird beim nächsten Frame
/// in der neuen Sprache dargestellt.
pub fn set_language(state: &mut AppState, language: Language) {
    log::info!("Sprache: {} → {}", state.language, language);
    state.language = language;
    state.ui.title_dirty = true;
}

/// Markiert die Anwendung zum Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
