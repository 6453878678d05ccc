//! Globale Keyboard-Shortcuts.
//!
//! Verarbeitet Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Escape leert das Formular (sofern etwas zu leeren ist), Cmd/Ctrl+Q beendet.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, form_has_content: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_escape_pressed, key_q_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Q),
        )
    });

    if key_escape_pressed && form_has_content {
        events.push(AppIntent::ClearRequested);
    }

    if modifiers.command && key_q_pressed {
        events.push(AppIntent::ExitRequested);
    }

    events
}
