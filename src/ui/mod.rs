//! UI-Komponenten: Sprachleiste, Formular, Ergebnis, Status-Bar.

mod colors;
pub mod form;
mod keyboard;
/// UI-Layer mit egui
///
/// Die Komponenten lesen den `AppState` und geben `AppIntent`s zurück;
/// mutiert wird ausschließlich über den Controller.
pub mod language_bar;
pub mod result_panel;
pub mod status;

pub use form::render_form;
pub use language_bar::render_language_bar;
pub use result_panel::render_result_panel;
pub use status::render_status_bar;

/// Sammelt globale Keyboard-Shortcuts (Escape, Cmd/Ctrl+Q).
pub fn collect_shortcuts(ui: &egui::Ui, state: &crate::app::AppState) -> Vec<crate::app::AppIntent> {
    let form_has_content = state.fields.has_any_value() || state.result.is_some();
    keyboard::collect_keyboard_intents(ui, form_has_content)
}
