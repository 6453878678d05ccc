//! Sprachleiste am oberen Bildschirmrand.

use crate::app::{AppIntent, AppState};
use slope_engine::{message, Language, MessageKey};

/// Rendert die Sprachleiste und gibt erzeugte Events zurück.
pub fn render_language_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("language_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(message(state.language, MessageKey::Language));
            ui.separator();

            for language in Language::ALL {
                let label = language.tag().to_uppercase();
                let button = egui::Button::new(label).selected(state.language == language);
                if ui.add(button).clicked() {
                    events.push(AppIntent::LanguageChanged { language });
                }
            }
        });
    });

    events
}
