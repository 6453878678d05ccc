//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use slope_engine::{classification, message, render_line, MessageKey, SlopeText};

/// Texte der Status-Bar in der aktuellen Sprache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTexts {
    pub language: String,
    pub result: String,
    pub slope: Option<String>,
    pub calculations: String,
}

/// Baut die Status-Texte aus dem State.
pub fn status_texts(state: &AppState) -> StatusTexts {
    let lang = state.language;
    let text = |key| message(lang, key);

    let (kind, slope) = match &state.result {
        Some(result) => {
            let slope = render_line(result).map(|rendering| match rendering.slope {
                SlopeText::Value(value) => format!("m = {value}"),
                SlopeText::Undefined => text(MessageKey::SlopeUndefinedShort).to_string(),
            });
            (classification(result, lang), slope)
        }
        None => (text(MessageKey::NoResult), None),
    };

    StatusTexts {
        language: format!("{} {}", text(MessageKey::Language), lang.tag().to_uppercase()),
        result: format!("{} {}", text(MessageKey::ResultTitle), kind),
        slope,
        calculations: format!(
            "{} {}",
            text(MessageKey::Calculations),
            state.command_log.computations()
        ),
    }
}

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    let texts = status_texts(state);

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(texts.language);
            ui.separator();
            ui.label(texts.result);

            if let Some(slope) = texts.slope {
                ui.separator();
                ui.label(slope);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(texts.calculations);
            });
        });
    });
}
