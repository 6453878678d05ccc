//! Eingabeformular: zwei Punkte mit je zwei Koordinaten, Berechnen und Leeren.

use super::colors::color32;
use crate::app::{AppIntent, AppState};
use slope_engine::{message, CoordinateField, MessageKey};
use std::time::Instant;

const FIELD_WIDTH: f32 = 110.0;

/// Rendert das Formular und gibt erzeugte Events zurück.
pub fn render_form(ui: &mut egui::Ui, state: &AppState, now: Instant) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let mut submit = false;
    let highlighted = state.is_highlight_active(now);
    let text = |key| message(state.language, key);

    egui::Grid::new("coordinate_form")
        .num_columns(5)
        .spacing([8.0, 10.0])
        .show(ui, |ui| {
            let rows = [
                (MessageKey::FirstPoint, [CoordinateField::X1, CoordinateField::Y1]),
                (MessageKey::SecondPoint, [CoordinateField::X2, CoordinateField::Y2]),
            ];
            for (label, fields) in rows {
                ui.label(egui::RichText::new(text(label)).strong());
                for field in fields {
                    ui.label(field.label());
                    coordinate_field(ui, state, field, highlighted, &mut events, &mut submit);
                }
                ui.end_row();
            }
        });

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui.button(text(MessageKey::Calculate)).clicked() {
            submit = true;
        }
        let can_clear = state.fields.has_any_value() || state.result.is_some();
        if ui
            .add_enabled(can_clear, egui::Button::new(text(MessageKey::Clear)))
            .clicked()
        {
            events.push(AppIntent::ClearRequested);
        }
    });

    if submit {
        events.push(AppIntent::CalculateRequested);
    }

    events
}

/// Einzelnes Koordinatenfeld. Änderungen werden als Intent gemeldet, nicht direkt übernommen.
fn coordinate_field(
    ui: &mut egui::Ui,
    state: &AppState,
    field: CoordinateField,
    highlighted: bool,
    events: &mut Vec<AppIntent>,
    submit: &mut bool,
) {
    let mut text = state.fields.get(field).to_owned();
    let mut edit = egui::TextEdit::singleline(&mut text)
        .hint_text(message(state.language, MessageKey::CoordinateHint))
        .desired_width(FIELD_WIDTH);
    if highlighted {
        edit = edit.background_color(color32(state.options.highlight_color));
    }

    let response = ui.add(edit);

    if response.changed() {
        // Einfügen wird getrennt behandelt: vom eingefügten Abschnitt bleibt die führende Zahl
        let pasted = ui.input(|i| {
            i.events.iter().find_map(|event| match event {
                egui::Event::Paste(pasted) => Some(pasted.clone()),
                _ => None,
            })
        });
        match pasted {
            Some(pasted) => events.push(AppIntent::FieldPasted {
                field,
                text,
                pasted,
            }),
            None => events.push(AppIntent::FieldEdited { field, text }),
        }
    }

    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        *submit = true;
    }
}
