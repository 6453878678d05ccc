//! Ergebnis-Anzeige: Fehlermeldung, senkrechte oder allgemeine Gerade.

use super::colors::{color32, role_color};
use crate::app::AppState;
use crate::shared::CalculatorOptions;
use slope_engine::{Equation, ResultView};

const EQUATION_FONT_SIZE: f32 = 22.0;
const SLOPE_FONT_SIZE: f32 = 16.0;

/// Baut ein eingefärbtes Text-Layout aus den Gleichungs-Tokens.
pub(crate) fn equation_job(
    equation: &Equation,
    options: &CalculatorOptions,
    fallback: egui::Color32,
    size: f32,
) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    for token in equation.tokens() {
        job.append(
            &token.text,
            0.0,
            egui::TextFormat {
                font_id: egui::FontId::proportional(size),
                color: role_color(token.role, options, fallback),
                ..Default::default()
            },
        );
    }
    job
}

/// Rendert das letzte Ergebnis in der aktiven Sprache (nichts, solange keins vorliegt).
pub fn render_result_panel(ui: &mut egui::Ui, state: &AppState) {
    let Some(view) = state.result_view() else {
        return;
    };

    let options = &state.options;
    let error_color = color32(options.error_color);
    let text_color = ui.visuals().text_color();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        match view {
            ResultView::Error { message } => {
                ui.label(egui::RichText::new(message).color(error_color));
            }
            ResultView::VerticalLine {
                title,
                attention,
                intro,
                equation,
                undefined_note,
            } => {
                ui.heading(title);
                ui.label(egui::RichText::new(attention).strong().color(error_color));
                ui.label(intro);
                ui.vertical_centered(|ui| {
                    ui.label(equation_job(
                        &equation,
                        options,
                        text_color,
                        EQUATION_FONT_SIZE,
                    ));
                });
                ui.label(undefined_note);
            }
            ResultView::GeneralLine {
                title,
                slope_label,
                slope,
                equation_label,
                symbolic,
                numeric,
            } => {
                ui.heading(title);
                ui.horizontal(|ui| {
                    ui.label(format!("{slope_label}:"));
                    ui.label(equation_job(&slope, options, text_color, SLOPE_FONT_SIZE));
                });
                ui.label(equation_label);
                ui.vertical_centered(|ui| {
                    for equation in [&symbolic, &numeric] {
                        ui.label(equation_job(
                            equation,
                            options,
                            text_color,
                            EQUATION_FONT_SIZE,
                        ));
                    }
                });
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use slope_engine::{compute_line, numeric_equation, present, Language};

    #[test]
    fn test_equation_job_keeps_text_and_sections() {
        let options = CalculatorOptions::default();
        let equation = numeric_equation(1.0, -1.0);
        let job = equation_job(&equation, &options, egui::Color32::WHITE, 20.0);

        assert_eq!(job.text, "y = 1x − 1");
        assert_eq!(job.sections.len(), equation.tokens().len());
        assert_eq!(job.sections[1].format.color, egui::Color32::WHITE);
        assert_eq!(job.sections[0].format.color, color32(options.var_y_color));
    }

    #[test]
    fn test_panel_renders_every_result_kind() {
        let ctx = egui::Context::default();
        for result in [
            slope_engine::LineResult::InvalidInput,
            compute_line(4.0, 7.0, 4.0, 7.0),
            compute_line(2.0, 5.0, 2.0, 9.0),
            compute_line(1.0, 2.0, 3.0, 4.0),
        ] {
            let mut state = AppState::new();
            state.result = Some(result);
            assert!(state.result_view().is_some());
            assert_eq!(
                state.result_view(),
                Some(present(&result, Language::Es))
            );

            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    render_result_panel(ui, &state);
                });
            });
        }
    }
}
