//! Umrechnung der RGBA-Optionen in egui-Farben.

use crate::shared::CalculatorOptions;
use slope_engine::TermRole;

/// RGBA (0.0–1.0, sRGB) → `Color32`.
pub(crate) fn color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Farbe eines Gleichungs-Tokens; Operatoren und Konstanten in `fallback`.
pub(crate) fn role_color(
    role: TermRole,
    options: &CalculatorOptions,
    fallback: egui::Color32,
) -> egui::Color32 {
    match role {
        TermRole::Y => color32(options.var_y_color),
        TermRole::X => color32(options.var_x_color),
        TermRole::Slope => color32(options.var_m_color),
        TermRole::Intercept => color32(options.var_b_color),
        TermRole::Operator | TermRole::Constant => fallback,
    }
}
