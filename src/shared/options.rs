//! Zentrale Konfiguration für den Steigungsrechner.
//!
//! `CalculatorOptions` enthält alle beim Start einlesbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use slope_engine::Language;
use std::time::Duration;

// ── Fenster ─────────────────────────────────────────────────────────

/// Standard-Fenstergröße in logischen Pixeln.
pub const WINDOW_SIZE: [f32; 2] = [520.0, 640.0];

// ── Eingabefelder ───────────────────────────────────────────────────

/// Dauer der Hervorhebung nach erfolgreicher Berechnung (Millisekunden).
pub const HIGHLIGHT_DURATION_MS: u64 = 600;
/// Hintergrundfarbe hervorgehobener Eingabefelder (RGBA: Hellgrün).
pub const HIGHLIGHT_COLOR: [f32; 4] = [0.55, 0.85, 0.55, 1.0];

// ── Ergebnis ────────────────────────────────────────────────────────

/// Farbe für Fehler- und Hinweistexte (RGBA: #8D584D).
pub const ERROR_COLOR: [f32; 4] = [0.553, 0.345, 0.302, 1.0];
/// Farbe der Variable y (RGBA: Blau).
pub const VAR_Y_COLOR: [f32; 4] = [0.25, 0.55, 0.95, 1.0];
/// Farbe der Variable x (RGBA: Violett).
pub const VAR_X_COLOR: [f32; 4] = [0.65, 0.4, 0.9, 1.0];
/// Farbe der Steigung m (RGBA: Orange).
pub const VAR_M_COLOR: [f32; 4] = [0.95, 0.55, 0.15, 1.0];
/// Farbe des Achsenabschnitts b (RGBA: Grün).
pub const VAR_B_COLOR: [f32; 4] = [0.2, 0.7, 0.35, 1.0];

/// Alle beim Start eingelesenen Optionen.
/// Wird aus `slope_calculator.toml` neben der Binary gelesen (nie geschrieben).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorOptions {
    /// Sprache beim Start
    pub default_language: Language,
    /// Fenstergröße beim Start
    pub window_size: [f32; 2],
    /// Hervorhebungsdauer der Eingabefelder (ms)
    pub highlight_duration_ms: u64,
    /// Hintergrund hervorgehobener Eingabefelder
    pub highlight_color: [f32; 4],
    /// Fehler-/Hinweistexte
    pub error_color: [f32; 4],
    /// Variable y
    pub var_y_color: [f32; 4],
    /// Variable x
    pub var_x_color: [f32; 4],
    /// Steigung m
    pub var_m_color: [f32; 4],
    /// Achsenabschnitt b
    pub var_b_color: [f32; 4],
}

impl Default for CalculatorOptions {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            window_size: WINDOW_SIZE,
            highlight_duration_ms: HIGHLIGHT_DURATION_MS,
            highlight_color: HIGHLIGHT_COLOR,
            error_color: ERROR_COLOR,
            var_y_color: VAR_Y_COLOR,
            var_x_color: VAR_X_COLOR,
            var_m_color: VAR_M_COLOR,
            var_b_color: VAR_B_COLOR,
        }
    }
}

impl CalculatorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text. Fehlende Felder erhalten Standardwerte.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        if opts.window_size.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            anyhow::bail!("Ungültige Fenstergröße: {:?}", opts.window_size);
        }
        Ok(opts)
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("slope_calculator"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("slope_calculator.toml")
    }

    /// Hervorhebungsdauer als `Duration`.
    pub fn highlight_duration(&self) -> Duration {
        Duration::from_millis(self.highlight_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let opts = CalculatorOptions::from_toml("").expect("leeres TOML ist gültig");
        assert_eq!(opts, CalculatorOptions::default());
    }

    #[test]
    fn test_partial_toml_overrides_fields() {
        let opts = CalculatorOptions::from_toml(
            "default_language = \"en\"\nhighlight_duration_ms = 250\n",
        )
        .expect("TOML sollte gültig sein");

        assert_eq!(opts.default_language, Language::En);
        assert_eq!(opts.highlight_duration(), Duration::from_millis(250));
        assert_eq!(opts.window_size, WINDOW_SIZE);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(CalculatorOptions::from_toml("default_language = \"de\"").is_err());
        assert!(CalculatorOptions::from_toml("window_size = [0.0, 100.0]").is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("slope_calculator_does_not_exist.toml");
        assert_eq!(
            CalculatorOptions::load_from_file(&path),
            CalculatorOptions::default()
        );
    }
}
