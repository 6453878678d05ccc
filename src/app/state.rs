//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::shared::CalculatorOptions;
use slope_engine::{present, CoordinateInput, Language, LineResult, ResultView};
use std::time::Instant;

/// Flüchtiger UI-Zustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Start der Feld-Hervorhebung nach erfolgreicher Berechnung
    pub highlight_started: Option<Instant>,
    /// Fenstertitel muss an die Sprache angepasst werden
    pub title_dirty: bool,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktive Anzeigesprache
    pub language: Language,
    /// Rohtexte der vier Koordinatenfelder (bereits bereinigt)
    pub fields: CoordinateInput,
    /// Letztes Berechnungsergebnis (sprachneutral)
    pub result: Option<LineResult>,
    /// UI-Zustand
    pub ui: UiState,
    /// Anwendung soll beendet werden
    pub should_exit: bool,
    /// Log ausgeführter Commands
    pub command_log: CommandLog,
    /// Beim Start geladene Optionen
    pub options: CalculatorOptions,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen leeren AppState mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(CalculatorOptions::default())
    }

    /// Erstellt einen leeren AppState mit den gegebenen Optionen.
    pub fn with_options(options: CalculatorOptions) -> Self {
        Self {
            language: options.default_language,
            fields: CoordinateInput::default(),
            result: None,
            ui: UiState {
                highlight_started: None,
                title_dirty: true,
            },
            should_exit: false,
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Lokalisierte Anzeige-Daten des letzten Ergebnisses.
    pub fn result_view(&self) -> Option<ResultView> {
        self.result
            .as_ref()
            .map(|result| present(result, self.language))
    }

    /// `true`, solange die Eingabefelder nach einer Berechnung hervorgehoben sind.
    pub fn is_highlight_active(&self, now: Instant) -> bool {
        self.ui.highlight_started.is_some_and(|started| {
            now.saturating_duration_since(started) < self.options.highlight_duration()
        })
    }
}
