use slope_engine::{CoordinateField, Language};

/// App-Commands: mutierende Operationen auf dem AppState.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Bereinigten Text in ein Koordinatenfeld übernehmen
    SetFieldText {
        field: CoordinateField,
        text: String,
    },
    /// Felder parsen und Gerade berechnen
    ComputeLine,
    /// Felder, Ergebnis und Hervorhebung zurücksetzen
    ClearForm,
    /// Anzeigesprache setzen
    SetLanguage { language: Language },
    /// Anwendung beenden
    RequestExit,
}
