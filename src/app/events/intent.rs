use slope_engine::{CoordinateField, Language};

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Text eines Koordinatenfeldes wurde per Tastatur geändert (noch unbereinigt)
    FieldEdited {
        field: CoordinateField,
        text: String,
    },
    /// Text wurde in ein Koordinatenfeld eingefügt.
    /// `text` ist der Feldtext nach dem Einfügen, `pasted` der Inhalt der Zwischenablage.
    FieldPasted {
        field: CoordinateField,
        text: String,
        pasted: String,
    },
    /// Gerade berechnen (Button oder Enter)
    CalculateRequested,
    /// Formular und Ergebnis leeren
    ClearRequested,
    /// Anzeigesprache wechseln
    LanguageChanged { language: Language },
    /// Anwendung beenden
    ExitRequested,
}
