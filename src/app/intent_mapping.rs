//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use slope_engine::{merge_pasted_text, sanitize_numeric_input};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Feldtexte werden hier bereinigt; der State enthält nur gefilterte Eingaben.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::FieldEdited { field, text } => {
            let sanitized = sanitize_numeric_input(&text);
            if sanitized != text {
                log::debug!("Eingabe {} bereinigt: '{}' → '{}'", field.label(), text, sanitized);
            }
            vec![AppCommand::SetFieldText {
                field,
                text: sanitized,
            }]
        }
        AppIntent::FieldPasted {
            field,
            text,
            pasted,
        } => {
            // Vom eingefügten Abschnitt bleibt nur die führende Zahl
            let combined = merge_pasted_text(state.fields.get(field), &text, &pasted);
            vec![AppCommand::SetFieldText {
                field,
                text: sanitize_numeric_input(&combined),
            }]
        }
        AppIntent::CalculateRequested => vec![AppCommand::ComputeLine],
        AppIntent::ClearRequested => vec![AppCommand::ClearForm],
        AppIntent::LanguageChanged { language } => {
            if language == state.language {
                Vec::new()
            } else {
                vec![AppCommand::SetLanguage { language }]
            }
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
