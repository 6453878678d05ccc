use approx::assert_relative_eq;
use slope_calculator::{
    AppCommand, AppController, AppIntent, AppState, CalculatorOptions, CoordinateField, Language,
    LineResult, ResultView,
};
use std::time::{Duration, Instant};

fn enter_points(
    controller: &mut AppController,
    state: &mut AppState,
    values: [&str; 4],
) {
    for (field, value) in CoordinateField::ALL.into_iter().zip(values) {
        controller
            .handle_intent(
                state,
                AppIntent::FieldEdited {
                    field,
                    text: value.to_string(),
                },
            )
            .expect("FieldEdited sollte ohne Fehler durchlaufen");
    }
}

fn calculate(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(state, AppIntent::CalculateRequested)
        .expect("CalculateRequested sollte ohne Fehler durchlaufen");
}

#[test]
fn test_calculate_general_line_stores_result_and_highlights() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    enter_points(&mut controller, &mut state, ["1", "2", "3", "4"]);
    calculate(&mut controller, &mut state);

    assert_eq!(
        state.result,
        Some(LineResult::GeneralLine {
            slope: 1.0,
            intercept: 1.0
        })
    );
    assert!(state.ui.highlight_started.is_some());
    assert!(state.is_highlight_active(Instant::now()));

    match state.result_view() {
        Some(ResultView::GeneralLine { numeric, .. }) => {
            assert_eq!(numeric.to_string(), "y = 1x + 1");
        }
        other => panic!("Unerwartetes Ergebnis: {other:?}"),
    }

    match state.command_log.entries().last() {
        Some(AppCommand::ComputeLine) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_decimal_and_negative_input_is_computed() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    enter_points(&mut controller, &mut state, ["-1.5", "2", "0.5", "-3"]);
    calculate(&mut controller, &mut state);

    let Some(LineResult::GeneralLine { slope, intercept }) = state.result else {
        panic!("Allgemeine Gerade erwartet: {:?}", state.result);
    };
    assert_relative_eq!(slope, -2.5);
    assert_relative_eq!(intercept, -1.75);

    match state.result_view() {
        Some(ResultView::GeneralLine { numeric, slope, .. }) => {
            assert_eq!(numeric.to_string(), "y = -2.5x − 1.75");
            assert_eq!(slope.to_string(), "m = -2.5");
        }
        other => panic!("Unerwartetes Ergebnis: {other:?}"),
    }
}

#[test]
fn test_highlight_expires_after_configured_duration() {
    let mut controller = AppController::new();
    let options = CalculatorOptions {
        highlight_duration_ms: 50,
        ..Default::default()
    };
    let mut state = AppState::with_options(options);

    enter_points(&mut controller, &mut state, ["0", "3", "6", "3"]);
    calculate(&mut controller, &mut state);

    let started = state
        .ui
        .highlight_started
        .expect("Hervorhebung sollte gestartet sein");
    assert!(state.is_highlight_active(started + Duration::from_millis(49)));
    assert!(!state.is_highlight_active(started + Duration::from_millis(50)));
}

#[test]
fn test_vertical_line_and_identical_points_do_not_highlight() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    enter_points(&mut controller, &mut state, ["2", "5", "2", "9"]);
    calculate(&mut controller, &mut state);
    assert_eq!(state.result, Some(LineResult::VerticalLine { x: 2.0 }));
    assert!(state.ui.highlight_started.is_none());

    enter_points(&mut controller, &mut state, ["4", "7", "4", "7"]);
    calculate(&mut controller, &mut state);
    assert!(matches!(
        state.result,
        Some(LineResult::IdenticalPoints { .. })
    ));
    assert!(state.ui.highlight_started.is_none());
}

#[test]
fn test_letters_are_filtered_and_empty_field_is_invalid() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    enter_points(&mut controller, &mut state, ["a", "1", "2", "3"]);
    assert_eq!(state.fields.get(CoordinateField::X1), "");

    calculate(&mut controller, &mut state);
    assert_eq!(state.result, Some(LineResult::InvalidInput));
    assert!(matches!(
        state.result_view(),
        Some(ResultView::Error { .. })
    ));
}

#[test]
fn test_lone_minus_is_invalid_input() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    enter_points(&mut controller, &mut state, ["-", "1", "2", "3"]);
    assert_eq!(state.fields.get(CoordinateField::X1), "-");

    calculate(&mut controller, &mut state);
    assert_eq!(state.result, Some(LineResult::InvalidInput));
}

#[test]
fn test_paste_takes_leading_number_only() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::FieldPasted {
                field: CoordinateField::Y1,
                text: "-2.5 (aprox.)".to_string(),
                pasted: "-2.5 (aprox.)".to_string(),
            },
        )
        .expect("FieldPasted sollte ohne Fehler durchlaufen");

    assert_eq!(state.fields.get(CoordinateField::Y1), "-2.5");
}

#[test]
fn test_paste_over_selection_replaces_field_text() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    enter_points(&mut controller, &mut state, ["5", "0", "8", "1"]);
    controller
        .handle_intent(
            &mut state,
            AppIntent::FieldPasted {
                field: CoordinateField::X1,
                text: "0 m".to_string(),
                pasted: "0 m".to_string(),
            },
        )
        .expect("FieldPasted sollte ohne Fehler durchlaufen");
    assert_eq!(state.fields.get(CoordinateField::X1), "0");

    calculate(&mut controller, &mut state);
    match state.result_view() {
        Some(ResultView::GeneralLine { slope, .. }) => {
            assert_eq!(slope.to_string(), "m = 0.13");
        }
        other => panic!("Unerwartetes Ergebnis: {other:?}"),
    }
}

#[test]
fn test_clear_resets_fields_result_and_highlight() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    enter_points(&mut controller, &mut state, ["1", "2", "3", "4"]);
    calculate(&mut controller, &mut state);

    controller
        .handle_intent(&mut state, AppIntent::ClearRequested)
        .expect("ClearRequested sollte ohne Fehler durchlaufen");

    assert!(!state.fields.has_any_value());
    assert!(state.result.is_none());
    assert!(state.ui.highlight_started.is_none());
    assert!(state.result_view().is_none());
}

#[test]
fn test_language_switch_relocalizes_shown_result() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert_eq!(state.language, Language::Es);

    enter_points(&mut controller, &mut state, ["2", "5", "2", "9"]);
    calculate(&mut controller, &mut state);

    let spanish = state.result_view();
    state.ui.title_dirty = false;

    controller
        .handle_intent(
            &mut state,
            AppIntent::LanguageChanged {
                language: Language::En,
            },
        )
        .expect("LanguageChanged sollte ohne Fehler durchlaufen");

    assert_eq!(state.language, Language::En);
    assert!(state.ui.title_dirty);

    let english = state.result_view();
    assert_ne!(spanish, english);
    match english {
        Some(ResultView::VerticalLine {
            title, equation, ..
        }) => {
            assert_eq!(title, "Result:");
            assert_eq!(equation.to_string(), "x = 2");
        }
        other => panic!("Unerwartetes Ergebnis: {other:?}"),
    }
}

#[test]
fn test_default_language_comes_from_options() {
    let options = CalculatorOptions {
        default_language: Language::En,
        ..Default::default()
    };
    let state = AppState::with_options(options);
    assert_eq!(state.language, Language::En);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    match state.command_log.entries().last() {
        Some(AppCommand::RequestExit) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}
