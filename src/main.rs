//! Steigungsrechner.
//!
//! Berechnet Steigung und Gleichung der Geraden durch zwei Punkte,
//! mit Anzeige auf Spanisch oder Englisch.

use eframe::egui;
use slope_calculator::{ui, AppController, AppIntent, AppState, CalculatorOptions};
use slope_engine::{message, MessageKey};
use std::time::Instant;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Slope Calculator v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let config_path = CalculatorOptions::config_path();
        let calculator_options = CalculatorOptions::load_from_file(&config_path);
        let title = message(calculator_options.default_language, MessageKey::WindowTitle);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(calculator_options.window_size)
                .with_title(title),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Slope Calculator",
            options,
            Box::new(|_cc| Ok(Box::new(CalculatorApp::new(calculator_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct CalculatorApp {
    state: AppState,
    controller: AppController,
}

impl CalculatorApp {
    fn new(options: CalculatorOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
        }
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let events = self.collect_ui_events(ctx, now);
        let has_events = !events.is_empty();
        self.process_events(events);

        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.sync_window_title(ctx);
        self.maybe_request_repaint(ctx, now, has_events);
    }
}

impl CalculatorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context, now: Instant) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_language_bar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default().show(ctx, |ui| {
            let language = self.state.language;
            ui.heading(message(language, MessageKey::WindowTitle));
            ui.label(message(language, MessageKey::Subtitle));
            ui.add_space(12.0);

            events.extend(ui::render_form(ui, &self.state, now));
            ui.add_space(12.0);
            ui::render_result_panel(ui, &self.state);

            events.extend(ui::collect_shortcuts(ui, &self.state));
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn sync_window_title(&mut self, ctx: &egui::Context) {
        if !self.state.ui.title_dirty {
            return;
        }
        self.state.ui.title_dirty = false;

        let title = message(self.state.language, MessageKey::WindowTitle);
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.to_string()));
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, now: Instant, has_events: bool) {
        // State wurde nach dem Zeichnen geändert
        if has_events {
            ctx.request_repaint();
        }

        // Hervorhebung läuft zeitgesteuert aus
        if let Some(started) = self.state.ui.highlight_started {
            let elapsed = now.saturating_duration_since(started);
            let duration = self.state.options.highlight_duration();
            if elapsed < duration {
                ctx.request_repaint_after(duration - elapsed);
            }
        }
    }
}
