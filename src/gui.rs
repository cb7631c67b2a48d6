// RuleScope - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the UI panels and the process bridge, and converts every
// bridge failure into user-visible text -- nothing propagates as a fault
// that would take the shell down.

use crate::app::state::{AppState, RunInfo, StatusKind};
use crate::bridge::process::ProcessBridge;
use crate::bridge::report;
use crate::ui;
use crate::util::error::BridgeError;

/// The RuleScope application.
pub struct RuleScopeApp {
    pub state: AppState,
    pub bridge: ProcessBridge,
}

impl RuleScopeApp {
    /// Create a new application instance with the given state and bridge.
    pub fn new(state: AppState, bridge: ProcessBridge) -> Self {
        Self { state, bridge }
    }

    /// Run the analyzer for the current rule text and store the rendered
    /// outcome. Blocks the UI thread for the duration of the call -- an
    /// explicit simplicity-over-responsiveness tradeoff, acceptable because
    /// analyzer runs are short-lived and interactive, and it makes
    /// invocations strictly sequential by construction.
    fn run_analysis(&mut self) {
        let Some(rule) = self.state.trimmed_rule().map(str::to_owned) else {
            // request_analyze() never sets the flag for empty input, so
            // this is unreachable through the UI; keep the shell sane anyway.
            self.state.show_empty_input_notice = true;
            return;
        };

        let started = std::time::Instant::now();

        match self.bridge.analyze(&rule) {
            Ok(result) => {
                let duration = started.elapsed();
                self.state.result_text = Some(report::render(&result));
                self.state.last_run = Some(RunInfo {
                    finished_at: chrono::Local::now(),
                    duration,
                });
                if result.success() {
                    self.state.status_message = "Analysis complete.".to_string();
                    self.state.status_kind = StatusKind::Info;
                } else {
                    self.state.status_message = match result.exit_code {
                        Some(code) => format!("Analysis complete (analyzer exit code {code})."),
                        None => "Analysis complete (analyzer killed by signal).".to_string(),
                    };
                    self.state.status_kind = StatusKind::Warning;
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Analyzer invocation failed");
                self.state.result_text = Some(format!("ERROR: {e}"));
                self.state.status_message = match e {
                    BridgeError::ToolNotFound { .. } => "Error: analyzer not found.".to_string(),
                    BridgeError::SpawnFailure { .. } => {
                        "Error: could not start the analyzer.".to_string()
                    }
                    BridgeError::CommunicationFailure { .. } => {
                        "Error during the analyzer exchange.".to_string()
                    }
                };
                self.state.status_kind = StatusKind::Error;
            }
        }
    }

    /// Advance an analyze request by one stage per frame.
    ///
    /// Frame 1 (pending_analyze): show the in-progress status and arm the
    /// run, so the status actually paints before the bridge blocks this
    /// thread. Frame 2 (analyze_armed): run the bridge. Returns true when
    /// a repaint is needed to reach the next stage.
    fn advance_analysis(&mut self) -> bool {
        if self.state.analyze_armed {
            self.state.analyze_armed = false;
            self.run_analysis();
            false
        } else if self.state.pending_analyze {
            self.state.pending_analyze = false;
            self.state.status_message = "Analyzing rule...".to_string();
            self.state.status_kind = StatusKind::Info;
            self.state.analyze_armed = true;
            true
        } else {
            false
        }
    }

    /// Write the current result text to a user-chosen file.
    fn save_result(&mut self) {
        let Some(text) = self.state.result_text.clone() else {
            return;
        };
        if let Some(dest) = rfd::FileDialog::new()
            .add_filter("Text", &["txt"])
            .set_file_name("analysis.txt")
            .save_file()
        {
            match std::fs::write(&dest, text.as_bytes()) {
                Ok(()) => {
                    self.state.status_message =
                        format!("Result saved to '{}'.", dest.display());
                }
                Err(e) => {
                    self.state.status_message = format!("Cannot save result: {e}");
                }
            }
        }
    }
}

impl eframe::App for RuleScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keyboard shortcut: Ctrl+Enter (Cmd+Enter on macOS) triggers Analyze.
        let analyze_shortcut = ctx.input(|i| {
            i.key_pressed(egui::Key::Enter) && (i.modifiers.ctrl || i.modifiers.command)
        });
        if analyze_shortcut {
            self.state.request_analyze();
        }

        // pending_analyze: set by the input panel or the shortcut above.
        // Consumed in two stages so the in-progress status paints before
        // the bridge call blocks this thread until the analyzer exits.
        if self.advance_analysis() {
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let has_result = self.state.result_text.is_some();
                    ui.add_enabled_ui(has_result, |ui| {
                        if ui.button("Save Result\u{2026}").clicked() {
                            self.save_result();
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    match self.state.status_kind {
                        StatusKind::Info => ui.label(&self.state.status_message),
                        StatusKind::Warning => ui.colored_label(
                            ui::theme::WARNING_TEXT,
                            &self.state.status_message,
                        ),
                        StatusKind::Error => ui.colored_label(
                            ui::theme::ERROR_TEXT,
                            &self.state.status_message,
                        ),
                    };
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some(ref run) = self.state.last_run {
                            ui.label(format!(
                                "last run {:.2}s at {}",
                                run.duration.as_secs_f64(),
                                run.finished_at.format("%H:%M:%S"),
                            ));
                        }
                    });
                });
            });

        // Central panel: rule input on top, result area below.
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::input::render(ui, &mut self.state);
            ui.separator();
            ui::panels::result::render(ui, &self.state);
        });

        // Modal dialogs.
        ui::panels::notice::render(ctx, &mut self.state);
        ui::panels::about::render(ctx, &mut self.state);
    }

    /// Called by eframe when the application window is about to close.
    ///
    /// Saves the current session so the next launch can restore it.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.save_session();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::resolve::{AnalyzerLocation, LaunchStrategy};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn app_with_missing_analyzer(dir: &TempDir) -> RuleScopeApp {
        let location = AnalyzerLocation {
            path: PathBuf::from("/nonexistent/rulescope-test/access_analyzer"),
            strategy: LaunchStrategy::Direct,
        };
        let bridge = ProcessBridge::new(location, dir.path());
        let state = AppState::new(dir.path().join("session.json"), false);
        RuleScopeApp::new(state, bridge)
    }

    /// An analyze request shows its in-progress status for one frame
    /// before the bridge runs, so the user sees it even though the run
    /// itself blocks the UI thread.
    #[test]
    fn test_in_progress_status_paints_before_the_bridge_runs() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_missing_analyzer(&dir);
        app.state.rule_text = "user admin".to_string();
        app.state.request_analyze();

        // Frame 1: status set, nothing run yet, repaint requested.
        assert!(app.advance_analysis());
        assert_eq!(app.state.status_message, "Analyzing rule...");
        assert!(app.state.analyze_armed);
        assert!(app.state.result_text.is_none());

        // Frame 2: the bridge runs and the status is replaced.
        assert!(!app.advance_analysis());
        assert!(!app.state.analyze_armed);
        assert!(app.state.result_text.is_some());
        assert_ne!(app.state.status_message, "Analyzing rule...");
        assert_eq!(app.state.status_kind, StatusKind::Error);
    }

    #[test]
    fn test_idle_frames_request_no_repaint() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_missing_analyzer(&dir);
        assert!(!app.advance_analysis());
        assert!(!app.state.pending_analyze);
        assert!(!app.state.analyze_armed);
    }
}
