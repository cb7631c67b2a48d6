// RuleScope - app/state.rs
//
// Application state management. Holds the rule text buffer, the most
// recent rendered result, status messages, and the pending-action flags
// panels set for the top-level update loop to consume.
// Owned by the eframe::App implementation.

use crate::util::constants;
use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::time::Duration;

/// Severity of the current status-bar message, used for colouring only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

/// Metadata about the most recent completed analyzer run.
#[derive(Debug, Clone)]
pub struct RunInfo {
    /// Wall-clock time the run finished.
    pub finished_at: DateTime<Local>,
    /// How long the analyzer took from spawn to exit.
    pub duration: Duration,
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Rule text currently in the input box.
    pub rule_text: String,

    /// Rendered text of the most recent analysis (None before the first run
    /// and after Clear).
    pub result_text: Option<String>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Severity of the status message.
    pub status_kind: StatusKind,

    /// Whether the blocking empty-input notice is showing.
    pub show_empty_input_notice: bool,

    /// Whether the About dialog is showing.
    pub show_about: bool,

    /// Set by panels to request an analyzer run; consumed by the update loop.
    pub pending_analyze: bool,

    /// Second stage of an analyze request: the in-progress status has been
    /// painted for one frame and the bridge runs on the next. Set and
    /// consumed by the update loop only.
    pub analyze_armed: bool,

    /// Metadata from the most recent completed run.
    pub last_run: Option<RunInfo>,

    /// Where the session file lives (platform data directory).
    pub session_path: PathBuf,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state.
    pub fn new(session_path: PathBuf, debug_mode: bool) -> Self {
        Self {
            rule_text: String::new(),
            result_text: None,
            status_message: "Ready.".to_string(),
            status_kind: StatusKind::Info,
            show_empty_input_notice: false,
            show_about: false,
            pending_analyze: false,
            analyze_armed: false,
            last_run: None,
            session_path,
            debug_mode,
        }
    }

    /// Load a predefined example into the input box, replacing its content.
    /// The example text is loaded verbatim.
    pub fn load_example(&mut self, example: &str) {
        self.rule_text = example.to_string();
        let preview: String = example.chars().take(constants::STATUS_PREVIEW_CHARS).collect();
        self.status_message = if preview.len() < example.len() {
            format!("Example loaded: {preview}...")
        } else {
            format!("Example loaded: {preview}")
        };
        self.status_kind = StatusKind::Info;
    }

    /// Clear the input box, the result area, and the last-run metadata.
    pub fn clear_all(&mut self) {
        self.rule_text.clear();
        self.result_text = None;
        self.last_run = None;
        self.status_message = "All fields cleared.".to_string();
        self.status_kind = StatusKind::Info;
    }

    /// The rule text with surrounding whitespace trimmed, or None when
    /// nothing analysable was entered.
    pub fn trimmed_rule(&self) -> Option<&str> {
        let trimmed = self.rule_text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    /// Handle the Analyze trigger (button or Ctrl+Enter).
    ///
    /// Empty or whitespace-only input never reaches the bridge: it raises
    /// the blocking notice instead of setting the pending flag.
    pub fn request_analyze(&mut self) {
        if self.trimmed_rule().is_none() {
            self.show_empty_input_notice = true;
        } else {
            self.pending_analyze = true;
        }
    }

    /// Persist the session (current rule text). Failures are logged, never
    /// surfaced -- losing a session is not worth interrupting shutdown.
    pub fn save_session(&self) {
        let data = crate::app::session::SessionData {
            version: crate::app::session::SESSION_VERSION,
            rule_text: self.rule_text.clone(),
        };
        if let Err(e) = crate::app::session::save(&data, &self.session_path) {
            tracing::warn!(error = %e, "Session save failed");
        }
    }
}
