// RuleScope - ui/panels/result.rs
//
// Read-only result area showing the rendered text of the most recent
// analyzer invocation.

use crate::app::state::AppState;

/// Render the analysis result section (remainder of the central panel).
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    ui.heading("Analysis result");
    ui.add_space(4.0);

    // TextEdit over an immutable &str gives selectable, copyable text
    // without allowing edits.
    let mut display: &str = state
        .result_text
        .as_deref()
        .unwrap_or("No analysis has been run yet.");

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.add_sized(
                ui.available_size(),
                egui::TextEdit::multiline(&mut display)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY),
            );
        });
}
