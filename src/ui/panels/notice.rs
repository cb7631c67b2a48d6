// RuleScope - ui/panels/notice.rs
//
// Blocking empty-input notice: shown when Analyze is triggered with an
// empty or whitespace-only rule. Must be acknowledged before continuing;
// no analyzer process is spawned.

use crate::app::state::AppState;

/// Render the empty-input notice (if `state.show_empty_input_notice` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_empty_input_notice {
        return;
    }

    egui::Window::new("Missing rule")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label("Please enter an access rule to analyze.");
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    state.show_empty_input_notice = false;
                }
            });
        });
}
