// RuleScope - ui/panels/input.rs
//
// Rule entry section: multiline text box, example buttons, and the
// Analyze / Clear actions.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;

/// Render the rule input section (top of the central panel).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Access rule");
    ui.add_space(4.0);

    ui.add(
        egui::TextEdit::multiline(&mut state.rule_text)
            .desired_rows(theme::INPUT_ROWS)
            .desired_width(f32::INFINITY)
            .font(egui::TextStyle::Monospace)
            .hint_text("user admin AND hour >= 9 AND hour <= 17"),
    );

    ui.add_space(6.0);

    // Example buttons: four valid rules plus one that the analyzer rejects,
    // kept around to demonstrate failure reporting.
    ui.horizontal_wrapped(|ui| {
        ui.strong("Examples:");
        for (i, example) in constants::EXAMPLE_RULES.iter().enumerate() {
            let button = ui
                .button(format!("Example {}", i + 1))
                .on_hover_text(*example);
            if button.clicked() {
                state.load_example(example);
            }
        }

        let bad = egui::Button::new(
            egui::RichText::new("Bad example").color(theme::BUTTON_TEXT),
        )
        .fill(theme::DESTRUCTIVE_BUTTON_BG);
        if ui
            .add(bad)
            .on_hover_text(constants::INVALID_EXAMPLE_RULE)
            .clicked()
        {
            state.load_example(constants::INVALID_EXAMPLE_RULE);
        }
    });

    ui.add_space(6.0);

    ui.horizontal(|ui| {
        let analyze = egui::Button::new(
            egui::RichText::new("Analyze Rule")
                .color(theme::BUTTON_TEXT)
                .strong(),
        )
        .fill(theme::ANALYZE_BUTTON_BG)
        .min_size(egui::vec2(120.0, 32.0));
        if ui.add(analyze).on_hover_text("Ctrl+Enter").clicked() {
            state.request_analyze();
        }

        let clear = egui::Button::new(
            egui::RichText::new("Clear").color(theme::BUTTON_TEXT),
        )
        .fill(theme::DESTRUCTIVE_BUTTON_BG)
        .min_size(egui::vec2(80.0, 32.0));
        if ui.add(clear).clicked() {
            state.clear_all();
        }
    });
}
