// RuleScope - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Fill colour for the Analyze action button.
pub const ANALYZE_BUTTON_BG: Color32 = Color32::from_rgb(46, 204, 113); // Emerald

/// Fill colour for the Clear action and the deliberately-bad example button.
pub const DESTRUCTIVE_BUTTON_BG: Color32 = Color32::from_rgb(231, 76, 60); // Alizarin

/// Text colour used on filled action buttons.
pub const BUTTON_TEXT: Color32 = Color32::WHITE;

/// Colour for error text in the result area and status bar.
pub const ERROR_TEXT: Color32 = Color32::from_rgb(248, 113, 113); // Red 400

/// Colour for advisory/warning text.
pub const WARNING_TEXT: Color32 = Color32::from_rgb(253, 186, 116); // Orange 300

/// Layout constants.
pub const INPUT_ROWS: usize = 5;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;
