// RuleScope - bridge/mod.rs
//
// Process bridge layer: everything between the rule text box and the
// external analyzer binary.
// Dependencies: util layer, standard library process/pipes, regex.
// Must NOT depend on: ui, app, egui.

pub mod process;
pub mod report;
pub mod resolve;
