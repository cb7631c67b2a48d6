// RuleScope - platform/mod.rs
//
// Platform layer: directory resolution and config.toml loading.
// Dependencies: util layer.
// Must NOT depend on: ui, app.

pub mod config;
