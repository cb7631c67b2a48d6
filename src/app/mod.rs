// RuleScope - app/mod.rs
//
// Application layer: state management and session persistence.
// Dependencies: bridge layer.
// Must NOT depend on: ui, platform specifics.

pub mod session;
pub mod state;
