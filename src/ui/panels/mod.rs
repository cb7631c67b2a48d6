// RuleScope - ui/panels/mod.rs
//
// Individual UI panels, one module per region of the window.

pub mod about;
pub mod input;
pub mod notice;
pub mod result;
