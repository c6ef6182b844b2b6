//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the board form widgets and the session dialog while
//! reading/writing shared state from Leptos context providers.

pub mod board_dimensions;
pub mod preset_selector;
pub mod session_monitor;
pub mod session_warning_modal;
pub mod theme_toggle;
