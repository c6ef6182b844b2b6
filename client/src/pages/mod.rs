//! Route-level page components.

pub mod board_setup;
