//! Browser glue shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate web-sys calls from component logic. Each helper
//! compiles to a no-op outside the `hydrate` feature.

pub mod dom;
pub mod page_config;
#[cfg(feature = "hydrate")]
pub mod session_runtime;
pub mod theme;
