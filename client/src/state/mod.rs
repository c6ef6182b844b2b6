//! Reactive state shared through Leptos context.
//!
//! DESIGN
//! ======
//! State structs are plain data wrapped in `RwSignal` by their owners.
//! Transitions delegate to the `widgets` model so they can be tested
//! without a browser.

pub mod form;
pub mod session;
