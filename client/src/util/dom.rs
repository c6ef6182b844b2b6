//! Small DOM helpers for form fields.

use leptos::html;
use leptos::prelude::*;

/// Write `value` into the input and fire a bubbling `change` event so
/// validation listeners on the field or its ancestors run.
///
/// Does nothing when the input is not mounted.
pub fn write_and_notify(input: &NodeRef<html::Input>, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = input.get_untracked() else {
            return;
        };
        el.set_value(value);
        let init = web_sys::EventInit::new();
        init.set_bubbles(true);
        if let Ok(ev) = web_sys::Event::new_with_event_init_dict("change", &init) {
            let _ = el.dispatch_event(&ev);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (input, value);
    }
}
