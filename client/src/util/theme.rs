//! Theme initialization, toggle, and OS preference tracking.
//!
//! Reads the explicit choice from `localStorage`, applies a `data-theme`
//! attribute to the `<html>` element, and writes back only on an explicit
//! toggle. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort: when it is disabled the theme still resolves
//! from the profile and OS preference, and toggles are simply not
//! remembered. SSR paths no-op to keep server rendering deterministic.

use leptos::prelude::*;
use widgets::theme::{ProfileTheme, Theme, resolve};
#[cfg(feature = "hydrate")]
use widgets::theme::{DARK_SCHEME_QUERY, STORAGE_KEY, THEME_ATTRIBUTE, os_preference_changed};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Raw persisted choice, if storage is available and holds one.
pub fn read_persisted() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Whether the operating system currently prefers a dark color scheme.
pub fn os_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Effective theme for this page load.
pub fn resolve_current(profile: ProfileTheme) -> Theme {
    resolve(read_persisted().as_deref(), profile, os_prefers_dark())
}

/// Set the `data-theme` attribute without remembering the choice.
pub fn apply_attribute(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute(THEME_ATTRIBUTE, theme.code());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Remember an explicit choice. Failures are ignored.
pub fn persist(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, theme.code());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Apply and persist.
pub fn apply(theme: Theme) {
    apply_attribute(theme);
    persist(theme);
}

/// Flip the theme, apply it, and persist it. Returns the new theme.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    log::debug!("theme toggled to {}", next.code());
    next
}

/// Resolve and apply the page-load theme, then follow OS changes for as
/// long as no explicit choice is stored.
pub fn init(theme: RwSignal<Theme>, profile: ProfileTheme) {
    let resolved = resolve_current(profile);
    apply_attribute(resolved);
    theme.set(resolved);
    watch_os_preference(theme);
}

fn watch_os_preference(theme: RwSignal<Theme>) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, closure::Closure};

        let Some(mq) = web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten()) else {
            return;
        };
        let cb = Closure::wrap(Box::new(move |ev: web_sys::MediaQueryListEvent| {
            if let Some(next) = os_preference_changed(read_persisted().as_deref(), ev.matches()) {
                log::debug!("following OS color scheme: {}", next.code());
                apply_attribute(next);
                theme.set(next);
            }
        }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
        if mq.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref()).is_ok() {
            // Lives for the page.
            cb.forget();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
