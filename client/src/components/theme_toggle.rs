//! Header button switching between light and dark.

use leptos::prelude::*;
use widgets::theme::Theme;

pub const THEME_TOGGLE_ID: &str = "theme-toggle";

/// Reads and writes the `RwSignal<Theme>` context.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <button
            id=THEME_TOGGLE_ID
            type="button"
            class="btn theme-toggle"
            on:click=move |_| theme.set(crate::util::theme::toggle(theme.get_untracked()))
            title="Cambiar tema"
        >
            {move || theme.get().icon()}
        </button>
    }
}
