//! Modal warning that the session is about to expire.
//!
//! Static: no backdrop click or Escape dismissal. The user either
//! continues or logs out, or any activity elsewhere on the page dismisses
//! it through the monitor. Pointer and key events inside the dialog itself
//! are not counted as activity, so they do not dismiss it before a button
//! click lands.

use leptos::prelude::*;
use widgets::session::format_remaining;

pub const SESSION_MODAL_ID: &str = "session-warning-modal";

#[component]
pub fn SessionWarningModal(
    #[prop(into)] remaining_secs: Signal<u64>,
    on_stay: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="session-warning-modal__backdrop">
            <div
                id=SESSION_MODAL_ID
                class="session-warning-modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="session-warning-title"
            >
                <div class="session-warning-modal__header">
                    <h5 id="session-warning-title">"⏱️ Sesión por expirar"</h5>
                </div>
                <div class="session-warning-modal__body">
                    <p>
                        "Tu sesión expirará en "
                        <strong id="session-time-remaining">{move || format_remaining(remaining_secs.get())}</strong>
                        " debido a inactividad."
                    </p>
                    <p>"¿Deseas continuar trabajando?"</p>
                </div>
                <div class="session-warning-modal__footer">
                    <button type="button" class="btn btn-primary" id="session-stay-active" on:click=move |_| on_stay.run(())>
                        "Continuar"
                    </button>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        id="session-logout-now"
                        on:click=move |_| on_logout.run(())
                    >
                        "Cerrar sesión ahora"
                    </button>
                </div>
            </div>
        </div>
    }
}
