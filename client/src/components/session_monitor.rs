//! Page-level host for the inactivity session monitor.
//!
//! Renders nothing until the warning is due. On hydration it reads the
//! idle limit from the page configuration; a missing or zero limit leaves
//! the monitor off for the whole page.

use leptos::prelude::*;

use crate::components::session_warning_modal::SessionWarningModal;
use crate::state::session::SessionView;
#[cfg(feature = "hydrate")]
use crate::util::session_runtime::SessionRuntime;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[component]
pub fn SessionMonitor() -> impl IntoView {
    let view_state = RwSignal::new(SessionView::default());

    #[cfg(feature = "hydrate")]
    let runtime = StoredValue::new_local(None::<Rc<SessionRuntime>>);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if runtime.with_value(Option::is_some) {
            return;
        }
        let Some(config) = crate::util::page_config::read().session() else {
            log::debug!("session monitor disabled for this page");
            return;
        };
        runtime.set_value(Some(SessionRuntime::install(config, view_state)));
    });

    let on_stay = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        runtime.with_value(|rt| {
            if let Some(rt) = rt {
                rt.stay_active();
            }
        });
    });
    let on_logout = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        runtime.with_value(|rt| {
            if let Some(rt) = rt {
                rt.logout_now();
            }
        });
    });

    view! {
        <Show when=move || view_state.get().visible>
            <SessionWarningModal
                remaining_secs=Signal::derive(move || view_state.get().remaining_secs)
                on_stay=on_stay
                on_logout=on_logout
            />
        </Show>
    }
}
