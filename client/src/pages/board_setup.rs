//! Board setup page: enter the sheet size an optimization will cut from.
//!
//! Query parameters `width`, `height`, and `unit` pre-fill the form, which
//! is how the host links back to edit an existing optimization.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::board_dimensions::BoardDimensions;
use crate::state::form::BoardForm;

#[component]
pub fn BoardSetupPage() -> impl IntoView {
    let query = use_query_map();
    let form = query.with_untracked(|params| {
        BoardForm::prefilled(params.get("width"), params.get("height"), params.get("unit"))
    });
    let form = RwSignal::new(form);
    provide_context(form);

    view! {
        <section class="card board-setup">
            <div class="card-header">
                <h2>"Nueva optimización"</h2>
            </div>
            <div class="card-body">
                <BoardDimensions/>
            </div>
        </section>
    }
}
