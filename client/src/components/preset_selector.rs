//! One button per catalog preset, relabeled for the active unit.
//!
//! Buttons carry the raw centimeter size in `data-width-cm` /
//! `data-height-cm` so other scripts can match field values back to a
//! preset without knowing the catalog.

use leptos::prelude::*;
use widgets::presets::{PresetControl, format_number};

use crate::state::form::BoardForm;

pub const PRESET_CONTAINER_ID: &str = "preset-container";

#[component]
pub fn PresetSelector(on_pick: Callback<&'static str>) -> impl IntoView {
    let form = expect_context::<RwSignal<BoardForm>>();
    let controls = Memo::new(move |_| form.with(BoardForm::controls));

    view! {
        <div id=PRESET_CONTAINER_ID class="preset-selector">
            <label class="form-label">"📏 Medidas predefinidas:"</label>
            {move || {
                controls
                    .get()
                    .into_iter()
                    .map(|control| preset_button(control, on_pick))
                    .collect_view()
            }}
        </div>
    }
}

fn preset_button(control: PresetControl, on_pick: Callback<&'static str>) -> impl IntoView {
    let key = control.key;
    view! {
        <button
            type="button"
            class="preset-btn"
            class:active=control.active
            data-preset=key
            data-width-cm=format_number(control.width_cm)
            data-height-cm=format_number(control.height_cm)
            on:click=move |_| on_pick.run(key)
        >
            {control.text}
        </button>
    }
}
