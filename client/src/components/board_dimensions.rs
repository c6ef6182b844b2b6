//! Width/height fields, unit selector, and preset buttons for a board.

use leptos::html;
use leptos::prelude::*;
use widgets::units::Unit;

use crate::components::preset_selector::PresetSelector;
use crate::state::form::{BoardForm, Field};
use crate::util::dom::write_and_notify;

pub const WIDTH_INPUT_ID: &str = "board_width";
pub const HEIGHT_INPUT_ID: &str = "board_height";
pub const UNIT_SELECT_ID: &str = "unit_selector";

/// Reads and writes the `RwSignal<BoardForm>` context.
#[component]
pub fn BoardDimensions() -> impl IntoView {
    let form = expect_context::<RwSignal<BoardForm>>();
    let width_ref = NodeRef::<html::Input>::new();
    let height_ref = NodeRef::<html::Input>::new();

    let on_pick = Callback::new(move |key: &'static str| {
        let mut written = None;
        form.update(|f| written = f.apply_preset(key));
        if let Some((width, height)) = written {
            write_and_notify(&width_ref, &width);
            write_and_notify(&height_ref, &height);
        }
    });

    view! {
        <div class="board-dimensions">
            <PresetSelector on_pick=on_pick/>

            <div class="row">
                <label class="form-label" for=UNIT_SELECT_ID>"Unidad de medida"</label>
                <select
                    id=UNIT_SELECT_ID
                    class="form-select"
                    on:change=move |ev| form.update(|f| f.change_unit(&event_target_value(&ev)))
                >
                    {Unit::ALL
                        .into_iter()
                        .map(|unit| {
                            view! {
                                <option value=unit.code() selected=move || form.with(|f| f.unit == unit)>
                                    {unit.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="row">
                <DimensionField field=Field::Width input_id=WIDTH_INPUT_ID label="Ancho del tablero" input_ref=width_ref/>
                <DimensionField field=Field::Height input_id=HEIGHT_INPUT_ID label="Alto del tablero" input_ref=height_ref/>
            </div>
        </div>
    }
}

#[component]
fn DimensionField(
    field: Field,
    input_id: &'static str,
    label: &'static str,
    input_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let form = expect_context::<RwSignal<BoardForm>>();
    let value = move || {
        form.with(|f| match field {
            Field::Width => f.width.clone(),
            Field::Height => f.height.clone(),
        })
    };
    let error = move || {
        form.with(|f| match field {
            Field::Width => f.width_error.clone(),
            Field::Height => f.height_error.clone(),
        })
    };

    view! {
        <div class="col dimension-field">
            <label class="form-label" for=input_id>{label}</label>
            <input
                id=input_id
                type="number"
                step="0.01"
                min="0"
                class="form-control"
                class:is-invalid=move || error().is_some()
                node_ref=input_ref
                prop:value=value
                on:input=move |ev| form.update(|f| f.edit(field, event_target_value(&ev)))
                on:change=move |_| form.update(|f| f.validate(field))
            />
            {move || error().map(|msg| view! { <div class="invalid-feedback">{msg}</div> })}
        </div>
    }
}
