use super::*;

#[test]
fn default_form_is_empty_in_centimeters() {
    let form = BoardForm::default();
    assert_eq!(form.unit, Unit::Centimeter);
    assert!(form.width.is_empty());
    assert_eq!(form.selection.active(), None);
}

#[test]
fn apply_preset_in_meters_writes_converted_values() {
    let mut form = BoardForm::default();
    form.change_unit("m");
    let written = form.apply_preset("mdf-122x244");
    assert_eq!(written, Some(("1.22".to_owned(), "2.44".to_owned())));
    assert_eq!(form.width, "1.22");
    assert_eq!(form.height, "2.44");
    assert!(form.selection.is_active("mdf-122x244"));
}

#[test]
fn apply_preset_in_inches_rounds_to_two_decimals() {
    let mut form = BoardForm::default();
    form.change_unit("in");
    form.apply_preset("osb-122x244");
    assert_eq!(form.width, "48.03");
    assert_eq!(form.height, "96.06");
}

#[test]
fn apply_unknown_preset_leaves_fields_alone() {
    let mut form = BoardForm::default();
    form.edit(Field::Width, "10".into());
    assert_eq!(form.apply_preset("custom"), None);
    assert_eq!(form.width, "10");
}

#[test]
fn editing_width_after_preset_clears_every_active_marker() {
    let mut form = BoardForm::default();
    form.apply_preset("mdf-183x244");
    form.edit(Field::Width, "180".into());
    assert!(form.controls().iter().all(|control| !control.active));
}

#[test]
fn changing_unit_clears_selection_and_relabels_controls() {
    let mut form = BoardForm::default();
    form.apply_preset("osb-122x244");
    form.change_unit("m");
    let controls = form.controls();
    assert!(controls.iter().all(|control| !control.active));
    assert_eq!(controls[0].text, "OSB (1.22×2.44m)");
    // Field text is not converted on unit change.
    assert_eq!(form.width, "122");
}

#[test]
fn unknown_unit_code_falls_back_to_centimeters() {
    let mut form = BoardForm::default();
    form.change_unit("yd");
    assert_eq!(form.unit, Unit::Centimeter);
}

#[test]
fn validate_sets_and_clears_field_errors() {
    let mut form = BoardForm::default();
    form.validate(Field::Height);
    assert_eq!(form.height_error.as_deref(), Some("ingresa un valor"));
    form.edit(Field::Height, "244".into());
    form.validate(Field::Height);
    assert_eq!(form.height_error, None);
    assert_eq!(form.width_error, None);
}

#[test]
fn prefilled_restores_matching_preset() {
    let form = BoardForm::prefilled(Some("1.52".into()), Some("2.44".into()), Some("m".into()));
    assert_eq!(form.unit, Unit::Meter);
    assert_eq!(form.selection.active(), Some("tablero-152x244"));
}

#[test]
fn prefilled_without_match_has_no_selection() {
    let form = BoardForm::prefilled(Some("100".into()), None, None);
    assert_eq!(form.width, "100");
    assert_eq!(form.selection.active(), None);
}
