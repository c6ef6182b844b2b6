//! Board dimension form: field text, active unit, and preset selection.

use widgets::dimensions::{format_value, parse_dimension};
use widgets::presets::{self, PresetControl};
use widgets::selection::PresetSelection;
use widgets::units::Unit;

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Which of the two target fields an operation refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Width,
    Height,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardForm {
    pub width: String,
    pub height: String,
    pub unit: Unit,
    pub selection: PresetSelection,
    pub width_error: Option<String>,
    pub height_error: Option<String>,
}

impl BoardForm {
    /// Form seeded from existing values, e.g. query parameters when the
    /// user returns to edit a saved optimization. A matching preset is
    /// marked active.
    pub fn prefilled(width: Option<String>, height: Option<String>, unit: Option<String>) -> Self {
        let mut form = Self {
            width: width.unwrap_or_default(),
            height: height.unwrap_or_default(),
            unit: unit.as_deref().map(Unit::from_code).unwrap_or_default(),
            ..Self::default()
        };
        if let (Ok(w), Ok(h)) = (parse_dimension(&form.width), parse_dimension(&form.height)) {
            form.selection.restore(w, h, form.unit);
        }
        form
    }

    /// Write a preset's converted size into both fields.
    ///
    /// Returns the new field text so the caller can mirror it into the DOM
    /// and notify change listeners.
    pub fn apply_preset(&mut self, key: &str) -> Option<(String, String)> {
        let dims = self.selection.select(key, self.unit)?;
        self.width = format_value(dims.width);
        self.height = format_value(dims.height);
        Some((self.width.clone(), self.height.clone()))
    }

    /// Direct user input into one of the fields.
    pub fn edit(&mut self, field: Field, raw: String) {
        match field {
            Field::Width => self.width = raw,
            Field::Height => self.height = raw,
        }
        self.selection.manual_edit();
    }

    pub fn change_unit(&mut self, code: &str) {
        self.unit = Unit::from_code(code);
        self.selection.unit_changed();
    }

    /// Re-run validation for `field`; runs on every change notification.
    pub fn validate(&mut self, field: Field) {
        let (raw, slot) = match field {
            Field::Width => (&self.width, &mut self.width_error),
            Field::Height => (&self.height, &mut self.height_error),
        };
        *slot = parse_dimension(raw).err().map(|err| err.to_string());
    }

    pub fn controls(&self) -> Vec<PresetControl> {
        presets::controls(self.unit, self.selection.active())
    }
}
