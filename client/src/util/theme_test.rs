#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_persisted_is_none_outside_the_browser() {
    assert_eq!(read_persisted(), None);
}

#[test]
fn os_preference_is_light_outside_the_browser() {
    assert!(!os_prefers_dark());
}

#[test]
fn resolve_current_falls_back_to_profile_then_light() {
    assert_eq!(resolve_current(ProfileTheme::Dark), Theme::Dark);
    assert_eq!(resolve_current(ProfileTheme::Light), Theme::Light);
    assert_eq!(resolve_current(ProfileTheme::Auto), Theme::Light);
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn apply_helpers_are_noops_but_callable() {
    apply_attribute(Theme::Dark);
    persist(Theme::Light);
    apply(Theme::Dark);
}

#[test]
fn init_sets_signal_to_resolved_theme() {
    let theme = RwSignal::new(Theme::Light);
    init(theme, ProfileTheme::Dark);
    assert_eq!(theme.get_untracked(), Theme::Dark);
}
