use super::*;

// =============================================================
// Theme::resolve
// =============================================================

#[test]
fn resolve_without_stored_value_follows_os_preference() {
    assert_eq!(Theme::resolve(None, true), Theme::Dark);
    assert_eq!(Theme::resolve(None, false), Theme::Light);
}

#[test]
fn resolve_stored_value_overrides_os_preference() {
    assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
    assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
}

#[test]
fn resolve_unknown_stored_value_means_light() {
    assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Light);
}

#[test]
fn resolve_empty_stored_value_is_treated_as_unset() {
    assert_eq!(Theme::resolve(Some(""), true), Theme::Dark);
    assert_eq!(Theme::resolve(Some(""), false), Theme::Light);
}

// =============================================================
// Toggle and presentation
// =============================================================

#[test]
fn toggle_is_its_own_inverse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn storage_values_round_trip_through_resolve() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::resolve(Some(theme.as_str()), false), theme);
        assert_eq!(Theme::resolve(Some(theme.as_str()), true), theme);
    }
}

#[test]
fn only_dark_sets_data_attribute() {
    assert_eq!(Theme::Dark.data_attribute(), Some("dark"));
    assert_eq!(Theme::Light.data_attribute(), None);
}

#[test]
fn toggle_icon_shows_sun_in_dark_mode() {
    assert_eq!(Theme::Dark.toggle_icon(), "fas fa-sun");
    assert_eq!(Theme::Light.toggle_icon(), "fas fa-moon");
}
