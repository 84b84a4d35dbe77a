use super::*;

#[test]
fn only_enabled_string_turns_on() {
    assert!(is_enabled(Some("enabled")));
    assert!(!is_enabled(Some("null")));
    assert!(!is_enabled(Some("Enabled")));
    assert!(!is_enabled(Some("true")));
    assert!(!is_enabled(None));
}

#[test]
fn stored_values_are_literal_strings() {
    assert_eq!(stored_value(true), "enabled");
    assert_eq!(stored_value(false), "null");
}

#[test]
fn toggle_from_absent_writes_enabled() {
    let mut mode = DarkMode::from_stored(None);
    assert!(!mode.enabled());
    assert_eq!(mode.toggle(), "enabled");
    assert!(mode.enabled());
}

#[test]
fn toggle_twice_restores_enabled() {
    let mut mode = DarkMode::from_stored(Some("enabled"));
    let first = mode.toggle();
    let second = mode.toggle();
    assert_eq!(first, "null");
    assert_eq!(second, "enabled");
    assert!(mode.enabled());
}

#[test]
fn toggle_twice_from_absent_leaves_null_string() {
    let mut mode = DarkMode::from_stored(None);
    mode.toggle();
    assert_eq!(mode.toggle(), "null");
    assert_eq!(DarkMode::from_stored(Some("null")), DarkMode::from_stored(None));
}

#[test]
fn class_in_markup_counts_as_enabled() {
    assert!(DarkMode::from_page(None, true).enabled());
    assert!(DarkMode::from_page(Some("enabled"), false).enabled());
    assert!(!DarkMode::from_page(Some("null"), false).enabled());
}

#[test]
fn first_toggle_clears_class_from_markup() {
    let mut mode = DarkMode::from_page(None, true);
    assert_eq!(mode.toggle(), "null");
    assert!(!mode.enabled());
}
