use super::*;

#[test]
fn fragment_is_its_own_selector() {
    assert_eq!(scroll_target("#about"), Some("#about"));
}

#[test]
fn bare_hash_keeps_default() {
    assert_eq!(scroll_target("#"), None);
}

#[test]
fn non_fragment_keeps_default() {
    assert_eq!(scroll_target("/about#team"), None);
    assert_eq!(scroll_target(""), None);
}
