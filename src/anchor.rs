//! In-page anchor links.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Selector for the element an `href="#..."` link should scroll to.
///
/// A bare `#` and anything not starting with `#` keep their default
/// navigation.
#[must_use]
pub fn scroll_target(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}
