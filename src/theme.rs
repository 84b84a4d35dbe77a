//! Dark mode preference.
//!
//! The preference lives under one `localStorage` key. Only the exact string
//! `"enabled"` turns dark mode on; switching it off writes the string
//! `"null"` rather than removing the key, which existing visitors' storage
//! already contains.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{DARK_MODE_CLEARED, DARK_MODE_ENABLED};

/// Whether a stored value means dark mode is on.
#[must_use]
pub fn is_enabled(stored: Option<&str>) -> bool {
    stored == Some(DARK_MODE_ENABLED)
}

/// The string persisted for a given state.
#[must_use]
pub fn stored_value(enabled: bool) -> &'static str {
    if enabled { DARK_MODE_ENABLED } else { DARK_MODE_CLEARED }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DarkMode {
    enabled: bool,
}

impl DarkMode {
    #[must_use]
    pub fn from_stored(stored: Option<&str>) -> Self {
        Self { enabled: is_enabled(stored) }
    }

    /// State at load: on if the markup already carries the class or storage says so.
    #[must_use]
    pub fn from_page(stored: Option<&str>, class_present: bool) -> Self {
        Self { enabled: class_present || is_enabled(stored) }
    }

    #[must_use]
    pub fn enabled(self) -> bool {
        self.enabled
    }

    /// Flip the state and return the value to persist.
    pub fn toggle(&mut self) -> &'static str {
        self.enabled = !self.enabled;
        stored_value(self.enabled)
    }
}
