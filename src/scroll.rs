//! Scroll coordinator: active section, nav highlight, back-to-top and sticky sidebar.
//!
//! Every scroll event feeds the current offset plus a fresh layout snapshot
//! into [`ScrollTracker::on_scroll`], which returns the complete
//! [`ScrollFrame`] the DOM layer should present. The only state carried
//! between events is the previous offset used by the sticky sidebar.
//!
//! Section matching scans every section in document order without
//! short-circuiting, so when section ranges overlap the later one wins.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::Config;
use crate::consts;

/// Layout snapshot of one `section[id]`, read on every scroll event.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    /// Document offset of the section's top edge in CSS pixels.
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }
}

/// Thresholds driving a scroll pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub nav_offset: f64,
    pub back_to_top: f64,
    pub sticky_min: f64,
}

impl Default for ScrollMetrics {
    fn default() -> Self {
        Self {
            nav_offset: consts::NAV_OFFSET_PX,
            back_to_top: consts::BACK_TO_TOP_PX,
            sticky_min: consts::STICKY_MIN_PX,
        }
    }
}

impl From<&Config> for ScrollMetrics {
    fn from(config: &Config) -> Self {
        Self {
            nav_offset: config.nav_offset_px,
            back_to_top: config.back_to_top_px,
            sticky_min: config.sticky_min_px,
        }
    }
}

/// Everything the DOM layer applies after one scroll event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollFrame {
    /// Id of the current section, empty when no section contains the offset.
    pub current: String,
    /// Index of the single nav item to mark active.
    pub active_nav: Option<usize>,
    pub back_to_top_visible: bool,
    pub sidebar_sticky: bool,
}

/// Section containing `offset`, with ranges starting `nav_offset` above each top.
///
/// Returns the last match in document order, or `""` when nothing matches.
#[must_use]
pub fn active_section(offset: f64, nav_offset: f64, sections: &[SectionBox]) -> &str {
    let mut current = "";
    for section in sections {
        let top = section.top - nav_offset;
        if offset >= top && offset < top + section.height {
            current = section.id.as_str();
        }
    }
    current
}

/// Index of the first nav href equal to `#<current>`.
///
/// An empty `current` selects a bare `#` link, if the nav has one.
#[must_use]
pub fn active_nav<S: AsRef<str>>(current: &str, hrefs: &[S]) -> Option<usize> {
    hrefs.iter().position(|href| {
        href.as_ref()
            .strip_prefix('#')
            .is_some_and(|fragment| fragment == current)
    })
}

/// Carries the previous offset between scroll events.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    metrics: ScrollMetrics,
    last_offset: f64,
}

impl ScrollTracker {
    #[must_use]
    pub fn new(metrics: ScrollMetrics) -> Self {
        Self { metrics, last_offset: 0.0 }
    }

    /// Compute the next frame from `offset` and the tracker's previous state.
    pub fn on_scroll<S: AsRef<str>>(&mut self, offset: f64, sections: &[SectionBox], hrefs: &[S]) -> ScrollFrame {
        let current = active_section(offset, self.metrics.nav_offset, sections);
        let active_nav = active_nav(current, hrefs);
        let sidebar_sticky = offset > self.last_offset && offset > self.metrics.sticky_min;
        self.last_offset = offset;
        ScrollFrame {
            current: current.to_owned(),
            active_nav,
            back_to_top_visible: offset > self.metrics.back_to_top,
            sidebar_sticky,
        }
    }
}
