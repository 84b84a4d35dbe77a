//! Shared constants: default tunables, DOM selectors, and class names.

// ── Scroll ──────────────────────────────────────────────────────

/// Sections count as current this many pixels before their top edge.
pub const NAV_OFFSET_PX: f64 = 100.0;

/// Scroll offset past which the back-to-top button is shown.
pub const BACK_TO_TOP_PX: f64 = 300.0;

/// Scroll offset past which the sidebar may become sticky.
pub const STICKY_MIN_PX: f64 = 100.0;

// ── Reveal / counters ───────────────────────────────────────────

/// Visible-area fraction that reveals a fade/slide element.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Counters start only once fully visible.
pub const COUNTER_THRESHOLD: f64 = 1.0;

/// Number of linear interpolation steps per counter.
pub const COUNTER_STEPS: u32 = 100;

/// Delay between counter steps, in milliseconds.
pub const COUNTER_TICK_MS: u32 = 10;

// ── Timers ──────────────────────────────────────────────────────

/// Period of the trail-spawning interval while the pointer rests.
pub const TRAIL_INTERVAL_MS: u32 = 50;

/// Lifetime of a single trail element.
pub const TRAIL_LIFETIME_MS: u32 = 500;

/// Fade-out time of the loading splash before removal.
pub const LOADING_FADE_MS: u32 = 500;

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the dark mode preference.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Stored value meaning "dark mode on".
pub const DARK_MODE_ENABLED: &str = "enabled";

/// Stored value written when dark mode is switched off. The key is never removed.
pub const DARK_MODE_CLEARED: &str = "null";

// ── Selectors ───────────────────────────────────────────────────

pub const SEL_DARK_MODE_TOGGLE: &str = ".dark-mode-toggle";
pub const SEL_HAMBURGER: &str = ".hamburger-menu";
pub const SEL_VERTICAL_NAV: &str = ".vertical-nav";
pub const SEL_NAV_ITEMS: &str = ".vertical-nav li";
pub const SEL_NAV_INDICATOR: &str = ".nav-indicator";
pub const SEL_SERVICE_CARD: &str = ".service-card";
pub const SEL_SECTIONS: &str = "section[id]";
pub const SEL_FADE: &str = ".fade-on-scroll";
pub const SEL_SLIDE: &str = ".slide-on-scroll";
pub const ID_BACK_TO_TOP: &str = "back-to-top";
pub const SEL_ACCORDION_ITEM: &str = ".accordion-item";
pub const SEL_ACCORDION_HEADER: &str = ".accordion-header";
pub const SEL_COUNTER: &str = ".counter-number";
pub const SEL_SIDEBAR: &str = ".sidebar";
pub const SEL_ANCHORS: &str = "a[href^=\"#\"]";
pub const SEL_LOADING: &str = ".loading-screen";
pub const ID_CONFIG: &str = "sitewire-config";

// ── Classes ─────────────────────────────────────────────────────

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_DARK_MODE: &str = "dark-mode";
pub const CLASS_FADE_IN: &str = "fade-in";
pub const CLASS_SLIDE_IN: &str = "slide-in";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_STICKY: &str = "sticky";
pub const CLASS_LOADING: &str = "loading-screen";
pub const CLASS_SPINNER: &str = "loading-spinner";
pub const CLASS_CURSOR_DOT: &str = "cursor-dot";
pub const CLASS_CURSOR_TRAIL: &str = "cursor-trail";

/// CSS custom property carrying the active nav item's index.
pub const NAV_INDEX_PROPERTY: &str = "--index";
