//! Runtime configuration: site profile, feature switches, and tunables.
//!
//! A page may embed `<script type="application/json" id="sitewire-config">`
//! to override any field; everything missing falls back to the defaults in
//! [`crate::consts`]. Both sites share one binary and differ only in
//! [`Profile`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::{Result, SitewireError};

/// Named feature preset matching one of the two sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Every behavior, including splash, cursor trail, accordion and counters.
    #[default]
    Full,
    /// Navigation, cards, scroll effects and back-to-top only.
    Core,
}

/// Which installers run at boot.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub dark_mode: bool,
    pub mobile_menu: bool,
    pub service_cards: bool,
    pub scroll_effects: bool,
    pub back_to_top: bool,
    pub anchors: bool,
    pub loading_screen: bool,
    pub cursor: bool,
    pub accordion: bool,
    pub counters: bool,
    pub sticky_sidebar: bool,
}

impl Features {
    #[must_use]
    pub fn for_profile(profile: Profile) -> Self {
        let full = profile == Profile::Full;
        Self {
            dark_mode: true,
            mobile_menu: true,
            service_cards: true,
            scroll_effects: true,
            back_to_top: true,
            anchors: true,
            loading_screen: full,
            cursor: full,
            accordion: full,
            counters: full,
            sticky_sidebar: full,
        }
    }
}

/// Sparse per-feature overrides layered on top of the profile preset.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct FeatureOverrides {
    pub dark_mode: Option<bool>,
    pub mobile_menu: Option<bool>,
    pub service_cards: Option<bool>,
    pub scroll_effects: Option<bool>,
    pub back_to_top: Option<bool>,
    pub anchors: Option<bool>,
    pub loading_screen: Option<bool>,
    pub cursor: Option<bool>,
    pub accordion: Option<bool>,
    pub counters: Option<bool>,
    pub sticky_sidebar: Option<bool>,
}

impl FeatureOverrides {
    fn apply(&self, base: Features) -> Features {
        Features {
            dark_mode: self.dark_mode.unwrap_or(base.dark_mode),
            mobile_menu: self.mobile_menu.unwrap_or(base.mobile_menu),
            service_cards: self.service_cards.unwrap_or(base.service_cards),
            scroll_effects: self.scroll_effects.unwrap_or(base.scroll_effects),
            back_to_top: self.back_to_top.unwrap_or(base.back_to_top),
            anchors: self.anchors.unwrap_or(base.anchors),
            loading_screen: self.loading_screen.unwrap_or(base.loading_screen),
            cursor: self.cursor.unwrap_or(base.cursor),
            accordion: self.accordion.unwrap_or(base.accordion),
            counters: self.counters.unwrap_or(base.counters),
            sticky_sidebar: self.sticky_sidebar.unwrap_or(base.sticky_sidebar),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub profile: Profile,
    pub features: FeatureOverrides,
    pub nav_offset_px: f64,
    pub back_to_top_px: f64,
    pub sticky_min_px: f64,
    pub reveal_threshold: f64,
    pub counter_threshold: f64,
    pub counter_steps: u32,
    pub counter_tick_ms: u32,
    pub trail_interval_ms: u32,
    pub trail_lifetime_ms: u32,
    pub loading_fade_ms: u32,
    pub storage_key: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: Profile::Full,
            features: FeatureOverrides::default(),
            nav_offset_px: consts::NAV_OFFSET_PX,
            back_to_top_px: consts::BACK_TO_TOP_PX,
            sticky_min_px: consts::STICKY_MIN_PX,
            reveal_threshold: consts::REVEAL_THRESHOLD,
            counter_threshold: consts::COUNTER_THRESHOLD,
            counter_steps: consts::COUNTER_STEPS,
            counter_tick_ms: consts::COUNTER_TICK_MS,
            trail_interval_ms: consts::TRAIL_INTERVAL_MS,
            trail_lifetime_ms: consts::TRAIL_LIFETIME_MS,
            loading_fade_ms: consts::LOADING_FADE_MS,
            storage_key: consts::DARK_MODE_KEY.to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`SitewireError::Config`] for malformed JSON and
    /// [`SitewireError::ConfigValue`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration from an optional embedded document; absent or blank means defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_json`].
    pub fn from_embedded(raw: Option<&str>) -> Result<Self> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(json) => Self::from_json(json),
        }
    }

    /// Effective feature set: the profile preset with overrides applied.
    #[must_use]
    pub fn features(&self) -> Features {
        self.features.apply(Features::for_profile(self.profile))
    }

    /// The configured log level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`SitewireError::ConfigValue`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        check_fraction("reveal_threshold", self.reveal_threshold)?;
        check_fraction("counter_threshold", self.counter_threshold)?;
        if self.counter_steps == 0 {
            return Err(SitewireError::ConfigValue { field: "counter_steps", reason: "must be at least 1".to_owned() });
        }
        for (field, value) in [
            ("nav_offset_px", self.nav_offset_px),
            ("back_to_top_px", self.back_to_top_px),
            ("sticky_min_px", self.sticky_min_px),
        ] {
            if !value.is_finite() {
                return Err(SitewireError::ConfigValue { field, reason: format!("must be finite, got {value}") });
            }
        }
        if self.storage_key.is_empty() {
            return Err(SitewireError::ConfigValue { field: "storage_key", reason: "must not be empty".to_owned() });
        }
        Ok(())
    }
}

fn check_fraction(field: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SitewireError::ConfigValue { field, reason: format!("must be within 0..=1, got {value}") })
    }
}
