//! Page behaviors for the portfolio and marketing sites.
//!
//! This crate is compiled to WebAssembly and runs in the browser. On load it
//! finds the page's sections, navigation, cards and reveal targets, and wires
//! scroll, intersection, click and pointer events to small state machines
//! whose output is a set of class and style changes.
//!
//! Every state machine is plain Rust and tested natively; the `hydrate`
//! feature adds the `web-sys` bindings in [`dom`] and the wasm entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scroll`] | Active section, nav highlight, back-to-top, sticky sidebar |
//! | [`reveal`] | One-shot reveal-on-intersection sets |
//! | [`group`] | Single-open toggle group (service cards, accordion) |
//! | [`counter`] | Counter target parsing and interpolation |
//! | [`theme`] | Dark mode preference encoding |
//! | [`cursor`] | Cursor dot and trail state |
//! | [`anchor`] | In-page anchor scroll targets |
//! | [`config`] | Profile, feature switches and tunables |
//! | [`error`] | Crate error type |
//! | [`consts`] | Defaults, selectors and class names |
//! | `dom` | Browser bindings (`hydrate` only) |

pub mod anchor;
pub mod config;
pub mod consts;
pub mod counter;
pub mod cursor;
pub mod error;
pub mod group;
pub mod reveal;
pub mod scroll;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "hydrate")]
fn embedded_config(document: &web_sys::Document) -> Option<String> {
    document
        .get_element_by_id(consts::ID_CONFIG)
        .and_then(|el| el.text_content())
}

#[cfg(feature = "hydrate")]
fn boot() {
    let page = match dom::Page::current() {
        Ok(page) => page,
        Err(err) => {
            log::warn!("sitewire: {err}");
            return;
        }
    };
    let raw = embedded_config(&page.document);
    let config = match config::Config::from_embedded(raw.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("sitewire: {err}; using defaults");
            config::Config::default()
        }
    };
    log::set_max_level(config.level().to_level_filter());
    dom::install_all(&page, &config);
}

/// Wasm entry point: install logging, then boot once the DOM is parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_err() {
        log::debug!("sitewire: logger already installed");
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("sitewire: no document");
        return;
    };
    if document.ready_state() != "loading" {
        boot();
        return;
    }
    if let Err(err) = dom::listen(&document, "DOMContentLoaded", |_| boot()) {
        log::warn!("sitewire: {err}");
    }
}
