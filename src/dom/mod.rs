//! Browser bindings: locate page elements and wire events into the state machines.
//!
//! ARCHITECTURE
//! ============
//! Each installer looks up the elements its feature needs and returns early
//! (logged at debug) when they are absent. State shared between a listener
//! and its installer lives in `Rc<RefCell<_>>`; listeners stay attached for
//! the lifetime of the page, so their closures are leaked with `forget`.

pub mod effects;
pub mod reveal;
pub mod scroll;
pub mod toggles;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::config::Config;
use crate::error::{Result, SitewireError};

/// Handles to the global page objects.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
}

impl Page {
    /// # Errors
    ///
    /// Fails outside a browser, or before `<body>` exists.
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or(SitewireError::NoWindow)?;
        let document = window.document().ok_or(SitewireError::NoDocument)?;
        let body = document.body().ok_or(SitewireError::NoBody)?;
        Ok(Self { window, document, body })
    }

    /// First element matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`SitewireError::Js`] for an invalid selector.
    pub fn query(&self, selector: &str) -> Result<Option<Element>> {
        Ok(self.document.query_selector(selector)?)
    }

    /// All elements matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`SitewireError::Js`] for an invalid selector.
    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>> {
        let list = self.document.query_selector_all(selector)?;
        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .collect())
    }

    /// Vertical scroll offset of the window, `None` (logged) if the read fails.
    #[must_use]
    pub fn scroll_y(&self) -> Option<f64> {
        self.window.scroll_y().warn_on_err("scroll offset")
    }
}

/// Log a failed DOM call at warn and hand back the success value, if any.
pub(crate) trait WarnOnErr<T> {
    fn warn_on_err(self, what: &str) -> Option<T>;
}

impl<T> WarnOnErr<T> for std::result::Result<T, JsValue> {
    fn warn_on_err(self, what: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("{what}: {err:?}");
                None
            }
        }
    }
}

/// Attach `handler` to `target` for the rest of the page's life.
///
/// # Errors
///
/// Returns [`SitewireError::Js`] if the listener cannot be registered.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    result.warn_on_err("class update");
}

/// Flip `class` on `el`, returning whether it is now present.
pub fn toggle_class(el: &Element, class: &str) -> bool {
    el.class_list()
        .toggle(class)
        .warn_on_err("class toggle")
        .unwrap_or(false)
}

/// Set an inline style property on `el`, if it is an HTML element.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style()
            .set_property(property, value)
            .warn_on_err("style update");
    }
}

/// Run every installer enabled in `config`, continuing past failures.
pub fn install_all(page: &Page, config: &Config) {
    let features = config.features();
    let installers: [(&str, bool, fn(&Page, &Config) -> Result<()>); 11] = [
        ("loading screen", features.loading_screen, effects::install_loading_screen),
        ("dark mode", features.dark_mode, toggles::install_dark_mode),
        ("mobile menu", features.mobile_menu, toggles::install_mobile_menu),
        ("service cards", features.service_cards, toggles::install_service_cards),
        ("scroll", features.scroll_effects || features.back_to_top || features.sticky_sidebar, scroll::install),
        ("reveal", features.scroll_effects, reveal::install_reveals),
        ("cursor", features.cursor, effects::install_cursor),
        ("accordion", features.accordion, toggles::install_accordion),
        ("counters", features.counters, effects::install_counters),
        ("back to top", features.back_to_top, toggles::install_back_to_top),
        ("anchors", features.anchors, toggles::install_anchors),
    ];
    let mut installed = 0;
    for (name, enabled, install) in installers {
        if !enabled {
            log::debug!("{name}: disabled");
            continue;
        }
        match install(page, config) {
            Ok(()) => installed += 1,
            Err(err) => log::warn!("{name}: {err}"),
        }
    }
    log::info!("sitewire: {installed} feature(s) installed ({:?} profile)", config.profile);
}
