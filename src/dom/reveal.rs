//! `IntersectionObserver` wiring for one-shot reveals.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::Config;
use crate::dom::{Page, set_class};
use crate::error::Result;
use crate::reveal::{IntersectionSample, RevealKind, RevealSet};

/// Observe `elements`, tracked by `set`, until each first intersects.
///
/// The observer reports at the set's threshold. On reveal the kind's class is
/// added, the element is unobserved, and `on_reveal` runs once for it. An
/// empty list installs nothing.
///
/// # Errors
///
/// Returns [`crate::error::SitewireError::Js`] if the observer cannot be created.
pub fn observe<F>(elements: Vec<Element>, set: RevealSet, mut on_reveal: F) -> Result<()>
where
    F: FnMut(&Element) + 'static,
{
    let kind = set.kind();
    let threshold = set.threshold();
    if elements.is_empty() {
        log::debug!("reveal: no {} elements", kind.selector());
        return Ok(());
    }

    let set = Rc::new(RefCell::new(set));
    let targets = Rc::new(elements);
    let cb_targets = Rc::clone(&targets);

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let samples: Vec<IntersectionSample> = entries
                .iter()
                .filter_map(|value| value.dyn_ref::<IntersectionObserverEntry>().cloned())
                .filter_map(|entry| {
                    let target = entry.target();
                    let index = cb_targets.iter().position(|el| *el == target)?;
                    Some(IntersectionSample::new(index, entry.is_intersecting(), entry.intersection_ratio()))
                })
                .collect();

            let reveals = set.borrow_mut().on_entries(&samples);
            for reveal in reveals {
                let Some(el) = cb_targets.get(reveal.target) else {
                    continue;
                };
                set_class(el, reveal.class, true);
                observer.unobserve(el);
                on_reveal(el);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for el in targets.iter() {
        observer.observe(el);
    }
    callback.forget();
    log::debug!("reveal: observing {} {} element(s)", targets.len(), kind.selector());
    Ok(())
}

/// Fade and slide reveals, each with its own observer.
///
/// # Errors
///
/// Fails if a query or observer creation fails.
pub fn install_reveals(page: &Page, config: &Config) -> Result<()> {
    for kind in [RevealKind::Fade, RevealKind::Slide] {
        let elements = page.query_all(kind.selector())?;
        let set = RevealSet::new(kind, elements.len(), config.reveal_threshold);
        observe(elements, set, |_| {})?;
    }
    Ok(())
}
