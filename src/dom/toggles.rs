//! Click-driven toggles: dark mode, mobile menu, single-open groups, back-to-top, anchors.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Storage};

use crate::anchor::scroll_target;
use crate::config::Config;
use crate::consts;
use crate::dom::{Page, WarnOnErr, listen, set_class, toggle_class};
use crate::error::Result;
use crate::group::SingleOpenGroup;
use crate::theme::DarkMode;

fn local_storage(page: &Page) -> Option<Storage> {
    match page.window.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("dark mode: localStorage unavailable: {err:?}");
            None
        }
    }
}

/// Apply the stored preference on top of the body's markup, then wire `.dark-mode-toggle`.
///
/// # Errors
///
/// Fails if the toggle query or listener registration fails.
pub fn install_dark_mode(page: &Page, config: &Config) -> Result<()> {
    let storage = local_storage(page);
    let stored = storage
        .as_ref()
        .and_then(|s| s.get_item(&config.storage_key).warn_on_err("dark mode read"))
        .flatten();
    let class_present = page.body.class_list().contains(consts::CLASS_DARK_MODE);
    let mode = Rc::new(RefCell::new(DarkMode::from_page(stored.as_deref(), class_present)));
    if mode.borrow().enabled() {
        set_class(&page.body, consts::CLASS_DARK_MODE, true);
    }

    let Some(toggle) = page.query(consts::SEL_DARK_MODE_TOGGLE)? else {
        log::debug!("dark mode: no toggle");
        return Ok(());
    };
    let body = page.body.clone();
    let key = config.storage_key.clone();
    listen(&toggle, "click", move |_| {
        let value = mode.borrow_mut().toggle();
        set_class(&body, consts::CLASS_DARK_MODE, mode.borrow().enabled());
        if let Some(storage) = &storage {
            storage.set_item(&key, value).warn_on_err("dark mode write");
        }
    })
}

/// Hamburger button toggles `active` on itself and the vertical nav.
///
/// # Errors
///
/// Fails if a query or listener registration fails.
pub fn install_mobile_menu(page: &Page, _config: &Config) -> Result<()> {
    let (Some(hamburger), Some(nav)) = (page.query(consts::SEL_HAMBURGER)?, page.query(consts::SEL_VERTICAL_NAV)?) else {
        log::debug!("mobile menu: hamburger or nav missing");
        return Ok(());
    };
    let button = hamburger.clone();
    listen(&hamburger, "click", move |_| {
        toggle_class(&nav, consts::CLASS_ACTIVE);
        toggle_class(&button, consts::CLASS_ACTIVE);
    })
}

/// Wire a single-open group: clicking `triggers[i]` toggles `members[i]` and closes the rest.
fn install_group(name: &str, members: Vec<Element>, triggers: Vec<Element>) -> Result<()> {
    if members.is_empty() {
        log::debug!("{name}: no members");
        return Ok(());
    }
    let mut group = SingleOpenGroup::new(members.len());
    if let Some(index) = members
        .iter()
        .position(|m| m.class_list().contains(consts::CLASS_ACTIVE))
    {
        group.toggle(index);
    }
    for (index, member) in members.iter().enumerate() {
        set_class(member, consts::CLASS_ACTIVE, group.is_open(index));
    }
    let group = Rc::new(RefCell::new(group));
    let members = Rc::new(members);

    for (index, trigger) in triggers.iter().enumerate() {
        let group = Rc::clone(&group);
        let members = Rc::clone(&members);
        listen(trigger, "click", move |_| {
            let change = group.borrow_mut().toggle(index);
            if let Some(member) = change.closed.and_then(|j| members.get(j)) {
                set_class(member, consts::CLASS_ACTIVE, false);
            }
            if let Some(member) = change.opened.and_then(|j| members.get(j)) {
                set_class(member, consts::CLASS_ACTIVE, true);
            }
        })?;
    }
    Ok(())
}

/// Service cards toggle on a click anywhere on the card.
///
/// # Errors
///
/// Fails if the query or a listener registration fails.
pub fn install_service_cards(page: &Page, _config: &Config) -> Result<()> {
    let cards = page.query_all(consts::SEL_SERVICE_CARD)?;
    install_group("service cards", cards.clone(), cards)
}

/// Accordion items toggle on a click on their header; items without one are skipped.
///
/// # Errors
///
/// Fails if a query or a listener registration fails.
pub fn install_accordion(page: &Page, _config: &Config) -> Result<()> {
    let mut items = Vec::new();
    let mut headers = Vec::new();
    for item in page.query_all(consts::SEL_ACCORDION_ITEM)? {
        match item.query_selector(consts::SEL_ACCORDION_HEADER)? {
            Some(header) => {
                items.push(item);
                headers.push(header);
            }
            None => log::debug!("accordion: item without header skipped"),
        }
    }
    install_group("accordion", items, headers)
}

/// `#back-to-top` smooth-scrolls to the top. Its visibility is driven by the scroll listener.
///
/// # Errors
///
/// Fails if listener registration fails.
pub fn install_back_to_top(page: &Page, _config: &Config) -> Result<()> {
    let Some(button) = page.document.get_element_by_id(consts::ID_BACK_TO_TOP) else {
        log::debug!("back to top: no button");
        return Ok(());
    };
    let window = page.window.clone();
    listen(&button, "click", move |_| {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    })
}

/// Links to in-page fragments scroll smoothly when the target exists.
///
/// # Errors
///
/// Fails if the query or a listener registration fails.
pub fn install_anchors(page: &Page, _config: &Config) -> Result<()> {
    for anchor in page.query_all(consts::SEL_ANCHORS)? {
        let link = anchor.clone();
        let handler_page = page.clone();
        listen(&anchor, "click", move |event| {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(selector) = scroll_target(&href) else {
                return;
            };
            let target = match handler_page.query(selector) {
                Ok(target) => target,
                Err(err) => {
                    log::warn!("anchor {href}: {err}");
                    return;
                }
            };
            if let Some(target) = target {
                event.prevent_default();
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    Ok(())
}
