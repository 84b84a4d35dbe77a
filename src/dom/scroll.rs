//! Scroll listener: nav highlight, indicator, back-to-top and sticky sidebar.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::config::Config;
use crate::consts;
use crate::dom::{Page, listen, set_class, set_style};
use crate::error::Result;
use crate::scroll::{ScrollMetrics, ScrollTracker, SectionBox};

/// Nav list items with the href of their first link.
struct NavItems {
    items: Vec<Element>,
    hrefs: Vec<String>,
}

impl NavItems {
    fn collect(page: &Page) -> Result<Self> {
        let items = page.query_all(consts::SEL_NAV_ITEMS)?;
        let mut hrefs = Vec::with_capacity(items.len());
        for item in &items {
            let href = item
                .query_selector("a")?
                .and_then(|a| a.get_attribute("href"))
                .unwrap_or_default();
            hrefs.push(href);
        }
        Ok(Self { items, hrefs })
    }
}

fn measure(sections: &[HtmlElement]) -> Vec<SectionBox> {
    sections
        .iter()
        .map(|section| {
            SectionBox::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            )
        })
        .collect()
}

/// Install the single scroll listener driving every scroll-derived class.
///
/// # Errors
///
/// Fails only if a selector query or listener registration fails.
pub fn install(page: &Page, config: &Config) -> Result<()> {
    let features = config.features();

    let (sections, nav) = if features.scroll_effects {
        let sections: Vec<HtmlElement> = page
            .query_all(consts::SEL_SECTIONS)?
            .into_iter()
            .filter_map(|el| el.dyn_ref::<HtmlElement>().cloned())
            .collect();
        let nav = NavItems::collect(page)?;
        if sections.is_empty() || nav.items.is_empty() {
            log::debug!("scroll: no sections or nav items, skipping highlight");
            (Vec::new(), None)
        } else {
            (sections, Some(nav))
        }
    } else {
        (Vec::new(), None)
    };

    let back_to_top = if features.back_to_top {
        page.document.get_element_by_id(consts::ID_BACK_TO_TOP)
    } else {
        None
    };
    let sidebar = if features.sticky_sidebar {
        page.query(consts::SEL_SIDEBAR)?
    } else {
        None
    };

    if nav.is_none() && back_to_top.is_none() && sidebar.is_none() {
        log::debug!("scroll: nothing to drive");
        return Ok(());
    }

    let tracker = Rc::new(RefCell::new(ScrollTracker::new(ScrollMetrics::from(config))));
    let handler_page = page.clone();
    listen(&page.window, "scroll", move |_| {
        let Some(offset) = handler_page.scroll_y() else {
            return;
        };
        let boxes = measure(&sections);
        let empty: [String; 0] = [];
        let hrefs = nav.as_ref().map_or(&empty[..], |n| &n.hrefs[..]);
        let frame = tracker.borrow_mut().on_scroll(offset, &boxes, hrefs);

        if let Some(nav) = &nav {
            for (index, item) in nav.items.iter().enumerate() {
                set_class(item, consts::CLASS_ACTIVE, frame.active_nav == Some(index));
            }
            if let Some(index) = frame.active_nav {
                if let Ok(Some(indicator)) = handler_page.query(consts::SEL_NAV_INDICATOR) {
                    set_style(&indicator, consts::NAV_INDEX_PROPERTY, &index.to_string());
                }
            }
        }
        if let Some(button) = &back_to_top {
            set_class(button, consts::CLASS_VISIBLE, frame.back_to_top_visible);
        }
        if let Some(sidebar) = &sidebar {
            set_class(sidebar, consts::CLASS_STICKY, frame.sidebar_sticky);
        }
    })
}
