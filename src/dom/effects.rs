//! Timer-driven effects: loading splash, cursor trail, and counters.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::config::Config;
use crate::consts;
use crate::counter::{CounterAnimation, parse_target};
use crate::cursor::{CursorTrail, Position, TrailCommand};
use crate::dom::reveal::observe;
use crate::dom::{Page, WarnOnErr, listen, set_style};
use crate::error::Result;
use crate::reveal::{RevealKind, RevealSet};

/// Live one-shot timeouts, each dropping itself from the map when it fires.
#[derive(Default)]
struct Timeouts {
    next_id: u64,
    live: HashMap<u64, Timeout>,
}

fn schedule<F>(timeouts: &Rc<RefCell<Timeouts>>, millis: u32, f: F)
where
    F: FnOnce() + 'static,
{
    let mut registry = timeouts.borrow_mut();
    let id = registry.next_id;
    registry.next_id += 1;
    let handle = Rc::clone(timeouts);
    let timeout = Timeout::new(millis, move || {
        f();
        handle.borrow_mut().live.remove(&id);
    });
    registry.live.insert(id, timeout);
}

fn create_div(page: &Page, class: &str) -> Result<Element> {
    let el = page.document.create_element("div")?;
    el.set_class_name(class);
    Ok(el)
}

// ── Loading screen ──────────────────────────────────────────────

fn hide_loading_screen(page: &Page, timeouts: &Rc<RefCell<Timeouts>>, fade_ms: u32) {
    let loading = match page.query(consts::SEL_LOADING) {
        Ok(Some(loading)) => loading,
        Ok(None) => return,
        Err(err) => {
            log::warn!("loading screen: {err}");
            return;
        }
    };
    set_style(&loading, "opacity", "0");
    schedule(timeouts, fade_ms, move || loading.remove());
}

/// Show the splash now and fade it out once the window has loaded.
///
/// # Errors
///
/// Fails if the splash cannot be created or the load listener registered.
pub fn install_loading_screen(page: &Page, config: &Config) -> Result<()> {
    let loading = create_div(page, consts::CLASS_LOADING)?;
    let spinner = create_div(page, consts::CLASS_SPINNER)?;
    loading.append_child(&spinner)?;
    page.body.append_child(&loading)?;

    let timeouts = Rc::new(RefCell::new(Timeouts::default()));
    let fade_ms = config.loading_fade_ms;
    if page.document.ready_state() == "complete" {
        hide_loading_screen(page, &timeouts, fade_ms);
        return Ok(());
    }
    let handler_page = page.clone();
    listen(&page.window, "load", move |_| {
        hide_loading_screen(&handler_page, &timeouts, fade_ms);
    })
}

// ── Cursor ──────────────────────────────────────────────────────

struct TrailSpawner {
    page: Page,
    dot: Element,
    lifetime_ms: u32,
    timeouts: Rc<RefCell<Timeouts>>,
}

impl TrailSpawner {
    fn spawn(&self, at: Position) {
        let Some(node) = self.dot.clone_node().warn_on_err("cursor trail clone") else {
            return;
        };
        let Some(trail) = node.dyn_ref::<Element>().cloned() else {
            return;
        };
        trail.set_class_name(consts::CLASS_CURSOR_TRAIL);
        set_style(&trail, "left", &at.left());
        set_style(&trail, "top", &at.top());
        if self.page.body.append_child(&trail).warn_on_err("cursor trail append").is_none() {
            return;
        }
        schedule(&self.timeouts, self.lifetime_ms, move || trail.remove());
    }
}

/// Dot following the pointer plus a trail spawned at the latest position.
///
/// # Errors
///
/// Fails if the dot cannot be created or a listener registered.
pub fn install_cursor(page: &Page, config: &Config) -> Result<()> {
    let dot = create_div(page, consts::CLASS_CURSOR_DOT)?;
    page.body.append_child(&dot)?;

    let state = Rc::new(RefCell::new(CursorTrail::new()));
    let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let spawner = Rc::new(TrailSpawner {
        page: page.clone(),
        dot: dot.clone(),
        lifetime_ms: config.trail_lifetime_ms,
        timeouts: Rc::new(RefCell::new(Timeouts::default())),
    });
    let period = config.trail_interval_ms;

    let apply = {
        let interval = Rc::clone(&interval);
        move |command: TrailCommand| match command {
            TrailCommand::Restart(at) => {
                let spawner = Rc::clone(&spawner);
                // Replacing the handle cancels the previous interval.
                *interval.borrow_mut() = Some(Interval::new(period, move || spawner.spawn(at)));
            }
            TrailCommand::Stop => {
                interval.borrow_mut().take();
            }
            TrailCommand::Keep => {}
        }
    };
    let apply = Rc::new(apply);

    {
        let state = Rc::clone(&state);
        let dot = dot.clone();
        let apply = Rc::clone(&apply);
        listen(&page.document, "mousemove", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let at = Position::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            set_style(&dot, "left", &at.left());
            set_style(&dot, "top", &at.top());
            let command = state.borrow_mut().on_move(at);
            apply(command);
        })?;
    }
    {
        let state = Rc::clone(&state);
        let dot = dot.clone();
        let apply = Rc::clone(&apply);
        listen(&page.document, "mouseleave", move |_| {
            let command = state.borrow_mut().on_leave();
            set_style(&dot, "opacity", state.borrow().opacity());
            apply(command);
        })?;
    }
    listen(&page.document, "mouseenter", move |_| {
        let command = state.borrow_mut().on_enter();
        set_style(&dot, "opacity", state.borrow().opacity());
        apply(command);
    })
}

// ── Counters ────────────────────────────────────────────────────

fn start_counter(el: &Element, steps: u32, tick_ms: u32) {
    let raw = el.get_attribute("data-target").unwrap_or_default();
    let target = match parse_target(&raw) {
        Ok(target) => target,
        Err(err) => {
            log::warn!("counter: {err}");
            return;
        }
    };
    let mut animation = CounterAnimation::new(target, steps);
    let Some(first) = animation.next() else {
        return;
    };
    el.set_text_content(Some(&first.to_string()));
    if animation.is_finished() {
        return;
    }

    let holder: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let holder_for_tick = Rc::clone(&holder);
    let el = el.clone();
    let tick = Interval::new(tick_ms, move || match animation.next() {
        Some(value) => el.set_text_content(Some(&value.to_string())),
        None => {
            holder_for_tick.borrow_mut().take();
        }
    });
    *holder.borrow_mut() = Some(tick);
}

/// Counters animate to their `data-target` once fully visible.
///
/// # Errors
///
/// Fails if the query or observer creation fails.
pub fn install_counters(page: &Page, config: &Config) -> Result<()> {
    let counters = page.query_all(consts::SEL_COUNTER)?;
    let steps = config.counter_steps;
    let tick_ms = config.counter_tick_ms;
    let set = RevealSet::new(RevealKind::Counter, counters.len(), config.counter_threshold);
    observe(counters, set, move |el| {
        start_counter(el, steps, tick_ms);
    })
}
