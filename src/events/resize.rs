use crate::core::viewport::Debounce;
use crate::dom;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Schedules a layout re-measure through the resize debounce. The frame loop
/// does the actual recomputation once the deadline passes.
#[derive(Clone)]
pub struct LayoutInvalidator {
    debounce: Rc<RefCell<Debounce>>,
    start: Instant,
}

impl LayoutInvalidator {
    pub fn new(debounce: Rc<RefCell<Debounce>>, start: Instant) -> Self {
        Self { debounce, start }
    }

    pub fn invalidate(&self) {
        let now_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        self.debounce.borrow_mut().poke(now_ms);
    }
}

/// Window resizes and the `load` event (images and fonts settled) both
/// invalidate the measured layout.
pub fn wire_resize(layout: &LayoutInvalidator) {
    let Some(window) = web::window() else {
        return;
    };
    for event in ["resize", "load"] {
        let layout = layout.clone();
        dom::add_listener(&window, event, move || layout.invalidate());
    }
    // `load` may already be behind us when the module starts late
    if window
        .document()
        .is_some_and(|d| d.ready_state() == "complete")
    {
        layout.invalidate();
    }
}
