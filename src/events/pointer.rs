use crate::core::trail::{client_to_ndc, HeroMotion};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed pointer motion into the hero: window-wide position, plus whether the
/// pointer is over the hero container (only then does the trail gain strength).
pub fn wire_hero_pointer(container: &web::Element, motion: Rc<RefCell<HeroMotion>>) {
    wire_pointermove(motion.clone());

    let m = motion.clone();
    dom::add_listener(container, "mouseenter", move || {
        m.borrow_mut().pointer_in_region = true;
    });
    let m = motion;
    dom::add_listener(container, "mouseleave", move || {
        m.borrow_mut().pointer_in_region = false;
    });
}

fn wire_pointermove(motion: Rc<RefCell<HeroMotion>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let vp = dom::current_viewport();
        let ndc = client_to_ndc(
            ev.client_x() as f32,
            ev.client_y() as f32,
            vp.width as f32,
            vp.height as f32,
        );
        motion.borrow_mut().pointer.set_target(ndc);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
