use crate::constants::{
    ANCHOR_LINK, ANCHOR_SCROLL_OFFSET_PX, CLASS_MENU_OPEN, CLASS_SCROLLED, MOBILE_MENU_BUTTON,
    NAVBAR,
};
use crate::core::scenes::{anchor_fragment, anchor_scroll_top, navbar_scrolled};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Navbar background state driven by page scroll.
pub struct Navbar {
    el: web::Element,
    scrolled: Option<bool>,
}

impl Navbar {
    pub fn find(document: &web::Document) -> Option<Self> {
        dom::query(document, NAVBAR).map(|el| Self { el, scrolled: None })
    }

    pub fn update(&mut self, scroll_y: f64) {
        let scrolled = navbar_scrolled(scroll_y);
        if self.scrolled != Some(scrolled) {
            dom::set_class(&self.el, CLASS_SCROLLED, scrolled);
            self.scrolled = Some(scrolled);
        }
    }
}

/// Mobile menu button toggles `menu-open` on the body.
pub fn wire_menu(document: &web::Document) {
    let Some(button) = dom::query(document, MOBILE_MENU_BUTTON) else {
        return;
    };
    let doc = document.clone();
    dom::add_click_listener(&button, move || {
        if let Some(body) = doc.body() {
            _ = body.class_list().toggle(CLASS_MENU_OPEN);
        }
    });
}

/// In-page links scroll smoothly to their target instead of jumping.
pub fn wire_anchor_links(document: &web::Document) {
    let mut wired = 0;
    for anchor in dom::query_all_doc(document, ANCHOR_LINK) {
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        let Some(id) = anchor_fragment(&href).map(str::to_owned) else {
            continue;
        };
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
            let Some(target) = doc.get_element_by_id(&id) else {
                log::debug!("[nav] no anchor target #{}", id);
                return;
            };
            let top = dom::element_layout(&target).top;
            dom::smooth_scroll_to(anchor_scroll_top(top, ANCHOR_SCROLL_OFFSET_PX));
        }) as Box<dyn FnMut(_)>);
        _ = anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        wired += 1;
    }
    log::debug!("[nav] wired {} anchor links", wired);
}
