use crate::core::progress::ElementLayout;
use crate::core::viewport::Viewport;
use crate::constants::MAX_PIXEL_RATIO;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_as<T: JsCast>(document: &web::Document, selector: &str) -> Option<T> {
    query(document, selector).and_then(|el| el.dyn_into::<T>().ok())
}

/// All matches of `selector`, in document order; empty on invalid selectors.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    collect_nodes(root.query_selector_all(selector).ok())
}

pub fn query_all_doc(document: &web::Document, selector: &str) -> Vec<web::Element> {
    collect_nodes(document.query_selector_all(selector).ok())
}

fn collect_nodes(list: Option<web::NodeList>) -> Vec<web::Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut() + 'static,
) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(element: &web::Element, handler: impl FnMut() + 'static) {
    add_listener(element, "click", handler);
}

#[inline]
pub fn set_class(element: &web::Element, class: &str, on: bool) {
    _ = element.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn set_style(element: &web::Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

pub fn current_viewport() -> Viewport {
    match web::window() {
        Some(w) => {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            Viewport::new(width, height)
        }
        None => Viewport::new(1.0, 1.0),
    }
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Element box in document coordinates at the current scroll position.
pub fn element_layout(element: &web::Element) -> ElementLayout {
    let rect = element.get_bounding_client_rect();
    ElementLayout {
        top: rect.top() + scroll_y(),
        height: rect.height(),
    }
}

#[inline]
pub fn pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .min(MAX_PIXEL_RATIO)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    let dpr = pixel_ratio();
    canvas.set_width(((viewport.width * dpr) as u32).max(1));
    canvas.set_height(((viewport.height * dpr) as u32).max(1));
    _ = canvas.style().set_property("width", &format!("{}px", viewport.width));
    _ = canvas.style().set_property("height", &format!("{}px", viewport.height));
}

pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Smooth-scroll the window to a document offset.
pub fn smooth_scroll_to(top: f64) {
    if let Some(w) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}
