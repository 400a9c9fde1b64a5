#![cfg(target_arch = "wasm32")]
use crate::core::viewport::{Debounce, ViewportWatch};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod media;
mod nav;
mod rain;
mod render;
mod scroll;
mod sections;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rain-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    // Page setup runs once even if the entry point is invoked again.
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("already initialized; ignoring");
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let start = Instant::now();
    let viewport = dom::current_viewport();
    let reduced_motion = dom::prefers_reduced_motion();
    log::info!(
        "[init] viewport {:.0}x{:.0} ({:?}), reduced motion: {}",
        viewport.width,
        viewport.height,
        viewport.class(),
        reduced_motion
    );

    nav::wire_menu(&document);
    nav::wire_anchor_links(&document);
    let navbar = nav::Navbar::find(&document);

    let resize = Rc::new(RefCell::new(Debounce::default()));
    let layout = events::LayoutInvalidator::new(resize.clone(), start);
    events::wire_resize(&layout);

    let mut scroll = scroll::ScrollDriver::new(viewport);
    let sections =
        sections::Sections::bind_all(&document, &mut scroll, viewport, reduced_motion, &layout);
    sections::wire_card_videos(&document);

    let rain = if reduced_motion {
        None
    } else {
        rain::RainLayer::find(&document, start).map(|layer| {
            let layer = Rc::new(RefCell::new(layer));
            rain::start_spawner(layer.clone());
            layer
        })
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document: document.clone(),
        hero: None,
        scroll,
        sections,
        navbar,
        rain,
        viewport: ViewportWatch::new(viewport),
        resize,
        start,
        last_instant: Instant::now(),
        loaded: false,
    }));
    // Scroll sequencing and rain run while the GPU is still initializing
    frame::start_loop(frame_ctx.clone());

    let hero = frame::init_hero(&document, dom::current_viewport()).await;
    if let Some(h) = &hero {
        events::wire_hero_pointer(&h.container, h.motion.clone());
    }
    frame_ctx.borrow_mut().hero = hero;
    Ok(())
}
