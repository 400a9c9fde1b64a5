use crate::constants::{CLASS_LOADED, HERO_CONTAINER_ID};
use crate::core::trail::HeroMotion;
use crate::core::viewport::{Debounce, Viewport, ViewportWatch};
use crate::dom;
use crate::nav::Navbar;
use crate::rain::RainLayer;
use crate::render;
use crate::scroll::ScrollDriver;
use crate::sections::Sections;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hero surface: the WebGPU canvas plus the pointer/trail state it renders.
pub struct HeroView<'a> {
    pub container: web::Element,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub motion: Rc<RefCell<HeroMotion>>,
}

pub struct FrameContext<'a> {
    pub document: web::Document,
    pub hero: Option<HeroView<'a>>,
    pub scroll: ScrollDriver,
    pub sections: Sections,
    pub navbar: Option<Navbar>,
    pub rain: Option<Rc<RefCell<RainLayer>>>,
    pub viewport: ViewportWatch,
    pub resize: Rc<RefCell<Debounce>>,

    pub start: Instant,
    pub last_instant: Instant,
    pub loaded: bool,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();
        let elapsed = (now - self.start).as_secs_f64();
        let now_ms = elapsed * 1000.0;

        if !self.loaded {
            if let Some(body) = self.document.body() {
                _ = body.class_list().add_1(CLASS_LOADED);
            }
            self.loaded = true;
        }

        let fire = self.resize.borrow_mut().fire(now_ms);
        if fire {
            self.on_resize();
        }

        // Scroll-driven sections
        let tick = self.scroll.frame(now_ms);
        if tick.moved {
            if let Some(nav) = &mut self.navbar {
                nav.update(tick.scroll_y);
            }
        }
        self.sections.frame(dt_sec, &tick);

        // Hero: pointer smoothing, trail advance, shader
        if let Some(hero) = &mut self.hero {
            let mut motion = hero.motion.borrow_mut();
            motion.frame();
            if let Some(g) = &mut hero.gpu {
                g.resize_if_needed(hero.canvas.width(), hero.canvas.height());
                if let Err(e) = g.render(elapsed as f32, &motion.trail) {
                    log::error!("[hero] render error: {:?}", e);
                }
            }
        }

        if let Some(rain) = &self.rain {
            rain.borrow_mut().frame();
        }
    }

    fn on_resize(&mut self) {
        let vp = dom::current_viewport();
        let changed = self.viewport.observe(vp);

        if let Some(hero) = &mut self.hero {
            dom::sync_canvas_backing_size(&hero.canvas, vp);
            hero.motion.borrow_mut().set_aspect(vp.aspect());
            if let Some(g) = &mut hero.gpu {
                g.resize_if_needed(hero.canvas.width(), hero.canvas.height());
                match render::text::rasterize_hero_text(&self.document, vp.aspect()) {
                    Ok(text) => g.set_text(&text),
                    Err(e) => log::warn!("[hero] text texture rebuild failed: {:?}", e),
                }
            }
        }

        self.sections.layout(vp);
        self.scroll.refresh(vp);

        if let Some(class) = changed {
            self.sections.on_viewport_class(class);
        }
        log::debug!(
            "[frame] resized to {:.0}x{:.0} ({:?})",
            vp.width,
            vp.height,
            self.viewport.class()
        );
    }
}

pub async fn init_hero(document: &web::Document, viewport: Viewport) -> Option<HeroView<'static>> {
    let Some(container) = document.get_element_by_id(HERO_CONTAINER_ID) else {
        log::info!("[hero] no #{} on this page", HERO_CONTAINER_ID);
        return None;
    };
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .ok()?
        .dyn_into()
        .ok()?;
    container.append_child(&canvas).ok()?;
    dom::sync_canvas_backing_size(&canvas, viewport);

    let motion = Rc::new(RefCell::new(HeroMotion::new(viewport.aspect())));
    let gpu = match render::text::rasterize_hero_text(document, viewport.aspect()) {
        Ok(text) => {
            // leak a canvas clone to satisfy 'static lifetime for surface
            let leaked_canvas = Box::leak(Box::new(canvas.clone()));
            match render::GpuState::new(leaked_canvas, &text).await {
                Ok(g) => Some(g),
                Err(e) => {
                    log::error!("[hero] WebGPU init error: {:?}", e);
                    None
                }
            }
        }
        Err(e) => {
            log::error!("[hero] text texture error: {:?}", e);
            None
        }
    };

    Some(HeroView {
        container,
        canvas,
        gpu,
        motion,
    })
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
