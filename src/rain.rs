use crate::constants::{CLASS_RAIN_DROP, RAIN_CONTAINER};
use crate::core::constants::RAIN_SPAWN_INTERVAL_MS;
use crate::core::particles::{Particle, ParticleSpawner};
use crate::dom;
use fnv::FnvHashMap;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM side of the rain: one absolutely positioned div per live particle.
pub struct RainLayer {
    document: web::Document,
    container: web::Element,
    spawner: ParticleSpawner,
    drops: FnvHashMap<u64, web::HtmlElement>,
    start: Instant,
}

impl RainLayer {
    pub fn find(document: &web::Document, start: Instant) -> Option<Self> {
        let container = dom::query(document, RAIN_CONTAINER)?;
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        Some(Self {
            document: document.clone(),
            container,
            spawner: ParticleSpawner::new(seed),
            drops: FnvHashMap::default(),
            start,
        })
    }

    #[inline]
    fn now_sec(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    pub fn spawn(&mut self) {
        let viewport = dom::current_viewport();
        let now = self.now_sec();
        let particle = self
            .spawner
            .spawn(now, viewport.width as f32, viewport.height as f32);
        match self.create_drop(&particle) {
            Some(el) => {
                self.drops.insert(particle.id, el);
            }
            None => log::debug!("[rain] could not create drop {}", particle.id),
        }
    }

    fn create_drop(&self, p: &Particle) -> Option<web::HtmlElement> {
        let el: web::HtmlElement = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into()
            .ok()?;
        el.set_class_name(CLASS_RAIN_DROP);
        let style = el.style();
        _ = style.set_property("left", &format!("{:.1}px", p.left_px));
        _ = style.set_property("height", &format!("{:.1}px", p.height_px));
        _ = style.set_property("opacity", &format!("{:.3}", p.opacity));
        _ = style.set_property("transform", "translate3d(0, 0, 0)");
        self.container.append_child(&el).ok()?;
        Some(el)
    }

    /// Move live drops and remove the finished ones.
    pub fn frame(&mut self) {
        let step = self.spawner.step(self.now_sec());
        for f in &step.moved {
            if let Some(el) = self.drops.get(&f.id) {
                _ = el
                    .style()
                    .set_property("transform", &format!("translate3d(0, {:.1}px, 0)", f.offset_y));
            }
        }
        for id in step.removed {
            if let Some(el) = self.drops.remove(&id) {
                el.remove();
            }
        }
    }
}

/// Spawn one drop every `RAIN_SPAWN_INTERVAL_MS`.
pub fn start_spawner(rain: Rc<RefCell<RainLayer>>) {
    let closure = Closure::wrap(Box::new(move || {
        rain.borrow_mut().spawn();
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            RAIN_SPAWN_INTERVAL_MS,
        );
    }
    closure.forget();
}
