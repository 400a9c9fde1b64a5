use crate::constants::*;
use crate::core::constants::{DURATION_FALLBACK_MS, SKEW_MAX_DEG};
use crate::core::progress::{RegionEnd, RegionSpec};
use crate::core::scenes::{
    css_rgb, section_background, track_offset, track_scroll_amount, RevealOnce, SkewState,
    SlideCover,
};
use crate::core::sequencer::{BindOutcome, SectionSequencer, SectionUpdate, Visibility};
use crate::core::viewport::{Viewport, ViewportClass};
use crate::dom;
use crate::events::LayoutInvalidator;
use crate::media;
use crate::scroll::{ScrollDriver, ScrollTick};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn region(bounds: (&str, &str)) -> Option<RegionSpec> {
    match RegionSpec::parse(bounds.0, bounds.1) {
        Ok(spec) => Some(spec),
        Err(e) => {
            log::error!("[sections] bad region {:?}: {}", bounds, e);
            None
        }
    }
}

// ---------------- Human section: scroll-scrubbed video + text ----------------

pub struct HumanSection {
    video: web::HtmlVideoElement,
    texts: Vec<web::Element>,
    seq: SectionSequencer,
    last_progress: f64,
}

impl HumanSection {
    fn new(video: web::HtmlVideoElement, texts: Vec<web::Element>) -> Self {
        let seq = SectionSequencer::new(texts.len());
        Self {
            video,
            texts,
            seq,
            last_progress: 0.0,
        }
    }

    fn on_progress(&mut self, progress: f64) {
        self.last_progress = progress;
        let update = self.seq.on_progress(progress, self.video.current_time());
        self.apply_update(&update);
    }

    fn apply_update(&self, update: &SectionUpdate) {
        if let Some(t) = update.seek_to {
            media::seek_quietly(&self.video, t);
        }
        for tr in &update.transitions {
            if let Some(el) = self.texts.get(tr.index) {
                dom::set_class(el, CLASS_ACTIVE, tr.to == Visibility::Shown);
            }
        }
    }

    fn apply_outcome(&mut self, outcome: BindOutcome) {
        match outcome {
            BindOutcome::Scroll => {
                log::info!(
                    "[sections] human section scroll-bound (generation {})",
                    self.seq.generation()
                );
                self.video.set_loop(false);
                media::pause_quietly(&self.video);
                let progress = self.last_progress;
                self.on_progress(progress);
            }
            BindOutcome::Static => {
                log::info!("[sections] human section static fallback");
                for tr in self.seq.static_transitions() {
                    if let Some(el) = self.texts.get(tr.index) {
                        dom::set_class(el, CLASS_ACTIVE, true);
                    }
                }
                self.video.set_muted(true);
                self.video.set_loop(true);
                media::play_quietly(&self.video);
            }
            BindOutcome::Deferred => {
                log::debug!("[sections] human section waiting for video metadata");
            }
            BindOutcome::AlreadyBound => {}
        }
    }

    fn on_metadata(&mut self) {
        let duration = self.video.duration();
        if let Some(outcome) = self.seq.resolve_duration(duration) {
            self.apply_outcome(outcome);
        }
    }

    fn on_metadata_timeout(&mut self) {
        self.on_metadata();
        if let Some(outcome) = self.seq.give_up_duration() {
            log::warn!("[sections] video metadata unavailable; sequencing text only");
            self.apply_outcome(outcome);
        }
    }

    pub fn on_viewport_class(&mut self, class: ViewportClass) {
        if let Some(outcome) = self.seq.rebind(class) {
            log::info!("[sections] viewport class now {:?}; rebinding", class);
            self.apply_outcome(outcome);
        }
    }
}

fn wire_duration(state: &Rc<RefCell<HumanSection>>, layout: &LayoutInvalidator) {
    let video = state.borrow().video.clone();
    if media::has_metadata(&video) {
        state.borrow_mut().on_metadata();
        return;
    }

    // The video box may only get its intrinsic size with the metadata.
    let st = state.clone();
    let layout = layout.clone();
    dom::add_listener(&video, "loadedmetadata", move || {
        st.borrow_mut().on_metadata();
        layout.invalidate();
    });

    let st = state.clone();
    let fallback = Closure::once_into_js(move || st.borrow_mut().on_metadata_timeout());
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            fallback.unchecked_ref(),
            DURATION_FALLBACK_MS,
        );
    }
    video.load();
}

fn bind_human(
    document: &web::Document,
    driver: &mut ScrollDriver,
    class: ViewportClass,
    layout: &LayoutInvalidator,
) -> Option<Rc<RefCell<HumanSection>>> {
    let section = dom::query(document, HUMAN_SECTION)?;
    let video: web::HtmlVideoElement = dom::query_as(document, HUMAN_VIDEO)?;
    let texts = dom::query_all(&section, HUMAN_TEXT);
    let spec = region(HUMAN_REGION)?;

    let state = Rc::new(RefCell::new(HumanSection::new(video, texts)));
    wire_duration(&state, layout);
    {
        let mut s = state.borrow_mut();
        let outcome = s.seq.bind(class);
        s.apply_outcome(outcome);
    }

    let st = state.clone();
    driver.track(
        &section,
        spec,
        Box::new(move |u| st.borrow_mut().on_progress(u.progress)),
    );
    Some(state)
}

// ---------------- Horizontal section: pinned track + skew ----------------

pub struct HorizontalSection {
    section: web::Element,
    track: web::HtmlElement,
    cards: Vec<web::Element>,
    skew: SkewState,
    amount: f64,
    skew_enabled: bool,
}

impl HorizontalSection {
    /// Pin the track by giving the section enough height to scroll through it.
    fn layout(&mut self, viewport: Viewport) {
        self.amount = track_scroll_amount(self.track.scroll_width() as f64, viewport.width);
        dom::set_style(
            &self.section,
            "height",
            &format!("{}px", viewport.height + self.amount.abs()),
        );
        _ = self.track.style().set_property("position", "sticky");
        _ = self.track.style().set_property("top", "0px");
    }

    fn on_track_progress(&mut self, progress: f64, velocity: f32) {
        let x = track_offset(progress, self.amount);
        _ = self
            .track
            .style()
            .set_property("transform", &format!("translate3d({:.2}px, 0, 0)", x));
        if self.skew_enabled {
            self.skew.on_scroll(velocity);
        }
    }

    fn frame(&mut self, dt_sec: f32, tick: &ScrollTick) {
        if !self.skew_enabled {
            return;
        }
        if tick.idle_frames >= SCROLL_IDLE_FRAMES {
            self.skew.on_idle();
        }
        if self.skew.step(dt_sec) {
            let skew = self.skew.skew_deg().clamp(-SKEW_MAX_DEG, SKEW_MAX_DEG);
            let transform = format!(
                "skewX({:.3}deg) rotateY({:.3}deg)",
                skew,
                self.skew.rotate_y_deg()
            );
            for card in &self.cards {
                dom::set_style(card, "transform", &transform);
            }
        }
    }
}

fn bind_horizontal(
    document: &web::Document,
    driver: &mut ScrollDriver,
    viewport: Viewport,
    reduced_motion: bool,
) -> Option<Rc<RefCell<HorizontalSection>>> {
    let section = dom::query(document, HORIZONTAL_SECTION)?;
    let track: web::HtmlElement = dom::query_as(document, HORIZONTAL_TRACK)?;
    let cards = dom::query_all_doc(document, HORIZONTAL_CARD);

    let bg_spec = region(HORIZONTAL_BG_REGION)?;
    let pin_start = region(("top top", "top top"))?.start;

    let state = Rc::new(RefCell::new(HorizontalSection {
        section: section.clone(),
        track,
        cards,
        skew: SkewState::default(),
        amount: 0.0,
        skew_enabled: !reduced_motion,
    }));
    state.borrow_mut().layout(viewport);

    let bg_target = section.clone();
    driver.track(
        &section,
        bg_spec,
        Box::new(move |u| {
            let rgb = section_background(u.progress);
            dom::set_style(&bg_target, "background-color", &css_rgb(rgb));
        }),
    );

    let st_spec = state.clone();
    let st = state.clone();
    driver.track_dynamic(
        &section,
        Box::new(move |_vp| RegionSpec {
            start: pin_start,
            end: RegionEnd::After(st_spec.borrow().amount.abs()),
        }),
        Box::new(move |u| st.borrow_mut().on_track_progress(u.progress, u.velocity)),
    );
    Some(state)
}

// ---------------- Feature slides and reveals ----------------

fn bind_feature_slides(document: &web::Document, driver: &mut ScrollDriver) {
    let slides = dom::query_all_doc(document, FEATURE_SLIDE);
    let (Some(cover_spec), Some(enter_spec)) = (region(SLIDE_REGION), region(SLIDE_ENTER_REGION))
    else {
        return;
    };
    let last = slides.len().saturating_sub(1);
    for (i, slide) in slides.iter().enumerate() {
        let target = slide.clone();
        driver.track(
            slide,
            enter_spec,
            Box::new(move |u| dom::set_class(&target, CLASS_VISIBLE, u.progress > 0.0)),
        );
        // The last slide is never covered
        if i == last {
            continue;
        }
        let target = slide.clone();
        driver.track(
            slide,
            cover_spec,
            Box::new(move |u| {
                let c = SlideCover::at(u.progress);
                dom::set_style(&target, "transform", &format!("scale({:.4})", c.scale));
                dom::set_style(&target, "filter", &format!("blur({:.2}px)", c.blur_px));
                dom::set_style(&target, "opacity", &format!("{:.3}", c.opacity));
            }),
        );
    }
}

fn reveal_once(driver: &mut ScrollDriver, el: &web::Element, spec: RegionSpec) {
    let target = el.clone();
    let mut latch = RevealOnce::default();
    driver.track(
        el,
        spec,
        Box::new(move |u| {
            if latch.observe(u.progress) {
                dom::set_class(&target, CLASS_VISIBLE, true);
            }
        }),
    );
}

fn bind_reveals(document: &web::Document, driver: &mut ScrollDriver) {
    if let Some(spec) = region(REVEAL_REGION) {
        for el in dom::query_all_doc(document, REVEAL) {
            reveal_once(driver, &el, spec);
        }
    }
    if let Some(spec) = region(SECTION_REVEAL_REGION) {
        for selector in REVEAL_SECTIONS {
            if let Some(el) = dom::query(document, selector) {
                reveal_once(driver, &el, spec);
            }
        }
    }
}

/// Card videos play while hovered and rewind when the pointer leaves.
pub fn wire_card_videos(document: &web::Document) {
    for card in dom::query_all_doc(document, SCROLL_CARD) {
        let Some(video) = card
            .query_selector(CARD_VIDEO)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlMediaElement>().ok())
        else {
            continue;
        };
        let v = video.clone();
        dom::add_listener(&card, "mouseenter", move || media::play_quietly(&v));
        let v = video;
        dom::add_listener(&card, "mouseleave", move || {
            media::pause_quietly(&v);
            media::seek_quietly(&v, 0.0);
        });
    }
}

/// Every scroll-linked section on the page. Absent sections are skipped.
pub struct Sections {
    human: Option<Rc<RefCell<HumanSection>>>,
    horizontal: Option<Rc<RefCell<HorizontalSection>>>,
}

impl Sections {
    pub fn bind_all(
        document: &web::Document,
        driver: &mut ScrollDriver,
        viewport: Viewport,
        reduced_motion: bool,
        layout: &LayoutInvalidator,
    ) -> Self {
        let human = bind_human(document, driver, viewport.class(), layout);
        if human.is_none() {
            log::info!("[sections] no human section on this page");
        }
        let horizontal = bind_horizontal(document, driver, viewport, reduced_motion);
        bind_feature_slides(document, driver);
        bind_reveals(document, driver);
        log::info!("[sections] tracking {} regions", driver.track_count());
        Self { human, horizontal }
    }

    /// Layout work that must happen before regions are re-measured.
    pub fn layout(&self, viewport: Viewport) {
        if let Some(h) = &self.horizontal {
            h.borrow_mut().layout(viewport);
        }
    }

    pub fn on_viewport_class(&self, class: ViewportClass) {
        if let Some(h) = &self.human {
            h.borrow_mut().on_viewport_class(class);
        }
    }

    pub fn frame(&self, dt_sec: f32, tick: &ScrollTick) {
        if let Some(h) = &self.horizontal {
            h.borrow_mut().frame(dt_sec, tick);
        }
    }
}
