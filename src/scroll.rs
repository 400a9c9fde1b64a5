use crate::core::progress::{ProgressSource, RegionSpec};
use crate::core::viewport::Viewport;
use crate::dom;
use web_sys as web;

/// What a track callback receives when its region progress changed.
#[derive(Clone, Copy, Debug)]
pub struct ScrollUpdate {
    pub progress: f64,
    /// Page scroll velocity in px/s, positive when scrolling down
    pub velocity: f32,
}

/// Per-frame summary handed back to the frame loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTick {
    pub scroll_y: f64,
    pub moved: bool,
    pub idle_frames: u32,
}

pub type ScrollHandler = Box<dyn FnMut(&ScrollUpdate)>;
pub type SpecFn = Box<dyn Fn(Viewport) -> RegionSpec>;

enum SpecSource {
    Fixed(RegionSpec),
    /// Re-evaluated on every refresh (boundaries that depend on layout)
    Dynamic(SpecFn),
}

struct Track {
    element: web::Element,
    spec: SpecSource,
    source: ProgressSource,
    handler: ScrollHandler,
}

impl SpecSource {
    fn resolve(&self, viewport: Viewport) -> RegionSpec {
        match self {
            SpecSource::Fixed(s) => *s,
            SpecSource::Dynamic(f) => f(viewport),
        }
    }
}

/// Owns every scroll-tracked region and dispatches progress changes.
///
/// Polled once per animation frame: when `window.scrollY` moved (or a
/// refresh invalidated the boundaries) each region is re-evaluated and the
/// callbacks of regions whose progress changed are invoked.
pub struct ScrollDriver {
    tracks: Vec<Track>,
    viewport: Viewport,
    last_scroll: Option<f64>,
    last_time_ms: f64,
    idle_frames: u32,
}

impl ScrollDriver {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            tracks: Vec::new(),
            viewport,
            last_scroll: None,
            last_time_ms: 0.0,
            idle_frames: 0,
        }
    }

    #[inline]
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn track(&mut self, element: &web::Element, spec: RegionSpec, handler: ScrollHandler) {
        self.push(element, SpecSource::Fixed(spec), handler);
    }

    pub fn track_dynamic(&mut self, element: &web::Element, spec: SpecFn, handler: ScrollHandler) {
        self.push(element, SpecSource::Dynamic(spec), handler);
    }

    fn push(&mut self, element: &web::Element, spec: SpecSource, handler: ScrollHandler) {
        let resolved = spec.resolve(self.viewport);
        let source = ProgressSource::new(
            resolved,
            dom::element_layout(element),
            self.viewport.height,
        );
        self.tracks.push(Track {
            element: element.clone(),
            spec,
            source,
            handler,
        });
        // Make sure the new track receives its initial progress next frame
        self.last_scroll = None;
    }

    /// Re-measure every region after layout changed.
    pub fn refresh(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for t in &mut self.tracks {
            let spec = t.spec.resolve(viewport);
            t.source.set_spec(spec);
            t.source.refresh(dom::element_layout(&t.element), viewport.height);
        }
        self.last_scroll = None;
        log::debug!("[scroll] refreshed {} regions", self.tracks.len());
    }

    pub fn frame(&mut self, now_ms: f64) -> ScrollTick {
        let scroll_y = dom::scroll_y();
        let dt_ms = (now_ms - self.last_time_ms).max(1.0);
        self.last_time_ms = now_ms;

        let (moved, velocity) = match self.last_scroll {
            Some(prev) if prev == scroll_y => (false, 0.0),
            Some(prev) => (true, ((scroll_y - prev) / dt_ms * 1000.0) as f32),
            None => (true, 0.0),
        };
        self.last_scroll = Some(scroll_y);

        if moved {
            self.idle_frames = 0;
            for t in &mut self.tracks {
                if let Some(progress) = t.source.update(scroll_y) {
                    (t.handler)(&ScrollUpdate { progress, velocity });
                }
            }
        } else {
            self.idle_frames = self.idle_frames.saturating_add(1);
        }

        ScrollTick {
            scroll_y,
            moved,
            idle_frames: self.idle_frames,
        }
    }
}
