use super::constants::{MOBILE_MAX_WIDTH_PX, RESIZE_DEBOUNCE_MS};

/// Device class derived from the viewport width. Mobile and desktop use
/// incompatible section binding strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Desktop,
}

impl ViewportClass {
    #[inline]
    pub fn from_width(width_px: f64) -> Self {
        if width_px <= MOBILE_MAX_WIDTH_PX {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        (self.width / self.height) as f32
    }

    #[inline]
    pub fn class(&self) -> ViewportClass {
        ViewportClass::from_width(self.width)
    }
}

/// The single shared viewport observable; every component reads its class
/// from here instead of measuring the window itself.
#[derive(Clone, Copy, Debug)]
pub struct ViewportWatch {
    viewport: Viewport,
}

impl ViewportWatch {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn class(&self) -> ViewportClass {
        self.viewport.class()
    }

    /// Record a new measurement; returns the new class if it changed.
    pub fn observe(&mut self, viewport: Viewport) -> Option<ViewportClass> {
        let before = self.viewport.class();
        self.viewport = viewport;
        let after = viewport.class();
        (before != after).then_some(after)
    }
}

/// Trailing-edge debounce polled from the frame loop.
///
/// `poke` pushes the deadline out; `fire` returns true exactly once after the
/// deadline passes without another poke.
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    delay_ms: f64,
    deadline_ms: Option<f64>,
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(RESIZE_DEBOUNCE_MS)
    }
}

impl Debounce {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            deadline_ms: None,
        }
    }

    #[inline]
    pub fn poke(&mut self, now_ms: f64) {
        self.deadline_ms = Some(now_ms + self.delay_ms);
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn fire(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
