use super::constants::*;

// Small scroll-linked scene effects: navbar state, one-shot reveals, the
// horizontal card track and the stacked feature slides.

#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_AFTER_PX
}

/// Latches the first time its region is entered and never reverts.
#[derive(Clone, Copy, Debug, Default)]
pub struct RevealOnce {
    revealed: bool,
}

impl RevealOnce {
    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns true only on the update that crosses into the region.
    pub fn observe(&mut self, progress: f64) -> bool {
        if self.revealed || progress <= 0.0 {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Fragment id of an in-page link. A bare `"#"` keeps the browser default.
#[inline]
pub fn anchor_fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position for an anchor jump; `offset_px` is negative to stop short
/// of the target so the fixed navbar does not cover it.
#[inline]
pub fn anchor_scroll_top(target_top: f64, offset_px: f64) -> f64 {
    (target_top + offset_px).max(0.0)
}

/// Horizontal distance the track travels; negative means leftward.
#[inline]
pub fn track_scroll_amount(track_width: f64, viewport_w: f64) -> f64 {
    -(track_width - viewport_w + TRACK_END_PADDING_PX).max(0.0)
}

#[inline]
pub fn track_offset(progress: f64, amount: f64) -> f64 {
    progress.clamp(0.0, 1.0) * amount
}

#[inline]
pub fn skew_from_velocity(velocity_px_per_sec: f32) -> f32 {
    (velocity_px_per_sec / SKEW_VELOCITY_DIVISOR).clamp(-SKEW_MAX_DEG, SKEW_MAX_DEG)
}

/// Card skew following scroll velocity and settling back to rest.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkewState {
    current: f32,
    target: f32,
}

impl SkewState {
    #[inline]
    pub fn skew_deg(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn rotate_y_deg(&self) -> f32 {
        self.current * SKEW_ROTATE_Y_RATIO
    }

    pub fn on_scroll(&mut self, velocity_px_per_sec: f32) {
        self.target = skew_from_velocity(velocity_px_per_sec);
    }

    pub fn on_idle(&mut self) {
        self.target = 0.0;
    }

    /// Exponential approach toward the target. Returns true when the skew
    /// changed this step.
    pub fn step(&mut self, dt_sec: f32) -> bool {
        let before = self.current;
        let alpha = 1.0 - (-dt_sec.max(0.0) / SKEW_RELAX_TAU_SEC).exp();
        self.current += (self.target - self.current) * alpha;
        if (self.target - self.current).abs() < 0.01 {
            self.current = self.target;
        }
        self.current != before
    }
}

pub fn lerp_rgb(from: [u8; 3], to: [u8; 3], t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let mut out = [0u8; 3];
    for i in 0..3 {
        let a = from[i] as f64;
        let b = to[i] as f64;
        out[i] = (a + (b - a) * t).round() as u8;
    }
    out
}

#[inline]
pub fn css_rgb(rgb: [u8; 3]) -> String {
    format!("rgb({}, {}, {})", rgb[0], rgb[1], rgb[2])
}

#[inline]
pub fn section_background(progress: f64) -> [u8; 3] {
    lerp_rgb(SECTION_BG_FROM, SECTION_BG_TO, progress)
}

/// Visual state of a feature slide as the next one slides over it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideCover {
    pub scale: f32,
    pub blur_px: f32,
    pub opacity: f32,
}

impl SlideCover {
    pub fn at(progress: f64) -> Self {
        let t = progress.clamp(0.0, 1.0) as f32;
        Self {
            scale: 1.0 + (SLIDE_COVER_SCALE - 1.0) * t,
            blur_px: SLIDE_COVER_BLUR_PX * t,
            opacity: 1.0 + (SLIDE_COVER_OPACITY - 1.0) * t,
        }
    }
}
