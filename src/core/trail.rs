use super::constants::*;
use glam::Vec2;

/// One entry of the pointer trail.
///
/// Fields:
/// - `position`: aspect-corrected trail-space coordinate (x in 0..aspect, y in 0..1)
/// - `strength`: influence of this sample on the fluid field, 0..=`STRENGTH_MAX`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSample {
    pub position: Vec2,
    pub strength: f32,
}

impl Default for TrailSample {
    fn default() -> Self {
        Self {
            position: Vec2::from_array(TRAIL_OFFSCREEN),
            strength: 0.0,
        }
    }
}

/// Exponential low-pass filter toward the last reported pointer position.
///
/// Coordinates are normalized device coordinates (-1..1, y up). `current`
/// approaches `target` by `MOUSE_LERP` of the remaining distance per step and
/// never lands on it exactly.
#[derive(Clone, Copy, Debug)]
pub struct SmoothedPointer {
    pub current: Vec2,
    pub target: Vec2,
}

impl Default for SmoothedPointer {
    fn default() -> Self {
        let parked = Vec2::from_array(TRAIL_OFFSCREEN);
        Self {
            current: parked,
            target: parked,
        }
    }
}

impl SmoothedPointer {
    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    #[inline]
    pub fn step(&mut self) -> Vec2 {
        self.current += (self.target - self.current) * MOUSE_LERP;
        self.current
    }
}

/// Smoothed magnitude of frame-to-frame pointer displacement.
#[derive(Clone, Copy, Debug)]
pub struct VelocityTracker {
    prev: Vec2,
    value: f32,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self {
            prev: Vec2::from_array(TRAIL_OFFSCREEN),
            value: 0.0,
        }
    }
}

impl VelocityTracker {
    pub fn update(&mut self, pos: Vec2) -> f32 {
        let moved = pos.distance(self.prev);
        self.value = self.value * VELOCITY_RETAIN + moved * VELOCITY_GAIN;
        self.prev = pos;
        self.value
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }
}

/// Fixed-length history of recent pointer positions feeding the fluid field.
///
/// The buffer length never changes. Each `advance` shifts every sample one
/// slot toward the tail (decaying its strength) and writes a fresh head.
#[derive(Clone, Debug)]
pub struct TrailBuffer {
    samples: [TrailSample; TRAIL_LENGTH],
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self {
            samples: [TrailSample::default(); TRAIL_LENGTH],
        }
    }
}

impl TrailBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn samples(&self) -> &[TrailSample] {
        &self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Shift the trail and write a new head sample.
    ///
    /// `head` is already in trail space. The head strength is zero whenever
    /// the pointer is outside the hero region.
    pub fn advance(&mut self, head: Vec2, velocity: f32, pointer_in_region: bool) {
        for i in (1..TRAIL_LENGTH).rev() {
            let prev = self.samples[i - 1];
            self.samples[i] = TrailSample {
                position: prev.position,
                strength: prev.strength * DECAY_RATE,
            };
        }
        self.samples[0] = TrailSample {
            position: head,
            strength: head_strength(velocity, pointer_in_region),
        };
    }

    pub fn total_strength(&self) -> f32 {
        self.samples.iter().map(|s| s.strength).sum()
    }

    /// Pack samples as `[x, y, strength, 0]` for the shader uniform block.
    pub fn packed(&self) -> [[f32; 4]; TRAIL_LENGTH] {
        let mut out = [[0.0; 4]; TRAIL_LENGTH];
        for (dst, s) in out.iter_mut().zip(self.samples.iter()) {
            *dst = [s.position.x, s.position.y, s.strength, 0.0];
        }
        out
    }
}

#[inline]
pub fn head_strength(velocity: f32, pointer_in_region: bool) -> f32 {
    if pointer_in_region {
        (velocity * STRENGTH_GAIN).clamp(0.0, STRENGTH_MAX)
    } else {
        0.0
    }
}

/// Map a client-space pointer position into normalized device coordinates.
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Vec2 {
    let w = viewport_w.max(1.0);
    let h = viewport_h.max(1.0);
    Vec2::new((client_x / w) * 2.0 - 1.0, -(client_y / h) * 2.0 + 1.0)
}

/// Map NDC into the shader's aspect-corrected trail space.
#[inline]
pub fn ndc_to_trail(ndc: Vec2, aspect: f32) -> Vec2 {
    Vec2::new((ndc.x * 0.5 + 0.5) * aspect, ndc.y * 0.5 + 0.5)
}

/// Per-frame pointer state of the hero effect.
///
/// Owns the smoothed pointer, velocity tracker and trail so the frame
/// callback and the pointer listeners share a single instance.
#[derive(Clone, Debug)]
pub struct HeroMotion {
    pub pointer: SmoothedPointer,
    pub velocity: VelocityTracker,
    pub trail: TrailBuffer,
    pub pointer_in_region: bool,
    aspect: f32,
    frame: u64,
}

impl HeroMotion {
    pub fn new(aspect: f32) -> Self {
        Self {
            pointer: SmoothedPointer::default(),
            velocity: VelocityTracker::default(),
            trail: TrailBuffer::new(),
            pointer_in_region: false,
            aspect: sanitize_aspect(aspect),
            frame: 0,
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = sanitize_aspect(aspect);
    }

    /// Run one animation frame. Returns true when the trail advanced.
    pub fn frame(&mut self) -> bool {
        let pos = self.pointer.step();
        let velocity = self.velocity.update(pos);
        let advanced = self.frame % TRAIL_ADVANCE_EVERY == 0;
        if advanced {
            let head = ndc_to_trail(pos, self.aspect);
            self.trail.advance(head, velocity, self.pointer_in_region);
        }
        self.frame = self.frame.wrapping_add(1);
        advanced
    }
}

#[inline]
fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}
