use super::constants::*;
use rand::prelude::*;

/// Randomized parameters of one falling drop, fixed at spawn time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub left_px: f32,
    pub height_px: f32,
    pub opacity: f32,
    pub duration_sec: f32,
    /// Total vertical travel; ends below the viewport
    pub fall_px: f32,
    pub born_sec: f64,
}

impl Particle {
    #[inline]
    pub fn age(&self, now_sec: f64) -> f32 {
        (now_sec - self.born_sec).max(0.0) as f32
    }

    /// Linear fall offset at `now_sec`, reaching `fall_px` at the end of life.
    #[inline]
    pub fn offset_y(&self, now_sec: f64) -> f32 {
        let t = (self.age(now_sec) / self.duration_sec).clamp(0.0, 1.0);
        self.fall_px * t
    }

    #[inline]
    pub fn is_finished(&self, now_sec: f64) -> bool {
        self.age(now_sec) >= self.duration_sec
    }
}

/// Per-frame position of a live drop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleFrame {
    pub id: u64,
    pub offset_y: f32,
}

/// Result of stepping the spawner: moved drops and drops to remove.
#[derive(Clone, Debug, Default)]
pub struct ParticleStep {
    pub moved: Vec<ParticleFrame>,
    pub removed: Vec<u64>,
}

/// Creates short-lived falling drops on a fixed timer and retires them.
///
/// The live count is bounded only by spawn rate times the longest lifetime.
pub struct ParticleSpawner {
    rng: StdRng,
    live: Vec<Particle>,
    next_id: u64,
}

impl ParticleSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            live: Vec::new(),
            next_id: 0,
        }
    }

    #[inline]
    pub fn live(&self) -> &[Particle] {
        &self.live
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Upper bound on concurrently live drops at the configured spawn rate.
    pub fn expected_ceiling() -> usize {
        let interval_sec = RAIN_SPAWN_INTERVAL_MS as f32 / 1000.0;
        (RAIN_DURATION_MAX_SEC / interval_sec).ceil() as usize
    }

    pub fn spawn(&mut self, now_sec: f64, viewport_w: f32, viewport_h: f32) -> Particle {
        let left_px = if viewport_w > 0.0 {
            self.rng.gen_range(0.0..viewport_w)
        } else {
            0.0
        };
        let particle = Particle {
            id: self.next_id,
            left_px,
            height_px: self.rng.gen_range(RAIN_HEIGHT_MIN_PX..=RAIN_HEIGHT_MAX_PX),
            opacity: self.rng.gen_range(RAIN_OPACITY_MIN..=RAIN_OPACITY_MAX),
            duration_sec: self
                .rng
                .gen_range(RAIN_DURATION_MIN_SEC..=RAIN_DURATION_MAX_SEC),
            fall_px: viewport_h.max(0.0) + RAIN_FALL_OVERSHOOT_PX,
            born_sec: now_sec,
        };
        self.next_id = self.next_id.wrapping_add(1);
        self.live.push(particle);
        particle
    }

    /// Advance all drops to `now_sec`, dropping the ones that completed.
    pub fn step(&mut self, now_sec: f64) -> ParticleStep {
        let mut out = ParticleStep::default();
        self.live.retain(|p| {
            if p.is_finished(now_sec) {
                out.removed.push(p.id);
                false
            } else {
                out.moved.push(ParticleFrame {
                    id: p.id,
                    offset_y: p.offset_y(now_sec),
                });
                true
            }
        });
        out
    }
}
