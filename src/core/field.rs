use super::constants::*;
use super::trail::TrailSample;
use glam::Vec2;

// CPU reference for the hero shader. `shaders/hero.wgsl` evaluates the same
// formulas per fragment; keep both in sync.

/// Sum of inverse-square contributions of every trail sample at `p`.
pub fn field_at(samples: &[TrailSample], p: Vec2) -> f32 {
    let r2 = TRAIL_RADIUS * TRAIL_RADIUS;
    samples
        .iter()
        .map(|s| (r2 * s.strength) / (p.distance_squared(s.position) + FIELD_EPSILON))
        .sum()
}

/// Central-difference gradient of [`field_at`].
pub fn gradient_at(samples: &[TrailSample], p: Vec2) -> Vec2 {
    let dx = Vec2::new(GRADIENT_STEP, 0.0);
    let dy = Vec2::new(0.0, GRADIENT_STEP);
    let fx = field_at(samples, p + dx) - field_at(samples, p - dx);
    let fy = field_at(samples, p + dy) - field_at(samples, p - dy);
    Vec2::new(fx, fy) / (2.0 * GRADIENT_STEP)
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Melting push away from the field concentration at `p` (trail space).
pub fn fluid_offset(samples: &[TrailSample], p: Vec2) -> Vec2 {
    let gradient = gradient_at(samples, p);
    let len = gradient.length();
    if len < GRADIENT_MIN || !len.is_finite() {
        return Vec2::ZERO;
    }
    let amount = smoothstep(0.0, EDGE_THRESHOLD, field_at(samples, p));
    -(gradient / len) * amount * DISTORTION_STRENGTH
}

#[inline]
fn fract(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
pub fn hash(p: Vec2) -> f32 {
    fract((p.dot(Vec2::new(127.1, 311.7))).sin() * 43758.547)
}

/// Value noise in 0..1 with smoothstep-interpolated lattice corners.
pub fn noise(p: Vec2) -> f32 {
    let i = p.floor();
    let f = p - i;
    let f = f * f * (Vec2::splat(3.0) - 2.0 * f);
    let a = hash(i);
    let b = hash(i + Vec2::new(1.0, 0.0));
    let c = hash(i + Vec2::new(0.0, 1.0));
    let d = hash(i + Vec2::new(1.0, 1.0));
    let top = a + (b - a) * f.x;
    let bottom = c + (d - c) * f.x;
    top + (bottom - top) * f.y
}

/// Always-on simmering offset; independent of pointer activity.
pub fn idle_offset(uv: Vec2, time: f32) -> Vec2 {
    let mut n = noise(uv * IDLE_NOISE_SCALE + Vec2::splat(time * IDLE_DRIFT_FAST));
    n += noise(uv * (IDLE_NOISE_SCALE * 2.0) - Vec2::splat(time * IDLE_DRIFT_SLOW))
        * IDLE_SECOND_OCTAVE_WEIGHT;
    let angle = n * std::f32::consts::TAU;
    Vec2::new(angle.sin(), angle.cos()) * IDLE_NOISE_STRENGTH
}

/// Total texture-coordinate offset for surface coordinate `uv` (0..1).
pub fn displacement(samples: &[TrailSample], uv: Vec2, resolution: Vec2, time: f32) -> Vec2 {
    let aspect = if resolution.y > 0.0 {
        resolution.x / resolution.y
    } else {
        1.0
    };
    let aspect_uv = uv * Vec2::new(aspect, 1.0);
    idle_offset(uv, time) + fluid_offset(samples, aspect_uv)
}
