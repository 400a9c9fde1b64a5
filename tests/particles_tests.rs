// Host-side tests for the rain particle spawner.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod model {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use model::constants::*;
use model::particles::*;

#[test]
fn spawned_parameters_fall_within_ranges() {
    let mut spawner = ParticleSpawner::new(7);
    for i in 0..500 {
        let p = spawner.spawn(i as f64 * 0.1, 1280.0, 720.0);
        assert!(p.left_px >= 0.0 && p.left_px < 1280.0);
        assert!((RAIN_HEIGHT_MIN_PX..=RAIN_HEIGHT_MAX_PX).contains(&p.height_px));
        assert!((RAIN_OPACITY_MIN..=RAIN_OPACITY_MAX).contains(&p.opacity));
        assert!((RAIN_DURATION_MIN_SEC..=RAIN_DURATION_MAX_SEC).contains(&p.duration_sec));
        assert_eq!(p.fall_px, 720.0 + RAIN_FALL_OVERSHOOT_PX);
    }
}

#[test]
fn ids_are_unique_and_increasing() {
    let mut spawner = ParticleSpawner::new(1);
    let ids: Vec<u64> = (0..10).map(|_| spawner.spawn(0.0, 100.0, 100.0).id).collect();
    assert_eq!(ids, (0..10).collect::<Vec<u64>>());
}

#[test]
fn same_seed_gives_same_rain() {
    let mut a = ParticleSpawner::new(42);
    let mut b = ParticleSpawner::new(42);
    for _ in 0..20 {
        assert_eq!(a.spawn(1.0, 800.0, 600.0), b.spawn(1.0, 800.0, 600.0));
    }
}

#[test]
fn zero_width_viewport_spawns_at_left_edge() {
    let mut spawner = ParticleSpawner::new(3);
    let p = spawner.spawn(0.0, 0.0, 0.0);
    assert_eq!(p.left_px, 0.0);
    assert_eq!(p.fall_px, RAIN_FALL_OVERSHOOT_PX);
}

#[test]
fn drops_fall_linearly_and_are_removed_when_done() {
    let mut spawner = ParticleSpawner::new(9);
    let p = spawner.spawn(10.0, 500.0, 900.0);

    let half = 10.0 + p.duration_sec as f64 * 0.5;
    assert!((p.offset_y(half) - p.fall_px * 0.5).abs() < 0.5);
    assert_eq!(p.offset_y(10.0), 0.0);
    assert_eq!(p.offset_y(5.0), 0.0);

    let step = spawner.step(10.5);
    assert_eq!(step.moved.len(), 1);
    assert_eq!(step.moved[0].id, p.id);
    assert!(step.removed.is_empty());

    let step = spawner.step(10.0 + RAIN_DURATION_MAX_SEC as f64 + 0.01);
    assert!(step.moved.is_empty());
    assert_eq!(step.removed, vec![p.id]);
    assert_eq!(spawner.live_count(), 0);
}

#[test]
fn live_count_stays_bounded_at_steady_state() {
    let mut spawner = ParticleSpawner::new(11);
    let interval = RAIN_SPAWN_INTERVAL_MS as f64 / 1000.0;
    let ceiling = ParticleSpawner::expected_ceiling();
    assert_eq!(ceiling, 15);

    let mut peak = 0;
    for tick in 0..600 {
        let now = tick as f64 * interval;
        spawner.step(now);
        spawner.spawn(now, 1920.0, 1080.0);
        peak = peak.max(spawner.live_count());
        assert!(spawner.live_count() <= ceiling + 1, "tick {tick}");
    }
    // Shorter lifetimes keep the steady state well under the bound
    assert!(peak >= (RAIN_DURATION_MIN_SEC as f64 / interval) as usize);
}
