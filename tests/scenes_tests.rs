// Host-side tests for the scroll-linked scene effects.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod model {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scenes {
        include!("../src/core/scenes.rs");
    }
}

use model::constants::*;
use model::scenes::*;

#[test]
fn navbar_switches_past_threshold() {
    assert!(!navbar_scrolled(0.0));
    assert!(!navbar_scrolled(NAV_SCROLLED_AFTER_PX));
    assert!(navbar_scrolled(NAV_SCROLLED_AFTER_PX + 1.0));
}

#[test]
fn reveal_latches_once() {
    let mut r = RevealOnce::default();
    assert!(!r.observe(0.0));
    assert!(!r.is_revealed());
    assert!(r.observe(1.0));
    assert!(r.is_revealed());
    // Scrolling back out never hides it again
    assert!(!r.observe(0.0));
    assert!(!r.observe(1.0));
    assert!(r.is_revealed());
}

#[test]
fn track_moves_left_by_overflow_plus_padding() {
    let amount = track_scroll_amount(3000.0, 1200.0);
    assert_eq!(amount, -(3000.0 - 1200.0 + TRACK_END_PADDING_PX));
    assert_eq!(track_offset(0.0, amount), 0.0);
    assert_eq!(track_offset(0.5, amount), amount * 0.5);
    assert_eq!(track_offset(2.0, amount), amount);

    // Narrow track never moves right
    assert_eq!(track_scroll_amount(500.0, 1200.0), 0.0);
}

#[test]
fn skew_follows_velocity_within_limits() {
    assert_eq!(skew_from_velocity(0.0), 0.0);
    assert_eq!(skew_from_velocity(-1000.0), -4.0);
    assert_eq!(skew_from_velocity(5000.0), SKEW_MAX_DEG);
    assert_eq!(skew_from_velocity(-5000.0), -SKEW_MAX_DEG);
}

#[test]
fn skew_approaches_target_then_relaxes_to_rest() {
    let mut s = SkewState::default();
    assert!(!s.step(0.016));

    s.on_scroll(2500.0);
    assert!(s.step(1.0));
    assert!((s.skew_deg() - 10.0).abs() < 0.05);
    assert!((s.rotate_y_deg() - s.skew_deg() * SKEW_ROTATE_Y_RATIO).abs() < 1e-6);

    s.on_idle();
    let mut frames = 0;
    while s.step(0.016) {
        frames += 1;
        assert!(frames < 1000, "skew never settled");
    }
    assert_eq!(s.skew_deg(), 0.0);
}

#[test]
fn skew_step_reports_only_actual_changes() {
    let mut s = SkewState::default();
    s.on_scroll(2500.0);
    while s.step(0.05) {}
    // Held at a nonzero target: nothing left to write to the cards
    assert_eq!(s.skew_deg(), 10.0);
    assert!(!s.step(0.016));
    assert!(!s.step(0.016));

    s.on_scroll(-2500.0);
    assert!(s.step(0.016));
}

#[test]
fn skew_ignores_negative_time() {
    let mut s = SkewState::default();
    s.on_scroll(1000.0);
    assert!(!s.step(-1.0));
    assert_eq!(s.skew_deg(), 0.0);
}

#[test]
fn anchor_links_resolve_to_fragment_ids() {
    assert_eq!(anchor_fragment("#concept"), Some("concept"));
    assert_eq!(anchor_fragment("#"), None);
    assert_eq!(anchor_fragment(""), None);
    assert_eq!(anchor_fragment("/about#team"), None);
}

#[test]
fn anchor_jump_stops_short_of_the_target() {
    assert_eq!(anchor_scroll_top(2400.0, -100.0), 2300.0);
    // Targets near the top never scroll above the document
    assert_eq!(anchor_scroll_top(40.0, -100.0), 0.0);
}

#[test]
fn background_interpolates_between_brand_colors() {
    assert_eq!(section_background(0.0), SECTION_BG_FROM);
    assert_eq!(section_background(1.0), SECTION_BG_TO);
    assert_eq!(section_background(-3.0), SECTION_BG_FROM);
    assert_eq!(lerp_rgb([0, 0, 0], [255, 100, 10], 0.5), [128, 50, 5]);
    assert_eq!(css_rgb([231, 83, 35]), "rgb(231, 83, 35)");
}

#[test]
fn slide_cover_goes_from_rest_to_covered() {
    let rest = SlideCover::at(0.0);
    assert_eq!(
        rest,
        SlideCover {
            scale: 1.0,
            blur_px: 0.0,
            opacity: 1.0
        }
    );
    let covered = SlideCover::at(1.0);
    assert!((covered.scale - SLIDE_COVER_SCALE).abs() < 1e-6);
    assert!((covered.blur_px - SLIDE_COVER_BLUR_PX).abs() < 1e-6);
    assert!((covered.opacity - SLIDE_COVER_OPACITY).abs() < 1e-6);

    let mid = SlideCover::at(0.5);
    assert!(mid.scale < rest.scale && mid.scale > covered.scale);
    assert_eq!(SlideCover::at(4.0), covered);
}
