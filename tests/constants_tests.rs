// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

const HERO_WGSL: &str = include_str!("../shaders/hero.wgsl");

#[test]
#[allow(clippy::assertions_on_constants)]
fn trail_constants_are_within_reasonable_bounds() {
    assert!(TRAIL_LENGTH > 1);
    assert!(TRAIL_RADIUS > 0.0);

    // Strength must shrink on every shift
    assert!(DECAY_RATE > 0.0 && DECAY_RATE < 1.0);
    assert!(MOUSE_LERP > 0.0 && MOUSE_LERP < 1.0);
    assert!(VELOCITY_RETAIN >= 0.0 && VELOCITY_RETAIN < 1.0);

    assert!(STRENGTH_GAIN > 0.0);
    assert!(STRENGTH_MAX > 0.0);
    assert!(TRAIL_ADVANCE_EVERY >= 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_constants_have_logical_relationships() {
    assert!(FIELD_EPSILON > 0.0);
    assert!(GRADIENT_STEP > 0.0 && GRADIENT_STEP < TRAIL_RADIUS);
    assert!(EDGE_THRESHOLD > 0.0);

    // Fluid push dominates the idle simmer
    assert!(DISTORTION_STRENGTH > IDLE_NOISE_STRENGTH);
    assert!(IDLE_SECOND_OCTAVE_WEIGHT >= 0.0 && IDLE_SECOND_OCTAVE_WEIGHT <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rain_ranges_are_ordered() {
    assert!(RAIN_SPAWN_INTERVAL_MS > 0);
    assert!(RAIN_DURATION_MIN_SEC > 0.0 && RAIN_DURATION_MIN_SEC < RAIN_DURATION_MAX_SEC);
    assert!(RAIN_HEIGHT_MIN_PX > 0.0 && RAIN_HEIGHT_MIN_PX < RAIN_HEIGHT_MAX_PX);
    assert!(RAIN_OPACITY_MIN > 0.0 && RAIN_OPACITY_MAX <= 1.0);
    assert!(RAIN_OPACITY_MIN < RAIN_OPACITY_MAX);
    assert!(RAIN_FALL_OVERSHOOT_PX >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sequencing_and_scene_constants_are_positive() {
    assert!(SEEK_HYSTERESIS_SEC > 0.0);
    assert!(MOBILE_MAX_WIDTH_PX > 0.0);
    assert!(RESIZE_DEBOUNCE_MS > 0.0);
    assert!(DURATION_FALLBACK_MS > 0);
    assert!(NAV_SCROLLED_AFTER_PX > 0.0);
    assert!(SKEW_VELOCITY_DIVISOR > 0.0);
    assert!(SKEW_MAX_DEG > 0.0);
    assert!(SKEW_RELAX_TAU_SEC > 0.0);
    assert!(SLIDE_COVER_SCALE > 0.0 && SLIDE_COVER_SCALE <= 1.0);
    assert!(SLIDE_COVER_OPACITY > 0.0 && SLIDE_COVER_OPACITY <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn render_settings_are_sane() {
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(TEXT_TEXTURE_WIDTH > 0 && TEXT_TEXTURE_WIDTH <= TEXT_TEXTURE_MAX_HEIGHT);
    assert!(HERO_FONT_SCALE > 0.0 && HERO_FONT_SCALE < 1.0);
    assert!(HERO_TEXT_Y > 0.0 && HERO_TEXT_Y < 1.0);
    assert!(!HERO_TEXT.is_empty());
    assert!(SCROLL_IDLE_FRAMES > 0);
}

#[test]
fn selectors_are_well_formed() {
    for sel in [
        HUMAN_SECTION,
        HUMAN_VIDEO,
        HUMAN_TEXT,
        HORIZONTAL_SECTION,
        HORIZONTAL_TRACK,
        HORIZONTAL_CARD,
        FEATURE_SLIDE,
        SCROLL_CARD,
        CARD_VIDEO,
        REVEAL,
        NAVBAR,
        MOBILE_MENU_BUTTON,
        RAIN_CONTAINER,
    ] {
        assert!(sel.starts_with('.'), "{sel}");
    }
    for sel in REVEAL_SECTIONS {
        assert!(sel.starts_with('.'), "{sel}");
    }
    assert!(!HERO_CONTAINER_ID.starts_with('#'));
}

#[test]
fn shader_constants_match_the_cpu_model() {
    let expect = [
        format!("const TRAIL_LENGTH: u32 = {}u;", TRAIL_LENGTH),
        format!("trail: array<vec4<f32>, {}>", TRAIL_LENGTH),
        format!("const TRAIL_RADIUS: f32 = {:?};", TRAIL_RADIUS),
        format!("const GRADIENT_STEP: f32 = {:?};", GRADIENT_STEP),
        format!("const GRADIENT_MIN: f32 = {:?};", GRADIENT_MIN),
        format!("const EDGE_THRESHOLD: f32 = {:?};", EDGE_THRESHOLD),
        format!("const DISTORTION_STRENGTH: f32 = {:?};", DISTORTION_STRENGTH),
        format!("const IDLE_NOISE_STRENGTH: f32 = {:?};", IDLE_NOISE_STRENGTH),
    ];
    for line in expect {
        assert!(HERO_WGSL.contains(&line), "shader is missing `{line}`");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn anchor_navigation_settings() {
    assert!(ANCHOR_LINK.starts_with("a[href"));
    // Negative: the jump lands above the target, clear of the navbar
    assert!(ANCHOR_SCROLL_OFFSET_PX < 0.0);
    assert!(-ANCHOR_SCROLL_OFFSET_PX >= NAV_SCROLLED_AFTER_PX);
}

#[test]
fn toggled_class_names_are_plain_tokens() {
    // Stylesheets key their transitions on these names
    for class in [
        CLASS_ACTIVE,
        CLASS_VISIBLE,
        CLASS_SCROLLED,
        CLASS_MENU_OPEN,
        CLASS_LOADED,
        CLASS_RAIN_DROP,
    ] {
        assert!(!class.is_empty());
        assert!(
            class.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'),
            "{class}"
        );
    }
}
