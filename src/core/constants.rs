// Numeric model constants shared by the hero field, sequencer and rain.
// Kept free of browser types so host tests can include them directly.

// Pointer trail
pub const TRAIL_LENGTH: usize = 15; // samples in the ring, index 0 newest
pub const TRAIL_RADIUS: f32 = 0.12; // radius of influence per sample
pub const DECAY_RATE: f32 = 0.92; // strength multiplier per shift
pub const TRAIL_ADVANCE_EVERY: u64 = 2; // frames between trail shifts
pub const TRAIL_OFFSCREEN: [f32; 2] = [-10.0, -10.0]; // parked sample position

// Pointer smoothing
pub const MOUSE_LERP: f32 = 0.1; // fraction of remaining distance per frame
pub const VELOCITY_RETAIN: f32 = 0.85; // previous velocity kept per frame
pub const VELOCITY_GAIN: f32 = 15.0; // weight of the new displacement
pub const STRENGTH_GAIN: f32 = 2.5; // velocity -> head strength
pub const STRENGTH_MAX: f32 = 4.0;

// Fluid field
pub const FIELD_EPSILON: f32 = 0.0001; // keeps the inverse-square finite
pub const GRADIENT_STEP: f32 = 0.002; // central-difference step
pub const GRADIENT_MIN: f32 = 0.001; // below this no fluid offset is applied
pub const EDGE_THRESHOLD: f32 = 0.4; // field value where distortion saturates
pub const DISTORTION_STRENGTH: f32 = 0.06;

// Idle simmering
pub const IDLE_NOISE_SCALE: f32 = 4.0;
pub const IDLE_NOISE_STRENGTH: f32 = 0.003;
pub const IDLE_DRIFT_FAST: f32 = 0.5; // time multiplier, first octave
pub const IDLE_DRIFT_SLOW: f32 = 0.3; // time multiplier, second octave
pub const IDLE_SECOND_OCTAVE_WEIGHT: f32 = 0.5;

// Section sequencing
pub const SEEK_HYSTERESIS_SEC: f64 = 0.05; // skip seeks closer than this
pub const MOBILE_MAX_WIDTH_PX: f64 = 768.0; // inclusive mobile breakpoint
pub const RESIZE_DEBOUNCE_MS: f64 = 250.0;
pub const DURATION_FALLBACK_MS: i32 = 1000; // give up waiting for metadata

// Rain
pub const RAIN_SPAWN_INTERVAL_MS: i32 = 100;
pub const RAIN_DURATION_MIN_SEC: f32 = 0.8;
pub const RAIN_DURATION_MAX_SEC: f32 = 1.5;
pub const RAIN_HEIGHT_MIN_PX: f32 = 20.0;
pub const RAIN_HEIGHT_MAX_PX: f32 = 50.0;
pub const RAIN_OPACITY_MIN: f32 = 0.3;
pub const RAIN_OPACITY_MAX: f32 = 0.7;
pub const RAIN_FALL_OVERSHOOT_PX: f32 = 100.0; // drops finish below the viewport

// Scroll scenes
pub const NAV_SCROLLED_AFTER_PX: f64 = 80.0;
pub const SKEW_VELOCITY_DIVISOR: f32 = 250.0; // px/s per degree
pub const SKEW_MAX_DEG: f32 = 15.0;
pub const SKEW_ROTATE_Y_RATIO: f32 = 0.5;
pub const SKEW_RELAX_TAU_SEC: f32 = 0.15; // settle time once scrolling stops
pub const TRACK_END_PADDING_PX: f64 = 100.0;
pub const SLIDE_COVER_SCALE: f32 = 0.95;
pub const SLIDE_COVER_BLUR_PX: f32 = 10.0;
pub const SLIDE_COVER_OPACITY: f32 = 0.5;
pub const SECTION_BG_FROM: [u8; 3] = [0xe7, 0x53, 0x23]; // core orange
pub const SECTION_BG_TO: [u8; 3] = [0x0f, 0x3c, 0x4c]; // deep teal
