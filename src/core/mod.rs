pub mod constants;
pub mod field;
pub mod particles;
pub mod progress;
pub mod scenes;
pub mod sequencer;
pub mod trail;
pub mod viewport;

pub use constants::*;

// Shaders bundled as string constants
pub static HERO_WGSL: &str = include_str!("../../shaders/hero.wgsl");
