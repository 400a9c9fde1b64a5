/// Browser-side tuning constants: selectors, colors and render settings.
///
/// Numeric model constants (trail, field, sequencing, rain) live in
/// `core/constants.rs`; these only concern how the page is wired and drawn.
// Element hooks
pub const HERO_CONTAINER_ID: &str = "webgl-hero";
pub const HUMAN_SECTION: &str = ".human-section";
pub const HUMAN_VIDEO: &str = ".human-video";
pub const HUMAN_TEXT: &str = ".human-text";
pub const HORIZONTAL_SECTION: &str = ".horizontal-section";
pub const HORIZONTAL_TRACK: &str = ".horizontal-track";
pub const HORIZONTAL_CARD: &str = ".horiz-card";
pub const FEATURE_SLIDE: &str = ".feature-slide";
pub const SCROLL_CARD: &str = ".scroll-card";
pub const CARD_VIDEO: &str = ".card-video";
pub const REVEAL: &str = ".reveal";
pub const NAVBAR: &str = ".navbar";
pub const MOBILE_MENU_BUTTON: &str = ".mobile-menu-btn";
pub const RAIN_CONTAINER: &str = ".rain-container";
pub const ANCHOR_LINK: &str = "a[href^=\"#\"]";

// Class names toggled on elements
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_MENU_OPEN: &str = "menu-open";
pub const CLASS_LOADED: &str = "loaded";
pub const CLASS_RAIN_DROP: &str = "rain-drop";

// Region boundaries, "<element edge> <viewport anchor>"
pub const HUMAN_REGION: (&str, &str) = ("top top", "bottom bottom");
pub const REVEAL_REGION: (&str, &str) = ("top 85%", "top 85%");
pub const HORIZONTAL_BG_REGION: (&str, &str) = ("top bottom", "center center");
pub const SLIDE_REGION: (&str, &str) = ("top top", "bottom top");
pub const SLIDE_ENTER_REGION: (&str, &str) = ("top 60%", "top 60%");
pub const SECTION_REVEAL_REGION: (&str, &str) = ("top 80%", "top 80%");

// In-page anchor jumps stop short of the target, clear of the fixed navbar
pub const ANCHOR_SCROLL_OFFSET_PX: f64 = -100.0;

// Sections whose children fade in once
pub const REVEAL_SECTIONS: [&str; 3] = [".concept-section", ".business-section", ".footer"];

// Hero rendering
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const TEXT_TEXTURE_WIDTH: u32 = 2048;
pub const TEXT_TEXTURE_MAX_HEIGHT: u32 = 4096;
pub const HERO_TEXT: &str = "gentlerain";
pub const HERO_TEXT_COLOR: &str = "#FFF0B3";
pub const HERO_FONT_FAMILY: &str = "\"Gabarito\", sans-serif";
pub const HERO_FONT_SCALE: f64 = 0.17; // font size as a fraction of texture width
pub const HERO_TEXT_Y: f64 = 0.38; // baseline as a fraction of texture height

// Scroll dispatch
pub const SCROLL_IDLE_FRAMES: u32 = 6; // frames without movement before skew relaxes
pub const MEDIA_HAVE_METADATA: u16 = 1;
