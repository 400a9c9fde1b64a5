pub mod pointer;
pub mod resize;

pub use pointer::wire_hero_pointer;
pub use resize::{wire_resize, LayoutInvalidator};
