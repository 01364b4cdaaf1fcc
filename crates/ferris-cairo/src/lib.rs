//! Cairo host for the ferris wheel menu: label measurement, freedesktop icon
//! lookup, a retained scene and a still-frame renderer.

pub mod icon;
pub mod measure;
pub mod scene;
pub mod view;

pub use icon::PixbufIcons;
pub use measure::CairoTextMeasure;
pub use scene::Scene;
pub use view::{Theme, draw};
