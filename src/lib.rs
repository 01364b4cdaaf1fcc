//! Circular popup menu core: lays buttons out around a wheel, rotates the
//! wheel under a drag while keeping labels upright, and sequences the
//! show/hide transitions. Rendering, fonts and timers live behind [`host`].

pub mod config;
pub mod events;
pub mod geometry;
pub mod host;
pub mod item;
pub mod macros;
pub mod wheel;

#[cfg(test)]
pub(crate) mod testing;

pub use events::GestureEvent;
pub use geometry::{Point, Size, Transform};
pub use item::{Action, ButtonStyle, FontSpec, IconName, MenuItem};
pub use wheel::{ButtonDescriptor, FerrisWheel, LayoutEngine, LayoutOptions, WheelError};
