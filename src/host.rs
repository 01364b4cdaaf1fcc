//! Collaborators the wheel talks to. A toolkit binding implements these; the
//! core never touches pixels, fonts or timers itself.

use crate::geometry::{Size, Transform};
use crate::item::{FontSpec, IconName};
use crate::wheel::animation::{Spin, Transition, TransitionToken};
use crate::wheel::layout::ButtonDescriptor;

/// Receives the view mutations the wheel decides on.
pub trait ViewHost {
    fn remove_all_children(&mut self);
    fn add_child(&mut self, button: &ButtonDescriptor);
    fn set_wheel_transform(&mut self, transform: Transform);
    fn set_button_transform(&mut self, index: usize, transform: Transform);
    fn set_alpha(&mut self, alpha: f64);
}

/// Runs transitions on the presentation layer.
///
/// `animate` must return immediately. When the transition ends the host calls
/// [`FerrisWheel::finish_transition`](crate::wheel::FerrisWheel::finish_transition)
/// with the transition's token. A spin with a finite repeat count that runs
/// out is reported through
/// [`FerrisWheel::finish_spin`](crate::wheel::FerrisWheel::finish_spin).
pub trait Animator {
    fn animate(&mut self, transition: &Transition);
    fn cancel(&mut self, token: TransitionToken);
    fn start_spin(&mut self, spin: &Spin);
    fn stop_spin(&mut self, key: &str);
}

pub trait TextMeasure {
    /// Bounding box of `text` set in `font`. Hosts fall back to a default face
    /// when the family is unavailable.
    fn measure(&self, text: &str, font: &FontSpec) -> Size;
}

pub trait IconSource {
    /// Natural size of the named icon, `None` when it cannot be found.
    fn natural_size(&self, name: &IconName) -> Option<Size>;
}

/// Icon source for hosts without icon support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIcons;

impl IconSource for NoIcons {
    fn natural_size(&self, _name: &IconName) -> Option<Size> {
        None
    }
}
