//! Stand-in collaborators for unit tests.

use crate::geometry::{Size, Transform};
use crate::host::{Animator, IconSource, TextMeasure, ViewHost};
use crate::item::{FontSpec, IconName};
use crate::wheel::{ButtonDescriptor, Spin, Transition, TransitionToken};
use std::collections::HashMap;

/// Every character is `self.0` wide.
pub struct CharWidthMeasure(pub f64);

impl TextMeasure for CharWidthMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        Size::new(text.chars().count() as f64 * self.0, font.size)
    }
}

pub struct MapIcons(HashMap<String, Size>);

impl MapIcons {
    pub fn new<'a>(icons: impl IntoIterator<Item = (&'a str, Size)>) -> Self {
        Self(
            icons
                .into_iter()
                .map(|(name, size)| (name.to_string(), size))
                .collect(),
        )
    }
}

impl IconSource for MapIcons {
    fn natural_size(&self, name: &IconName) -> Option<Size> {
        self.0.get(name.as_str()).copied()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    RemoveAll,
    AddChild(usize),
    WheelTransform(Transform),
    ButtonTransform(usize, Transform),
    Alpha(f64),
    Animate(Transition),
    Cancel(TransitionToken),
    StartSpin(Spin),
    StopSpin(String),
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    pub children: Vec<usize>,
}

impl RecordingHost {
    pub fn last_transition(&self) -> Option<&Transition> {
        self.calls.iter().rev().find_map(|c| match c {
            HostCall::Animate(t) => Some(t),
            _ => None,
        })
    }

    pub fn count(&self, pred: impl Fn(&HostCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl ViewHost for RecordingHost {
    fn remove_all_children(&mut self) {
        self.children.clear();
        self.calls.push(HostCall::RemoveAll);
    }

    fn add_child(&mut self, button: &ButtonDescriptor) {
        self.children.push(button.index);
        self.calls.push(HostCall::AddChild(button.index));
    }

    fn set_wheel_transform(&mut self, transform: Transform) {
        self.calls.push(HostCall::WheelTransform(transform));
    }

    fn set_button_transform(&mut self, index: usize, transform: Transform) {
        self.calls.push(HostCall::ButtonTransform(index, transform));
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.calls.push(HostCall::Alpha(alpha));
    }
}

impl Animator for RecordingHost {
    fn animate(&mut self, transition: &Transition) {
        self.calls.push(HostCall::Animate(transition.clone()));
    }

    fn cancel(&mut self, token: TransitionToken) {
        self.calls.push(HostCall::Cancel(token));
    }

    fn start_spin(&mut self, spin: &Spin) {
        self.calls.push(HostCall::StartSpin(spin.clone()));
    }

    fn stop_spin(&mut self, key: &str) {
        self.calls.push(HostCall::StopSpin(key.to_string()));
    }
}
