use ferris_wheel::host::{Animator, ViewHost};
use ferris_wheel::wheel::{Repeat, Spin, Transition, TransitionToken};
use ferris_wheel::{ButtonDescriptor, Transform};

/// Retained copy of everything the wheel has told its host, for rendering a
/// still frame. Transitions are queued and jump to their end state on `settle`.
#[derive(Debug, Default)]
pub struct Scene {
    pub buttons: Vec<ButtonDescriptor>,
    pub wheel_transform: Transform,
    pub alpha: f64,
    pub spin: Option<Spin>,
    pending: Vec<Transition>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the end keyframe of every queued transition and returns their
    /// tokens so the caller can report completion to the wheel.
    pub fn settle(&mut self) -> Vec<TransitionToken> {
        self.pending
            .drain(..)
            .map(|t| {
                let rotation = Transform::rotation(self.wheel_transform.rotation_angle());
                self.wheel_transform = rotation.then(&Transform::uniform_scale(t.to.scale));
                self.alpha = t.to.alpha;
                t.token
            })
            .collect()
    }

    /// Drops a spin with a finite repeat count, as if it had run out, and
    /// returns its key for the wheel's `finish_spin`.
    pub fn settle_spin(&mut self) -> Option<&'static str> {
        match self.spin {
            Some(Spin {
                key,
                repeat: Repeat::Count(_),
                ..
            }) => {
                self.spin = None;
                Some(key)
            }
            _ => None,
        }
    }
}

impl ViewHost for Scene {
    fn remove_all_children(&mut self) {
        self.buttons.clear();
    }

    fn add_child(&mut self, button: &ButtonDescriptor) {
        self.buttons.push(button.clone());
    }

    fn set_wheel_transform(&mut self, transform: Transform) {
        self.wheel_transform = transform;
    }

    fn set_button_transform(&mut self, index: usize, transform: Transform) {
        if let Some(button) = self.buttons.get_mut(index) {
            button.button_transform = transform;
        }
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }
}

impl Animator for Scene {
    fn animate(&mut self, transition: &Transition) {
        log::debug!(
            "{} transition {} over {:?} ({:?})",
            transition.kind,
            transition.token,
            transition.timing.duration,
            transition.easing
        );
        self.pending.push(transition.clone());
    }

    fn cancel(&mut self, token: TransitionToken) {
        self.pending.retain(|t| t.token != token);
    }

    fn start_spin(&mut self, spin: &Spin) {
        self.spin = Some(spin.clone());
    }

    fn stop_spin(&mut self, key: &str) {
        if self.spin.as_ref().is_some_and(|s| s.key == key) {
            self.spin = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferris_wheel::config::WheelConfig;
    use ferris_wheel::host::{NoIcons, TextMeasure};
    use ferris_wheel::wheel::Timing;
    use ferris_wheel::{FerrisWheel, FontSpec, LayoutEngine, MenuItem, Size};
    use std::time::Duration;

    struct Fixed;

    impl TextMeasure for Fixed {
        fn measure(&self, text: &str, _font: &FontSpec) -> Size {
            Size::new(text.len() as f64 * 7.0, 12.0)
        }
    }

    fn wheel() -> FerrisWheel<Scene> {
        let engine = LayoutEngine::new(Fixed, NoIcons);
        let mut wheel = FerrisWheel::new(Scene::new(), engine, WheelConfig::default());
        let items = vec![MenuItem::labelled("foo"), MenuItem::labelled("bar")];
        wheel.create_menu(&items).unwrap();
        wheel
    }

    #[test]
    fn test_settle_shows_and_hides() {
        let mut wheel = wheel();
        wheel.display(Timing::default());
        for token in wheel.host_mut().settle() {
            wheel.finish_transition(token);
        }
        assert_eq!(wheel.host().alpha, 1.0);
        assert!((wheel.host().wheel_transform.scale_factor() - 1.0).abs() < 1e-9);

        wheel.hide(Timing::default());
        for token in wheel.host_mut().settle() {
            wheel.finish_transition(token);
        }
        assert_eq!(wheel.host().alpha, 0.0);
        assert!((wheel.host().wheel_transform.scale_factor() - 0.01).abs() < 1e-9);
    }

    #[test]
    fn test_cancelled_transition_is_dropped() {
        let mut wheel = wheel();
        wheel.display(Timing::default());
        wheel.hide(Timing::default());
        assert_eq!(wheel.host_mut().settle().len(), 1);
    }

    #[test]
    fn test_counted_spin_settles_and_endless_one_keeps_going() {
        let mut wheel = wheel();
        wheel.rotate(Duration::from_secs(1), Repeat::Forever);
        assert_eq!(wheel.host_mut().settle_spin(), None);
        assert!(wheel.host().spin.is_some());

        wheel.rotate(Duration::from_secs(1), Repeat::Count(1));
        let key = wheel.host_mut().settle_spin().unwrap();
        wheel.finish_spin(key);
        assert!(wheel.host().spin.is_none());
        assert!(!wheel.is_spinning());
    }

    #[test]
    fn test_children_replaced_on_new_menu() {
        let mut wheel = wheel();
        wheel.create_menu(&[MenuItem::labelled("only")]).unwrap();
        assert_eq!(wheel.host().buttons.len(), 1);
    }
}
