//! The wheel control: layout, drag rotation and show/hide sequencing.

pub mod animation;
pub mod gesture;
pub mod layout;

pub use animation::{
    Easing, Keyframe, Repeat, Spin, Timing, Transition, TransitionKind, TransitionToken,
};
pub use gesture::GestureState;
pub use layout::{
    ButtonDescriptor, LABEL_PADDING, LayoutEngine, LayoutOptions, MIN_BUTTON_DIAMETER,
};

use crate::config::WheelConfig;
use crate::events::GestureEvent;
use crate::geometry::{Point, Transform, angle_of, normalize_angle};
use crate::host::{Animator, ViewHost};
use crate::item::MenuItem;
use animation::{HIDE_SCALE, Sequencer};
use std::f64::consts::TAU;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WheelError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("No button at index {0}")]
    UnknownButton(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelState {
    pub number_of_buttons: usize,
    /// Angular spacing between neighbouring buttons, zero before the first menu.
    pub theta: f64,
    pub touch_begin_angle: f64,
    /// Signed rotation accumulated by dragging since the last `display` or
    /// `create_menu`.
    pub current_menu_angle: f64,
    pub displayed: bool,
    pub alpha: f64,
}

pub struct FerrisWheel<H: ViewHost + Animator> {
    host: H,
    engine: LayoutEngine,
    config: WheelConfig,
    state: WheelState,
    gesture: GestureState,
    buttons: Vec<ButtonDescriptor>,
    transform: Transform,
    sequencer: Sequencer,
    observer: Option<Box<dyn Fn(f64)>>,
}

impl<H: ViewHost + Animator> FerrisWheel<H> {
    /// Starts hidden and fully transparent, like a freshly inserted view.
    pub fn new(host: H, engine: LayoutEngine, config: WheelConfig) -> Self {
        Self {
            host,
            engine,
            config,
            state: WheelState::default(),
            gesture: GestureState::Idle,
            buttons: Vec::new(),
            transform: Transform::IDENTITY,
            sequencer: Sequencer::default(),
            observer: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut WheelConfig {
        &mut self.config
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn buttons(&self) -> &[ButtonDescriptor] {
        &self.buttons
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn center(&self) -> Point {
        Point::new(self.config.diameter / 2.0, self.config.diameter / 2.0)
    }

    pub fn in_flight_transition(&self) -> Option<TransitionToken> {
        self.sequencer.in_flight()
    }

    pub fn is_spinning(&self) -> bool {
        self.sequencer.is_spinning()
    }

    pub fn set_angle_observer(&mut self, observer: impl Fn(f64) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_angle_observer(&mut self) {
        self.observer = None;
    }

    /// Lays out `items` and replaces every existing button. Drag rotation is
    /// dropped along with the old buttons, so the new labels start upright.
    /// On error the current menu stays as it was.
    pub fn create_menu(&mut self, items: &[MenuItem]) -> Result<(), WheelError> {
        let options = LayoutOptions {
            diameter: self.config.diameter,
            start_angle: self.config.start.start_angle(),
            equalize: self.config.equal_size_buttons,
        };
        let buttons = self.engine.layout(items, &options)?;
        log::info!("Creating menu with {} buttons", buttons.len());

        self.host.remove_all_children();
        for button in &buttons {
            self.host.add_child(button);
        }

        self.transform = Transform::uniform_scale(self.transform.scale_factor());
        self.host.set_wheel_transform(self.transform);

        self.state.number_of_buttons = buttons.len();
        self.state.theta = TAU / buttons.len() as f64;
        self.state.touch_begin_angle = 0.0;
        self.state.current_menu_angle = 0.0;
        self.gesture = GestureState::Idle;
        self.buttons = buttons;
        Ok(())
    }

    pub fn handle(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Began(p) => self.touch_began(p),
            GestureEvent::Moved(p) => self.touch_moved(p),
            GestureEvent::Ended | GestureEvent::Cancelled => self.touch_ended(),
        }
    }

    pub fn touch_began(&mut self, point: Point) {
        if !self.state.displayed {
            log::debug!("Ignoring touch on hidden wheel");
            return;
        }
        let angle = angle_of(self.center(), point);
        self.state.touch_begin_angle = angle;
        self.gesture = GestureState::dragging(angle);
    }

    pub fn touch_moved(&mut self, point: Point) {
        let angle = angle_of(self.center(), point);
        let Some(delta) = self.gesture.advance(angle) else {
            return;
        };
        if self.config.stationary {
            return;
        }

        self.transform = self.transform.rotated(delta);
        self.host.set_wheel_transform(self.transform);

        // keep every label upright under the wheel's rotation
        for button in &mut self.buttons {
            button.button_transform = button.button_transform.rotated(-delta);
            self.host
                .set_button_transform(button.index, button.button_transform);
        }

        self.state.current_menu_angle += delta;
        if let Some(observer) = &self.observer {
            observer(self.state.current_menu_angle);
        }
    }

    pub fn touch_ended(&mut self) {
        if let Some(total) = self.gesture.total() {
            log::debug!("Drag ended after {:.3} rad", total);
        }
        self.gesture = GestureState::Idle;
    }

    /// Index of the button under `point`, taking the wheel's current rotation
    /// into account. A hidden wheel has no buttons to hit.
    pub fn button_at(&self, point: Point) -> Option<usize> {
        if !self.state.displayed {
            return None;
        }
        let center = self.center();
        let rotation = Transform::rotation(self.state.current_menu_angle);

        self.buttons
            .iter()
            .map(|b| {
                let offset = Point::new(b.center.x - center.x, b.center.y - center.y);
                let rotated = rotation.apply(offset);
                let on_screen = Point::new(center.x + rotated.x, center.y + rotated.y);
                (b, on_screen.distance(point))
            })
            .filter(|(b, dist)| *dist <= b.radius())
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(b, _)| b.index)
    }

    /// Runs the button's action, then hides the wheel if configured to.
    /// Taps on a hidden wheel are ignored.
    pub fn tap(&mut self, index: usize) -> Result<(), WheelError> {
        let action = self
            .buttons
            .get(index)
            .ok_or(WheelError::UnknownButton(index))?
            .item
            .action
            .clone();
        if !self.state.displayed {
            log::debug!("Ignoring tap on hidden wheel");
            return Ok(());
        }

        if let Some(action) = action {
            action.invoke(index);
        }
        if self.config.hide_on_button_action {
            self.hide(self.config.hide);
        }
        Ok(())
    }

    pub fn display_default(&mut self) {
        self.display(self.config.display);
    }

    pub fn hide_default(&mut self) {
        self.hide(self.config.hide);
    }

    /// Resets all drag state and grows the wheel in from nothing.
    pub fn display(&mut self, timing: Timing) {
        self.state.displayed = true;
        self.state.touch_begin_angle = 0.0;
        self.state.current_menu_angle = 0.0;
        self.gesture = GestureState::Idle;
        self.reset_button_transforms();

        self.transform = Transform::uniform_scale(0.0);
        self.host.set_wheel_transform(self.transform);

        if self.config.rotate_on_display {
            self.rotate(self.config.spin.period, self.config.spin.repeat);
        }

        let from = Keyframe {
            scale: 0.0,
            alpha: self.state.alpha,
        };
        let to = Keyframe {
            scale: 1.0,
            alpha: 1.0,
        };
        self.start_transition(TransitionKind::Display, from, to, timing);

        self.transform = Transform::IDENTITY;
        self.state.alpha = 1.0;
    }

    /// Shrinks the wheel away. Opacity drops to zero only once the transition
    /// completes.
    pub fn hide(&mut self, timing: Timing) {
        self.state.displayed = false;
        self.gesture = GestureState::Idle;

        if self.config.rotate_on_hide {
            self.rotate(self.config.spin.period, self.config.spin.repeat);
        }

        let from = Keyframe {
            scale: self.transform.scale_factor(),
            alpha: self.state.alpha,
        };
        let to = Keyframe {
            scale: HIDE_SCALE,
            alpha: self.state.alpha,
        };
        self.start_transition(TransitionKind::Hide, from, to, timing);

        self.transform = Transform::uniform_scale(HIDE_SCALE);
    }

    /// Called by the host when a transition finishes. Completions for
    /// superseded transitions are ignored.
    pub fn finish_transition(&mut self, token: TransitionToken) {
        match self.sequencer.complete(token) {
            Some(TransitionKind::Hide) => {
                self.state.alpha = 0.0;
                self.host.set_alpha(0.0);
            }
            Some(TransitionKind::Display) => {}
            None => log::debug!("Ignoring completion of stale transition {}", token),
        }
    }

    /// Spins the presentation by full turns, replacing any running spin.
    /// `Repeat::Forever` keeps going until [`stop_rotation`](Self::stop_rotation).
    pub fn rotate(&mut self, period: Duration, repeat: Repeat) {
        if self.sequencer.start_spin() {
            self.host.stop_spin(animation::SPIN_KEY);
        }
        self.host.start_spin(&Spin::full_turn(period, repeat));
    }

    pub fn stop_rotation(&mut self) {
        if self.sequencer.stop_spin() {
            self.host.stop_spin(animation::SPIN_KEY);
        }
    }

    /// Called by the host when a counted spin runs out on its own.
    pub fn finish_spin(&mut self, key: &str) {
        if key == animation::SPIN_KEY {
            self.sequencer.stop_spin();
        } else {
            log::debug!("Ignoring end of unknown spin {}", key);
        }
    }

    /// Current drag rotation folded into `[0, 2π)`.
    pub fn menu_angle_normalized(&self) -> f64 {
        normalize_angle(self.state.current_menu_angle)
    }

    fn reset_button_transforms(&mut self) {
        for button in &mut self.buttons {
            button.button_transform = button.canonical_transform();
            self.host
                .set_button_transform(button.index, button.button_transform);
        }
    }

    fn start_transition(
        &mut self,
        kind: TransitionKind,
        from: Keyframe,
        to: Keyframe,
        timing: Timing,
    ) {
        let (transition, superseded) = self.sequencer.begin(kind, from, to, timing);
        if let Some(old) = superseded {
            log::debug!("{} transition {} cancels {}", kind, transition.token, old);
            self.host.cancel(old);
        }
        self.host.animate(&transition);
    }
}
