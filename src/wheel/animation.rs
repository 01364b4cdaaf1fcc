use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use serde_with::{DurationSecondsWithFrac, serde_as};
use std::f64::consts::TAU;
use std::time::Duration;
use strum::Display as StrumDisplay;

pub const DISPLAY_SPRING_DAMPING: f64 = 0.7;
/// Hide shrinks to this instead of zero so the transform stays invertible.
pub const HIDE_SCALE: f64 = 0.01;
pub const SPIN_KEY: &str = "ferris.spin";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
#[display("#{_0}")]
pub struct TransitionToken(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    EaseIn,
    Spring {
        damping: f64,
        initial_velocity: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum TransitionKind {
    Display,
    Hide,
}

/// Wheel appearance at one end of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub scale: f64,
    pub alpha: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub token: TransitionToken,
    pub kind: TransitionKind,
    pub from: Keyframe,
    pub to: Keyframe,
    pub timing: Timing,
    pub easing: Easing,
}

#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    #[serde_as(as = "DurationSecondsWithFrac<f64>")]
    #[serde(default = "Timing::default_duration")]
    pub duration: Duration,
    #[serde_as(as = "DurationSecondsWithFrac<f64>")]
    #[serde(default)]
    pub delay: Duration,
}

impl Timing {
    pub fn new(duration: Duration, delay: Duration) -> Self {
        Self { duration, delay }
    }

    fn default_duration() -> Duration {
        Duration::from_secs(1)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::new(Self::default_duration(), Duration::ZERO)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Repeat {
    Count(u32),
    #[default]
    Forever,
}

/// Continuous full-turn rotation on the presentation layer, keyed so a new
/// spin replaces the old one.
#[derive(Debug, Clone, PartialEq)]
pub struct Spin {
    pub key: &'static str,
    /// Rotation per cycle, always a full turn.
    pub angle: f64,
    pub period: Duration,
    pub repeat: Repeat,
}

impl Spin {
    pub fn full_turn(period: Duration, repeat: Repeat) -> Self {
        Self {
            key: SPIN_KEY,
            angle: TAU,
            period,
            repeat,
        }
    }
}

/// Hands out transition tokens and remembers which one is live.
#[derive(Debug, Default)]
pub struct Sequencer {
    next: u64,
    in_flight: Option<(TransitionToken, TransitionKind)>,
    spinning: bool,
}

impl Sequencer {
    /// Starts a transition and returns it with the token it supersedes, if any.
    pub fn begin(
        &mut self,
        kind: TransitionKind,
        from: Keyframe,
        to: Keyframe,
        timing: Timing,
    ) -> (Transition, Option<TransitionToken>) {
        self.next += 1;
        let token = TransitionToken(self.next);
        let superseded = self.in_flight.replace((token, kind)).map(|(t, _)| t);
        let easing = match kind {
            TransitionKind::Display => Easing::Spring {
                damping: DISPLAY_SPRING_DAMPING,
                initial_velocity: 0.0,
            },
            TransitionKind::Hide => Easing::EaseIn,
        };

        let transition = Transition {
            token,
            kind,
            from,
            to,
            timing,
            easing,
        };
        (transition, superseded)
    }

    /// Clears the live transition if `token` is it. Stale tokens yield `None`.
    pub fn complete(&mut self, token: TransitionToken) -> Option<TransitionKind> {
        match self.in_flight {
            Some((live, kind)) if live == token => {
                self.in_flight = None;
                Some(kind)
            }
            _ => None,
        }
    }

    pub fn in_flight(&self) -> Option<TransitionToken> {
        self.in_flight.map(|(t, _)| t)
    }

    /// Returns whether a previous spin has to be stopped first.
    pub fn start_spin(&mut self) -> bool {
        std::mem::replace(&mut self.spinning, true)
    }

    pub fn stop_spin(&mut self) -> bool {
        std::mem::replace(&mut self.spinning, false)
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOWN: Keyframe = Keyframe {
        scale: 1.0,
        alpha: 1.0,
    };
    const GONE: Keyframe = Keyframe {
        scale: 0.0,
        alpha: 0.0,
    };

    #[test]
    fn test_new_transition_supersedes_previous() {
        let mut seq = Sequencer::default();
        let (first, superseded) =
            seq.begin(TransitionKind::Display, GONE, SHOWN, Timing::default());
        assert_eq!(superseded, None);

        let (second, superseded) = seq.begin(TransitionKind::Hide, SHOWN, GONE, Timing::default());
        assert_eq!(superseded, Some(first.token));
        assert_ne!(first.token, second.token);

        assert_eq!(seq.complete(first.token), None);
        assert_eq!(seq.complete(second.token), Some(TransitionKind::Hide));
        assert_eq!(seq.in_flight(), None);
    }

    #[test]
    fn test_easing_per_kind() {
        let mut seq = Sequencer::default();
        let (display, _) = seq.begin(TransitionKind::Display, GONE, SHOWN, Timing::default());
        assert_eq!(
            display.easing,
            Easing::Spring {
                damping: 0.7,
                initial_velocity: 0.0
            }
        );
        let (hide, _) = seq.begin(TransitionKind::Hide, SHOWN, GONE, Timing::default());
        assert_eq!(hide.easing, Easing::EaseIn);
    }

    #[test]
    fn test_spin_bookkeeping() {
        let mut seq = Sequencer::default();
        assert!(!seq.start_spin());
        assert!(seq.start_spin());
        assert!(seq.stop_spin());
        assert!(!seq.is_spinning());
    }

    #[test]
    fn test_timing_deserializes_fractional_seconds() {
        let t: Timing = serde_json::from_str(r#"{"duration": 0.25, "delay": 1.5}"#).unwrap();
        assert_eq!(t.duration, Duration::from_millis(250));
        assert_eq!(t.delay, Duration::from_millis(1500));

        let t: Timing = serde_json::from_str("{}").unwrap();
        assert_eq!(t, Timing::default());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(TransitionToken::from(7).to_string(), "#7");
    }
}
