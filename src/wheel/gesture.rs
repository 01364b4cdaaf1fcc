use crate::geometry::wrap_angle;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        begin_angle: f64,
        last_angle: f64,
    },
}

impl GestureState {
    pub fn dragging(angle: f64) -> Self {
        Self::Dragging {
            begin_angle: angle,
            last_angle: angle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Rotation to apply for a move to `angle`, measured from the previous move.
    ///
    /// The delta is wrapped into `[-π, π)` so crossing the atan2 branch cut
    /// does not produce a full extra turn. `None` when no drag is active.
    pub fn advance(&mut self, angle: f64) -> Option<f64> {
        match self {
            Self::Idle => None,
            Self::Dragging { last_angle, .. } => {
                let delta = wrap_angle(*last_angle - angle);
                *last_angle = angle;
                Some(delta)
            }
        }
    }

    /// Total rotation since the drag began.
    pub fn total(&self) -> Option<f64> {
        match self {
            Self::Idle => None,
            Self::Dragging {
                begin_angle,
                last_angle,
            } => Some(wrap_angle(begin_angle - last_angle)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_idle_ignores_moves() {
        let mut g = GestureState::Idle;
        assert_eq!(g.advance(1.0), None);
        assert_eq!(g, GestureState::Idle);
    }

    #[test]
    fn test_deltas_are_incremental() {
        let mut g = GestureState::dragging(1.0);
        assert!((g.advance(0.8).unwrap() - 0.2).abs() < EPS);
        assert!((g.advance(0.5).unwrap() - 0.3).abs() < EPS);
        assert!((g.total().unwrap() - 0.5).abs() < EPS);
    }

    #[test]
    fn test_branch_cut_does_not_jump() {
        let mut g = GestureState::dragging(PI - 0.05);
        let delta = g.advance(-PI + 0.05).unwrap();
        assert!((delta + 0.1).abs() < EPS);
    }
}
