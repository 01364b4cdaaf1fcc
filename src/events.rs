use crate::geometry::Point;

/// Touch input as delivered by the host, in wheel-local coordinates. Only the
/// first touch point of a multi-touch event is forwarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Began(Point),
    Moved(Point),
    Ended,
    Cancelled,
}
