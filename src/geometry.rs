//! Points, sizes and 2D affine transforms in the wheel's local space.
//!
//! Coordinates are screen space with y pointing down. A [`Transform`] rotation
//! by a positive angle therefore turns clockwise on screen.

use std::f64::consts::{PI, TAU};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn max_side(&self) -> f64 {
        self.width.max(self.height)
    }
}

/// Affine matrix mapping `(x, y)` to `(a·x + c·y + tx, b·x + d·y + ty)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        }
    }

    pub fn uniform_scale(s: f64) -> Self {
        Self::scale(s, s)
    }

    /// Applies `self` first, then `next`.
    pub fn then(&self, next: &Transform) -> Self {
        Self {
            a: self.a * next.a + self.b * next.c,
            b: self.a * next.b + self.b * next.d,
            c: self.c * next.a + self.d * next.c,
            d: self.c * next.b + self.d * next.d,
            tx: self.tx * next.a + self.ty * next.c + next.tx,
            ty: self.tx * next.b + self.ty * next.d + next.ty,
        }
    }

    /// Composes a rotation onto the existing transform without replacing it.
    pub fn rotated(&self, angle: f64) -> Self {
        Transform::rotation(angle).then(self)
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Rotation component in `(-π, π]`. For inspection only; the wheel tracks
    /// its angle explicitly.
    pub fn rotation_angle(&self) -> f64 {
        self.b.atan2(self.a)
    }

    pub fn scale_factor(&self) -> f64 {
        self.a.hypot(self.b)
    }

    pub fn approx_eq(&self, other: &Transform, epsilon: f64) -> bool {
        [
            (self.a, other.a),
            (self.b, other.b),
            (self.c, other.c),
            (self.d, other.d),
            (self.tx, other.tx),
            (self.ty, other.ty),
        ]
        .iter()
        .all(|(l, r)| (l - r).abs() <= epsilon)
    }
}

/// Angle of `point` around `center`, counter-clockwise on screen is positive.
///
/// The y difference is taken as `center.y - point.y` because screen y grows
/// downwards. A clockwise drag therefore produces a decreasing angle.
pub fn angle_of(center: Point, point: Point) -> f64 {
    (center.y - point.y).atan2(point.x - center.x)
}

/// Wraps into `[-π, π)`.
pub fn wrap_angle(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Wraps into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

/// Shortest unsigned distance between two angles.
pub fn angle_difference(a: f64, b: f64) -> f64 {
    wrap_angle(a - b).abs()
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_rotation_is_clockwise_in_screen_space() {
        let p = Transform::rotation(FRAC_PI_2).apply(Point::new(1.0, 0.0));
        assert!((p.x - 0.0).abs() < EPS);
        assert!((p.y - 1.0).abs() < EPS);
    }

    #[test]
    fn test_rotated_composes() {
        let t = Transform::rotation(0.3).rotated(0.4).rotated(-0.2);
        assert!((t.rotation_angle() - 0.5).abs() < EPS);
        assert!(t.approx_eq(&Transform::rotation(0.5), EPS));
    }

    #[test]
    fn test_scale_keeps_rotation_readable() {
        let t = Transform::rotation(1.0).then(&Transform::uniform_scale(0.5));
        assert!((t.rotation_angle() - 1.0).abs() < EPS);
        assert!((t.scale_factor() - 0.5).abs() < EPS);
    }

    #[test]
    fn test_angle_of_uses_screen_convention() {
        let center = Point::new(100.0, 100.0);
        assert!((angle_of(center, Point::new(150.0, 100.0)) - 0.0).abs() < EPS);
        // above the centre on screen means smaller y
        assert!((angle_of(center, Point::new(100.0, 50.0)) - FRAC_PI_2).abs() < EPS);
        assert!((angle_of(center, Point::new(100.0, 150.0)) + FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn test_wrap_and_normalize() {
        assert!((wrap_angle(3.0 * PI / 2.0) + FRAC_PI_2).abs() < EPS);
        assert!((wrap_angle(-3.0 * PI / 2.0) - FRAC_PI_2).abs() < EPS);
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < EPS);
        assert!((angle_difference(0.1, TAU - 0.1) - 0.2).abs() < EPS);
    }

    #[test]
    fn test_degree_conversions() {
        assert!((degrees_to_radians(180.0) - PI).abs() < EPS);
        assert!((radians_to_degrees(FRAC_PI_2) - 90.0).abs() < EPS);
        assert!((radians_to_degrees(degrees_to_radians(33.0)) - 33.0).abs() < EPS);
    }
}
