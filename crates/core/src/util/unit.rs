//! 2D value types for a hexagon's local frame. See the [crate::hex] module
//! docs for a description of the frame itself.

use crate::util::range::NumRange;
use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign,
};
use nalgebra::Rotation2;
use serde::{Deserialize, Serialize};

/// A point or offset in a hexagon's local 2D frame. The same type is used for
/// both positions and directions, since every position is implicitly an
/// offset from the hexagon's center.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0);
    pub const UP: Self = Self::new(0.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Are both components finite (not NaN or infinite)?
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Scale this vector to a length of 1. The zero vector stays zero.
    pub fn normalize(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude > 0.0 {
            self / magnitude
        } else {
            Self::ZERO
        }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3D cross product of `self` and `other`. Positive
    /// means `other` is counter-clockwise from `self` (i.e. to the left of it),
    /// negative means clockwise (to the right), zero means they're parallel.
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Undirected angle between two vectors, in degrees, in the range
    /// `[0, 180]`. If either vector is zero, the angle is 0.
    pub fn angle_to(self, other: Self) -> f64 {
        let denominator = self.magnitude() * other.magnitude();
        if denominator == 0.0 {
            return 0.0;
        }
        // Rounding can push the cosine just outside [-1, 1], which would make
        // acos return NaN
        NumRange::new(-1.0, 1.0)
            .clamp(self.dot(other) / denominator)
            .acos()
            .to_degrees()
    }

    /// Rotate this vector counter-clockwise around the origin by the given
    /// number of degrees.
    pub fn rotate(self, degrees: f64) -> Self {
        let rotation = Rotation2::new(degrees.to_radians());
        (rotation * nalgebra::Vector2::from(self)).into()
    }
}

impl From<Vector2> for nalgebra::Vector2<f64> {
    fn from(other: Vector2) -> Self {
        nalgebra::Vector2::new(other.x, other.y)
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2 {
    fn from(other: nalgebra::Vector2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

/// An axis-aligned rectangle, defined by an inclusive range on each axis.
#[derive(
    Copy, Clone, Debug, Display, PartialEq, Serialize, Deserialize,
)]
#[display(fmt = "{} x {}", x, y)]
pub struct Rect {
    pub x: NumRange<f64>,
    pub y: NumRange<f64>,
}

impl Rect {
    /// Create a rect of the given dimensions, centered on the origin
    pub fn centered(width: f64, height: f64) -> Self {
        let half_width = width / 2.0;
        let half_height = height / 2.0;
        Self {
            x: NumRange::new(-half_width, half_width),
            y: NumRange::new(-half_height, half_height),
        }
    }

    pub fn width(&self) -> f64 {
        self.x.span()
    }

    pub fn height(&self) -> f64 {
        self.y.span()
    }

    /// Bottom-left corner
    pub fn min(&self) -> Vector2 {
        Vector2::new(self.x.min, self.y.min)
    }

    /// Top-right corner
    pub fn max(&self) -> Vector2 {
        Vector2::new(self.x.max, self.y.max)
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.x.midpoint(), self.y.midpoint())
    }

    /// Is the point within this rect? Edges are included.
    pub fn contains(&self, point: Vector2) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y)
    }

    /// Push every edge of the rect outward by `margin`
    pub fn grow(&self, margin: f64) -> Self {
        Self {
            x: self.x.grow(margin),
            y: self.y.grow(margin),
        }
    }

    /// Map a point into normalized `[0, 1]` coordinates across this rect, with
    /// `(0, 0)` at the bottom-left corner. Points outside the rect map outside
    /// that range.
    pub fn normalize(&self, point: Vector2) -> Vector2 {
        Vector2::new(self.x.normalize(point.x), self.y.normalize(point.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_vector_ops() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -1.0);
        assert_eq!(a + b, Vector2::new(4.0, 1.0));
        assert_eq!(a - b, Vector2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        assert_approx_eq!(a.dot(b), 1.0);
        assert_eq!(a.to_string(), "(1, 2)");
    }

    #[test]
    fn test_cross() {
        // Counter-clockwise is positive
        assert_approx_eq!(Vector2::RIGHT.cross(Vector2::UP), 1.0);
        assert_approx_eq!(Vector2::UP.cross(Vector2::RIGHT), -1.0);
        assert_approx_eq!(Vector2::RIGHT.cross(Vector2::RIGHT * 3.0), 0.0);
    }

    #[test]
    fn test_magnitude_and_normalize() {
        let v = Vector2::new(3.0, 4.0);
        assert_approx_eq!(v.magnitude(), 5.0);
        assert_approx_eq!(v.magnitude_squared(), 25.0);
        assert_approx_eq!(v.normalize().magnitude(), 1.0);
        assert_eq!(Vector2::ZERO.normalize(), Vector2::ZERO);
    }

    #[test]
    fn test_angle_to() {
        assert_approx_eq!(Vector2::RIGHT.angle_to(Vector2::UP), 90.0);
        assert_approx_eq!(Vector2::UP.angle_to(Vector2::RIGHT), 90.0);
        assert_approx_eq!(Vector2::RIGHT.angle_to(-Vector2::RIGHT), 180.0);
        assert_approx_eq!(Vector2::RIGHT.angle_to(Vector2::new(1.0, 1.0)), 45.0);
        assert_approx_eq!(Vector2::RIGHT.angle_to(Vector2::RIGHT * 7.0), 0.0);
        assert_approx_eq!(Vector2::ZERO.angle_to(Vector2::UP), 0.0);
    }

    #[test]
    fn test_rotate() {
        let rotated = Vector2::RIGHT.rotate(90.0);
        assert_approx_eq!(rotated.x, 0.0);
        assert_approx_eq!(rotated.y, 1.0);

        let rotated = Vector2::new(2.0, 0.0).rotate(-60.0);
        assert_approx_eq!(rotated.x, 1.0);
        assert_approx_eq!(rotated.y, -(3.0f64.sqrt()));
    }

    #[test]
    fn test_rect() {
        let rect = Rect::centered(4.0, 2.0);
        assert_approx_eq!(rect.width(), 4.0);
        assert_approx_eq!(rect.height(), 2.0);
        assert_eq!(rect.min(), Vector2::new(-2.0, -1.0));
        assert_eq!(rect.max(), Vector2::new(2.0, 1.0));
        assert_eq!(rect.center(), Vector2::ZERO);

        assert!(rect.contains(Vector2::ZERO));
        assert!(rect.contains(Vector2::new(2.0, 1.0)));
        assert!(!rect.contains(Vector2::new(2.1, 0.0)));
        assert!(rect.grow(0.2).contains(Vector2::new(2.1, 0.0)));

        let uv = rect.normalize(Vector2::new(-2.0, 0.0));
        assert_approx_eq!(uv.x, 0.0);
        assert_approx_eq!(uv.y, 0.5);
    }
}
