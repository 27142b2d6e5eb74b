//! The [`Shape`] capability and its plain circle implementation.
//!
//! Both stored payloads and transient query regions are circles. Payload
//! types hold a [`CircleShape`] and forward to it; queries build a
//! [`CircleShape`] directly and drop it afterwards.

use std::fmt;

use crate::geom::Point;

/// Anything with a circular footprint on the plane.
pub trait Shape {
    /// Center of the footprint.
    fn center(&self) -> Point;

    /// Radius of the footprint, never negative.
    fn radius(&self) -> f64;

    /// Whether two footprints overlap. Touching circles intersect.
    fn intersects(&self, other: &dyn Shape) -> bool {
        let reach = self.radius() + other.radius();
        self.center().distance_squared(other.center()) <= reach * reach
    }
}

/// A circle: center plus non-negative radius.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleShape {
    pub center: Point,
    pub radius: f64,
}

impl CircleShape {
    /// Create a circle. A negative radius is clamped to zero.
    #[inline]
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(!radius.is_nan(), "circle radius is NaN");
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// A zero-radius circle at `center`.
    #[inline]
    pub const fn point(center: Point) -> Self {
        Self {
            center,
            radius: 0.0,
        }
    }
}

impl Shape for CircleShape {
    #[inline]
    fn center(&self) -> Point {
        self.center
    }

    #[inline]
    fn radius(&self) -> f64 {
        self.radius
    }
}

impl fmt::Display for CircleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "circle{} r={}", self.center, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_circles_intersect() {
        let a = CircleShape::new(Point::ZERO, 2.0);
        let b = CircleShape::new(Point::new(3.0, 0.0), 2.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_circles_intersect() {
        let a = CircleShape::new(Point::ZERO, 1.0);
        let b = CircleShape::new(Point::new(3.0, 4.0), 4.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn distant_circles_do_not_intersect() {
        let a = CircleShape::new(Point::ZERO, 1.0);
        let b = CircleShape::new(Point::new(3.0, 4.0), 3.9);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn points_intersect_only_when_equal() {
        let a = CircleShape::point(Point::new(1.0, 1.0));
        assert!(a.intersects(&CircleShape::point(Point::new(1.0, 1.0))));
        assert!(!a.intersects(&CircleShape::point(Point::new(1.0, 1.000_001))));
    }

    #[test]
    fn negative_radius_is_clamped() {
        let c = CircleShape::new(Point::ZERO, -3.0);
        assert_eq!(c.radius(), 0.0);
    }
}
