//! Geometry primitives: [`Point`] and [`Bounds`].

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D point on the map plane. X grows right, Y grows up.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub fn shift(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Squared length of the vector from the origin to this point.
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Length of the vector from the origin to this point.
    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared(self, other: Point) -> f64 {
        (self - other).length_squared()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (self - other).length()
    }

    /// Midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Point) -> Self {
        Self::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Smallest extent [`Bounds::enclosing`] gives to either axis, so that a
/// single point or a line of points still yields a splittable rectangle.
const MIN_EXTENT: f64 = 1.0;

/// An axis-aligned rectangle described by its center and full extents.
///
/// Quadrants are numbered counter-clockwise starting top-right:
///
/// | index | quadrant |
/// |---|---|
/// | 0 | right, top |
/// | 1 | left, top |
/// | 2 | left, bottom |
/// | 3 | right, bottom |
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create bounds from a center and full width/height.
    #[inline]
    pub const fn new(center: Point, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Create bounds from two opposite corners, in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            center: a.midpoint(b),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    /// Smallest bounds containing every point, with each axis widened to at
    /// least one unit. Returns `None` for an empty input.
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min, mut max) = (first, first);
        for p in iter {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        let mut b = Self::from_corners(min, max);
        b.width = b.width.max(MIN_EXTENT);
        b.height = b.height.max(MIN_EXTENT);
        Some(b)
    }

    /// Lower-left corner.
    #[inline]
    pub fn min(self) -> Point {
        self.center.shift(-self.width * 0.5, -self.height * 0.5)
    }

    /// Upper-right corner.
    #[inline]
    pub fn max(self) -> Point {
        self.center.shift(self.width * 0.5, self.height * 0.5)
    }

    /// Whether `p` lies inside the closed rectangle.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        let (min, max) = (self.min(), self.max());
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    /// Child bounds for quadrant `index` (0..4): half the extents, centered a
    /// quarter of the parent's extents away from its center.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 4`.
    pub fn quadrant(self, index: usize) -> Self {
        let (qx, qy) = (self.width * 0.25, self.height * 0.25);
        let (dx, dy) = match index {
            0 => (qx, qy),
            1 => (-qx, qy),
            2 => (-qx, -qy),
            3 => (qx, -qy),
            _ => panic!("quadrant index out of range: {index}"),
        };
        Self {
            center: self.center.shift(dx, dy),
            width: self.width * 0.5,
            height: self.height * 0.5,
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}]", self.min(), self.max())
    }
}
