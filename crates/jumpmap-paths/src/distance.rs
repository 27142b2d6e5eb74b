use jumpmap_core::Point;

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    a.distance(b)
}
