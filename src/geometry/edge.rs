//! Undirected weighted edge between two points

use std::fmt;

use super::Point;

/// An unordered pair of points with a Euclidean weight
///
/// Endpoints are canonicalized on construction (lexicographic on x, then y)
/// so that `Edge::new(a, b) == Edge::new(b, a)` and edges can be deduplicated
/// through hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Lexicographically smaller endpoint
    pub a: Point,
    /// Lexicographically larger endpoint
    pub b: Point,
}

impl Edge {
    /// Create an edge between two distinct points
    pub fn new(p1: Point, p2: Point) -> Self {
        debug_assert_ne!(p1, p2, "edge endpoints must be distinct");
        if p1.x < p2.x || (p1.x == p2.x && p1.y < p2.y) {
            Self { a: p1, b: p2 }
        } else {
            Self { a: p2, b: p1 }
        }
    }

    /// Euclidean distance between the endpoints
    #[inline]
    pub fn weight(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// The edge as line coordinates `(x1, y1, x2, y2)`, for snapshot export
    #[inline]
    pub fn line(&self) -> (f64, f64, f64, f64) {
        (self.a.x, self.a.y, self.b.x, self.b.y)
    }

    /// Whether the given point is one of the two endpoints
    #[inline]
    pub fn touches(&self, p: Point) -> bool {
        self.a == p || self.b == p
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} (weight {})", self.a, self.b, self.weight())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_ordering() {
        let p1 = Point::new(3.0, 1.0);
        let p2 = Point::new(1.0, 2.0);
        let e1 = Edge::new(p1, p2);
        let e2 = Edge::new(p2, p1);
        assert_eq!(e1, e2);
        assert_eq!(e1.a, p2);
        assert_eq!(e1.b, p1);
    }

    #[test]
    fn test_ties_broken_on_y() {
        let lo = Point::new(1.0, -4.0);
        let hi = Point::new(1.0, 9.0);
        let e = Edge::new(hi, lo);
        assert_eq!(e.a, lo);
        assert_eq!(e.b, hi);
    }

    #[test]
    fn test_weight() {
        let e = Edge::new(Point::new(0.0, 0.0), Point::new(6.0, 8.0));
        assert_relative_eq!(e.weight(), 10.0);
    }

    #[test]
    fn test_dedupe_through_hashing() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(1.0, 1.0);
        let mut set = HashSet::new();
        set.insert(Edge::new(p1, p2));
        set.insert(Edge::new(p2, p1));
        assert_eq!(set.len(), 1);
    }
}
