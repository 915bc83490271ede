//! 2-D point with bit-exact equality
//!
//! Points double as hash-map keys in union-find and edge deduplication, so
//! equality and hashing go through [`f64::to_bits`] rather than float
//! comparison. Two points are equal iff their coordinates are bit-identical,
//! which keeps the deliberately jittered room centers stable as keys.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use glam::DVec2;

/// A point in the 2-D plane
#[derive(Debug, Clone, Copy)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// View the point as a glam vector for arithmetic
    #[inline]
    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        self.to_vec().distance(other.to_vec())
    }

    /// Lexicographic order on (x, y)
    ///
    /// Uses [`f64::total_cmp`], giving a total order even for values float
    /// comparison cannot order.
    #[inline]
    pub fn lex_cmp(&self, other: &Point) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.x.to_bits());
        state.write_u64(self.y.to_bits());
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_relative_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_bitwise_equality() {
        let a = Point::new(1.0 + 1e-10, 2.0);
        let b = Point::new(1.0 + 1e-10, 2.0);
        assert_eq!(a, b);

        // -0.0 == 0.0 for floats, but not bit-for-bit
        assert_ne!(Point::new(0.0, 0.0), Point::new(-0.0, 0.0));
    }

    #[test]
    fn test_hash_key_roundtrip() {
        let mut set = HashSet::new();
        let p = Point::new(7.5 + 3.2e-11, -3.0);
        set.insert(p);
        assert!(set.contains(&Point::new(7.5 + 3.2e-11, -3.0)));
        assert!(!set.contains(&Point::new(7.5, -3.0)));
    }

    #[test]
    fn test_lex_cmp() {
        let a = Point::new(1.0, 5.0);
        let b = Point::new(2.0, 0.0);
        let c = Point::new(1.0, 6.0);
        assert_eq!(a.lex_cmp(&b), Ordering::Less);
        assert_eq!(a.lex_cmp(&c), Ordering::Less);
        assert_eq!(a.lex_cmp(&a), Ordering::Equal);
    }
}
