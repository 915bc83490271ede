//! Triangle primitive with circumcircle and containment tests

use glam::DVec2;

use super::{Edge, Point};

/// A triangle over three points with canonical vertex order
///
/// Vertices are sorted lexicographically on construction so two triangles
/// over the same point set compare equal regardless of input order. The
/// three boundary edges are derived up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// First vertex in lexicographic order
    pub a: Point,
    /// Second vertex
    pub b: Point,
    /// Third vertex
    pub c: Point,
    edges: [Edge; 3],
}

impl Triangle {
    /// Create a triangle from three distinct points
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        let mut vs = [p1, p2, p3];
        vs.sort_by(Point::lex_cmp);
        let [a, b, c] = vs;
        Self {
            a,
            b,
            c,
            edges: [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)],
        }
    }

    /// The three boundary edges
    #[inline]
    pub fn edges(&self) -> &[Edge; 3] {
        &self.edges
    }

    /// Whether the given point is one of the three vertices
    #[inline]
    pub fn has_vertex(&self, p: Point) -> bool {
        self.a == p || self.b == p || self.c == p
    }

    /// Whether this triangle shares at least one vertex with another
    pub fn shares_vertex(&self, other: &Triangle) -> bool {
        self.has_vertex(other.a) || self.has_vertex(other.b) || self.has_vertex(other.c)
    }

    /// Strict circumcircle containment test
    ///
    /// Translates so that vertex `a` is the origin and solves for the
    /// circumcenter offset with the cross-product denominator
    /// `d = 2 * (bx*cy - by*cx)`. A point exactly on the circle counts as
    /// outside (strict `<`); callers jitter their inputs to stay off the
    /// boundary. Degenerate (collinear) triangles make `d` zero and the
    /// NaN arithmetic falls through to `false`.
    pub fn in_circumcircle(&self, point: Point) -> bool {
        let a = self.a.to_vec();
        let b = self.b.to_vec() - a;
        let c = self.c.to_vec() - a;

        let d = 2.0 * b.perp_dot(c);
        let offset = DVec2::new(
            c.y * b.length_squared() - b.y * c.length_squared(),
            b.x * c.length_squared() - c.x * b.length_squared(),
        ) / d;

        let radius_sq = offset.length_squared();
        (point.to_vec() - (a + offset)).length_squared() < radius_sq
    }

    /// Barycentric point-in-triangle test (boundary inclusive)
    pub fn contains_point(&self, point: Point) -> bool {
        let v0 = self.c.to_vec() - self.a.to_vec();
        let v1 = self.b.to_vec() - self.a.to_vec();
        let v2 = point.to_vec() - self.a.to_vec();

        let dot00 = v0.dot(v0);
        let dot01 = v0.dot(v1);
        let dot02 = v0.dot(v2);
        let dot11 = v1.dot(v1);
        let dot12 = v1.dot(v2);

        let inv_denom = 1.0 / (dot00 * dot11 - dot01 * dot01);
        let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
        let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;

        u >= 0.0 && v >= 0.0 && u + v <= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_canonical_vertex_order() {
        let t1 = Triangle::new(p(5.0, 10.0), p(0.0, 0.0), p(10.0, 0.0));
        let t2 = Triangle::new(p(10.0, 0.0), p(5.0, 10.0), p(0.0, 0.0));
        assert_eq!(t1, t2);
        assert_eq!(t1.a, p(0.0, 0.0));
    }

    #[test]
    fn test_contains_point() {
        let triangle = Triangle::new(p(0.0, 0.0), p(10.0, 0.0), p(5.0, 10.0));

        assert!(triangle.contains_point(p(5.0, 2.0)));
        assert!(triangle.contains_point(p(3.0, 3.0)));

        assert!(!triangle.contains_point(p(-1.0, 0.0)));
        assert!(!triangle.contains_point(p(15.0, 0.0)));
        assert!(!triangle.contains_point(p(5.0, 15.0)));
    }

    #[test]
    fn test_in_circumcircle() {
        // Right triangle on the unit square: circumcircle is centered at
        // (0.5, 0.5) with radius sqrt(0.5).
        let triangle = Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));

        assert!(triangle.in_circumcircle(p(0.5, 0.5)));
        assert!(triangle.in_circumcircle(p(0.9, 0.9)));
        assert!(!triangle.in_circumcircle(p(2.0, 2.0)));
        assert!(!triangle.in_circumcircle(p(-1.0, -1.0)));
    }

    #[test]
    fn test_in_circumcircle_boundary_is_outside() {
        let triangle = Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
        // (1, 1) lies exactly on the circumcircle; strict comparison keeps it out
        assert!(!triangle.in_circumcircle(p(1.0, 1.0)));
    }

    #[test]
    fn test_degenerate_triangle_contains_nothing() {
        let triangle = Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0));
        assert!(!triangle.in_circumcircle(p(1.0, 0.5)));
        assert!(!triangle.in_circumcircle(p(1.0, 0.0)));
    }

    #[test]
    fn test_shares_vertex() {
        let t1 = Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0));
        let t2 = Triangle::new(p(1.0, 0.0), p(2.0, 0.0), p(2.0, 2.0));
        let t3 = Triangle::new(p(5.0, 5.0), p(6.0, 5.0), p(5.0, 6.0));
        assert!(t1.shares_vertex(&t2));
        assert!(!t1.shares_vertex(&t3));
    }
}
