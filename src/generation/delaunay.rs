//! Delaunay triangulation via incremental Bowyer–Watson
//!
//! Builds the triangulation of the room-center points one point at a time:
//! every triangle whose circumcircle contains the new point is torn out, and
//! the hole's boundary polygon is re-stitched to the point. A synthetic
//! super-triangle seeds the process and is stripped at the end.
//!
//! Triangles live in a plain arena (`Vec<Triangle>`); the "bad" set for each
//! insertion is collected as an index set before anything is removed, so the
//! arena is never mutated mid-scan.

use std::collections::{HashMap, HashSet};

use crate::error::{DungeonError, Result};
use crate::geometry::{Edge, Point, Triangle};

/// Scale factor for the super-triangle relative to the input bounding box
const SUPER_TRIANGLE_SCALE: f64 = 20.0;

/// Compute the Delaunay triangulation of a point set
///
/// Returns the deduplicated edge set of the triangulation, excluding every
/// edge that touches the synthetic super-triangle. Points exactly on a
/// circumcircle boundary are treated as outside it, so callers should jitter
/// inputs that may be exactly cocircular.
///
/// # Errors
///
/// Returns `TooFewPoints` when fewer than three points are given.
///
/// # Example
///
/// ```rust
/// use rust_dungeon_grid::geometry::Point;
/// use rust_dungeon_grid::generation::triangulate;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(5.0, 10.0),
/// ];
/// let edges = triangulate(&points).unwrap();
/// assert_eq!(edges.len(), 3);
/// ```
pub fn triangulate(points: &[Point]) -> Result<Vec<Edge>> {
    if points.len() < 3 {
        return Err(DungeonError::TooFewPoints(points.len()));
    }

    let super_tri = super_triangle(points);
    let mut triangles: Vec<Triangle> = vec![super_tri];

    for &point in points {
        // Index set of triangles invalidated by this point
        let bad: Vec<usize> = triangles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.in_circumcircle(point))
            .map(|(i, _)| i)
            .collect();

        // Boundary polygon of the hole: edges owned by exactly one bad triangle
        let mut edge_counts: HashMap<Edge, usize> = HashMap::new();
        for &i in &bad {
            for edge in triangles[i].edges() {
                *edge_counts.entry(*edge).or_insert(0) += 1;
            }
        }
        let mut polygon = Vec::new();
        let mut seen = HashSet::new();
        for &i in &bad {
            for edge in triangles[i].edges() {
                if edge_counts[edge] == 1 && seen.insert(*edge) {
                    polygon.push(*edge);
                }
            }
        }

        let bad_set: HashSet<usize> = bad.into_iter().collect();
        let mut index = 0;
        triangles.retain(|_| {
            let keep = !bad_set.contains(&index);
            index += 1;
            keep
        });

        for edge in polygon {
            // A re-inserted duplicate can sit on its own star's circumcircle
            // boundary; never stitch a point to an edge it belongs to.
            if edge.touches(point) {
                continue;
            }
            triangles.push(Triangle::new(edge.a, edge.b, point));
        }
    }

    triangles.retain(|t| !t.shares_vertex(&super_tri));

    let mut edges = Vec::new();
    let mut seen = HashSet::new();
    for triangle in &triangles {
        for edge in triangle.edges() {
            if seen.insert(*edge) {
                edges.push(*edge);
            }
        }
    }

    Ok(edges)
}

/// Build a super-triangle strictly containing every input point
///
/// Centered on the bounding-box midpoint and scaled well past the box so no
/// input point lands on its boundary. The extent is floored at 1.0, keeping
/// the triangle non-degenerate even when all inputs are collinear or
/// coincident.
pub fn super_triangle(points: &[Point]) -> Triangle {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    let delta = (max_x - min_x).max(max_y - min_y).max(1.0);
    let mid_x = (min_x + max_x) / 2.0;
    let mid_y = (min_y + max_y) / 2.0;

    Triangle::new(
        Point::new(mid_x - SUPER_TRIANGLE_SCALE * delta, mid_y - delta),
        Point::new(mid_x, mid_y + SUPER_TRIANGLE_SCALE * delta),
        Point::new(mid_x + SUPER_TRIANGLE_SCALE * delta, mid_y - delta),
    )
}
