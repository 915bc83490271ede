//! Minimum spanning tree over triangulation edges
//!
//! Kruskal's algorithm with a union-find forest keyed directly on [`Point`]s,
//! which is what the bit-exact point equality exists for.

use std::collections::HashMap;

use crate::error::{DungeonError, Result};
use crate::geometry::{Edge, Point};

/// Disjoint-set forest over points
///
/// Supports path-compressing `find` and size-weighted `union`. Scoped to a
/// single spanning-tree computation.
#[derive(Debug, Clone)]
pub struct UnionFind {
    link: HashMap<Point, Point>,
    size: HashMap<Point, usize>,
}

impl UnionFind {
    /// Create a forest where every node is its own set
    pub fn new(nodes: &[Point]) -> Self {
        let mut link = HashMap::with_capacity(nodes.len());
        let mut size = HashMap::with_capacity(nodes.len());
        for &node in nodes {
            link.insert(node, node);
            size.insert(node, 1);
        }
        Self { link, size }
    }

    /// Find the representative of the set containing `x`, compressing paths
    ///
    /// Nodes not registered at construction are returned unchanged.
    pub fn find(&mut self, x: Point) -> Point {
        let mut root = x;
        while let Some(&parent) = self.link.get(&root) {
            if parent == root {
                break;
            }
            root = parent;
        }

        // Second pass: point everything on the walk directly at the root
        let mut current = x;
        while let Some(&parent) = self.link.get(&current) {
            if parent == current {
                break;
            }
            self.link.insert(current, root);
            current = parent;
        }

        root
    }

    /// Merge the sets containing `a` and `b`, smaller under larger
    pub fn union(&mut self, a: Point, b: Point) {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return;
        }

        let size_a = self.size.get(&root_a).copied().unwrap_or(1);
        let size_b = self.size.get(&root_b).copied().unwrap_or(1);

        if size_a < size_b {
            self.link.insert(root_a, root_b);
            self.size.insert(root_b, size_a + size_b);
        } else {
            self.link.insert(root_b, root_a);
            self.size.insert(root_a, size_a + size_b);
        }
    }
}

/// Compute a minimum spanning tree with Kruskal's algorithm
///
/// Edges are sorted ascending by weight with a stable sort, so equal-weight
/// edges keep their input order and the result is deterministic. If the graph
/// turns out to be disconnected the function returns an **empty** vector
/// rather than a partial tree; callers treat zero corridors as a valid,
/// degenerate outcome.
///
/// # Errors
///
/// Returns `GraphTooSmall` when called with no edges or fewer than two nodes,
/// which is a usage error rather than a disconnection.
pub fn minimum_spanning_tree(edges: &[Edge], nodes: &[Point]) -> Result<Vec<Edge>> {
    if edges.is_empty() || nodes.len() < 2 {
        return Err(DungeonError::GraphTooSmall {
            edges: edges.len(),
            nodes: nodes.len(),
        });
    }

    let mut sorted: Vec<Edge> = edges.to_vec();
    sorted.sort_by(|a, b| a.weight().total_cmp(&b.weight()));

    let mut forest = UnionFind::new(nodes);
    let mut mst = Vec::with_capacity(nodes.len() - 1);

    for edge in sorted {
        if forest.find(edge.a) != forest.find(edge.b) {
            forest.union(edge.a, edge.b);
            mst.push(edge);
        }
    }

    if mst.len() != nodes.len() - 1 {
        // Disconnected input graph
        return Ok(Vec::new());
    }

    Ok(mst)
}
