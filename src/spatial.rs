//! Spatial indexing for nearest-room lookups
//!
//! This module is only available with the `spatial-index` feature.

#[cfg(feature = "spatial-index")]
use kiddo::immutable::float::kdtree::ImmutableKdTree;
#[cfg(feature = "spatial-index")]
use kiddo::SquaredEuclidean;

#[cfg(feature = "spatial-index")]
use crate::geometry::Point;

/// KD-tree over room centers
///
/// Maps arbitrary map positions (clicks, spawn points, camera focus) to the
/// nearest room in O(log n). Built once per generated dungeon.
#[cfg(feature = "spatial-index")]
#[derive(Clone)]
pub struct RoomIndex {
    tree: ImmutableKdTree<f64, usize, 2, 32>,
}

#[cfg(feature = "spatial-index")]
impl RoomIndex {
    /// Build an index from room center points
    ///
    /// The returned indices refer to positions in the input slice, which
    /// matches the dungeon's room list order.
    pub fn new(centers: &[Point]) -> Self {
        let points: Vec<[f64; 2]> = centers.iter().map(|c| [c.x, c.y]).collect();

        Self {
            tree: ImmutableKdTree::new_from_slice(&points),
        }
    }

    /// Index of the room center nearest to a position
    pub fn find_nearest(&self, x: f64, y: f64) -> usize {
        let result = self.tree.nearest_one::<SquaredEuclidean>(&[x, y]);
        result.item as usize
    }
}
