//! The generation pipeline building blocks
//!
//! Room placement, Delaunay triangulation of room centers, and minimum
//! spanning tree extraction. The [`Dungeon`](crate::Dungeon) orchestrator
//! sequences these into a complete map.

mod delaunay;
mod mst;
mod rooms;

pub use delaunay::{super_triangle, triangulate};
pub use mst::{minimum_spanning_tree, UnionFind};
pub use rooms::{jittered_centers, place_rooms, Room};
