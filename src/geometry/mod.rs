//! Geometric primitives used by triangulation and spanning-tree construction

mod edge;
mod point;
mod triangle;

pub use edge::Edge;
pub use point::Point;
pub use triangle::Triangle;
