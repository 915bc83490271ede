//! Error types for dungeon generation

use thiserror::Error;

/// Errors that can occur during dungeon generation or queries
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DungeonError {
    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A fixed room does not fit inside the map bounds
    #[error("fixed room at ({x}, {y}, {width}, {height}) is out of map bounds")]
    RoomOutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// A fixed room overlaps an already placed room
    #[error("fixed room ({x}, {y}, {width}, {height}) could not be placed (overlapping)")]
    RoomOverlap {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// Triangulation needs at least three input points
    #[error("triangulation requires at least 3 points (got {0})")]
    TooFewPoints(usize),

    /// Spanning tree construction needs at least one edge and two nodes
    #[error("spanning tree requires at least 1 edge and 2 nodes (got {edges} edges, {nodes} nodes)")]
    GraphTooSmall { edges: usize, nodes: usize },
}

/// Result type alias for dungeon operations
pub type Result<T> = std::result::Result<T, DungeonError>;
