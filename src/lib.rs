//! Graph-based dungeon generation
//!
//! A standalone library for generating 2-D grid dungeons: non-overlapping
//! rectangular rooms connected by corridors, deterministic given a seed,
//! suitable for use with any game engine (Bevy, Godot, etc.)
//!
//! # Quick Start
//!
//! ```rust
//! use rust_dungeon_grid::*;
//!
//! // Configure a dungeon
//! let config = DungeonConfigBuilder::new(30, 30)
//!     .seed(42)
//!     .fixed_room(RoomRect::new(5, 5, 4, 4))
//!     .room_count(10)
//!     .build().unwrap();
//!
//! // Generate it
//! let dungeon = Dungeon::generate(config).unwrap();
//!
//! // Query walkability
//! let map = dungeon.to_bool_map();
//! println!("Generated {} rooms", dungeon.rooms().len());
//! # let _ = map;
//! ```
//!
//! # Pipeline
//!
//! Rooms are stamped onto the grid (fixed rooms first, then random rooms
//! sized by a normal distribution), their centers are Delaunay-triangulated
//! with Bowyer-Watson, a minimum spanning tree picks the corridor backbone
//! (plus a random 30% of the leftover edges as loops), and an A* pathfinder
//! carves each corridor while respecting room walls and exits.
//!
//! # Features
//!
//! - `spatial-index` (default): O(log n) nearest-room lookups using a KD-tree
//! - `serde`: serialization support for configurations

// Modules
pub mod config;
pub mod dungeon;
pub mod error;
pub mod generation;
pub mod geometry;
pub mod grid;
pub mod pathfinding;
pub mod snapshot;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use config::{DungeonConfig, DungeonConfigBuilder, RoomRect};
pub use dungeon::Dungeon;
pub use error::{DungeonError, Result};
pub use generation::{minimum_spanning_tree, triangulate, Room, UnionFind};
pub use geometry::{Edge, Point, Triangle};
pub use grid::{CellType, Grid};
pub use pathfinding::Pathfinder;
pub use snapshot::{MemorySnapshotRecorder, Snapshot, SnapshotRecorder};

#[cfg(feature = "spatial-index")]
pub use spatial::RoomIndex;
