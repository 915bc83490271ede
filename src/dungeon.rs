//! Dungeon orchestrator
//!
//! Sequences the full generation pipeline from a single seeded RNG: room
//! placement, Delaunay triangulation of the room centers, spanning-tree
//! corridor planning with extra loop edges, grid cost annotation, and A*
//! corridor carving. Every random draw goes through one generator instance
//! in a fixed call order, so a config fully determines the output.

use std::collections::HashSet;

use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::DungeonConfig;
use crate::error::Result;
use crate::generation::{jittered_centers, minimum_spanning_tree, place_rooms, triangulate, Room};
use crate::geometry::{Edge, Point};
use crate::grid::Grid;
use crate::pathfinding::Pathfinder;
use crate::snapshot::{Line, SnapshotRecorder};

#[cfg(feature = "spatial-index")]
use crate::spatial::RoomIndex;

/// Probability of keeping a non-tree triangulation edge as a loop corridor
const EXTRA_CORRIDOR_CHANCE: f64 = 0.3;

/// A generated dungeon
///
/// Owns the finished grid, the placed rooms and the corridor edges for the
/// lifetime of the value. Regenerating from the same [`DungeonConfig`]
/// reproduces it exactly.
///
/// # Example
///
/// ```rust
/// use rust_dungeon_grid::*;
///
/// let config = DungeonConfigBuilder::new(30, 30)
///     .seed(42)
///     .fixed_room(RoomRect::new(5, 5, 4, 4))
///     .room_count(10)
///     .build()
///     .unwrap();
///
/// let dungeon = Dungeon::generate(config).unwrap();
/// assert!(dungeon.walkable(6, 6));
/// ```
#[derive(Clone)]
pub struct Dungeon {
    config: DungeonConfig,
    grid: Grid,
    rooms: Vec<Room>,
    corridors: Vec<Edge>,
    #[cfg(feature = "spatial-index")]
    room_index: RoomIndex,
}

impl Dungeon {
    /// Generate a dungeon from a configuration
    pub fn generate(config: DungeonConfig) -> Result<Self> {
        Self::generate_with_recorder(config, None)
    }

    /// Generate a dungeon, pushing stage snapshots to an optional recorder
    ///
    /// The recorder receives labeled point/line sets after room placement,
    /// triangulation, spanning-tree planning and corridor selection. It is
    /// purely observational: generation behaves identically with or without
    /// one attached.
    ///
    /// # Errors
    ///
    /// Fails on configuration errors: overlapping fixed rooms
    /// (`RoomOverlap`), or fewer than three placed rooms, which leaves the
    /// triangulation without enough nodes (`TooFewPoints`).
    pub fn generate_with_recorder(
        config: DungeonConfig,
        mut recorder: Option<&mut dyn SnapshotRecorder>,
    ) -> Result<Self> {
        debug!(
            "generating {}x{} dungeon with seed {}",
            config.width, config.height, config.seed
        );

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut grid = Grid::new(config.width, config.height);

        let rooms = place_rooms(&mut grid, &config, &mut rng)?;
        let nodes = jittered_centers(&rooms, &mut rng);
        debug!("placed {} rooms ({} attempted)", rooms.len(), config.room_count);

        if let Some(rec) = recorder.as_deref_mut() {
            rec.begin_category("room placement");
            rec.record(&nodes, &[]);
        }

        let delaunay_edges = triangulate(&nodes)?;
        debug!("triangulation produced {} edges", delaunay_edges.len());

        if let Some(rec) = recorder.as_deref_mut() {
            rec.begin_category("triangulation");
            rec.record(&nodes, &lines_of(&delaunay_edges));
        }

        let mut corridors = minimum_spanning_tree(&delaunay_edges, &nodes)?;

        if let Some(rec) = recorder.as_deref_mut() {
            rec.begin_category("spanning tree");
            rec.record(&nodes, &lines_of(&corridors));
        }

        // Keep a random subset of the leftover triangulation edges so the
        // dungeon has a few loops instead of being a pure tree
        let tree_edges: HashSet<Edge> = corridors.iter().copied().collect();
        for edge in &delaunay_edges {
            if tree_edges.contains(edge) {
                continue;
            }
            if rng.gen::<f64>() < EXTRA_CORRIDOR_CHANCE {
                corridors.push(*edge);
            }
        }

        if let Some(rec) = recorder.as_deref_mut() {
            rec.begin_category("corridors");
            rec.record(&nodes, &lines_of(&corridors));
        }

        for room in &rooms {
            grid.add_room_costs(room);
        }

        let finder = Pathfinder::new(config.allow_diagonals);
        for edge in &corridors {
            let start = grid_coords(edge.a, &config);
            let end = grid_coords(edge.b, &config);
            // A failed route only costs us that one corridor
            finder.find_path(&mut grid, start, end);
        }

        info!(
            "dungeon generated: {} rooms, {} corridors, seed {}",
            rooms.len(),
            corridors.len(),
            config.seed
        );

        #[cfg(feature = "spatial-index")]
        let room_index = {
            let centers: Vec<Point> = rooms.iter().map(Room::center).collect();
            RoomIndex::new(&centers)
        };

        Ok(Self {
            config,
            grid,
            rooms,
            corridors,
            #[cfg(feature = "spatial-index")]
            room_index,
        })
    }

    /// The configuration this dungeon was generated from
    #[inline]
    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    /// Map width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Map height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The placed rooms, fixed rooms first, in placement order
    #[inline]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The corridor edges that were routed (spanning tree plus loops)
    #[inline]
    pub fn corridors(&self) -> &[Edge] {
        &self.corridors
    }

    /// The underlying cell grid
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether the cell at (x, y) is walkable
    #[inline]
    pub fn walkable(&self, x: usize, y: usize) -> bool {
        self.grid.walkable(x, y)
    }

    /// The map as a boolean grid, `map[x][y]` true meaning walkable
    pub fn to_bool_map(&self) -> Vec<Vec<bool>> {
        self.grid.to_bool_map()
    }

    /// Render the map as ASCII art: `.` empty, `#` room, `0` path
    pub fn render_ascii(&self) -> String {
        self.grid.render_ascii()
    }

    /// Find the room whose center is nearest to a map position
    ///
    /// Returns an index into [`rooms`](Self::rooms). Requires the
    /// `spatial-index` feature.
    #[cfg(feature = "spatial-index")]
    pub fn find_room_near(&self, x: f64, y: f64) -> usize {
        self.room_index.find_nearest(x, y)
    }
}

/// Convert a (jittered) room center to grid coordinates
fn grid_coords(p: Point, config: &DungeonConfig) -> (usize, usize) {
    let x = (p.x.round() as usize).min(config.width - 1);
    let y = (p.y.round() as usize).min(config.height - 1);
    (x, y)
}

fn lines_of(edges: &[Edge]) -> Vec<Line> {
    edges.iter().map(Edge::line).collect()
}
