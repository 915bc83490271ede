//! Diagnostic snapshots of intermediate generation stages
//!
//! An optional collaborator the generator pushes labeled point/line sets to
//! after each major stage, intended for offline visualization. Recorders are
//! passed in explicitly (never global state), must not fail, and attaching
//! one never changes the generated map.

use std::collections::HashMap;

use crate::geometry::Point;

/// A line segment as `(x1, y1, x2, y2)`
pub type Line = (f64, f64, f64, f64);

/// Sink for labeled generation snapshots
///
/// Implementations receive a category name per stage ("room placement",
/// "triangulation", "spanning tree", "corridors") followed by one or more
/// snapshots of points and line segments in map coordinates.
pub trait SnapshotRecorder {
    /// Start a new snapshot category; subsequent records belong to it
    fn begin_category(&mut self, name: &str);

    /// Record one snapshot of points and lines under the current category
    fn record(&mut self, points: &[Point], lines: &[Line]);
}

/// A single recorded snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Points in map coordinates (room centers, triangulation nodes)
    pub points: Vec<Point>,
    /// Line segments in map coordinates (triangulation or corridor edges)
    pub lines: Vec<Line>,
}

/// In-memory recorder storing snapshots per category
///
/// # Example
///
/// ```rust
/// use rust_dungeon_grid::*;
///
/// let config = DungeonConfigBuilder::new(20, 20)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut recorder = MemorySnapshotRecorder::new();
/// let dungeon = Dungeon::generate_with_recorder(config, Some(&mut recorder)).unwrap();
///
/// assert!(!recorder.snapshots("triangulation").is_empty());
/// # let _ = dungeon;
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemorySnapshotRecorder {
    current: String,
    categories: Vec<String>,
    by_category: HashMap<String, Vec<Snapshot>>,
}

impl MemorySnapshotRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Category names in the order they were first seen
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Snapshots recorded under the given category
    pub fn snapshots(&self, category: &str) -> &[Snapshot] {
        self.by_category.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Drop all recorded snapshots, keeping the recorder reusable
    pub fn clear(&mut self) {
        self.categories.clear();
        self.by_category.clear();
        self.current.clear();
    }
}

impl SnapshotRecorder for MemorySnapshotRecorder {
    fn begin_category(&mut self, name: &str) {
        if !self.by_category.contains_key(name) {
            self.categories.push(name.to_string());
            self.by_category.insert(name.to_string(), Vec::new());
        }
        self.current = name.to_string();
    }

    fn record(&mut self, points: &[Point], lines: &[Line]) {
        self.by_category
            .entry(self.current.clone())
            .or_default()
            .push(Snapshot {
                points: points.to_vec(),
                lines: lines.to_vec(),
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_by_category() {
        let mut recorder = MemorySnapshotRecorder::new();

        recorder.begin_category("triangulation");
        recorder.record(&[Point::new(1.0, 2.0)], &[(0.0, 0.0, 1.0, 2.0)]);
        recorder.begin_category("corridors");
        recorder.record(&[], &[]);
        recorder.record(&[Point::new(3.0, 4.0)], &[]);

        assert_eq!(recorder.categories(), ["triangulation", "corridors"]);
        assert_eq!(recorder.snapshots("triangulation").len(), 1);
        assert_eq!(recorder.snapshots("corridors").len(), 2);
        assert!(recorder.snapshots("missing").is_empty());
    }

    #[test]
    fn test_clear() {
        let mut recorder = MemorySnapshotRecorder::new();
        recorder.begin_category("spanning tree");
        recorder.record(&[], &[]);

        recorder.clear();
        assert!(recorder.categories().is_empty());
        assert!(recorder.snapshots("spanning tree").is_empty());
    }
}
