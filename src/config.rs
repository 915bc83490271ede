//! Dungeon configuration and builder
//!
//! This module provides configuration types for deterministic dungeon generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DungeonError, Result};

/// A fixed room placement request, as `(x, y, width, height)` in grid cells
///
/// Fixed rooms are always placed at the requested position; generation fails
/// if a fixed room is out of bounds or overlaps another room.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomRect {
    /// X coordinate of the room's left edge
    pub x: i32,
    /// Y coordinate of the room's top edge
    pub y: i32,
    /// Width in cells
    pub width: u32,
    /// Height in cells
    pub height: u32,
}

impl RoomRect {
    /// Create a new room rectangle
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Configuration for deterministic dungeon generation
///
/// The same configuration will always produce the identical dungeon.
/// Only the configuration needs to be stored or transmitted; the map is
/// regenerated from it on demand.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DungeonConfig {
    /// Map width in grid cells
    pub width: usize,

    /// Map height in grid cells
    pub height: usize,

    /// Random seed for deterministic generation
    ///
    /// The builder fills this from system entropy when no seed is given, so
    /// a config always describes a reproducible run.
    pub seed: u64,

    /// Whether corridors may use diagonal steps
    pub allow_diagonals: bool,

    /// Rooms that are always placed at fixed positions
    pub fixed_rooms: Vec<RoomRect>,

    /// Number of random room placement attempts
    ///
    /// This is a budget, not a guarantee: attempts that would overlap an
    /// existing room are dropped, so the final room count may be lower.
    pub room_count: usize,

    /// Minimum side length for random rooms, in cells
    pub min_room_side: u32,

    /// Maximum side length for random rooms, in cells
    pub max_room_side: u32,

    /// Mean of the normal distribution random room sides are drawn from
    pub room_side_mean: f64,

    /// Variance of the normal distribution random room sides are drawn from
    pub room_side_variance: f64,
}

impl DungeonConfig {
    /// Default number of random room attempts for a map of the given size
    pub fn default_room_count(width: usize, height: usize) -> usize {
        (0.1 * (width + height) as f64).floor() as usize
    }
}

/// Builder for creating a [`DungeonConfig`] with validation
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
/// ```
#[derive(Debug, Clone)]
pub struct DungeonConfigBuilder {
    width: usize,
    height: usize,
    seed: Option<u64>,
    allow_diagonals: bool,
    fixed_rooms: Vec<RoomRect>,
    room_count: Option<usize>,
    min_room_side: u32,
    max_room_side: u32,
    room_side_mean: f64,
    room_side_variance: f64,
}

impl DungeonConfigBuilder {
    /// Create a new builder for a map of the given size
    ///
    /// Defaults:
    /// - seed: drawn from system entropy in [`build`](Self::build)
    /// - allow_diagonals: false
    /// - room_count: `floor(0.1 * (width + height))`
    /// - room sides: 1..=9 cells, normal distribution mean 4.0, variance 1.6
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            seed: None,
            allow_diagonals: false,
            fixed_rooms: Vec::new(),
            room_count: None,
            min_room_side: 1,
            max_room_side: 9,
            room_side_mean: 4.0,
            room_side_variance: 1.6,
        }
    }

    /// Set the random seed
    ///
    /// The same seed (with the same other parameters) always produces the
    /// exact same dungeon. When no seed is set, a fresh one is drawn from
    /// entropy at build time and recorded in the config.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Allow corridors to take diagonal steps
    pub fn allow_diagonals(mut self, allow: bool) -> Self {
        self.allow_diagonals = allow;
        self
    }

    /// Add a room that is always placed at a fixed position
    pub fn fixed_room(mut self, room: RoomRect) -> Self {
        self.fixed_rooms.push(room);
        self
    }

    /// Add several fixed rooms at once
    pub fn fixed_rooms<I: IntoIterator<Item = RoomRect>>(mut self, rooms: I) -> Self {
        self.fixed_rooms.extend(rooms);
        self
    }

    /// Set the number of random room placement attempts
    pub fn room_count(mut self, count: usize) -> Self {
        self.room_count = Some(count);
        self
    }

    /// Set the allowed side-length range for random rooms
    pub fn room_side_range(mut self, min: u32, max: u32) -> Self {
        self.min_room_side = min;
        self.max_room_side = max;
        self
    }

    /// Set the normal distribution random room sides are drawn from
    pub fn room_side_distribution(mut self, mean: f64, variance: f64) -> Self {
        self.room_side_mean = mean;
        self.room_side_variance = variance;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` when the map size, room side range or variance
    /// is invalid, and `RoomOutOfBounds` when a fixed room does not fit on
    /// the map.
    pub fn build(self) -> Result<DungeonConfig> {
        if self.width == 0 || self.height == 0 {
            return Err(DungeonError::InvalidConfig(format!(
                "map size must be positive (got {}x{})",
                self.width, self.height
            )));
        }
        if self.min_room_side == 0 {
            return Err(DungeonError::InvalidConfig(
                "minimum room side must be at least 1".into(),
            ));
        }
        if self.min_room_side > self.max_room_side {
            return Err(DungeonError::InvalidConfig(format!(
                "minimum room side {} exceeds maximum {}",
                self.min_room_side, self.max_room_side
            )));
        }
        if self.room_side_variance < 0.0 {
            return Err(DungeonError::InvalidConfig(format!(
                "room side variance must be >= 0 (got {})",
                self.room_side_variance
            )));
        }

        for room in &self.fixed_rooms {
            if room.width == 0 || room.height == 0 {
                return Err(DungeonError::InvalidConfig(format!(
                    "fixed room at ({}, {}) must have positive size",
                    room.x, room.y
                )));
            }
            let fits = room.x >= 0
                && room.y >= 0
                && room.x as i64 + room.width as i64 <= self.width as i64
                && room.y as i64 + room.height as i64 <= self.height as i64;
            if !fits {
                return Err(DungeonError::RoomOutOfBounds {
                    x: room.x,
                    y: room.y,
                    width: room.width,
                    height: room.height,
                });
            }
        }

        let seed = self.seed.unwrap_or_else(rand::random);
        let room_count = self
            .room_count
            .unwrap_or_else(|| DungeonConfig::default_room_count(self.width, self.height));

        Ok(DungeonConfig {
            width: self.width,
            height: self.height,
            seed,
            allow_diagonals: self.allow_diagonals,
            fixed_rooms: self.fixed_rooms,
            room_count,
            min_room_side: self.min_room_side,
            max_room_side: self.max_room_side,
            room_side_mean: self.room_side_mean,
            room_side_variance: self.room_side_variance,
        })
    }
}
