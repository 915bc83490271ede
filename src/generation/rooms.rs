//! Room placement
//!
//! Stamps fixed rooms first (hard failure on overlap), then spends the
//! configured budget of random placement attempts. Random room sides come
//! from a normal distribution via the Box-Muller transform; rejected
//! placements are dropped, not retried.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::config::{DungeonConfig, RoomRect};
use crate::error::{DungeonError, Result};
use crate::geometry::Point;
use crate::grid::Grid;

/// Magnitude of the jitter applied to room centers before triangulation
const CENTER_JITTER: f64 = 1e-10;

/// A placed rectangular room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Identifier, increasing in placement order within one generation run
    pub id: usize,
    /// X coordinate of the left edge
    pub x: i32,
    /// Y coordinate of the top edge
    pub y: i32,
    /// Width in cells
    pub width: u32,
    /// Height in cells
    pub height: u32,
    /// Planned exit cells on the perimeter; may contain duplicates, used
    /// only as a membership test during cost annotation
    pub exits: Vec<(i32, i32)>,
}

impl Room {
    /// Create a room from a placement rectangle, with no exits yet
    pub fn from_rect(id: usize, rect: RoomRect) -> Self {
        Self {
            id,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            exits: Vec::new(),
        }
    }

    /// Geometric center of the room
    pub fn center(&self) -> Point {
        Point::new(
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }

    /// Sample 1-2 exit cells per wall, independently per side
    ///
    /// Duplicates are possible and harmless. Draw order is fixed (top,
    /// bottom, left, right) to keep generation deterministic.
    pub fn plan_exits(&mut self, rng: &mut ChaCha8Rng) {
        let (x, y) = (self.x, self.y);
        let (w, h) = (self.width as i32, self.height as i32);

        let count = rng.gen_range(1..3);
        for _ in 0..count {
            self.exits.push((rng.gen_range(x..x + w), y));
        }

        let count = rng.gen_range(1..3);
        for _ in 0..count {
            self.exits.push((rng.gen_range(x..x + w), y + h - 1));
        }

        let count = rng.gen_range(1..3);
        for _ in 0..count {
            self.exits.push((x, rng.gen_range(y..y + h)));
        }

        let count = rng.gen_range(1..3);
        for _ in 0..count {
            self.exits.push((x + w - 1, rng.gen_range(y..y + h)));
        }
    }
}

/// Place the configured fixed rooms, then up to `room_count` random rooms
///
/// Fixed rooms that cannot be stamped are a fatal configuration error;
/// random attempts that would overlap are silently dropped, so the result
/// may contain fewer than `room_count` random rooms.
///
/// # Errors
///
/// Returns `RoomOverlap` when a fixed room collides with an earlier room.
pub fn place_rooms(
    grid: &mut Grid,
    config: &DungeonConfig,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<Room>> {
    let mut rooms = Vec::new();

    for &rect in &config.fixed_rooms {
        if !grid.add_room(rect) {
            return Err(DungeonError::RoomOverlap {
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
            });
        }
        rooms.push(Room::from_rect(rooms.len(), rect));
    }

    for _ in 0..config.room_count {
        try_random_room(grid, config, rng, &mut rooms);
    }

    Ok(rooms)
}

/// One random placement attempt; returns whether a room was placed
fn try_random_room(
    grid: &mut Grid,
    config: &DungeonConfig,
    rng: &mut ChaCha8Rng,
    rooms: &mut Vec<Room>,
) -> bool {
    let mean = config.room_side_mean;
    let variance = config.room_side_variance;
    let (min, max) = (config.min_room_side as i64, config.max_room_side as i64);

    let w = (sample_normal(rng, mean, variance).round() as i64).clamp(min, max) as u32;
    let h = (sample_normal(rng, mean, variance).round() as i64).clamp(min, max) as u32;

    // Sample the center uniformly over positions keeping the room in bounds,
    // then derive the top-left corner
    let min_cx = w as f64 / 2.0;
    let max_cx = grid.width() as f64 - w as f64 / 2.0;
    let min_cy = h as f64 / 2.0;
    let max_cy = grid.height() as f64 - h as f64 / 2.0;

    let cx = min_cx + rng.gen::<f64>() * (max_cx - min_cx);
    let cy = min_cy + rng.gen::<f64>() * (max_cy - min_cy);

    let rect = RoomRect::new(
        (cx - w as f64 / 2.0).round() as i32,
        (cy - h as f64 / 2.0).round() as i32,
        w,
        h,
    );

    if !grid.add_room(rect) {
        return false;
    }

    let mut room = Room::from_rect(rooms.len(), rect);
    room.plan_exits(rng);
    rooms.push(room);
    true
}

/// Room centers with a tiny random jitter, in room order
///
/// The jitter (about 1e-10 cells) breaks exact collinear and cocircular
/// configurations that the strict circumcircle test would otherwise drop,
/// and makes every center bit-unique as a hash key.
pub fn jittered_centers(rooms: &[Room], rng: &mut ChaCha8Rng) -> Vec<Point> {
    rooms
        .iter()
        .map(|room| {
            let center = room.center();
            Point::new(
                center.x + (rng.gen::<f64>() - 0.5) * CENTER_JITTER,
                center.y + (rng.gen::<f64>() - 0.5) * CENTER_JITTER,
            )
        })
        .collect()
}

/// Draw from a normal distribution via the Box-Muller transform
fn sample_normal(rng: &mut ChaCha8Rng, mean: f64, variance: f64) -> f64 {
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = 1.0 - rng.gen::<f64>();
    let std_normal = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).sin();
    mean + variance.sqrt() * std_normal
}
