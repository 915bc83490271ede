//! The dungeon map grid
//!
//! A width x height array of cells tracking occupancy (empty, room, path)
//! and per-cell traversal cost for corridor routing. Rooms are stamped onto
//! the grid all-or-nothing; the pathfinder later carves corridors by marking
//! empty cells as path.

use crate::config::RoomRect;
use crate::generation::Room;

/// Default traversal cost for unclaimed cells
pub const DEFAULT_CELL_COST: u32 = 10;
/// Cost of a room perimeter cell that is not an exit
pub const ROOM_WALL_COST: u32 = 100;
/// Cost of room interiors, exits and carved paths
pub const ROOM_INSIDE_COST: u32 = 0;

/// What occupies a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    /// Unclaimed, unwalkable cell
    Empty,
    /// Cell inside a placed room
    Room,
    /// Cell carved out by a corridor
    Path,
}

/// A single grid cell
///
/// Carries its type and traversal cost plus the A* scratch fields (g, h,
/// parent back-pointer), which the pathfinder resets at the start of every
/// search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// What occupies this cell
    pub cell_type: CellType,
    /// Traversal cost added when a corridor enters this cell
    pub cost: u32,
    /// A* cost from the search start
    pub g_cost: u32,
    /// A* heuristic cost to the search goal
    pub h_cost: u32,
    /// A* back-pointer for path reconstruction
    pub parent: Option<(usize, usize)>,
}

impl Cell {
    fn new() -> Self {
        Self {
            cell_type: CellType::Empty,
            cost: DEFAULT_CELL_COST,
            g_cost: 0,
            h_cost: 0,
            parent: None,
        }
    }

    /// Combined A* priority
    #[inline]
    pub fn f_cost(&self) -> u32 {
        self.g_cost + self.h_cost
    }
}

/// The dungeon map as a grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::new(); width * height],
        }
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow the cell at (x, y)
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[y * self.width + x]
    }

    /// Mutably borrow the cell at (x, y)
    #[inline]
    pub fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        &mut self.cells[y * self.width + x]
    }

    /// Attempt to stamp a room onto the grid
    ///
    /// All-or-nothing: the rectangle (clipped to the grid bounds) is scanned
    /// first, and if any covered cell is already non-empty the call returns
    /// `false` without touching anything. This is what makes rejected random
    /// placements cheap to retry.
    pub fn add_room(&mut self, room: RoomRect) -> bool {
        let mut to_fill = Vec::new();

        for x in room.x..room.x + room.width as i32 {
            for y in room.y..room.y + room.height as i32 {
                if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
                    continue;
                }
                let (x, y) = (x as usize, y as usize);
                if self.cell(x, y).cell_type != CellType::Empty {
                    return false;
                }
                to_fill.push((x, y));
            }
        }

        for (x, y) in to_fill {
            self.cell_mut(x, y).cell_type = CellType::Room;
        }

        true
    }

    /// Annotate traversal costs for a placed room
    ///
    /// Perimeter cells that are not exits get [`ROOM_WALL_COST`], pushing
    /// corridors towards the planned exits; exits and the interior drop to
    /// [`ROOM_INSIDE_COST`] so paths cross them freely.
    pub fn add_room_costs(&mut self, room: &Room) {
        for x in room.x..room.x + room.width as i32 {
            for y in room.y..room.y + room.height as i32 {
                if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
                    continue;
                }

                let on_perimeter = x == room.x
                    || x == room.x + room.width as i32 - 1
                    || y == room.y
                    || y == room.y + room.height as i32 - 1;

                let cost = if on_perimeter && !room.exits.contains(&(x, y)) {
                    ROOM_WALL_COST
                } else {
                    ROOM_INSIDE_COST
                };
                self.cell_mut(x as usize, y as usize).cost = cost;
            }
        }
    }

    /// In-bounds neighbors of a cell, 4- or 8-connected
    pub fn neighbors(&self, x: usize, y: usize, allow_diagonals: bool) -> Vec<(usize, usize)> {
        let mut result = Vec::with_capacity(if allow_diagonals { 8 } else { 4 });

        for dx in -1i32..=1 {
            for dy in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if !allow_diagonals && dx != 0 && dy != 0 {
                    continue;
                }

                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx >= 0 && (nx as usize) < self.width && ny >= 0 && (ny as usize) < self.height {
                    result.push((nx as usize, ny as usize));
                }
            }
        }

        result
    }

    /// Mark a carved corridor on the grid
    ///
    /// Only empty cells are claimed: cell types move Empty -> Path and room
    /// cells a corridor crosses keep their Room type. Re-carving a cell is a
    /// no-op, so crossing corridors stack cleanly.
    pub fn add_path(&mut self, path: &[(usize, usize)]) {
        for &(x, y) in path {
            let cell = self.cell_mut(x, y);
            if cell.cell_type == CellType::Empty {
                cell.cell_type = CellType::Path;
                cell.cost = ROOM_INSIDE_COST;
            }
        }
    }

    /// Clear the A* scratch state of every cell
    pub fn reset_search_state(&mut self) {
        for cell in &mut self.cells {
            cell.g_cost = 0;
            cell.h_cost = 0;
            cell.parent = None;
        }
    }

    /// Whether the cell at (x, y) is walkable (room or path)
    #[inline]
    pub fn walkable(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).cell_type != CellType::Empty
    }

    /// The map as a boolean grid, `map[x][y]` true meaning walkable
    pub fn to_bool_map(&self) -> Vec<Vec<bool>> {
        (0..self.width)
            .map(|x| (0..self.height).map(|y| self.walkable(x, y)).collect())
            .collect()
    }

    /// Render the map as ASCII art: `.` empty, `#` room, `0` path
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(match self.cell(x, y).cell_type {
                    CellType::Empty => '.',
                    CellType::Room => '#',
                    CellType::Path => '0',
                });
            }
            out.push('\n');
        }
        out
    }
}
