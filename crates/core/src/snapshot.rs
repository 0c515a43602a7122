use crate::shape::Shape;
use crate::types::{Cell, PieceKind, EMPTY};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i32,
    pub y: i32,
    pub shape: Shape,
}

impl ActiveSnapshot {
    /// Occupied cells in grid coordinates
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.shape
            .filled()
            .map(move |(dx, dy, cell)| (self.x + dx, self.y + dy, cell))
    }
}

/// Read-only copy of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major grid cells
    pub grid: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub pieces: u32,
    pub episode_id: u32,
}

impl GameSnapshot {
    /// Grid cell at `(x, y)`; empty when out of bounds
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        if x >= self.width || y >= self.height {
            return EMPTY;
        }
        self.grid[y * self.width + x]
    }

    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.grid.clear();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.pieces = 0;
        self.episode_id = 0;
    }
}
