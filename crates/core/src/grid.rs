//! Grid module - the well that pieces fall into
//!
//! The grid is a `width × height` matrix of cells, stored as a flat
//! row-major buffer. Row 0 is the top (spawn side), row `height - 1` the
//! bottom. Dimensions are fixed at creation.

use crate::scoring::{row_points, SweepResult};
use crate::shape::Shape;
use crate::types::{Cell, Position, EMPTY};

/// The playfield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major cells (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat index for signed coordinates, `None` when outside the grid
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Cell at `(x, y)`, or `None` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Write a cell. Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// One row, top is 0
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == EMPTY)
    }

    /// Every cell in row `y` is occupied
    pub fn is_row_full(&self, y: usize) -> bool {
        match self.row(y) {
            Some(row) => !row.is_empty() && row.iter().all(|&cell| cell != EMPTY),
            None => false,
        }
    }

    /// Remove row `y`, shift the rows above it down by one and insert an
    /// empty row at the top. Returns false if `y` is out of bounds.
    pub fn clear_row(&mut self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }

        let width = self.width;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(EMPTY);
        true
    }

    /// Write every occupied cell of `shape` into the grid at `pos`.
    ///
    /// Cells that land outside the grid are dropped.
    pub fn merge(&mut self, shape: &Shape, pos: Position) {
        for (dx, dy, cell) in shape.filled() {
            self.set(pos.x + dx, pos.y + dy, cell);
        }
    }

    /// Clear full rows, bottom to top, and score them.
    ///
    /// Row 0 is never inspected: the scan stops at row 1. A row left full at
    /// the very top stays on the grid.
    ///
    /// After a row is removed the same index is tested again, since the row
    /// above has moved into it. The first row cleared is worth 10 points and
    /// each further row in the same call doubles the previous amount.
    pub fn sweep(&mut self) -> SweepResult {
        let mut result = SweepResult::default();
        let mut y = self.height.saturating_sub(1);

        while y > 0 {
            if self.is_row_full(y) {
                result.points = result.points.saturating_add(row_points(result.rows));
                result.rows += 1;
                self.clear_row(y);
                continue;
            }
            y -= 1;
        }

        result
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }
}
