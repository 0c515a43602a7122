//! Shape module - square piece matrices with in-place rotation
//!
//! A shape is an `N×N` matrix of cells (`N <= 4`) stored row-major in a
//! stack buffer, so copying a shape out of the catalog never allocates.
//! Rotation works on the owned buffer with explicit index swaps; shapes are
//! kept square (even the 2-wide O and 3-wide S/Z/T) so that a transpose is
//! always well defined.

use arrayvec::ArrayVec;

use crate::types::{Cell, Spin, EMPTY, MAX_SHAPE_SIZE};

/// Capacity of the cell buffer (4×4)
const SHAPE_CAPACITY: usize = MAX_SHAPE_SIZE * MAX_SHAPE_SIZE;

/// Square matrix of piece cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    size: usize,
    cells: ArrayVec<Cell, SHAPE_CAPACITY>,
}

impl Shape {
    /// Build a shape from square rows.
    ///
    /// # Panics
    ///
    /// Panics if `N` exceeds [`MAX_SHAPE_SIZE`]; catalog shapes never do.
    pub fn from_rows<const N: usize>(rows: [[Cell; N]; N]) -> Self {
        assert!(N <= MAX_SHAPE_SIZE, "shape side {} exceeds {}", N, MAX_SHAPE_SIZE);
        let mut cells = ArrayVec::new();
        for row in rows {
            cells.extend(row);
        }
        Self { size: N, cells }
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at column `x`, row `y` of the matrix
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.cells[y * self.size + x])
    }

    /// Rows of the matrix, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size.max(1))
    }

    /// Occupied cells as `(x, y, value)`, relative to the top-left corner
    pub fn filled(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell != EMPTY)
            .map(move |(i, &cell)| ((i % n) as i32, (i / n) as i32, cell))
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != EMPTY).count()
    }

    /// Rotate a quarter turn in place.
    ///
    /// Transposes the matrix, then reverses every row (clockwise) or the
    /// order of the rows (counter-clockwise).
    pub fn rotate(&mut self, spin: Spin) {
        let n = self.size;

        for y in 0..n {
            for x in 0..y {
                self.cells.swap(y * n + x, x * n + y);
            }
        }

        match spin {
            Spin::Clockwise => {
                for row in self.cells.chunks_mut(n.max(1)) {
                    row.reverse();
                }
            }
            Spin::CounterClockwise => {
                for y in 0..n / 2 {
                    let mirror = n - 1 - y;
                    for x in 0..n {
                        self.cells.swap(y * n + x, mirror * n + x);
                    }
                }
            }
        }
    }
}
