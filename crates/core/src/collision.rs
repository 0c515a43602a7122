//! Collision detection between a shape and the grid.
//!
//! This is the only legality check in the game: moving, rotating, kicking,
//! dropping and spawning all ask the same question.

use crate::grid::Grid;
use crate::shape::Shape;
use crate::types::{Position, EMPTY};

/// True if any occupied cell of `shape` placed at `pos` lies outside the
/// grid (on any side) or overlaps an occupied grid cell.
pub fn collides(grid: &Grid, shape: &Shape, pos: Position) -> bool {
    shape
        .filled()
        .any(|(dx, dy, _)| grid.get(pos.x + dx, pos.y + dy) != Some(EMPTY))
}
