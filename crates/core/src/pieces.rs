//! Pieces module - the piece catalog
//!
//! One canonical matrix per kind. Every call to [`shape_for`] returns a fresh
//! copy, so rotating the active piece never touches the catalog.
//!
//! Matrix sides: I is 4×4, O is 2×2, everything else 3×3. Each occupied cell
//! holds the kind's color index.

use crate::shape::Shape;
use crate::types::PieceKind;

/// Fresh copy of the spawn matrix for `kind`
pub fn shape_for(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows([[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]]),
        PieceKind::L => Shape::from_rows([[0, 2, 0], [0, 2, 0], [0, 2, 2]]),
        PieceKind::J => Shape::from_rows([[0, 3, 0], [0, 3, 0], [3, 3, 0]]),
        PieceKind::O => Shape::from_rows([[4, 4], [4, 4]]),
        PieceKind::Z => Shape::from_rows([[5, 5, 0], [0, 5, 5], [0, 0, 0]]),
        PieceKind::S => Shape::from_rows([[0, 6, 6], [6, 6, 0], [0, 0, 0]]),
        PieceKind::T => Shape::from_rows([[0, 7, 0], [7, 7, 7], [0, 0, 0]]),
    }
}
