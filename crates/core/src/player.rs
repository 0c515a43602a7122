//! Player module - the active piece and the running score

use crate::collision::collides;
use crate::grid::Grid;
use crate::pieces::shape_for;
use crate::shape::Shape;
use crate::types::{Cell, PieceKind, Position};

/// The falling piece plus the score of the current game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub kind: PieceKind,
    /// Owned copy of the catalog matrix, rotated in place
    pub shape: Shape,
    /// Grid offset of the matrix's top-left corner
    pub pos: Position,
    pub score: u32,
}

impl Player {
    /// A piece of `kind` at the origin with a zero score
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: shape_for(kind),
            pos: Position::default(),
            score: 0,
        }
    }

    /// Spawn offset: top row, matrix centered with floor division
    pub fn spawn_position(grid_width: usize, shape_size: usize) -> Position {
        Position::new((grid_width / 2) as i32 - (shape_size / 2) as i32, 0)
    }

    /// Replace the piece with a fresh `kind` at the spawn position.
    ///
    /// The score is kept.
    pub fn respawn(&mut self, kind: PieceKind, grid_width: usize) {
        self.kind = kind;
        self.shape = shape_for(kind);
        self.pos = Self::spawn_position(grid_width, self.shape.size());
    }

    pub fn collides(&self, grid: &Grid) -> bool {
        collides(grid, &self.shape, self.pos)
    }

    /// Occupied cells in grid coordinates
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let pos = self.pos;
        self.shape
            .filled()
            .map(move |(dx, dy, cell)| (pos.x + dx, pos.y + dy, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_position_centers_matrix() {
        assert_eq!(Player::spawn_position(12, 4), Position::new(4, 0));
        assert_eq!(Player::spawn_position(12, 3), Position::new(5, 0));
        assert_eq!(Player::spawn_position(12, 2), Position::new(5, 0));
        assert_eq!(Player::spawn_position(7, 3), Position::new(2, 0));
    }

    #[test]
    fn test_respawn_keeps_score() {
        let mut player = Player::new(PieceKind::T);
        player.score = 120;
        player.pos = Position::new(1, 15);

        player.respawn(PieceKind::I, 12);

        assert_eq!(player.kind, PieceKind::I);
        assert_eq!(player.shape, shape_for(PieceKind::I));
        assert_eq!(player.pos, Position::new(4, 0));
        assert_eq!(player.score, 120);
    }

    #[test]
    fn test_cells_are_offset() {
        let mut player = Player::new(PieceKind::O);
        player.pos = Position::new(3, 7);
        let cells: Vec<_> = player.cells().collect();
        assert_eq!(cells, vec![(3, 7, 4), (4, 7, 4), (3, 8, 4), (4, 8, 4)]);
    }
}
