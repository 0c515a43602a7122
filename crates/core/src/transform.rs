//! Transform module - moving and rotating the active piece
//!
//! Every transform is tentative: the piece is changed, tested with
//! [`collides`](crate::collision::collides), and rolled back on collision.
//!
//! # Kicks
//!
//! A rotation that collides is not rejected outright. The piece is nudged
//! sideways by `+1, -1, +2, -2, ...` columns, each candidate measured from
//! the column it started in (a failed nudge rolls back before the next one).
//! Once the next magnitude would exceed the matrix width the rotation is
//! undone and the piece is left exactly as it was.

use crate::grid::Grid;
use crate::player::Player;
use crate::types::Spin;

/// Shift the piece `dx` columns. Returns false (and leaves the piece where
/// it was) if the shifted piece would collide.
pub fn move_piece(player: &mut Player, grid: &Grid, dx: i32) -> bool {
    player.pos.x += dx;
    if player.collides(grid) {
        player.pos.x -= dx;
        return false;
    }
    true
}

/// Move the piece one row down. Returns false (and leaves the piece where
/// it was) if it is resting on something.
pub fn fall_piece(player: &mut Player, grid: &Grid) -> bool {
    player.pos.y += 1;
    if player.collides(grid) {
        player.pos.y -= 1;
        return false;
    }
    true
}

/// Rotate the piece a quarter turn, kicking it sideways if needed.
///
/// Returns false when no kick clears the collision; the piece is then
/// unchanged.
pub fn rotate_piece(player: &mut Player, grid: &Grid, spin: Spin) -> bool {
    let origin_x = player.pos.x;
    player.shape.rotate(spin);

    let mut offset: i32 = 1;
    while player.collides(grid) {
        move_piece(player, grid, offset);
        offset = -offset;
        if offset > 0 && player.collides(grid) {
            offset += 1;
        }
        if offset > player.shape.size() as i32 {
            player.shape.rotate(spin.reversed());
            player.pos.x = origin_x;
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::shape_for;
    use crate::types::{PieceKind, Position};

    fn player_at(kind: PieceKind, x: i32, y: i32) -> Player {
        let mut player = Player::new(kind);
        player.pos = Position::new(x, y);
        player
    }

    #[test]
    fn test_move_piece_rolls_back_at_wall() {
        let grid = Grid::new(12, 20);
        let mut player = player_at(PieceKind::O, 0, 5);

        assert!(!move_piece(&mut player, &grid, -1));
        assert_eq!(player.pos, Position::new(0, 5));

        assert!(move_piece(&mut player, &grid, 1));
        assert_eq!(player.pos, Position::new(1, 5));
    }

    #[test]
    fn test_fall_piece_stops_on_floor() {
        let grid = Grid::new(12, 20);
        let mut player = player_at(PieceKind::O, 4, 17);

        assert!(fall_piece(&mut player, &grid));
        assert_eq!(player.pos.y, 18);
        assert!(!fall_piece(&mut player, &grid));
        assert_eq!(player.pos.y, 18);
    }

    #[test]
    fn test_rotate_in_open_space_has_no_kick() {
        let grid = Grid::new(12, 20);
        let mut player = player_at(PieceKind::T, 4, 5);
        let mut expected = shape_for(PieceKind::T);
        expected.rotate(Spin::Clockwise);

        assert!(rotate_piece(&mut player, &grid, Spin::Clockwise));
        assert_eq!(player.shape, expected);
        assert_eq!(player.pos, Position::new(4, 5));
    }

    #[test]
    fn test_rotate_kicks_off_left_wall() {
        let grid = Grid::new(12, 20);
        // Vertical I in matrix column 1, flush against the left wall.
        let mut player = player_at(PieceKind::I, -1, 5);

        // Horizontal I occupies row 1 (clockwise) and needs x >= 0.
        assert!(rotate_piece(&mut player, &grid, Spin::Clockwise));
        assert_eq!(player.pos.x, 0);
    }

    #[test]
    fn test_rotate_kicks_off_right_wall_with_larger_offset() {
        let grid = Grid::new(12, 20);
        // Vertical I in matrix column 1 sitting in grid column 11.
        let mut player = player_at(PieceKind::I, 10, 5);

        // Horizontal I would span columns 10..=13, needs x = 8.
        assert!(rotate_piece(&mut player, &grid, Spin::Clockwise));
        assert_eq!(player.pos.x, 8);
    }

    #[test]
    fn test_rotate_keeps_last_kick_of_full_width() {
        // Row 6 is open only at columns 2..=5 and 7. The horizontal I fits
        // nowhere but x = 2, which is the final kick (-4 for a 4-wide matrix).
        let mut grid = Grid::new(12, 20);
        for x in [0, 1, 6, 8, 9, 10, 11] {
            grid.set(x, 6, 1);
        }
        let mut player = player_at(PieceKind::I, 6, 5);
        assert!(!player.collides(&grid));
        let mut expected = shape_for(PieceKind::I);
        expected.rotate(Spin::Clockwise);

        assert!(rotate_piece(&mut player, &grid, Spin::Clockwise));
        assert_eq!(player.pos, Position::new(2, 5));
        assert_eq!(player.shape, expected);
        assert!(!player.collides(&grid));
    }

    #[test]
    fn test_rotate_reverts_when_no_kick_fits() {
        // A 3-wide shaft: a horizontal I can never fit.
        let mut grid = Grid::new(12, 20);
        for y in 0..20 {
            for x in 0..12 {
                if !(4..=6).contains(&x) {
                    grid.set(x, y, 1);
                }
            }
        }
        let mut player = player_at(PieceKind::I, 4, 5);
        let before = player.clone();

        assert!(!rotate_piece(&mut player, &grid, Spin::Clockwise));
        assert_eq!(player, before);
    }
}
