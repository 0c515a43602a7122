//! Property tests for the game core.
//!
//! Invariants covered:
//! - Four turns in one direction give back the spawn matrix, for every kind.
//! - Arbitrary action scripts never move the active piece outside the well
//!   and never write unknown values into the grid.
//! - A hard drop finishes within `height` steps and always locks.
//! - A sweep of `k` full rows scores `10 * (2^k - 1)` and keeps the height.

use proptest::prelude::*;
use well_tetris::core::{shape_for, sweep_points, GameState, Grid};
use well_tetris::types::{GameAction, PieceKind, Spin, EMPTY};

const ACTIONS: [GameAction; 7] = [
    GameAction::MoveLeft,
    GameAction::MoveRight,
    GameAction::SoftDrop,
    GameAction::HardDrop,
    GameAction::RotateCw,
    GameAction::RotateCcw,
    GameAction::Restart,
];

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

fn spin_strategy() -> impl Strategy<Value = Spin> {
    prop::sample::select(vec![Spin::Clockwise, Spin::CounterClockwise])
}

fn action_strategy() -> impl Strategy<Value = GameAction> {
    // Restart is rare so scripts actually build up a stack.
    prop_oneof![
        30 => prop::sample::select(ACTIONS[..6].to_vec()),
        1 => Just(GameAction::Restart),
    ]
}

fn assert_in_bounds<S: well_tetris::core::PieceSource>(g: &GameState<S>) -> Result<(), TestCaseError> {
    let (w, h) = (g.grid().width() as i32, g.grid().height() as i32);
    for (x, y, _) in g.player().cells() {
        prop_assert!((0..w).contains(&x) && (0..h).contains(&y), "cell ({}, {}) outside", x, y);
    }
    prop_assert_eq!(g.grid().cells().len(), (w * h) as usize);
    prop_assert!(g.grid().cells().iter().all(|&c| c <= 7));
    Ok(())
}

proptest! {
    #[test]
    fn four_turns_are_identity(kind in kind_strategy(), spin in spin_strategy()) {
        let mut shape = shape_for(kind);
        for _ in 0..4 {
            shape.rotate(spin);
        }
        prop_assert_eq!(shape, shape_for(kind));
    }

    #[test]
    fn spins_undo_in_reverse_order(
        kind in kind_strategy(),
        spins in prop::collection::vec(spin_strategy(), 0..12),
    ) {
        let mut shape = shape_for(kind);
        for &spin in &spins {
            shape.rotate(spin);
        }
        prop_assert_eq!(shape.filled_count(), 4);
        for &spin in spins.iter().rev() {
            shape.rotate(spin.reversed());
        }
        prop_assert_eq!(shape, shape_for(kind));
    }

    #[test]
    fn actions_keep_piece_inside_well(
        seed in any::<u32>(),
        script in prop::collection::vec((action_strategy(), 0u32..200), 1..300),
    ) {
        let mut g = GameState::new(seed);
        assert_in_bounds(&g)?;
        for (action, elapsed) in script {
            g.apply_action(action);
            g.tick(elapsed);
            assert_in_bounds(&g)?;
        }
    }

    #[test]
    fn hard_drop_terminates_and_locks(
        seed in any::<u32>(),
        script in prop::collection::vec(action_strategy(), 0..60),
    ) {
        let mut g = GameState::new(seed);
        for action in script {
            g.apply_action(action);
        }
        g.take_last_event();

        let steps = g.hard_drop();
        prop_assert!(steps >= 1);
        prop_assert!(steps as usize <= g.grid().height());
        prop_assert!(g.take_last_event().is_some());
    }

    #[test]
    fn sweep_scores_doubling_points(
        full in prop::collection::vec(any::<bool>(), 19),
        holes in prop::collection::vec(0usize..12, 20),
    ) {
        let (w, h) = (12usize, 20usize);
        let mut grid = Grid::new(w, h);
        // Row 0 is never full; rows 1.. are full or have exactly one hole.
        for y in 0..h {
            let is_full = y > 0 && full[y - 1];
            for x in 0..w {
                if is_full || x != holes[y] {
                    grid.set(x as i32, y as i32, 1);
                }
            }
        }
        let k = full.iter().filter(|&&f| f).count() as u32;
        let filled_before = grid.cells().iter().filter(|&&c| c != EMPTY).count();

        let result = grid.sweep();

        prop_assert_eq!(result.rows, k);
        prop_assert_eq!(result.points, sweep_points(k));
        prop_assert_eq!(result.points, 10 * ((1u32 << k) - 1));
        prop_assert_eq!(grid.height(), h);
        let filled_after = grid.cells().iter().filter(|&&c| c != EMPTY).count();
        prop_assert_eq!(filled_after, filled_before - k as usize * w);
        for y in 0..h {
            prop_assert!(!grid.is_row_full(y));
        }
    }
}
