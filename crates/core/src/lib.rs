//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains every game rule and no I/O: rendering, input and the
//! frame clock live in other crates and only call into it.
//!
//! # Module Structure
//!
//! - [`grid`]: the well, with merge and row sweeping
//! - [`shape`]: square piece matrices with in-place rotation
//! - [`pieces`]: the catalog of spawn matrices
//! - [`collision`]: the single shape-vs-grid legality check
//! - [`player`]: the active piece and score
//! - [`transform`]: move, fall and rotate-with-kick
//! - [`scoring`]: doubling row-clear points
//! - [`rng`]: uniform piece selection behind the [`PieceSource`] trait
//! - [`game_state`]: the single owner of all of the above
//! - [`snapshot`]: read-only copies for renderers
//!
//! # Game Rules
//!
//! - **Selection**: every piece is drawn uniformly from the seven kinds
//! - **Rotation**: transpose + reflect, then horizontal kicks `+1, -1, +2, -2, ...`
//! - **Lock**: a piece locks on the first drop step that cannot move it down
//! - **Sweep**: full rows are cleared bottom-up, `10, 20, 40, ...` points each
//! - **Game over**: a blocked spawn empties the well and zeroes the score
//!
//! # Example
//!
//! ```
//! use well_tetris_core::{GameState, SequenceSource};
//! use well_tetris_types::{DropOutcome, GameAction, PieceKind};
//!
//! let mut game = GameState::with_source(12, 20, SequenceSource::repeat(PieceKind::O));
//!
//! game.apply_action(GameAction::MoveLeft);
//! assert_eq!(game.step_drop(), DropOutcome::Falling);
//!
//! game.apply_action(GameAction::HardDrop);
//! assert_eq!(game.grid().get(4, 19), Some(4));
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`] every frame with the elapsed milliseconds. One
//! drop step happens once the accumulated time exceeds the drop interval
//! (1000ms by default).

pub mod collision;
pub mod game_state;
pub mod grid;
pub mod pieces;
pub mod player;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;
pub mod transform;

pub use well_tetris_types as types;

// Re-export commonly used types for convenience
pub use collision::collides;
pub use game_state::GameState;
pub use grid::Grid;
pub use pieces::shape_for;
pub use player::Player;
pub use rng::{PieceSource, SequenceSource, SimpleRng};
pub use scoring::{row_points, sweep_points, SweepResult};
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use transform::{fall_piece, move_piece, rotate_piece};
