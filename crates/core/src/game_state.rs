//! Game state module - owns the grid, the active piece and the piece source
//!
//! All mutation goes through `&mut GameState`; there is exactly one owner and
//! no internal locking. A multi-threaded host has to serialize access itself.
//!
//! # Lifecycle
//!
//! 1. [`GameState::new`] creates an empty grid and spawns the first piece.
//! 2. Moves, rotations and drops mutate the piece; [`GameState::step_drop`]
//!    locks it when it cannot fall further.
//! 3. Locking merges the piece, spawns the next one and sweeps full rows.
//! 4. If the new piece collides at spawn the game is over: the grid is
//!    emptied, the score reset, and play continues with that piece.

use tracing::{debug, info};

use crate::grid::Grid;
use crate::player::Player;
use crate::rng::{PieceSource, SimpleRng};
use crate::scoring::SweepResult;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::transform::{fall_piece, move_piece, rotate_piece};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = SimpleRng> {
    grid: Grid,
    player: Player,
    source: S,
    drop_interval_ms: u32,
    drop_counter_ms: u32,
    /// Rows cleared in the current game
    lines: u32,
    /// Pieces spawned since the state was created
    pieces: u32,
    /// Increments every time the well is reset (game over or restart)
    episode_id: u32,
    last_event: Option<LockEvent>,
}

impl GameState<SimpleRng> {
    /// Default 12×20 well with a seeded uniform piece source
    pub fn new(seed: u32) -> Self {
        Self::with_source(DEFAULT_WIDTH, DEFAULT_HEIGHT, SimpleRng::new(seed))
    }
}

impl Default for GameState<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> GameState<S> {
    /// Empty `width × height` well; the first piece is drawn from `source`
    pub fn with_source(width: usize, height: usize, mut source: S) -> Self {
        let first = source.next_kind();
        let mut state = Self {
            grid: Grid::new(width, height),
            player: Player::new(first),
            source,
            drop_interval_ms: DEFAULT_DROP_INTERVAL_MS,
            drop_counter_ms: 0,
            lines: 0,
            pieces: 0,
            episode_id: 0,
            last_event: None,
        };
        state.spawn(first);
        state
    }

    /// Set the gravity interval (clamped to at least 1ms)
    pub fn with_drop_interval_ms(mut self, interval_ms: u32) -> Self {
        self.drop_interval_ms = interval_ms.max(1);
        self
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for scripted setups (puzzles, tests)
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Direct piece access for scripted setups (puzzles, tests)
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.grid.clear();
        out.grid.extend_from_slice(self.grid.cells());
        out.active = Some(ActiveSnapshot {
            kind: self.player.kind,
            x: self.player.pos.x,
            y: self.player.pos.y,
            shape: self.player.shape.clone(),
        });
        out.score = self.player.score;
        out.lines = self.lines;
        out.pieces = self.pieces;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Draw the next piece and place it at the spawn position.
    ///
    /// If it collides there the game is over: the grid is emptied and the
    /// score reset. Full rows are swept either way. Returns true on game over.
    pub fn reset_player(&mut self) -> bool {
        let kind = self.source.next_kind();
        self.spawn(kind).0
    }

    fn spawn(&mut self, kind: PieceKind) -> (bool, SweepResult) {
        self.player.respawn(kind, self.grid.width());
        self.pieces = self.pieces.wrapping_add(1);
        debug!(kind = kind.as_str(), x = self.player.pos.x, "spawned piece");

        let game_over = self.player.collides(&self.grid);
        if game_over {
            info!(
                score = self.player.score,
                lines = self.lines,
                episode = self.episode_id,
                "spawn blocked, game over"
            );
            self.grid.clear();
            self.player.score = 0;
            self.lines = 0;
            self.episode_id = self.episode_id.wrapping_add(1);
        }

        let swept = self.grid.sweep();
        if !swept.is_empty() {
            self.player.score = self.player.score.saturating_add(swept.points);
            self.lines = self.lines.saturating_add(swept.rows);
            debug!(rows = swept.rows, points = swept.points, score = self.player.score, "swept rows");
        }

        (game_over, swept)
    }

    /// Shift the piece `dx` columns; no-op if blocked.
    pub fn move_player(&mut self, dx: i32) -> bool {
        move_piece(&mut self.player, &self.grid, dx)
    }

    /// Rotate the piece with kicks; no-op if no kick fits.
    pub fn rotate_player(&mut self, spin: Spin) -> bool {
        rotate_piece(&mut self.player, &self.grid, spin)
    }

    /// Move the piece down one row, or lock it if it is resting on something.
    ///
    /// Locking merges the piece into the grid, spawns the next piece and
    /// sweeps. Only a successful fall restarts the gravity timer.
    pub fn step_drop(&mut self) -> DropOutcome {
        if fall_piece(&mut self.player, &self.grid) {
            self.drop_counter_ms = 0;
            return DropOutcome::Falling;
        }

        self.grid.merge(&self.player.shape, self.player.pos);
        debug!(
            kind = self.player.kind.as_str(),
            x = self.player.pos.x,
            y = self.player.pos.y,
            "locked piece"
        );

        let next = self.source.next_kind();
        let (game_over, swept) = self.spawn(next);
        self.last_event = Some(LockEvent {
            rows_cleared: swept.rows,
            points: swept.points,
            game_over,
        });
        DropOutcome::Locked
    }

    /// Drop until the piece locks. Returns the number of steps taken,
    /// including the final locking step.
    pub fn hard_drop(&mut self) -> u32 {
        let mut steps = 1;
        while self.step_drop().still_falling() {
            steps += 1;
        }
        steps
    }

    /// Advance the gravity timer. Performs one drop step once the
    /// accumulated time exceeds the drop interval; returns whether it did.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms > self.drop_interval_ms {
            self.step_drop();
            return true;
        }
        false
    }

    /// Empty the well, zero the score and spawn a fresh piece.
    pub fn restart(&mut self) {
        info!(score = self.player.score, episode = self.episode_id, "restart");
        self.grid.clear();
        self.player.score = 0;
        self.lines = 0;
        self.drop_counter_ms = 0;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.reset_player();
    }

    /// Apply a game action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_player(-1),
            GameAction::MoveRight => self.move_player(1),
            GameAction::SoftDrop => {
                self.step_drop();
                true
            }
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
            GameAction::RotateCw => self.rotate_player(Spin::Clockwise),
            GameAction::RotateCcw => self.rotate_player(Spin::CounterClockwise),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}
