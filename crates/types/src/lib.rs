//! Shared types module - plain data structures and constants
//!
//! Everything in here is dependency-free data shared by the game core, the
//! terminal renderer and the input mapping.
//!
//! # Well Dimensions
//!
//! The default well is 12 columns by 20 rows:
//!
//! - **Width**: 12 columns (indexed 0-11, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn**: row 0, horizontally centered for the piece's matrix size
//!
//! # Cell Values
//!
//! A [`Cell`] is a small integer. `0` is empty, `1..=7` is occupied and
//! doubles as the color index of the piece kind that filled it:
//!
//! | Kind | Color index |
//! |------|-------------|
//! | I | 1 |
//! | L | 2 |
//! | J | 3 |
//! | O | 4 |
//! | Z | 5 |
//! | S | 6 |
//! | T | 7 |
//!
//! # Examples
//!
//! ```
//! use well_tetris_types::{GameAction, PieceKind, Spin, DEFAULT_WIDTH};
//!
//! assert_eq!(PieceKind::T.color(), 7);
//! assert_eq!(PieceKind::T.as_str(), "T");
//!
//! assert_eq!(Spin::Clockwise.reversed(), Spin::CounterClockwise);
//! assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
//! assert_eq!(DEFAULT_WIDTH, 12);
//! ```

/// Default well width in cells
pub const DEFAULT_WIDTH: usize = 12;

/// Default well height in cells
pub const DEFAULT_HEIGHT: usize = 20;

/// Default gravity interval (one row per second)
pub const DEFAULT_DROP_INTERVAL_MS: u32 = 1000;

/// Fixed frame interval used by the terminal runner (~60 FPS)
pub const TICK_MS: u32 = 16;

/// Points for the first row cleared in a sweep. Each further row in the
/// same sweep is worth twice the previous one.
pub const ROW_BASE_POINTS: u32 = 10;

/// Largest piece matrix side (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// A grid or shape cell. `0` is empty, anything else is a color index.
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;

/// The seven piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in spawn-selector order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Color index written into the grid for this kind
    pub fn color(&self) -> Cell {
        match self {
            PieceKind::I => 1,
            PieceKind::L => 2,
            PieceKind::J => 3,
            PieceKind::O => 4,
            PieceKind::Z => 5,
            PieceKind::S => 6,
            PieceKind::T => 7,
        }
    }

    /// Upper-case letter used by the side panel and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Rotation direction for a quarter turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

impl Spin {
    /// The turn that undoes this one
    pub fn reversed(&self) -> Self {
        match self {
            Spin::Clockwise => Spin::CounterClockwise,
            Spin::CounterClockwise => Spin::Clockwise,
        }
    }
}

/// Grid-relative offset of a shape's top-left corner.
///
/// Signed: a piece may sit partially above or beside the grid while a
/// tentative move is being tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Game actions applied to the game state
///
/// Used by the key mapping and by tests that script a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell (locks it if blocked)
    SoftDrop,
    /// Drop piece until it locks
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Start a fresh game on an empty well
    Restart,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Restart => "restart",
        }
    }
}

/// Result of a single gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row and is still falling
    Falling,
    /// The piece could not move, was merged and a new piece spawned
    Locked,
}

impl DropOutcome {
    pub fn still_falling(&self) -> bool {
        matches!(self, DropOutcome::Falling)
    }
}

/// Event recorded each time a piece locks.
///
/// Consumed by observers (logging, side panel) via `take_last_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockEvent {
    /// Rows removed by the sweep that followed the lock
    pub rows_cleared: u32,
    /// Points the sweep added to the score
    pub points: u32,
    /// The respawned piece collided and the well was reset
    pub game_over: bool,
}
