//! Falling-block puzzle in the terminal (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `well_tetris::{core, input, term, types}` and adds the
//! runner's [`config`].

pub mod config;

pub use well_tetris_core as core;
pub use well_tetris_input as input;
pub use well_tetris_term as term;
pub use well_tetris_types as types;
