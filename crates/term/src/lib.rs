//! Terminal rendering for the well.
//!
//! Frames are composed into a plain framebuffer by [`GameView`] and then
//! flushed by [`TerminalRenderer`], which only rewrites cells that changed.
//!
//! Grid cells are drawn two columns wide so the well looks roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use well_tetris_core as core;
pub use well_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{cell_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
