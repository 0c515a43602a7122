//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell as GridCell, EMPTY};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Color for each grid value; index 0 is never drawn.
const PALETTE: [Rgb; 8] = [
    Rgb::new(0, 0, 0),
    Rgb::new(0xFF, 0x0D, 0x72),
    Rgb::new(0x0D, 0xC2, 0xFF),
    Rgb::new(0x0D, 0xFF, 0x72),
    Rgb::new(0xF5, 0x38, 0xFF),
    Rgb::new(0xFF, 0x8E, 0x0D),
    Rgb::new(0xFF, 0xE1, 0x38),
    Rgb::new(0x38, 0x77, 0xFF),
];

const WELL_BG: Rgb = Rgb::new(0, 0, 0);

/// Color for a grid value, `None` for empty or unknown values.
pub fn cell_color(value: GridCell) -> Option<Rgb> {
    if value == EMPTY {
        return None;
    }
    PALETTE.get(value as usize).copied()
}

const KEY_LEGEND: [(&str, &str); 6] = [
    ("←/→", "move"),
    ("↓", "drop"),
    ("↑/spc", "slam"),
    ("q/w", "rotate"),
    ("r", "restart"),
    ("esc", "quit"),
];

/// A lightweight terminal renderer for the well.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square in most terminal fonts.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render the snapshot into an existing framebuffer.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_banner(snap, None, viewport, fb);
    }

    /// Render, with an optional banner centered over the well.
    pub fn render_into_with_banner(
        &self,
        snap: &GameSnapshot,
        banner: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let well_w = (snap.width as u16).saturating_mul(self.cell_w);
        let well_h = (snap.height as u16).saturating_mul(self.cell_h);
        let frame_w = well_w.saturating_add(2);
        let frame_h = well_h.saturating_add(2);
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        fb.fill_rect(
            origin_x + 1,
            origin_y + 1,
            well_w,
            well_h,
            ' ',
            CellStyle::plain(WELL_BG, WELL_BG),
        );
        draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        for y in 0..snap.height {
            for x in 0..snap.width {
                if let Some(color) = cell_color(snap.cell(x, y)) {
                    self.draw_cell(fb, origin_x, origin_y, x as u16, y as u16, color);
                }
            }
        }

        if let Some(active) = &snap.active {
            for (x, y, value) in active.cells() {
                if x < 0 || y < 0 || x as usize >= snap.width || y as usize >= snap.height {
                    continue;
                }
                if let Some(color) = cell_color(value) {
                    self.draw_cell(fb, origin_x, origin_y, x as u16, y as u16, color);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin_x + frame_w + 2, origin_y);

        if let Some(text) = banner {
            let text_w = text.chars().count() as u16;
            let x = origin_x + frame_w.saturating_sub(text_w) / 2;
            let style = CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            fb.put_str(x, origin_y + frame_h / 2, text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, origin_x: u16, origin_y: u16, x: u16, y: u16, color: Rgb) {
        let px = origin_x + 1 + x * self.cell_w;
        let py = origin_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', CellStyle::plain(color, WELL_BG));
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, x: u16, y: u16) {
        // Needs room for the longest legend line.
        if x.saturating_add(14) > viewport.width {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::default();
        let muted = CellStyle::default().dim();

        let mut row = y;
        for (name, number) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("GAME", snap.episode_id.saturating_add(1)),
        ] {
            fb.put_str(x, row, name, label);
            fb.put_u32(x, row + 1, number, value);
            row += 3;
        }

        for (keys, what) in KEY_LEGEND {
            fb.put_str(x, row, keys, muted);
            fb.put_str(x + 6, row, what, muted);
            row += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
