//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Tile, EMPTY, WIN_TILE};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board background between tiles.
const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const EMPTY_TILE_BG: Rgb = Rgb::new(180, 180, 180);
const TILE_TEXT: Rgb = Rgb::new(0, 0, 0);

/// Background color for a tile value.
///
/// Warm ramp from pale yellow (2) to red (2048); anything larger is black.
pub fn tile_color(value: Tile) -> Rgb {
    match value {
        EMPTY => EMPTY_TILE_BG,
        2 => Rgb::new(255, 255, 128),
        4 => Rgb::new(255, 255, 0),
        8 => Rgb::new(255, 200, 0),
        16 => Rgb::new(255, 160, 0),
        32 => Rgb::new(255, 128, 0),
        64 => Rgb::new(255, 100, 0),
        128 => Rgb::new(255, 80, 0),
        256 => Rgb::new(255, 60, 0),
        512 => Rgb::new(255, 40, 0),
        1024 => Rgb::new(255, 20, 0),
        2048 => Rgb::new(255, 0, 0),
        _ => Rgb::new(0, 0, 0),
    }
}

fn tile_style(value: Tile) -> CellStyle {
    let bg = tile_color(value);
    // Black text disappears on the black background of oversized tiles.
    let fg = if value > WIN_TILE {
        Rgb::new(255, 255, 255)
    } else {
        TILE_TEXT
    };
    CellStyle::new(fg, bg).bold()
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Spacing between tiles (and between tiles and the border).
    gap: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 leaves room for six-digit values with a blank column either side.
        Self {
            tile_w: 7,
            tile_h: 3,
            gap: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16, gap: u16) -> Self {
        Self {
            tile_w,
            tile_h,
            gap,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board for an `n x n` grid.
    pub fn frame_size(&self, n: u16) -> (u16, u16) {
        let inner_w = n * self.tile_w + (n + 1) * self.gap;
        let inner_h = n * self.tile_h + (n + 1) * self.gap;
        (inner_w + 2, inner_h + 2)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let n = snap.grid.size() as u16;
        let (frame_w, frame_h) = self.frame_size(n);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let board_bg = CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', board_bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (row, tiles) in snap.grid.rows().enumerate() {
            for (col, &value) in tiles.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if !snap.playable() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Top-left terminal cell of the tile at (row, col).
    pub fn tile_origin(&self, start_x: u16, start_y: u16, row: u16, col: u16) -> (u16, u16) {
        let x = start_x + 1 + self.gap + col * (self.tile_w + self.gap);
        let y = start_y + 1 + self.gap + row * (self.tile_h + self.gap);
        (x, y)
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

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

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: u16, col: u16, value: Tile) {
        let (x, y) = self.tile_origin(start_x, start_y, row, col);
        let style = tile_style(value);
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);

        if value != EMPTY {
            let label = value.to_string();
            fb.put_str_centered(x, y + self.tile_h / 2, self.tile_w, &label, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = start_y;
        let mut line = |fb: &mut FrameBuffer, text: &str, style: CellStyle, gap_after: u16| {
            fb.put_str(panel_x, y, text, style);
            y = y.saturating_add(1 + gap_after);
        };

        line(fb, "BEST", label, 0);
        line(fb, &snap.best_tile.to_string(), value, 1);

        line(fb, "EMPTY", label, 0);
        line(fb, &snap.empty_cells.to_string(), value, 1);

        line(fb, "GAME", label, 0);
        line(fb, &(snap.episode_id as u64 + 1).to_string(), value, 1);

        line(fb, "SEED", label, 0);
        line(fb, &snap.seed.to_string(), value, 1);

        if snap.best_tile >= WIN_TILE {
            line(fb, "2048 reached!", label, 1);
        }

        line(fb, "arrows/hjkl/wasd", hint, 0);
        line(fb, "r restart", hint, 0);
        line(fb, "q quit", hint, 0);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, frame_w: u16, frame_h: u16) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str_centered(start_x, mid_y, frame_w, " GAME OVER ", style);
        fb.put_str_centered(start_x, mid_y.saturating_add(1), frame_w, " r: new game  q: quit ", style.dim());
    }
}
