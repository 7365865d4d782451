//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Grid row 0 is the floor and is drawn as the bottom edge of the frame, so
//! the play area shows rows `1..height` with the highest row on top.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceKind};

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

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Where the frame landed inside the viewport
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Frame size (border included) for a grid of the snapshot's dimensions.
    ///
    /// Saturates at `u16::MAX`; anything past the viewport is clipped.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let visible_rows = u32::from(snap.height.saturating_sub(1));
        let w = u32::from(snap.width) * u32::from(self.cell_w) + 2;
        let h = visible_rows * u32::from(self.cell_h) + 2;
        (clamp_u16(w), clamp_u16(h))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (w, h) = self.frame_size(snap);
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            w.saturating_sub(2),
            h.saturating_sub(2),
            ' ',
            CellStyle::new(WELL_BG, WELL_BG),
        );
        self.draw_border(fb, frame);

        // Only the top rows and left columns of an oversized grid can land
        // inside the viewport.
        let shown_rows = i32::from(fb.height() / self.cell_h) + 1;
        let shown_cols = i32::from(fb.width() / self.cell_w) + 1;
        let top = i32::from(snap.height);
        for row in (top - shown_rows).max(1)..top {
            for col in 0..i32::from(snap.width).min(shown_cols) {
                if snap.is_filled(row, col) {
                    self.draw_block(fb, snap, frame, row, col, Rgb::new(170, 170, 180), false);
                } else {
                    let dot = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
                    self.fill_cell(fb, snap, frame, row, col, '·', dot);
                }
            }
        }

        let active = snap.active;
        for cell in active.cells {
            if cell.row >= 1
                && cell.row < snap.height as i32
                && cell.col >= 0
                && cell.col < snap.width as i32
            {
                self.draw_block(fb, snap, frame, cell.row, cell.col, kind_color(active.kind), true);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.phase {
            Phase::Falling => {}
            Phase::Stopped => self.draw_overlay_text(fb, frame, "STOPPED"),
            Phase::GameOver => self.draw_overlay_text(fb, frame, "GAME OVER"),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let floor = style.bold();

        fb.put_char(x, y, '┌', style);
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', floor);
        fb.put_char(right, bottom, '┘', floor);
        // Edges past the viewport are dropped by the framebuffer anyway.
        for dx in 1..(w - 1).min(fb.width()) {
            fb.put_char(x.saturating_add(dx), y, '─', style);
            fb.put_char(x.saturating_add(dx), bottom, '━', floor);
        }
        for dy in 1..(h - 1).min(fb.height()) {
            fb.put_char(x, y.saturating_add(dy), '│', style);
            fb.put_char(right, y.saturating_add(dy), '│', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        frame: Frame,
        row: i32,
        col: i32,
        fg: Rgb,
        bold: bool,
    ) {
        let mut style = CellStyle::new(fg, WELL_BG);
        style.bold = bold;
        self.fill_cell(fb, snap, frame, row, col, '█', style);
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        frame: Frame,
        row: i32,
        col: i32,
        ch: char,
        style: CellStyle,
    ) {
        // Highest grid row goes to the top line of the frame.
        let from_top = (i32::from(snap.height) - 1 - row) as u32;
        let px = u32::from(frame.x) + 1 + col as u32 * u32::from(self.cell_w);
        let py = u32::from(frame.y) + 1 + from_top * u32::from(self.cell_h);
        if px >= u32::from(fb.width()) || py >= u32::from(fb.height()) {
            return;
        }
        fb.fill_rect(px as u16, py as u16, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = frame.y;
        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PIECE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.active.kind.as_str(), value);
        y = y.saturating_add(2);

        for line in ["s/f  move", "j/k  rotate", "d    drop", "q    quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn clamp_u16(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}
