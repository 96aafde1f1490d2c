//! GameView: maps engine state into a terminal framebuffer.
//!
//! This module is pure (no I/O) and composes the two halves of the picture
//! the engine deliberately keeps apart: the settled grid and the active
//! piece.

use crate::core::GameEngine;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PieceColor;

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

/// A lightweight terminal view of the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the engine state into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is resized to the
    /// viewport and fully repainted.
    pub fn render_into(&self, engine: &GameEngine, paused: bool, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board = engine.board();
        let board_px_w = board.width() * self.cell_w;
        let board_px_h = board.height() * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let well = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(20, 20, 28),
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', well);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells.
        for y in 0..board.height() {
            for x in 0..board.width() {
                if let Some(Some(kind)) = board.get(x as i16, y as i16) {
                    self.fill_cell(fb, start_x, start_y, x, y, color_rgb(kind.color()));
                }
            }
        }

        // Active piece overlay.
        if let Some(active) = engine.active() {
            let rgb = color_rgb(active.color());
            for (dx, dy) in active.shape.offsets() {
                let x = active.x + dx;
                let y = active.y + dy;
                if x >= 0 && y >= 0 {
                    self.fill_cell(fb, start_x, start_y, x as u16, y as u16, rgb);
                }
            }
        }

        // Status line under the well, banner over it.
        let hint_y = start_y + frame_h;
        fb.put_str(start_x, hint_y, "arrows/wasd move - p pause - q quit", border);

        if engine.is_over() {
            self.banner(fb, start_x, start_y, frame_w, frame_h, " GAME OVER - r restarts ");
        } else if paused {
            self.banner(fb, start_x, start_y, frame_w, frame_h, " PAUSED ");
        }
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16, rgb: Rgb) {
        let style = CellStyle {
            fg: Rgb::new(0, 0, 0),
            bg: rgb,
        };
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }

    fn banner(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(160, 30, 30),
        };
        let tx = x + w.saturating_sub(text.len() as u16) / 2;
        let ty = y + h / 2;
        fb.put_str(tx, ty, text, style);
    }
}

fn color_rgb(color: PieceColor) -> Rgb {
    match color {
        PieceColor::Orange => Rgb::new(255, 160, 40),
        PieceColor::Blue => Rgb::new(60, 100, 255),
        PieceColor::Red => Rgb::new(230, 50, 50),
        PieceColor::Green => Rgb::new(60, 200, 80),
        PieceColor::Purple => Rgb::new(170, 70, 220),
        PieceColor::Yellow => Rgb::new(240, 220, 40),
        PieceColor::Cyan => Rgb::new(60, 220, 230),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameEngine, SequencePicker};
    use crate::types::PieceKind;

    fn view_of(engine: &GameEngine) -> FrameBuffer {
        let mut fb = FrameBuffer::new(60, 30);
        GameView::default().render_into(engine, false, Viewport::new(60, 30), &mut fb);
        fb
    }

    #[test]
    fn active_piece_is_painted_in_its_color() {
        let engine = GameEngine::new(Box::new(SequencePicker::new([PieceKind::O])));
        let fb = view_of(&engine);

        // Default view: frame is 22x22 centered in 60x30, so the well's
        // top-left inner cell sits at (20, 5). O spawns at board (4, 0).
        let px = 19 + 1 + 4 * 2;
        let py = 4 + 1;
        let cell = fb.get(px, py).unwrap();
        assert_eq!(cell.style.bg, color_rgb(PieceColor::Yellow));
    }

    #[test]
    fn over_banner_is_shown() {
        let mut engine = GameEngine::new(Box::new(SequencePicker::new([PieceKind::I])));
        // Stack vertical bars in the spawn column until spawn fails.
        while !engine.is_over() {
            engine.tick();
        }
        let fb = view_of(&engine);
        let text: String = (0..fb.width())
            .filter_map(|x| fb.get(x, fb.height() / 2).map(|c| c.ch))
            .collect();
        assert!(text.contains("GAME OVER"), "banner missing in: {text:?}");
    }
}
