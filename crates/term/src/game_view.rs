//! GameView: paints a [`GameSnapshot`] into a framebuffer.
//!
//! Pure (no I/O), so every layout rule here is unit-testable.

use crate::core::{shapes, GameSnapshot, PieceSnapshot};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Cell, EMPTY, SHAPE_BOX};

/// Terminal size in columns and rows.
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

const BOARD_BG: Rgb = Rgb::new(31, 25, 76);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const LOSE: Rgb = Rgb::new(255, 0, 0);

/// Columns reserved right of the board for score, level and the preview
const PANEL_WIDTH: u16 = 12;
const PANEL_GAP: u16 = 2;

pub struct GameView {
    /// Terminal columns per grid cell
    cell_w: u16,
    /// Terminal rows per grid cell
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square in most fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into a reusable framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::new(SCREEN_BG, SCREEN_BG));

        let board_w = to_u16(snap.cols).saturating_mul(self.cell_w);
        let board_h = to_u16(snap.rows).saturating_mul(self.cell_h);
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);

        let total_w = frame_w + PANEL_GAP + PANEL_WIDTH;
        let origin_x = viewport.width.saturating_sub(total_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        fb.fill_rect(
            origin_x + 1,
            origin_y + 1,
            board_w,
            board_h,
            ' ',
            Style::new(BOARD_BG, BOARD_BG),
        );
        draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        let board = Board {
            view: self,
            left: origin_x + 1,
            top: origin_y + 1,
        };

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                match snap.cell(row, col) {
                    Some(EMPTY) | None => board.draw_empty(fb, row, col),
                    Some(color) => board.draw_block(fb, row, col, color),
                }
            }
        }

        // Cells still above row 0 are not drawn.
        for (row, col) in snap.active.to_piece().blocks() {
            if row < 0 || col < 0 {
                continue;
            }
            let (row, col) = (row as usize, col as usize);
            if row < snap.rows && col < snap.cols {
                board.draw_block(fb, row, col, snap.active.color);
            }
        }

        self.draw_panel(fb, snap, origin_x + frame_w + PANEL_GAP, origin_y);

        if snap.ended() {
            draw_game_over(fb, origin_x, origin_y, frame_w, frame_h);
        }
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        if x >= fb.width() {
            return;
        }
        let label = Style::default().bold();
        let value = Style::default();

        fb.put_str(x, y, "SCORE", label);
        fb.put_u32(x, y + 1, snap.score, value);
        fb.put_str(x, y + 3, "LEVEL", label);
        fb.put_u32(x, y + 4, snap.level, value);
        fb.put_str(x, y + 6, "NEXT", label);
        draw_preview(fb, &snap.next, x, y + 7);
    }
}

struct Board<'a> {
    view: &'a GameView,
    left: u16,
    top: u16,
}

impl Board<'_> {
    fn cell_rect(&self, fb: &mut FrameBuffer, row: usize, col: usize, ch: char, style: Style) {
        let x = self.left.saturating_add(to_u16(col).saturating_mul(self.view.cell_w));
        let y = self.top.saturating_add(to_u16(row).saturating_mul(self.view.cell_h));
        fb.fill_rect(x, y, self.view.cell_w, self.view.cell_h, ch, style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, row: usize, col: usize) {
        let style = Style::new(Rgb::new(90, 85, 130), BOARD_BG).dim();
        self.cell_rect(fb, row, col, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, row: usize, col: usize, color: Cell) {
        let (ch, style) = block_glyph(color);
        self.cell_rect(fb, row, col, ch, style);
    }
}

/// Glyph for an occupied cell.
///
/// Colors outside 1..=4 get a plain placeholder instead of failing.
fn block_glyph(color: Cell) -> (char, Style) {
    let fg = match color {
        1 => Rgb::new(80, 220, 220),
        2 => Rgb::new(240, 200, 70),
        3 => Rgb::new(220, 90, 90),
        4 => Rgb::new(110, 220, 120),
        _ => return ('▒', Style::new(Rgb::new(160, 160, 160), BOARD_BG)),
    };
    ('█', Style::new(fg, BOARD_BG).bold())
}

fn draw_preview(fb: &mut FrameBuffer, next: &PieceSnapshot, x: u16, y: u16) {
    let piece = next.to_piece();
    let (ch, style) = block_glyph(piece.color);
    let empty = Style::default();
    for i in 0..SHAPE_BOX {
        for j in 0..SHAPE_BOX {
            let px = x + (j as u16) * 2;
            let py = y + i as u16;
            fb.fill_rect(px, py, 2, 1, ' ', empty);
        }
    }
    for &idx in piece.image() {
        let (i, j) = shapes::cell_offset(idx);
        fb.fill_rect(x + (j as u16) * 2, y + i as u16, 2, 1, ch, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);
    let (right, bottom) = (x + w - 1, y + h - 1);

    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for dx in x + 1..right {
        fb.put_char(dx, y, '─', style);
        fb.put_char(dx, bottom, '─', style);
    }
    for dy in y + 1..bottom {
        fb.put_char(x, dy, '│', style);
        fb.put_char(right, dy, '│', style);
    }
}

fn draw_game_over(fb: &mut FrameBuffer, x: u16, y: u16, frame_w: u16, frame_h: u16) {
    let mid = y.saturating_add(frame_h / 2);
    let lines = [
        ("GAME OVER", Style::new(Rgb::new(255, 255, 255), SCREEN_BG).bold()),
        ("r: restart", Style::new(LOSE, SCREEN_BG)),
        ("q: quit", Style::new(LOSE, SCREEN_BG)),
    ];
    for (i, (text, style)) in lines.iter().enumerate() {
        let w = text.chars().count() as u16;
        let tx = x.saturating_add(frame_w.saturating_sub(w) / 2);
        let ty = (mid + i as u16).saturating_sub(1);
        fb.put_str(tx, ty, text, *style);
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
