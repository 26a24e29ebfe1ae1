//! GameView: maps a core snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CardView, GameSnapshot, Phase};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::hud::hud_lines;
use crate::types::{CardColor, CellGeometry, GRID_COLS, GRID_ROWS};

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

const TABLE: Rgb = Rgb::new(30, 60, 45);
const CARD_FACE: Rgb = Rgb::new(185, 183, 167);
const CARD_BACK: Rgb = Rgb::new(124, 144, 160);
const SELECTED: Rgb = Rgb::new(235, 215, 130);
const MISMATCH: Rgb = Rgb::new(225, 160, 150);
const RED_INK: Rgb = Rgb::new(180, 20, 30);
const BLACK_INK: Rgb = Rgb::new(15, 15, 15);

/// Lines drawn under the board frame: a gap, three HUD lines, a help line.
const HUD_HEIGHT: u16 = 5;

const HELP: &str = "click/space flip  arrows move  r reset  q quit";

/// Terminal renderer for the card grid and HUD.
pub struct GameView {
    /// Card slot width in terminal columns (the last column is a gap).
    card_w: u16,
    /// Card slot height in terminal rows (the last row is a gap).
    card_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 5x3 slots leave room for "10♥" plus a gap.
        Self { card_w: 5, card_h: 3 }
    }
}

impl GameView {
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self {
            card_w: card_w.max(2),
            card_h: card_h.max(2),
        }
    }

    fn frame_size(&self) -> (u16, u16) {
        let w = (GRID_COLS as u16) * self.card_w + 3;
        let h = (GRID_ROWS as u16) * self.card_h + 2;
        (w, h)
    }

    fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = viewport.height.saturating_sub(frame_h + HUD_HEIGHT) / 2;
        (x, y)
    }

    /// Where the cards land for this viewport.
    ///
    /// Input mapping must use the same geometry as the frame it is applied to.
    pub fn geometry(&self, viewport: Viewport) -> CellGeometry {
        let (x, y) = self.frame_origin(viewport);
        CellGeometry::new(x + 2, y + 1, self.card_w, self.card_h)
    }

    /// Render into an existing framebuffer, reusing its allocation.
    ///
    /// `cursor` highlights the keyboard cursor cell, if any.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<(u8, u8)>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (start_x, start_y) = self.frame_origin(viewport);
        let (frame_w, frame_h) = self.frame_size();
        let geometry = self.geometry(viewport);

        let table = CellStyle::new(Rgb::new(200, 200, 200), TABLE);
        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', table);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, table);

        let pending = snap.phase == Phase::PendingFlipBack || snap.flip_back_delay > 0;
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let (x, y) = geometry.cell_origin(row, col);
                self.draw_card(fb, x, y, &snap.cards[row as usize][col as usize], pending);
                if cursor == Some((row, col)) {
                    self.draw_cursor(fb, x, y);
                }
            }
        }

        let hud_y = start_y + frame_h + 1;
        let label = CellStyle::default().bold();
        for (i, line) in hud_lines(snap).iter().enumerate() {
            self.put_centered(fb, start_x, frame_w, hud_y + i as u16, line, label);
        }
        let help = CellStyle::default().dim();
        self.put_centered(fb, start_x, frame_w, hud_y + 3, HELP, help);

        if snap.complete {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "COMPLETE");
        } else if snap.phase == Phase::Exhausted && !pending {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "OUT OF STEPS");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Option<(u8, u8)>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_card(&self, fb: &mut FrameBuffer, x: u16, y: u16, card: &CardView, pending: bool) {
        let face_w = self.card_w - 1;
        let face_h = self.card_h - 1;

        if !card.face_up {
            let back = CellStyle::new(CARD_BACK, CARD_FACE);
            fb.fill_rect(x, y, face_w, face_h, '▒', back);
            return;
        }

        let bg = match (card.selected, pending) {
            (true, true) => MISMATCH,
            (true, false) => SELECTED,
            (false, _) => CARD_FACE,
        };
        let ink = match card.suit.color() {
            CardColor::Red => RED_INK,
            CardColor::Black => BLACK_INK,
        };
        let style = CellStyle::new(ink, bg).bold();

        fb.fill_rect(x, y, face_w, face_h, ' ', style);
        let end = fb.put_str(x, y, card.rank.symbol(), style);
        fb.put_char(end, y, card.suit.symbol(), style);
        if face_h > 1 {
            fb.put_char(x + face_w - 1, y + face_h - 1, card.suit.symbol(), style);
        }
    }

    /// Underline the card in its gap row.
    fn draw_cursor(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), TABLE).bold();
        fb.fill_rect(x, y + self.card_h - 1, self.card_w - 1, 1, '▔', style);
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        frame_w: u16,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let padded = format!("  {}  ", text);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        self.put_centered(fb, start_x, frame_w, mid_y, &padded, style);
    }
}
