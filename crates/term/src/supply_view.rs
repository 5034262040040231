//! SupplyView: maps a [`SupplySnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SupplySnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::text::{self, MENU_TITLE};
use crate::types::{Piece, PieceKind, SupplyAction};

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

/// Narrowest piece slot; fits `[I 123]` plus a gap.
const SLOT_W: u16 = 8;

const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal renderer for the piece supply.
pub struct SupplyView {
    anchor_y: AnchorY,
    show_menu: bool,
}

impl Default for SupplyView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
            show_menu: true,
        }
    }
}

impl SupplyView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_menu(mut self, show_menu: bool) -> Self {
        self.show_menu = show_menu;
        self
    }

    /// Frame width needed for a queue of `queue_capacity` slots.
    fn frame_width(&self, snap: &SupplySnapshot) -> u16 {
        let queue_w = 4 + (snap.queue_capacity as u16) * slot_width(snap);
        let menu_w = SupplyAction::ALL
            .iter()
            .map(|a| a.label().chars().count() as u16 + 8)
            .max()
            .unwrap_or(0);
        queue_w.max(menu_w).max(MENU_TITLE.chars().count() as u16 + 6)
    }

    fn frame_height(&self, snap: &SupplySnapshot) -> u16 {
        // borders, queue block (label, slots, marker, gap), reserve label + rows, gap, status
        let mut h = 2 + 4 + 1 + snap.reserve_capacity as u16 + 1 + 1;
        if self.show_menu {
            h += SupplyAction::ALL.len() as u16 + 1;
        }
        h
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(
        &self,
        snap: &SupplySnapshot,
        status: &str,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame_w = self.frame_width(snap);
        let frame_h = self.frame_height(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::fg(Rgb::new(200, 200, 200));
        let label = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));
        let dim = value.dim();

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);
        let title_x = start_x + frame_w.saturating_sub(MENU_TITLE.chars().count() as u16) / 2;
        fb.put_str(title_x, start_y, MENU_TITLE, label);

        let x = start_x + 2;
        let mut y = start_y + 1;
        let slot_w = slot_width(snap);

        // Queue, head first.
        let end = fb.put_str(x, y, "UPCOMING ", label);
        self.draw_counter(fb, end, y, snap.upcoming.len(), snap.queue_capacity, value);
        y += 1;
        for i in 0..snap.queue_capacity {
            let sx = x + (i as u16) * slot_w;
            match snap.upcoming.get(i) {
                Some(piece) => self.draw_piece(fb, sx, y, *piece),
                None => {
                    fb.put_str(sx, y, "[ -- ]", dim);
                }
            }
        }
        y += 1;
        if !snap.upcoming.is_empty() {
            fb.put_str(x, y, "^ next", dim);
        }
        y += 2;

        // Reserve, top first.
        let end = fb.put_str(x, y, "RESERVE ", label);
        self.draw_counter(fb, end, y, snap.reserved.len(), snap.reserve_capacity, value);
        y += 1;
        for i in 0..snap.reserve_capacity {
            match snap.reserved.get(i) {
                Some(piece) => {
                    self.draw_piece(fb, x, y, *piece);
                    if i == 0 {
                        fb.put_str(x + slot_w, y, "< top", dim);
                    }
                }
                None => {
                    fb.put_str(x, y, "[ -- ]", dim);
                }
            }
            y += 1;
        }
        y += 1;

        if self.show_menu {
            for line in text::menu_lines() {
                fb.put_str(x, y, &line, value);
                y += 1;
            }
            y += 1;
        }

        // Status line, clipped to the frame.
        let max_status = frame_w.saturating_sub(4) as usize;
        let clipped: String = status.chars().take(max_status).collect();
        fb.put_str(x, y, &clipped, label);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SupplySnapshot, status: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
        fb
    }

    fn draw_counter(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        len: usize,
        cap: usize,
        style: CellStyle,
    ) {
        let x = fb.put_u32(x, y, len as u32, style);
        let x = fb.put_str(x, y, "/", style);
        fb.put_u32(x, y, cap as u32, style);
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: Piece) {
        let style = CellStyle {
            fg: piece_color(piece.kind),
            bg: PANEL_BG,
            bold: true,
            dim: false,
        };
        fb.put_char(x, y, '[', style);
        fb.put_char(x + 1, y, piece.kind.letter(), style);
        let end = fb.put_u32(x + 3, y, piece.id, style);
        fb.put_char(end, y, ']', style);
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
}

/// Columns taken by a piece label, e.g. 6 for `[I 12]`.
fn label_width(piece: Piece) -> u16 {
    let digits = piece.id.checked_ilog10().map_or(1, |d| d + 1);
    4 + digits as u16
}

/// Slot width shared by every piece in the snapshot, so long ids never overlap.
fn slot_width(snap: &SupplySnapshot) -> u16 {
    snap.upcoming
        .iter()
        .chain(snap.reserved.iter())
        .map(|p| label_width(*p) + 1)
        .fold(SLOT_W, u16::max)
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}
