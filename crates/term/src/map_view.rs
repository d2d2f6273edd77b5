//! MapView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::TileType;

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

const WALL: CellStyle = CellStyle::new(Rgb::new(150, 90, 50), Rgb::new(110, 60, 30));
const FLOOR: CellStyle = CellStyle::new(Rgb::new(20, 80, 20), Rgb::new(40, 130, 40));
const PLAYER: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(40, 130, 40)).bold();
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const HINT: CellStyle = CellStyle::new(Rgb::new(130, 130, 130), Rgb::new(0, 0, 0));

pub const WALL_GLYPH: char = '█';
pub const FLOOR_GLYPH: char = '·';
pub const PLAYER_GLYPH: char = '@';

/// A terminal renderer for the tile map and the player marker.
#[derive(Debug, Clone)]
pub struct MapView {
    /// Map cell width in terminal columns.
    cell_w: u16,
    /// Map cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for MapView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl MapView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Top-left terminal position of the map for this viewport.
    pub fn origin(&self, snap: &GameSnapshot<'_>, viewport: Viewport) -> (u16, u16) {
        let (map_w, map_h) = self.map_size(snap);
        let x = viewport.width.saturating_sub(map_w) / 2;
        let y = match self.anchor_y {
            // Leave one row below the map for the status line.
            AnchorY::Center => viewport.height.saturating_sub(map_h + 1) / 2,
            AnchorY::Top => 0,
        };
        (x, y)
    }

    fn map_size(&self, snap: &GameSnapshot<'_>) -> (u16, u16) {
        let cols = u16::try_from(snap.width()).unwrap_or(u16::MAX);
        let rows = u16::try_from(snap.height()).unwrap_or(u16::MAX);
        (
            cols.saturating_mul(self.cell_w),
            rows.saturating_mul(self.cell_h),
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is resized to the
    /// viewport first. Parts of the map outside the viewport are clipped.
    pub fn render_into(&self, snap: &GameSnapshot<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);
        let (start_x, start_y) = self.origin(snap, viewport);

        for ((x, y), tile) in snap.tiles() {
            let (ch, style) = match tile {
                TileType::Wall => (WALL_GLYPH, WALL),
                TileType::Floor => (FLOOR_GLYPH, FLOOR),
            };
            self.fill_cell(fb, start_x, start_y, x, y, ch, style);
        }

        if let Some((px, py)) = snap.player_cell() {
            self.fill_cell(fb, start_x, start_y, px, py, ' ', PLAYER);
            if let Some((cx, cy)) = self.cell_origin(start_x, start_y, px, py) {
                let mid_x = cx.saturating_add((self.cell_w - 1) / 2);
                let mid_y = cy.saturating_add((self.cell_h - 1) / 2);
                fb.put_char(mid_x, mid_y, PLAYER_GLYPH, PLAYER);
            }
        }

        let (_, map_h) = self.map_size(snap);
        self.draw_status(fb, snap, start_x, start_y.saturating_add(map_h));
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, x: usize, y: usize) -> Option<(u16, u16)> {
        let x = u16::try_from(x).ok()?.checked_mul(self.cell_w)?;
        let y = u16::try_from(y).ok()?.checked_mul(self.cell_h)?;
        Some((start_x.checked_add(x)?, start_y.checked_add(y)?))
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: usize,
        y: usize,
        ch: char,
        style: CellStyle,
    ) {
        if let Some((px, py)) = self.cell_origin(start_x, start_y, x, y) {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot<'_>, x: u16, y: u16) {
        if y >= fb.height() {
            return;
        }
        let mut cx = x;
        fb.put_str(cx, y, "POS ", LABEL);
        cx = cx.saturating_add(4);
        cx = cx.saturating_add(fb.put_i32(cx, y, snap.player.x, LABEL));
        fb.put_char(cx, y, ',', LABEL);
        cx = cx.saturating_add(1);
        cx = cx.saturating_add(fb.put_i32(cx, y, snap.player.y, LABEL));

        let hint = "arrows move, q quits";
        let hint_x = cx.saturating_add(2);
        if hint_x.saturating_add(hint.chars().count() as u16) <= fb.width() {
            fb.put_str(hint_x, y, hint, HINT);
        }
    }
}
