//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a header row with the title and score, a blank row,
//! the framed board, and a one-line key hint. Each tile is a filled block of
//! `cell_w - 1` by `cell_h - 1` characters with the value on its middle row;
//! the spare column and row are the gutter between tiles.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rect, Rgb};
use crate::help::{wrap_text, HelpPager};
use crate::types::Tile;

const HEADER_ROWS: u16 = 2;
const MIN_OVERLAY_W: u16 = 36;
const MIN_OVERLAY_H: u16 = 12;

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

const INTRO_TEXT: &str = "Join the numbers and get to the 2048 tile!\n\npress any key to start\n? shows the help";

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

/// Which overlay, if any, is drawn over the board.
#[derive(Debug, Clone, Copy)]
pub enum Overlay<'a> {
    None,
    Intro,
    Endgame,
    Help(&'a HelpPager),
}

/// Everything one frame needs.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub snapshot: &'a GameSnapshot,
    pub overlay: Overlay<'a>,
}

/// Where the board and its header land for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub header_y: u16,
    pub frame: Rect,
}

/// A lightweight terminal renderer for the 2048 board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Tile pitch in terminal columns (tile width plus gutter).
    cell_w: u16,
    /// Tile pitch in terminal rows (tile height plus gutter).
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 tiles: wide enough for five digits, roughly square on screen.
        Self {
            cell_w: 8,
            cell_h: 4,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            cell_h: cell_h.max(2),
        }
    }

    pub fn layout(&self, cols: usize, rows: usize, viewport: Viewport) -> BoardLayout {
        let span = |n: usize, pitch: u16| {
            u16::try_from(n)
                .unwrap_or(u16::MAX)
                .saturating_mul(pitch)
                .saturating_add(3)
        };
        let frame_w = span(cols, self.cell_w);
        let frame_h = span(rows, self.cell_h);
        let total_h = frame_h.saturating_add(HEADER_ROWS);

        let x = viewport.width.saturating_sub(frame_w) / 2;
        let header_y = viewport.height.saturating_sub(total_h) / 2;
        BoardLayout {
            header_y,
            frame: Rect::new(x, header_y + HEADER_ROWS, frame_w, frame_h),
        }
    }

    /// Box used by the intro and help overlays: the board frame, grown to a
    /// readable minimum and kept on screen.
    pub fn overlay_area(&self, cols: usize, rows: usize, viewport: Viewport) -> Rect {
        let frame = self.layout(cols, rows, viewport).frame;
        let w = frame.w.max(MIN_OVERLAY_W).min(viewport.width);
        let h = frame.h.max(MIN_OVERLAY_H).min(viewport.height);
        let cx = frame.x + frame.w / 2;
        let cy = frame.y + frame.h / 2;
        let x = cx.saturating_sub(w / 2).min(viewport.width - w);
        let y = cy.saturating_sub(h / 2).min(viewport.height - h);
        Rect::new(x, y, w, h)
    }

    /// Text area inside the help overlay; the last inner row is the footer.
    pub fn help_text_area(&self, cols: usize, rows: usize, viewport: Viewport) -> Rect {
        let inner = self.overlay_area(cols, rows, viewport).inset(1);
        Rect::new(
            inner.x.saturating_add(1),
            inner.y,
            inner.w.saturating_sub(2),
            inner.h.saturating_sub(1),
        )
    }

    /// Render a scene into an existing framebuffer.
    pub fn render_into(&self, scene: &Scene<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let snap = scene.snapshot;
        let layout = self.layout(snap.width, snap.height, viewport);
        let frame = layout.frame;

        self.draw_header(fb, snap, layout);

        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        fb.draw_box(frame, border);
        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w.saturating_sub(2),
            frame.h.saturating_sub(2),
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );

        for row in 0..snap.height {
            for col in 0..snap.width {
                match snap.tile(row, col) {
                    Some(value) => self.draw_tile(fb, frame, row, col, value),
                    None => self.draw_empty(fb, frame, row, col),
                }
            }
        }

        let hint = "arrows move   r restart   ? help   esc quit";
        let hint_y = frame.y.saturating_add(frame.h);
        if hint_y < viewport.height {
            let style = CellStyle::new(Rgb::new(150, 150, 150), SCREEN_BG).dim();
            fb.put_str_centered(0, hint_y, viewport.width, hint, style);
        }

        match scene.overlay {
            Overlay::None => {}
            Overlay::Intro => {
                let area = self.overlay_area(snap.width, snap.height, viewport);
                self.draw_message_box(fb, area, "2048", INTRO_TEXT);
            }
            Overlay::Endgame => {
                let area = self.endgame_area(frame, viewport);
                let best = snap.highest_tile().unwrap_or(0);
                let body = format!(
                    "No moves left.\nscore {}   best tile {}\n\nr restart   esc quit",
                    snap.score, best
                );
                self.draw_message_box(fb, area, "GAME OVER", &body);
            }
            Overlay::Help(pager) => self.draw_help(fb, snap, pager, viewport),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(scene, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: BoardLayout) {
        let frame = layout.frame;
        let title = CellStyle::new(Rgb::new(237, 194, 46), SCREEN_BG).bold();
        fb.put_str(frame.x, layout.header_y, "2048", title);

        let score = format!("SCORE {}", snap.score);
        let len = score.chars().count() as u16;
        let right = frame.x.saturating_add(frame.w);
        let x = right.saturating_sub(len).max(frame.x.saturating_add(5));
        fb.put_str(x, layout.header_y, &score, CellStyle::default().bold());
    }

    /// Screen rect of tile `(row, col)`, or `None` once it starts past the
    /// edge of the coordinate space.
    fn tile_rect(&self, frame: Rect, row: usize, col: usize) -> Option<Rect> {
        let offset = |index: usize, pitch: u16| {
            u16::try_from(index)
                .ok()
                .and_then(|i| i.checked_mul(pitch))
                .and_then(|d| d.checked_add(2))
        };
        let x = frame.x.checked_add(offset(col, self.cell_w)?)?;
        let y = frame.y.checked_add(offset(row, self.cell_h)?)?;
        x.checked_add(self.cell_w)?;
        y.checked_add(self.cell_h)?;
        Some(Rect::new(x, y, self.cell_w - 1, self.cell_h - 1))
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, frame: Rect, row: usize, col: usize, value: Tile) {
        let Some(rect) = self.tile_rect(frame, row, col) else {
            return;
        };
        let (bg, fg) = tile_colors(value);
        let style = CellStyle::new(fg, bg).bold();
        fb.fill_rect(rect.x, rect.y, rect.w, rect.h, ' ', style);
        let label = tile_label(value, rect.w as usize);
        fb.put_str_centered(rect.x, rect.y + (rect.h - 1) / 2, rect.w, &label, style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, frame: Rect, row: usize, col: usize) {
        let Some(rect) = self.tile_rect(frame, row, col) else {
            return;
        };
        let bg = Rgb::new(205, 193, 180);
        let style = CellStyle::new(Rgb::new(170, 160, 150), bg).dim();
        fb.fill_rect(rect.x, rect.y, rect.w, rect.h, ' ', style);
        fb.put_char(rect.x + rect.w / 2, rect.y + (rect.h - 1) / 2, '·', style);
    }

    fn endgame_area(&self, frame: Rect, viewport: Viewport) -> Rect {
        let w = frame.w.saturating_sub(4).max(24).min(viewport.width);
        let h = 7u16.min(viewport.height);
        let x = (frame.x + frame.w / 2).saturating_sub(w / 2).min(viewport.width - w);
        let y = (frame.y + frame.h / 2).saturating_sub(h / 2).min(viewport.height - h);
        Rect::new(x, y, w, h)
    }

    fn draw_message_box(&self, fb: &mut FrameBuffer, area: Rect, title: &str, body: &str) {
        let style = CellStyle::new(LIGHT_TEXT, Rgb::new(40, 40, 48));
        fb.draw_box(area, style);
        self.draw_box_title(fb, area, title, style);

        let inner = area.inset(1);
        let lines = wrap_text(body, inner.w.saturating_sub(2) as usize);
        let top = inner.y + inner.h.saturating_sub(lines.len() as u16) / 2;
        for (i, line) in lines.iter().take(inner.h as usize).enumerate() {
            fb.put_str_centered(inner.x, top + i as u16, inner.w, line, style);
        }
    }

    fn draw_box_title(&self, fb: &mut FrameBuffer, area: Rect, title: &str, style: CellStyle) {
        let label = format!(" {title} ");
        fb.put_str_centered(area.x, area.y, area.w, &label, style.bold());
    }

    fn draw_help(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, pager: &HelpPager, viewport: Viewport) {
        let area = self.overlay_area(snap.width, snap.height, viewport);
        let style = CellStyle::new(LIGHT_TEXT, Rgb::new(30, 36, 48));
        fb.draw_box(area, style);
        self.draw_box_title(fb, area, "Help", style);

        let text = self.help_text_area(snap.width, snap.height, viewport);
        for (i, line) in pager.visible_lines().iter().take(text.h as usize).enumerate() {
            fb.put_str(text.x, text.y + i as u16, line, style);
        }

        let (page, pages) = pager.page_info();
        let footer = if pages > 1 {
            format!("page {page}/{pages}  PgUp/PgDn  ? close")
        } else {
            "? close".to_string()
        };
        let footer_y = text.y + text.h;
        fb.put_str_centered(text.x, footer_y, text.w, &footer, style.dim());
    }
}

/// Text for a tile `width` columns wide: the value if it fits, else `2^n`.
pub fn tile_label(value: Tile, width: usize) -> String {
    let digits = value.to_string();
    if digits.len() <= width {
        return digits;
    }
    let exp = format!("2^{}", value.trailing_zeros());
    if exp.len() <= width {
        exp
    } else {
        digits
    }
}

/// `(background, foreground)` for a tile value.
pub fn tile_colors(value: Tile) -> (Rgb, Rgb) {
    const PALETTE: [Rgb; 11] = [
        Rgb::new(238, 228, 218), // 2
        Rgb::new(237, 224, 200), // 4
        Rgb::new(242, 177, 121), // 8
        Rgb::new(245, 149, 99),  // 16
        Rgb::new(246, 124, 95),  // 32
        Rgb::new(246, 94, 59),   // 64
        Rgb::new(237, 207, 114), // 128
        Rgb::new(237, 204, 97),  // 256
        Rgb::new(237, 200, 80),  // 512
        Rgb::new(237, 197, 63),  // 1024
        Rgb::new(237, 194, 46),  // 2048
    ];

    let exp = value.trailing_zeros() as usize;
    let bg = match exp.checked_sub(1).and_then(|i| PALETTE.get(i)) {
        Some(&bg) => bg,
        None => Rgb::new(60, 58, 50),
    };
    let fg = if value <= 4 { DARK_TEXT } else { LIGHT_TEXT };
    (bg, fg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_fit_tiles() {
        assert_eq!(tile_label(2048, 7), "2048");
        assert_eq!(tile_label(131072, 5), "2^17");
        assert_eq!(tile_label(131072, 3), "131072");
    }

    #[test]
    fn colors_follow_value() {
        assert_eq!(tile_colors(2).1, DARK_TEXT);
        assert_eq!(tile_colors(8).1, LIGHT_TEXT);
        assert_ne!(tile_colors(2).0, tile_colors(4).0);
        assert_eq!(tile_colors(1 << 20).0, Rgb::new(60, 58, 50));
    }

    #[test]
    fn layout_centers_frame_under_header() {
        let view = GameView::default();
        let layout = view.layout(4, 4, Viewport::new(80, 24));
        assert_eq!(layout.frame.w, 35);
        assert_eq!(layout.frame.h, 19);
        assert_eq!(layout.frame.x, (80 - 35) / 2);
        assert_eq!(layout.frame.y, layout.header_y + HEADER_ROWS);
    }

    #[test]
    fn oversized_board_renders_without_overflow() {
        let snap = GameSnapshot {
            width: 9000,
            height: 2,
            empty: 0,
            cells: vec![2; 18_000],
            score: 0,
            phase: crate::types::GamePhase::Active,
        };
        let vp = Viewport::new(80, 24);
        let scene = Scene {
            snapshot: &snap,
            overlay: Overlay::Endgame,
        };
        let fb = GameView::default().render(&scene, vp);
        assert_eq!((fb.width(), fb.height()), (80, 24));

        let view = GameView::default();
        let frame = view.layout(9000, 2, vp).frame;
        assert_eq!(frame.w, u16::MAX);
        assert!(view.tile_rect(frame, 0, 8000).is_some());
        assert!(view.tile_rect(frame, 0, 8999).is_none());
    }

    #[test]
    fn overlay_stays_inside_small_viewport() {
        let view = GameView::default();
        let vp = Viewport::new(30, 10);
        let area = view.overlay_area(4, 4, vp);
        assert!(area.x + area.w <= vp.width);
        assert!(area.y + area.h <= vp.height);
    }
}
