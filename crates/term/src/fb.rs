//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Axis-aligned rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Shrink by `margin` on every side.
    pub fn inset(&self, margin: u16) -> Rect {
        Rect {
            x: self.x.saturating_add(margin),
            y: self.y.saturating_add(margin),
            w: self.w.saturating_sub(margin * 2),
            h: self.h.saturating_sub(margin * 2),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `s` starting at `(x, y)`, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Write `s` centered within `[x, x + w)`, truncated to fit.
    pub fn put_str_centered(&mut self, x: u16, y: u16, w: u16, s: &str, style: CellStyle) {
        let len = s.chars().count().min(w as usize) as u16;
        let start = x.saturating_add((w - len) / 2);
        for (i, ch) in s.chars().take(len as usize).enumerate() {
            self.put_char(start.saturating_add(i as u16), y, ch, style);
        }
    }

    /// Fill a rectangle, clipped to the buffer.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for cy in y..y_end {
            for cx in x..x_end {
                self.put_char(cx, cy, ch, style);
            }
        }
    }

    /// Draw a single-line box around `rect`, clearing its interior.
    ///
    /// Parts that fall past `u16::MAX` are clipped like any other off-screen cell.
    pub fn draw_box(&mut self, rect: Rect, style: CellStyle) {
        let Rect { x, y, w, h } = rect;
        if w < 2 || h < 2 {
            return;
        }
        self.fill_rect(x.saturating_add(1), y.saturating_add(1), w - 2, h - 2, ' ', style);

        let right = x.checked_add(w - 1);
        let bottom = y.checked_add(h - 1);

        self.put_char(x, y, '┌', style);
        if let Some(right) = right {
            self.put_char(right, y, '┐', style);
        }
        if let Some(bottom) = bottom {
            self.put_char(x, bottom, '└', style);
        }
        if let (Some(right), Some(bottom)) = (right, bottom) {
            self.put_char(right, bottom, '┘', style);
        }

        for cx in (1..w - 1).map_while(|dx| x.checked_add(dx)) {
            self.put_char(cx, y, '─', style);
            if let Some(bottom) = bottom {
                self.put_char(cx, bottom, '─', style);
            }
        }
        for cy in (1..h - 1).map_while(|dy| y.checked_add(dy)) {
            self.put_char(x, cy, '│', style);
            if let Some(right) = right {
                self.put_char(right, cy, '│', style);
            }
        }
    }

    /// Row `y` as a string, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "abc", CellStyle::default());
        assert_eq!(fb.row_text(0), "  ab");
    }

    #[test]
    fn centered_text_truncates_to_width() {
        let mut fb = FrameBuffer::new(7, 2);
        fb.put_str_centered(0, 0, 7, "2048", CellStyle::default());
        assert_eq!(fb.row_text(0), " 2048  ");
        fb.put_str_centered(1, 1, 3, "16384", CellStyle::default());
        assert_eq!(fb.row_text(1), " 163   ");
    }

    #[test]
    fn box_has_corners_and_clear_interior() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.fill_rect(0, 0, 4, 3, 'x', CellStyle::default());
        fb.draw_box(Rect::new(0, 0, 4, 3), CellStyle::default());
        assert_eq!(fb.row_text(0), "┌──┐");
        assert_eq!(fb.row_text(1), "│  │");
        assert_eq!(fb.row_text(2), "└──┘");
    }

    #[test]
    fn box_past_coordinate_limit_is_clipped() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.draw_box(Rect::new(0, 2, u16::MAX, u16::MAX), CellStyle::default());
        assert_eq!(fb.row_text(2), "┌───");
    }

    #[test]
    fn resize_keeps_dimensions_consistent() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(5, 3);
        assert_eq!(fb.cells().len(), 15);
        assert_eq!(fb.get(4, 2), Some(Cell::default()));
        assert_eq!(fb.get(5, 0), None);
    }

    #[test]
    fn inset_shrinks_all_sides() {
        assert_eq!(Rect::new(2, 3, 10, 6).inset(1), Rect::new(3, 4, 8, 4));
        assert_eq!(Rect::new(0, 0, 1, 1).inset(1).w, 0);
    }
}
