//! Help text and a small pager for it.
//!
//! The text is word-wrapped to whatever width the overlay gets, then shown one
//! page at a time. Layout is recomputed whenever the overlay size changes.

pub const HELP_TEXT: &str = "\
2048

Slide the tiles with the arrow keys (or hjkl / wasd). Every tile moves as far as it can in that direction.

When two tiles with the same number collide they merge into one tile worth their sum, and that value is added to your score. A tile that was just created by a merge will not merge again in the same move.

After every move that changes the board a new tile, a 2 or a 4, appears on a random free cell.

Reach 2048 to win, then keep going. The game is over when the board is full and no two neighbouring tiles match.

Keys:
  arrows  move
  r       restart
  ?       open or close this help
  PgUp    previous help page
  PgDn    next help page
  Esc, q  quit";

#[derive(Debug, Clone)]
pub struct HelpPager {
    text: &'static str,
    lines: Vec<String>,
    wrap_width: u16,
    page_height: u16,
    offset: usize,
    open: bool,
}

impl Default for HelpPager {
    fn default() -> Self {
        Self::new(HELP_TEXT)
    }
}

impl HelpPager {
    pub fn new(text: &'static str) -> Self {
        Self {
            text,
            lines: Vec::new(),
            wrap_width: 0,
            page_height: 0,
            offset: 0,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open at the first page.
    pub fn open(&mut self) {
        self.open = true;
        self.offset = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Fit the text to a `width x height` text area.
    pub fn layout(&mut self, width: u16, height: u16) {
        if width != self.wrap_width {
            self.lines = wrap_text(self.text, width as usize);
            self.wrap_width = width;
        }
        self.page_height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.page_height as usize)
    }

    /// Scroll by `delta` lines; negative scrolls back.
    pub fn scroll(&mut self, delta: isize) {
        let target = self.offset as isize + delta;
        self.offset = target.clamp(0, self.max_offset() as isize) as usize;
    }

    pub fn page_down(&mut self) {
        self.scroll(self.page_height.max(1) as isize);
    }

    pub fn page_up(&mut self) {
        self.scroll(-(self.page_height.max(1) as isize));
    }

    /// Lines on the current page.
    pub fn visible_lines(&self) -> &[String] {
        let end = (self.offset + self.page_height as usize).min(self.lines.len());
        &self.lines[self.offset.min(end)..end]
    }

    /// `(current page, total pages)`, both 1-based.
    pub fn page_info(&self) -> (usize, usize) {
        let page = self.page_height.max(1) as usize;
        let total = self.lines.len().div_ceil(page).max(1);
        let current = (self.offset.div_ceil(page) + 1).min(total);
        (current, total)
    }

    pub fn has_more(&self) -> bool {
        self.offset < self.max_offset()
    }
}

/// Word-wrap `text` to `width` columns.
///
/// Blank lines are kept, leading indentation is kept on the first line of a
/// paragraph, and words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    if width == 0 {
        return out;
    }

    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            out.push(String::new());
            continue;
        }

        let indent_len = paragraph.len() - paragraph.trim_start().len();
        let mut line = paragraph[..indent_len.min(width.saturating_sub(1))].to_string();
        let base_len = line.chars().count();

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            loop {
                let used = line.chars().count();
                let sep = usize::from(used > base_len);
                if used + sep + word.len() <= width {
                    if sep == 1 {
                        line.push(' ');
                    }
                    line.extend(word.iter());
                    break;
                }
                if used > base_len {
                    out.push(std::mem::take(&mut line));
                    continue;
                }
                // Word alone is wider than the line: hard split.
                let room = width - used;
                line.extend(word.drain(..room));
                out.push(std::mem::take(&mut line));
            }
        }
        if !line.is_empty() {
            out.push(line);
        }
    }

    out
}
