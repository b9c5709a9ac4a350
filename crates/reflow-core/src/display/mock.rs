use crate::config::Geometry;

use super::Display;

/// Columns tracked per row. Wider than the panel so clipped text stays visible.
pub const GRID_COLUMNS: usize = 32;
pub const GRID_ROWS: usize = 16;

type Grid = [[u8; GRID_COLUMNS]; GRID_ROWS];

const BLANK_GRID: Grid = [[b' '; GRID_COLUMNS]; GRID_ROWS];

/// Character-grid display used in tests and host bring-up.
///
/// Drawing lands in a back grid; `flush` copies it to the panel grid that
/// [`TextGridDisplay::row`] reads.
#[derive(Clone, Debug)]
pub struct TextGridDisplay {
    geometry: Geometry,
    frame: Grid,
    panel: Grid,
    column: usize,
    row: usize,
    text_size: u8,
    contrast: Option<u8>,
    begun: bool,
    flush_count: u32,
}

impl Default for TextGridDisplay {
    fn default() -> Self {
        Self::new(Geometry::PCD8544)
    }
}

impl TextGridDisplay {
    pub const fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            frame: BLANK_GRID,
            panel: BLANK_GRID,
            column: 0,
            row: 0,
            text_size: 1,
            contrast: None,
            begun: false,
            flush_count: 0,
        }
    }

    /// Flushed text of panel row `index`, without trailing blanks.
    pub fn row(&self, index: usize) -> &str {
        self.panel.get(index).map_or("", trimmed)
    }

    /// Unflushed text of frame row `index`, without trailing blanks.
    pub fn frame_row(&self, index: usize) -> &str {
        self.frame.get(index).map_or("", trimmed)
    }

    pub fn flush_count(&self) -> u32 {
        self.flush_count
    }

    pub fn contrast(&self) -> Option<u8> {
        self.contrast
    }

    pub fn text_size(&self) -> u8 {
        self.text_size
    }

    pub fn is_begun(&self) -> bool {
        self.begun
    }
}

impl Display for TextGridDisplay {
    fn begin(&mut self) {
        self.begun = true;
    }

    fn clear_frame(&mut self) {
        self.frame = BLANK_GRID;
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        let char_width = usize::from(self.geometry.char_width.max(1));
        let char_height = usize::from(self.geometry.char_height.max(1));
        self.column = usize::try_from(x).unwrap_or(0) / char_width;
        self.row = usize::try_from(y).unwrap_or(0) / char_height;
    }

    fn draw_text(&mut self, text: &str) {
        let advance = usize::from(self.text_size.max(1));
        for ch in text.chars() {
            let glyph = if ch.is_ascii() { ch as u8 } else { b'?' };
            if let Some(cell) = self
                .frame
                .get_mut(self.row)
                .and_then(|line| line.get_mut(self.column))
            {
                *cell = glyph;
            }
            self.column = self.column.saturating_add(advance);
        }
    }

    fn flush(&mut self) {
        self.panel = self.frame;
        self.flush_count = self.flush_count.saturating_add(1);
    }

    fn set_contrast(&mut self, level: u8) {
        self.contrast = Some(level);
    }

    fn set_text_size(&mut self, size: u8) {
        self.text_size = size;
    }
}

fn trimmed(line: &[u8; GRID_COLUMNS]) -> &str {
    let end = line
        .iter()
        .rposition(|byte| *byte != b' ')
        .map_or(0, |last| last + 1);
    core::str::from_utf8(&line[..end]).unwrap_or("")
}
