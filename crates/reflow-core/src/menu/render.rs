use core::fmt::Write as _;

use heapless::String;

use super::{MenuController, MenuItem, Mode};
use crate::display::Display;

const CURSOR_GLYPH: &str = "*";
const SEPARATOR: &str = ": ";
const SEPARATOR_EDITING: &str = "= ";
// Fits any i32 including the sign.
const VALUE_TEXT_BYTES: usize = 11;

impl<D> MenuController<'_, D>
where
    D: Display,
{
    /// Redraws header and visible rows, then flushes.
    pub fn refresh(&mut self) {
        self.display.clear_frame();
        self.display.set_text_size(1);

        let mut first_list_row = 0usize;
        if let Some(header) = self.header {
            self.display.set_cursor(0, 0);
            self.display.draw_text(header);
            first_list_row = usize::from(self.config.geometry.header_rows);
        }

        let items = self.items;
        for (row_offset, index) in self.viewport.indices().enumerate() {
            let Some(item) = items.get(index) else {
                break;
            };
            self.draw_item_row(item, index, first_list_row.saturating_add(row_offset));
        }

        self.display.flush();
    }

    /// Blanks the panel regardless of menu state.
    pub fn clear(&mut self) {
        self.display.clear_frame();
        self.display.flush();
    }

    fn draw_item_row(&mut self, item: &MenuItem<'_>, index: usize, row: usize) {
        let y = self.row_y(row);
        let on_cursor = index == self.cursor;

        self.display.set_cursor(0, y);
        if on_cursor && self.mode == Mode::Browsing {
            self.display.draw_text(CURSOR_GLYPH);
        }

        self.display
            .set_cursor(i32::from(self.config.geometry.char_width), y);
        self.display.draw_text(item.name);
        self.display.draw_text(if on_cursor && self.mode == Mode::Editing {
            SEPARATOR_EDITING
        } else {
            SEPARATOR
        });

        let mut value = String::<VALUE_TEXT_BYTES>::new();
        let _ = write!(value, "{}", item.value());
        self.display.draw_text(&value);
        self.display.draw_text(item.unit);
    }

    fn row_y(&self, row: usize) -> i32 {
        let y = row.saturating_mul(usize::from(self.config.geometry.char_height));
        i32::try_from(y).unwrap_or(i32::MAX)
    }
}
