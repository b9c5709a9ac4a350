use log::debug;

use super::{MenuController, Viewport};
use crate::display::Display;

impl<D> MenuController<'_, D>
where
    D: Display,
{
    /// Moves the cursor one item up, wrapping from the first item to the last.
    pub(super) fn cursor_up(&mut self) {
        let count = self.items.len();
        if count == 0 {
            return;
        }

        if self.cursor == 0 {
            self.cursor = count - 1;
            self.viewport = Viewport::at_end(self.visible_rows(), count);
            debug!(
                "menu-nav: wrap to last cursor={} viewport={}+{}",
                self.cursor,
                self.viewport.start(),
                self.viewport.len()
            );
            return;
        }

        self.cursor -= 1;
        if self.cursor < self.viewport.start() {
            self.viewport.shift_back();
            debug!(
                "menu-nav: scroll up cursor={} viewport={}+{}",
                self.cursor,
                self.viewport.start(),
                self.viewport.len()
            );
        }
    }

    /// Moves the cursor one item down, wrapping from the last item to the first.
    pub(super) fn cursor_down(&mut self) {
        let count = self.items.len();
        if count == 0 {
            return;
        }

        if self.cursor >= count - 1 {
            self.cursor = 0;
            self.viewport = Viewport::at_start(self.visible_rows(), count);
            debug!(
                "menu-nav: wrap to first cursor={} viewport={}+{}",
                self.cursor,
                self.viewport.start(),
                self.viewport.len()
            );
            return;
        }

        self.cursor += 1;
        if self.viewport.last().is_some_and(|last| self.cursor > last) {
            self.viewport.shift_forward();
            debug!(
                "menu-nav: scroll down cursor={} viewport={}+{}",
                self.cursor,
                self.viewport.start(),
                self.viewport.len()
            );
        }
    }
}
