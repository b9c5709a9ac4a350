use core::ops::Range;

/// Contiguous window of item indices currently on screen.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Viewport {
    start: usize,
    len: usize,
}

impl Viewport {
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Window showing the first `min(rows, count)` items.
    pub(crate) fn at_start(rows: usize, count: usize) -> Self {
        Self::new(0, rows.min(count))
    }

    /// Window showing the last `min(rows, count)` items.
    pub(crate) fn at_end(rows: usize, count: usize) -> Self {
        let len = rows.min(count);
        Self::new(count.saturating_sub(len), len)
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Last index in the window.
    pub fn last(&self) -> Option<usize> {
        self.len.checked_sub(1).map(|offset| self.start.saturating_add(offset))
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices().contains(&index)
    }

    pub fn indices(&self) -> Range<usize> {
        self.start..self.start.saturating_add(self.len)
    }

    /// Shifts every index down by one.
    pub(crate) fn shift_back(&mut self) {
        self.start = self.start.saturating_sub(1);
    }

    /// Shifts every index up by one.
    pub(crate) fn shift_forward(&mut self) {
        self.start = self.start.saturating_add(1);
    }

    /// Refits the window to `rows` and `count`, moving it as little as
    /// possible so it still contains `cursor` (which must be `< count`).
    pub(crate) fn reclamped(self, rows: usize, count: usize, cursor: usize) -> Self {
        let len = rows.min(count);
        if len == 0 {
            return Self::default();
        }

        let mut start = self.start.min(count - len);
        if cursor < start {
            start = cursor;
        } else if cursor >= start + len {
            start = cursor + 1 - len;
        }

        Self::new(start, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_window_is_short_for_short_lists() {
        assert_eq!(Viewport::at_end(6, 10), Viewport::new(4, 6));
        assert_eq!(Viewport::at_end(6, 3), Viewport::new(0, 3));
        assert_eq!(Viewport::at_start(6, 3), Viewport::new(0, 3));
    }

    #[test]
    fn last_and_contains_follow_range() {
        let window = Viewport::new(2, 4);
        assert_eq!(window.last(), Some(5));
        assert!(window.contains(2));
        assert!(window.contains(5));
        assert!(!window.contains(6));
        assert_eq!(Viewport::default().last(), None);
    }

    #[test]
    fn shrinking_keeps_cursor_inside() {
        // cursor at the bottom of a six row window, header takes two rows
        let window = Viewport::new(0, 6).reclamped(4, 10, 5);
        assert_eq!(window, Viewport::new(2, 4));

        let window = Viewport::new(0, 6).reclamped(4, 10, 1);
        assert_eq!(window, Viewport::new(0, 4));
    }

    #[test]
    fn shrinking_list_pulls_window_back_in_range() {
        let window = Viewport::new(4, 6).reclamped(6, 7, 6);
        assert_eq!(window, Viewport::new(1, 6));

        let window = Viewport::new(4, 6).reclamped(6, 2, 1);
        assert_eq!(window, Viewport::new(0, 2));
    }
}
