//! Display capability consumed by the menu controller.

pub mod mock;

/// Character-oriented drawing surface.
///
/// Calls are infallible from the controller's point of view; transport
/// faults belong to the implementation.
pub trait Display {
    /// One-time hardware initialization.
    fn begin(&mut self);

    /// Blanks the frame buffer without touching the panel.
    fn clear_frame(&mut self);

    /// Moves the text cursor to a pixel position.
    fn set_cursor(&mut self, x: i32, y: i32);

    /// Draws text at the text cursor and advances it past the last glyph.
    fn draw_text(&mut self, text: &str);

    /// Pushes the frame buffer to the panel.
    fn flush(&mut self);

    fn set_contrast(&mut self, level: u8);

    /// Integer glyph scale factor, 1 being the native font size.
    fn set_text_size(&mut self, size: u8);
}

impl<D> Display for &mut D
where
    D: Display + ?Sized,
{
    fn begin(&mut self) {
        (**self).begin();
    }

    fn clear_frame(&mut self) {
        (**self).clear_frame();
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        (**self).set_cursor(x, y);
    }

    fn draw_text(&mut self, text: &str) {
        (**self).draw_text(text);
    }

    fn flush(&mut self) {
        (**self).flush();
    }

    fn set_contrast(&mut self, level: u8) {
        (**self).set_contrast(level);
    }

    fn set_text_size(&mut self, size: u8) {
        (**self).set_text_size(size);
    }
}
