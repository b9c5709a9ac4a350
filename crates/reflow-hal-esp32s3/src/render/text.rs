use embedded_graphics::{
    Drawable, Pixel,
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_5X8},
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Point, Size},
    primitives::Rectangle,
    text::{Baseline, Text},
};

/// 5x8 glyphs on a 6x8 cell, matching the panel's 14x6 character grid.
pub const FONT: MonoFont<'static> = MonoFont {
    character_spacing: 1,
    ..FONT_5X8
};

/// Horizontal advance of one glyph at `size`.
pub fn glyph_advance(size: u8) -> i32 {
    let width = FONT.character_size.width + FONT.character_spacing;
    i32::try_from(width).unwrap_or(0) * i32::from(size.max(1))
}

/// Draws `text` with its top-left corner at `position`, scaled by `size`.
///
/// Returns the position right after the last glyph.
pub fn draw_text<T>(target: &mut T, position: Point, text: &str, size: u8) -> Result<Point, T::Error>
where
    T: DrawTarget<Color = BinaryColor> + OriginDimensions,
{
    let style = MonoTextStyle::new(&FONT, BinaryColor::On);
    let size = size.max(1);

    if size == 1 {
        Text::with_baseline(text, position, style, Baseline::Top).draw(target)?;
    } else {
        let mut scaled = Scaled {
            target,
            origin: position,
            factor: u32::from(size),
        };
        Text::with_baseline(text, position, style, Baseline::Top).draw(&mut scaled)?;
    }

    let glyphs = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
    Ok(position + Point::new(glyphs.saturating_mul(glyph_advance(size)), 0))
}

/// Blows every pixel drawn relative to `origin` up to a `factor` x `factor` block.
struct Scaled<'a, T> {
    target: &'a mut T,
    origin: Point,
    factor: u32,
}

impl<T> OriginDimensions for Scaled<'_, T>
where
    T: OriginDimensions,
{
    fn size(&self) -> Size {
        self.target.size()
    }
}

impl<T> DrawTarget for Scaled<'_, T>
where
    T: DrawTarget<Color = BinaryColor> + OriginDimensions,
{
    type Color = BinaryColor;
    type Error = T::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let factor = i32::try_from(self.factor).unwrap_or(1);
        for Pixel(point, color) in pixels {
            let offset = point - self.origin;
            let corner = self.origin + offset * factor;
            self.target.fill_solid(
                &Rectangle::new(corner, Size::new(self.factor, self.factor)),
                color,
            )?;
        }
        Ok(())
    }
}
