//! Controller configuration and character-cell geometry.

/// Default contrast applied when a controller is constructed.
pub const DEFAULT_CONTRAST: u8 = 35;

/// Pixel geometry of the character display.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Geometry {
    pub width_px: u16,
    pub height_px: u16,
    pub char_width: u8,
    pub char_height: u8,
    /// Text rows reserved at the top when a header is shown.
    pub header_rows: u8,
}

impl Geometry {
    /// Nokia 5110 panel with the 6x8 system font: 14 columns, 6 rows.
    pub const PCD8544: Self = Self {
        width_px: 84,
        height_px: 48,
        char_width: 6,
        char_height: 8,
        header_rows: 2,
    };

    /// Number of full text rows on the panel.
    pub const fn text_rows(&self) -> usize {
        if self.char_height == 0 {
            return 0;
        }
        (self.height_px / self.char_height as u16) as usize
    }

    /// Number of full text columns on the panel.
    pub const fn text_columns(&self) -> usize {
        if self.char_width == 0 {
            return 0;
        }
        (self.width_px / self.char_width as u16) as usize
    }

    /// Rows available to list items, never less than one.
    pub const fn list_rows(&self, has_header: bool) -> usize {
        let total = self.text_rows();
        let rows = if has_header {
            total.saturating_sub(self.header_rows as usize)
        } else {
            total
        };
        if rows == 0 { 1 } else { rows }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::PCD8544
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MenuConfig {
    pub contrast: u8,
    pub geometry: Geometry,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            contrast: DEFAULT_CONTRAST,
            geometry: Geometry::PCD8544,
        }
    }
}

impl MenuConfig {
    pub const fn with_contrast(mut self, contrast: u8) -> Self {
        self.contrast = contrast;
        self
    }

    pub const fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }
}
