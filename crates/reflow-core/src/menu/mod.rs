//! Menu controller: cursor, viewport, and edit-mode state machine.

mod edit;
mod item;
mod navigation;
mod render;
mod viewport;


use log::debug;

use crate::{
    config::MenuConfig,
    display::Display,
    input::{InputEvent, InputProvider},
};

pub use item::MenuItem;
pub use viewport::Viewport;

/// How directional input is interpreted.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    /// Up/down move the cursor.
    #[default]
    Browsing,
    /// Up/down step the value under the cursor.
    Editing,
}

/// Rejected menu bindings.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MenuError {
    /// No items were supplied.
    EmptyContents,
    /// Item at `index` has `min > max`.
    InvalidRange { index: usize },
    /// Item at `index` has a non-positive increment.
    InvalidIncrement { index: usize },
}

impl core::fmt::Display for MenuError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyContents => write!(f, "menu contents are empty"),
            Self::InvalidRange { index } => write!(f, "menu item {index} has min > max"),
            Self::InvalidIncrement { index } => {
                write!(f, "menu item {index} has a non-positive increment")
            }
        }
    }
}

impl core::error::Error for MenuError {}

/// Scrollable menu over a caller-owned item list.
pub struct MenuController<'a, D>
where
    D: Display,
{
    display: D,
    config: MenuConfig,
    items: &'a [MenuItem<'a>],
    cursor: usize,
    mode: Mode,
    header: Option<&'a str>,
    viewport: Viewport,
}

impl<'a, D> MenuController<'a, D>
where
    D: Display,
{
    /// Creates a controller with no items and no header, and applies the
    /// configured contrast.
    pub fn new(mut display: D, config: MenuConfig) -> Self {
        display.set_contrast(config.contrast);
        Self {
            display,
            config,
            items: &[],
            cursor: 0,
            mode: Mode::Browsing,
            header: None,
            viewport: Viewport::default(),
        }
    }

    /// One-time display bring-up.
    pub fn begin(&mut self) {
        self.display.begin();
    }

    /// Binds a new item list.
    ///
    /// The cursor and viewport are pulled back inside the new list. On error
    /// the previous binding is kept.
    pub fn set_contents(&mut self, items: &'a [MenuItem<'a>]) -> Result<(), MenuError> {
        if items.is_empty() {
            return Err(MenuError::EmptyContents);
        }
        for (index, item) in items.iter().enumerate() {
            item.validate(index)?;
        }

        self.items = items;
        self.reclamp();
        debug!(
            "menu: contents bound count={} cursor={} viewport={}+{}",
            items.len(),
            self.cursor,
            self.viewport.start(),
            self.viewport.len()
        );
        Ok(())
    }

    /// Sets or clears the fixed top line.
    pub fn set_header(&mut self, header: Option<&'a str>) {
        self.header = header;
        self.reclamp();
    }

    pub fn set_contrast(&mut self, level: u8) {
        self.config.contrast = level;
        self.display.set_contrast(level);
    }

    /// Moves the cursor up, or steps the selected value up.
    pub fn up(&mut self) {
        match self.mode {
            Mode::Browsing => self.cursor_up(),
            Mode::Editing => self.step_value_up(),
        }
        self.refresh();
    }

    /// Moves the cursor down, or steps the selected value down.
    pub fn down(&mut self) {
        match self.mode {
            Mode::Browsing => self.cursor_down(),
            Mode::Editing => self.step_value_down(),
        }
        self.refresh();
    }

    /// Toggles between browsing and editing the item under the cursor.
    pub fn select(&mut self) {
        self.mode = match self.mode {
            Mode::Browsing => Mode::Editing,
            Mode::Editing => Mode::Browsing,
        };
        debug!("menu: mode={:?} cursor={}", self.mode, self.cursor);
        self.refresh();
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Up => self.up(),
            InputEvent::Down => self.down(),
            InputEvent::Select => self.select(),
        }
    }

    /// Applies every pending event from `input`; returns how many were handled.
    pub fn drive<IN>(&mut self, input: &mut IN) -> Result<usize, IN::Error>
    where
        IN: InputProvider,
    {
        let mut handled = 0usize;
        while let Some(event) = input.poll_event()? {
            self.handle(event);
            handled = handled.saturating_add(1);
        }
        Ok(handled)
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> bool {
        self.mode == Mode::Editing
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Rows available to list items under the current header setting.
    pub fn visible_rows(&self) -> usize {
        self.config.geometry.list_rows(self.header.is_some())
    }

    pub fn header(&self) -> Option<&'a str> {
        self.header
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &'a [MenuItem<'a>] {
        self.items
    }

    /// Item under the cursor, `None` until contents are bound.
    pub fn current_item(&self) -> Option<&'a MenuItem<'a>> {
        self.items.get(self.cursor)
    }

    pub fn config(&self) -> MenuConfig {
        self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Releases the owned display.
    pub fn release(self) -> D {
        self.display
    }

    fn reclamp(&mut self) {
        let count = self.items.len();
        self.cursor = self.cursor.min(count.saturating_sub(1));
        self.viewport = self
            .viewport
            .reclamped(self.visible_rows(), count, self.cursor);
    }
}
