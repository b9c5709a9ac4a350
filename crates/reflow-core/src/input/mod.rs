//! Input abstraction layer.

pub mod mock;

/// Logical actions consumed by the menu controller.
///
/// Events are edges: the provider debounces and reports each press once.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Up,
    Down,
    Select,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
