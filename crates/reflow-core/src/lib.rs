#![cfg_attr(not(test), no_std)]

//! Scrollable, editable settings menu for small character displays.
//!
//! The controller is hardware-independent: all output goes through the
//! [`display::Display`] capability and all input arrives as
//! [`input::InputEvent`]s.

pub mod config;
pub mod display;
pub mod input;
pub mod menu;

pub use config::{Geometry, MenuConfig};
pub use display::Display;
pub use input::{InputEvent, InputProvider};
pub use menu::{MenuController, MenuError, MenuItem, Mode, Viewport};
