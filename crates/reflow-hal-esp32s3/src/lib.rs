#![cfg_attr(not(test), no_std)]

//! Board glue for the reflow controller: Nokia 5110 display and three-button input.

pub mod input;
pub mod platform;
pub mod render;
