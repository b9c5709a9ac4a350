//! Command-level protocol helpers for the PCD8544 controller.

/// Panel width in pixels.
pub const WIDTH: usize = 84;
/// Panel height in pixels.
pub const HEIGHT: usize = 48;
/// Number of 8-pixel-tall row banks (the controller's Y address range).
pub const BANKS: usize = HEIGHT / 8;
/// Total framebuffer size in bytes.
pub const BUFFER_SIZE: usize = WIDTH * BANKS;

/// Highest operating voltage (contrast) setting accepted by `SET_VOP`.
pub const MAX_VOP: u8 = 0x7F;
/// Highest bias system setting.
pub const MAX_BIAS: u8 = 0x07;
/// Highest temperature coefficient setting.
pub const MAX_TEMPERATURE_COEFFICIENT: u8 = 0x03;

const FUNCTION_SET: u8 = 0x20;
const FUNCTION_EXTENDED: u8 = 0x01;
const DISPLAY_CONTROL: u8 = 0x08;
const SET_Y_ADDRESS: u8 = 0x40;
const SET_X_ADDRESS: u8 = 0x80;
const TEMPERATURE_CONTROL: u8 = 0x04;
const BIAS_SYSTEM: u8 = 0x10;
const SET_VOP: u8 = 0x80;

/// Number of command bytes sent by [`build_init_sequence`].
pub const INIT_SEQUENCE_LEN: usize = 6;
/// Number of command bytes sent by [`build_contrast_sequence`].
pub const CONTRAST_SEQUENCE_LEN: usize = 3;
/// Number of command bytes sent by [`build_home_sequence`].
pub const HOME_SEQUENCE_LEN: usize = 2;

/// Display control modes (basic instruction set).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DisplayMode {
    Blank,
    AllSegmentsOn,
    Normal,
    Inverse,
}

/// Builds the function-set command selecting the basic or extended instruction set.
///
/// Horizontal addressing, chip active.
#[inline]
pub const fn function_set(extended: bool) -> u8 {
    if extended {
        FUNCTION_SET | FUNCTION_EXTENDED
    } else {
        FUNCTION_SET
    }
}

/// Builds a display-control command.
#[inline]
pub const fn display_control(mode: DisplayMode) -> u8 {
    let bits = match mode {
        DisplayMode::Blank => 0b000,
        DisplayMode::AllSegmentsOn => 0b001,
        DisplayMode::Normal => 0b100,
        DisplayMode::Inverse => 0b101,
    };
    DISPLAY_CONTROL | bits
}

/// Builds a column address command for column `0..WIDTH`.
///
/// Returns `None` for out-of-range columns.
#[inline]
pub fn set_x_address(column: u8) -> Option<u8> {
    if usize::from(column) >= WIDTH {
        return None;
    }

    Some(SET_X_ADDRESS | column)
}

/// Builds a bank address command for bank `0..BANKS`.
///
/// Returns `None` for out-of-range banks.
#[inline]
pub fn set_y_address(bank: u8) -> Option<u8> {
    if usize::from(bank) >= BANKS {
        return None;
    }

    Some(SET_Y_ADDRESS | bank)
}

/// Builds a `SET_VOP` command (extended set). Levels above [`MAX_VOP`] saturate.
#[inline]
pub fn set_vop(level: u8) -> u8 {
    SET_VOP | level.min(MAX_VOP)
}

/// Builds a temperature-control command (extended set). Values saturate at 3.
#[inline]
pub fn temperature_control(coefficient: u8) -> u8 {
    TEMPERATURE_CONTROL | coefficient.min(MAX_TEMPERATURE_COEFFICIENT)
}

/// Builds a bias-system command (extended set). Values saturate at 7.
#[inline]
pub fn bias_system(bias: u8) -> u8 {
    BIAS_SYSTEM | bias.min(MAX_BIAS)
}

/// Builds the power-up command sequence.
///
/// Layout:
/// - extended function set
/// - Vop, temperature coefficient, bias
/// - basic function set
/// - display control (normal)
#[inline]
pub fn build_init_sequence(
    contrast: u8,
    temperature_coefficient: u8,
    bias: u8,
) -> [u8; INIT_SEQUENCE_LEN] {
    [
        function_set(true),
        set_vop(contrast),
        temperature_control(temperature_coefficient),
        bias_system(bias),
        function_set(false),
        display_control(DisplayMode::Normal),
    ]
}

/// Builds the sequence that changes contrast and returns to the basic set.
#[inline]
pub fn build_contrast_sequence(contrast: u8) -> [u8; CONTRAST_SEQUENCE_LEN] {
    [function_set(true), set_vop(contrast), function_set(false)]
}

/// Builds the sequence that moves the RAM address pointer to column 0, bank 0.
#[inline]
pub fn build_home_sequence() -> [u8; HOME_SEQUENCE_LEN] {
    [
        set_x_address(0).unwrap_or(SET_X_ADDRESS),
        set_y_address(0).unwrap_or(SET_Y_ADDRESS),
    ]
}
