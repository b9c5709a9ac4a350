//! In-memory framebuffer for the PCD8544.

use crate::protocol::{BANKS, BUFFER_SIZE, HEIGHT, WIDTH};

/// 1bpp framebuffer for the panel.
///
/// Bytes follow the controller's RAM layout: one byte covers an 8-pixel
/// vertical strip, `byte = (y / 8) * WIDTH + x`, bit 0 is the top pixel.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Creates a new blank framebuffer.
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; BUFFER_SIZE],
        }
    }

    /// Returns the underlying framebuffer bytes.
    pub fn bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bytes
    }

    /// Returns mutable framebuffer bytes.
    pub fn bytes_mut(&mut self) -> &mut [u8; BUFFER_SIZE] {
        &mut self.bytes
    }

    /// Clears framebuffer to blank (`on = false`) or dark (`on = true`).
    pub fn clear(&mut self, on: bool) {
        self.bytes.fill(if on { 0xFF } else { 0x00 });
    }

    /// Sets a pixel state.
    ///
    /// Returns `true` when pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        let Some((byte_index, bit_mask)) = locate(x, y) else {
            return false;
        };

        if on {
            self.bytes[byte_index] |= bit_mask;
        } else {
            self.bytes[byte_index] &= !bit_mask;
        }

        true
    }

    /// Reads a pixel state.
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        let (byte_index, bit_mask) = locate(x, y)?;
        Some((self.bytes[byte_index] & bit_mask) != 0)
    }

    /// Returns the payload for one bank (`0..BANKS`).
    pub fn bank(&self, bank: usize) -> Option<&[u8]> {
        if bank >= BANKS {
            return None;
        }

        let start = bank * WIDTH;
        self.bytes.get(start..start + WIDTH)
    }
}

#[inline]
fn locate(x: usize, y: usize) -> Option<(usize, u8)> {
    if x >= WIDTH || y >= HEIGHT {
        return None;
    }

    Some(((y / 8) * WIDTH + x, 1u8 << (y % 8)))
}
