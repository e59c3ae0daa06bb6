//! 1bpp framebuffer with per-line change tracking

use core::convert::TryFrom;

use crate::protocol::{BUFFER_SIZE, HEIGHT, LINE_BYTES, WIDTH};

/// In-memory copy of the panel
///
/// Bit 7 of each byte is the leftmost pixel of that byte. A set bit is a
/// white (reflective) pixel. Lines touched since the last
/// [`mark_clean`](Self::mark_clean) are reported by
/// [`dirty_lines`](Self::dirty_lines).
#[derive(Clone)]
pub struct FrameBuffer {
    bytes: [u8; BUFFER_SIZE],
    dirty: [bool; HEIGHT],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create an all-black framebuffer with every line dirty
    pub const fn new() -> Self {
        Self {
            bytes: [0u8; BUFFER_SIZE],
            dirty: [true; HEIGHT],
        }
    }

    pub fn bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bytes
    }

    /// Set every pixel to `on`
    pub fn fill(&mut self, on: bool) {
        let value = if on { 0xFF } else { 0x00 };
        for (line, chunk) in self.bytes.chunks_exact_mut(LINE_BYTES).enumerate() {
            if chunk.iter().any(|&b| b != value) {
                chunk.fill(value);
                self.dirty[line] = true;
            }
        }
    }

    /// Set a pixel, returning false when it is off the panel
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }

        let byte = &mut self.bytes[y * LINE_BYTES + x / 8];
        let mask = 1u8 << (7 - (x % 8));
        let updated = if on { *byte | mask } else { *byte & !mask };
        if updated != *byte {
            *byte = updated;
            self.dirty[y] = true;
        }

        true
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x >= WIDTH || y >= HEIGHT {
            return None;
        }

        let mask = 1u8 << (7 - (x % 8));
        Some(self.bytes[y * LINE_BYTES + x / 8] & mask != 0)
    }

    /// Pixel data for line 1..=168
    pub fn line(&self, line: u16) -> Option<&[u8; LINE_BYTES]> {
        if !(1..=HEIGHT as u16).contains(&line) {
            return None;
        }

        let start = (line as usize - 1) * LINE_BYTES;
        <&[u8; LINE_BYTES]>::try_from(&self.bytes[start..start + LINE_BYTES]).ok()
    }

    /// Line numbers (1-based) changed since the last flush
    pub fn dirty_lines(&self) -> impl Iterator<Item = u16> + '_ {
        self.dirty
            .iter()
            .enumerate()
            .filter(|(_, &d)| d)
            .map(|(i, _)| i as u16 + 1)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.iter().any(|&d| d)
    }

    pub fn mark_clean(&mut self) {
        self.dirty = [false; HEIGHT];
    }

    /// Force a full rewrite on the next flush
    pub fn mark_all_dirty(&mut self) {
        self.dirty = [true; HEIGHT];
    }
}
