//! Wire format of the LS013B7DH05 (1.26" 144x168 Sharp memory LCD)
//!
//! Every transfer starts with a mode byte. Line addresses and the mode bits
//! are clocked LSB first by the panel, so on an MSB-first SPI bus the
//! address byte is bit-reversed.

/// Panel width in pixels
pub const WIDTH: usize = 144;
/// Panel height in pixels
pub const HEIGHT: usize = 168;
/// Bytes of pixel data in one line
pub const LINE_BYTES: usize = WIDTH / 8;
/// Whole framebuffer size in bytes
pub const BUFFER_SIZE: usize = LINE_BYTES * HEIGHT;

/// One line inside a multi-line write: address, pixels, dummy byte
pub const LINE_BLOCK_SIZE: usize = 1 + LINE_BYTES + 1;

/// Single line write: mode, line block, trailing dummy
pub const WRITE_LINE_PACKET_SIZE: usize = 1 + LINE_BLOCK_SIZE + 1;

/// All-clear: mode byte plus at least 13 dummy bits
pub const CLEAR_PACKET_SIZE: usize = 2;

/// Data update mode (M0)
const MODE_UPDATE: u8 = 0x80;
/// VCOM level (M1)
const MODE_VCOM: u8 = 0x40;
/// All clear (M2)
const MODE_CLEAR: u8 = 0x20;

#[inline]
const fn with_vcom(mode: u8, vcom_high: bool) -> u8 {
    if vcom_high {
        mode | MODE_VCOM
    } else {
        mode
    }
}

/// Mode byte opening a data update
#[inline]
pub const fn update_mode_byte(vcom_high: bool) -> u8 {
    with_vcom(MODE_UPDATE, vcom_high)
}

/// Wire address for line 1..=168, `None` outside that range
#[inline]
pub fn encode_line_address(line: u16) -> Option<u8> {
    if !(1..=HEIGHT as u16).contains(&line) {
        return None;
    }

    Some((line as u8).reverse_bits())
}

/// Build the all-clear command
#[inline]
pub fn build_clear_packet(vcom_high: bool) -> [u8; CLEAR_PACKET_SIZE] {
    [with_vcom(MODE_CLEAR, vcom_high), 0x00]
}

/// Build one line block for a multi-line update
#[inline]
pub fn build_line_block(line: u16, data: &[u8; LINE_BYTES]) -> Option<[u8; LINE_BLOCK_SIZE]> {
    let address = encode_line_address(line)?;

    let mut block = [0u8; LINE_BLOCK_SIZE];
    block[0] = address;
    block[1..1 + LINE_BYTES].copy_from_slice(data);
    Some(block)
}

/// Build a complete single line update
#[inline]
pub fn build_write_line_packet(
    line: u16,
    data: &[u8; LINE_BYTES],
    vcom_high: bool,
) -> Option<[u8; WRITE_LINE_PACKET_SIZE]> {
    let block = build_line_block(line, data)?;

    let mut packet = [0u8; WRITE_LINE_PACKET_SIZE];
    packet[0] = update_mode_byte(vcom_high);
    packet[1..1 + LINE_BLOCK_SIZE].copy_from_slice(&block);
    Some(packet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry() {
        assert_eq!(LINE_BYTES, 18);
        assert_eq!(BUFFER_SIZE, 3024);
        assert_eq!(WRITE_LINE_PACKET_SIZE, 22);
    }

    #[test]
    fn test_mode_bytes() {
        assert_eq!(update_mode_byte(false), 0x80);
        assert_eq!(update_mode_byte(true), 0xC0);
        assert_eq!(build_clear_packet(false), [0x20, 0x00]);
        assert_eq!(build_clear_packet(true)[0], 0x60);
    }

    #[test]
    fn test_line_address_is_lsb_first() {
        assert_eq!(encode_line_address(1), Some(0x80));
        assert_eq!(encode_line_address(2), Some(0x40));
        assert_eq!(encode_line_address(3), Some(0xC0));
        assert_eq!(encode_line_address(168), Some(0x15));
    }

    #[test]
    fn test_line_out_of_range() {
        assert_eq!(encode_line_address(0), None);
        assert_eq!(encode_line_address(169), None);
        assert!(build_write_line_packet(169, &[0; LINE_BYTES], false).is_none());
    }

    #[test]
    fn test_write_line_packet_layout() {
        let mut data = [0u8; LINE_BYTES];
        data[0] = 0xAA;
        data[LINE_BYTES - 1] = 0x55;

        let packet = build_write_line_packet(10, &data, false).unwrap();
        assert_eq!(packet[0], 0x80);
        assert_eq!(packet[1], 10u8.reverse_bits());
        assert_eq!(packet[2], 0xAA);
        assert_eq!(packet[1 + LINE_BYTES], 0x55);
        // Line dummy and transfer dummy
        assert_eq!(packet[WRITE_LINE_PACKET_SIZE - 2], 0x00);
        assert_eq!(packet[WRITE_LINE_PACKET_SIZE - 1], 0x00);
    }
}
