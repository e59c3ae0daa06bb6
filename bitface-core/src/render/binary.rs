//! Binary dot glyphs
//!
//! A number is drawn as a run of dots, least significant bit first. Bits
//! past the requested count are never looked at, so callers choose how
//! many bits a digit gets and larger values are silently truncated.

use super::command::{DrawCommand, Fill, Point};

/// Direction the dots run in, starting from the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Bit 0 at the bottom, higher bits upward
    StackedVertical,
    /// Bit 0 at the right, higher bits leftward
    StackedHorizontal,
}

/// Dot radius and the gap between neighbouring dots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DotSize {
    pub radius: u8,
    pub spacing: u8,
}

impl DotSize {
    /// Distance between the centres of two neighbouring dots
    pub const fn pitch(&self) -> i16 {
        2 * self.radius as i16 + self.spacing as i16
    }
}

/// Dots used for the time columns
pub const TIME_DOT: DotSize = DotSize {
    radius: 10,
    spacing: 5,
};

/// Dots used for the battery row
pub const BATTERY_DOT: DotSize = DotSize {
    radius: 8,
    spacing: 4,
};

/// Render `value` as `bit_count` dots
///
/// Dot `i` sits `i * pitch` away from `origin` along `orientation` and is
/// filled when bit `i` of `value` is set.
pub fn render_digit(
    value: u8,
    bit_count: u8,
    origin: Point,
    orientation: Orientation,
    dot: DotSize,
) -> impl Iterator<Item = DrawCommand> {
    (0..bit_count).map(move |i| {
        let bit = u32::from(value).checked_shr(u32::from(i)).unwrap_or(0) & 1;
        let offset = i16::from(i) * dot.pitch();

        let center = match orientation {
            Orientation::StackedVertical => Point::new(origin.x, origin.y - offset),
            Orientation::StackedHorizontal => Point::new(origin.x - offset, origin.y),
        };

        DrawCommand {
            center,
            radius: dot.radius,
            fill: if bit == 1 { Fill::Filled } else { Fill::Outline },
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    fn pattern(value: u8, bits: u8) -> Vec<bool, 8> {
        render_digit(value, bits, Point::new(0, 0), Orientation::StackedVertical, TIME_DOT)
            .map(|cmd| cmd.is_set())
            .collect()
    }

    #[test]
    fn test_lsb_first() {
        assert_eq!(pattern(6, 4).as_slice(), &[false, true, true, false]);
        assert_eq!(pattern(5, 3).as_slice(), &[true, false, true]);
        assert_eq!(pattern(1, 2).as_slice(), &[true, false]);
    }

    #[test]
    fn test_extra_bits_truncated() {
        // 9 needs four bits; with three only the low bits survive
        assert_eq!(pattern(9, 3).as_slice(), &[true, false, false]);
        assert!(pattern(0xFF, 0).is_empty());
    }

    #[test]
    fn test_vertical_positions() {
        let dots: Vec<DrawCommand, 4> = render_digit(
            0,
            4,
            Point::new(132, 146),
            Orientation::StackedVertical,
            TIME_DOT,
        )
        .collect();

        let ys: Vec<i16, 4> = dots.iter().map(|d| d.center.y).collect();
        assert_eq!(ys.as_slice(), &[146, 121, 96, 71]);
        assert!(dots.iter().all(|d| d.center.x == 132 && d.radius == 10));
    }

    #[test]
    fn test_horizontal_positions() {
        let dots: Vec<DrawCommand, 7> = render_digit(
            0,
            7,
            Point::new(132, 20),
            Orientation::StackedHorizontal,
            BATTERY_DOT,
        )
        .collect();

        let xs: Vec<i16, 7> = dots.iter().map(|d| d.center.x).collect();
        assert_eq!(xs.as_slice(), &[132, 112, 92, 72, 52, 32, 12]);
        assert!(dots.iter().all(|d| d.center.y == 20 && d.radius == 8));
    }

    #[test]
    fn test_wide_bit_count_reads_zero() {
        let set = render_digit(0xFF, 10, Point::new(0, 0), Orientation::StackedVertical, TIME_DOT)
            .filter(|cmd| cmd.is_set())
            .count();
        assert_eq!(set, 8);
    }
}
