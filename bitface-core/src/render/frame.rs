//! Frame composition
//!
//! Lays out the six time digits as vertical dot columns along the bottom of
//! the screen and the battery indicator as a dot row along the top.
//!
//! ```text
//!  x:  12   36   60   84  108  132
//!                 battery row (y=20)
//!
//!            o         o
//!       o    o    o    o    o    o
//!  o    o    o    o    o    o    o
//!  o    o    o    o    o    o    o   <- y=146, bit 0
//!  Ht   Hu   Mt   Mu   St   Su
//! ```

use heapless::Vec;

use super::binary::{render_digit, DotSize, Orientation, BATTERY_DOT, TIME_DOT};
use super::command::{Color, DrawCommand, Point};
use crate::animation::AnimationPhase;
use crate::config::Theme;
use crate::state::{ChargeState, ClockReading};
use crate::traits::DrawSurface;

/// Panel width in pixels
pub const SCREEN_WIDTH: i16 = 144;

/// Panel height in pixels
pub const SCREEN_HEIGHT: i16 = 168;

/// Baseline shared by all time columns (bit 0 dots)
const TIME_BASELINE_Y: i16 = 146;

/// Rightmost battery dot (bit 0)
const BATTERY_ORIGIN: Point = Point::new(132, 20);

/// Bits in the battery indicator
pub const BATTERY_BITS: u8 = 7;

/// Position and width of one time digit column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitSlot {
    pub origin: Point,
    pub bits: u8,
}

impl DigitSlot {
    const fn column(x: i16, bits: u8) -> Self {
        Self {
            origin: Point::new(x, TIME_BASELINE_Y),
            bits,
        }
    }
}

/// Time columns in draw order, matching [`ClockReading::digits`]
///
/// Tens of seconds and minutes never exceed 5 and tens of hours never
/// exceed 2, hence the narrower columns.
pub const DIGIT_SLOTS: [DigitSlot; 6] = [
    DigitSlot::column(132, 4), // second units
    DigitSlot::column(108, 3), // second tens
    DigitSlot::column(84, 4),  // minute units
    DigitSlot::column(60, 3),  // minute tens
    DigitSlot::column(36, 4),  // hour units
    DigitSlot::column(12, 2),  // hour tens
];

/// Dots in a complete frame
pub const FRAME_CAPACITY: usize = 4 + 3 + 4 + 3 + 4 + 2 + BATTERY_BITS as usize;

/// One complete face: every time dot followed by the battery dots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    commands: Vec<DrawCommand, FRAME_CAPACITY>,
    /// Dot colour
    pub foreground: Color,
    /// Fill colour behind the dots
    pub background: Color,
}

impl Frame {
    fn new(theme: Theme) -> Self {
        Self {
            commands: Vec::new(),
            foreground: theme.foreground(),
            background: theme.background(),
        }
    }

    fn push_digit(&mut self, value: u8, bits: u8, origin: Point, orientation: Orientation, dot: DotSize) {
        for cmd in render_digit(value, bits, origin, orientation, dot) {
            let _ = self.commands.push(cmd);
        }
    }

    /// All draw commands in paint order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands for one time column, see [`DIGIT_SLOTS`]
    ///
    /// Empty for an index past the last column.
    pub fn digit(&self, index: usize) -> &[DrawCommand] {
        let Some(before) = DIGIT_SLOTS.get(..index) else {
            return &[];
        };
        let start: usize = before.iter().map(|s| s.bits as usize).sum();
        let len = DIGIT_SLOTS.get(index).map_or(0, |s| s.bits as usize);
        self.commands.get(start..start + len).unwrap_or(&[])
    }

    /// Commands for the battery row
    pub fn battery(&self) -> &[DrawCommand] {
        let start = self.commands.len().saturating_sub(BATTERY_BITS as usize);
        &self.commands[start..]
    }

    /// Paint the frame onto a surface
    pub fn paint<S: DrawSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        self.paint_with_strip(surface, Point::new(0, 0))
    }

    /// Paint with the battery strip moved to `strip`
    ///
    /// `strip` is the top-left corner of the sliding battery layer, as
    /// produced by [`SlideAnimation::frame_at`](crate::animation::SlideAnimation::frame_at).
    pub fn paint_with_strip<S: DrawSurface>(&self, surface: &mut S, strip: Point) -> Result<(), S::Error> {
        surface.clear(self.background)?;
        surface.set_stroke_color(self.foreground);
        surface.set_fill_color(self.foreground);

        let battery_start = self.commands.len().saturating_sub(BATTERY_BITS as usize);
        for (i, cmd) in self.commands.iter().enumerate() {
            let center = if i >= battery_start {
                Point::new(cmd.center.x + strip.x, cmd.center.y + strip.y)
            } else {
                cmd.center
            };

            if cmd.is_set() {
                surface.fill_circle(center, cmd.radius)?;
            } else {
                surface.draw_circle(center, cmd.radius)?;
            }
        }

        Ok(())
    }
}

/// Compose the frame for one redraw
///
/// While charging the battery row shows the animation phase as a single lit
/// dot instead of the percentage.
pub fn compose_frame(
    clock: &ClockReading,
    charge: &ChargeState,
    phase: AnimationPhase,
    theme: Theme,
) -> Frame {
    let mut frame = Frame::new(theme);

    for (value, slot) in clock.digits().into_iter().zip(DIGIT_SLOTS.iter()) {
        frame.push_digit(value, slot.bits, slot.origin, Orientation::StackedVertical, TIME_DOT);
    }

    let battery = if charge.is_charging {
        phase.indicator()
    } else {
        charge.percent()
    };
    frame.push_digit(
        battery,
        BATTERY_BITS,
        BATTERY_ORIGIN,
        Orientation::StackedHorizontal,
        BATTERY_DOT,
    );

    frame
}
