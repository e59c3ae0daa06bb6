//! Dot rendering
//!
//! Turns numbers into dot glyphs and readings into complete frames. Nothing
//! here touches the display; a frame is a list of draw commands that a
//! [`DrawSurface`](crate::traits::DrawSurface) paints.

pub mod binary;
pub mod command;
pub mod frame;

pub use binary::{render_digit, DotSize, Orientation, BATTERY_DOT, TIME_DOT};
pub use command::{Color, DrawCommand, Fill, Point, Rect};
pub use frame::{compose_frame, DigitSlot, Frame, FRAME_CAPACITY, SCREEN_HEIGHT, SCREEN_WIDTH};
