//! Drawing surface traits

use crate::render::{Color, Point};

/// Request a redraw of the face
///
/// The host answers a request by calling
/// [`UpdateScheduler::draw`](crate::scheduler::UpdateScheduler::draw)
/// from its draw callback.
pub trait RedrawRequest {
    /// Mark the face as needing a new frame
    fn mark_dirty(&mut self);
}

/// Circle drawing primitives of the display
pub trait DrawSurface {
    /// Error from the underlying display
    type Error;

    /// Fill the whole surface
    fn clear(&mut self, color: Color) -> Result<(), Self::Error>;

    /// Colour used by [`draw_circle`](Self::draw_circle)
    fn set_stroke_color(&mut self, color: Color);

    /// Colour used by [`fill_circle`](Self::fill_circle)
    fn set_fill_color(&mut self, color: Color);

    /// Draw a solid circle
    fn fill_circle(&mut self, center: Point, radius: u8) -> Result<(), Self::Error>;

    /// Draw a one pixel circle outline
    fn draw_circle(&mut self, center: Point, radius: u8) -> Result<(), Self::Error>;
}
