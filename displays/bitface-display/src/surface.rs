//! Face drawing on top of `embedded-graphics`

use bitface_core::render::{Color, Point};
use bitface_core::traits::DrawSurface;
use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, PrimitiveStyle},
};

/// Map a face colour to a panel pixel
///
/// White is a set bit on a memory LCD.
pub fn to_binary(color: Color) -> BinaryColor {
    match color {
        Color::White => BinaryColor::On,
        Color::Black => BinaryColor::Off,
    }
}

/// [`DrawSurface`] over any monochrome draw target
///
/// Holds the current stroke and fill colours between calls. A dot of
/// radius `r` covers `2r + 1` pixels so its centre lands on a pixel.
pub struct DotSurface<'a, D> {
    target: &'a mut D,
    stroke: BinaryColor,
    fill: BinaryColor,
}

impl<'a, D> DotSurface<'a, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self {
            target,
            stroke: BinaryColor::On,
            fill: BinaryColor::On,
        }
    }
}

fn dot(center: Point, radius: u8) -> Circle {
    Circle::with_center(
        embedded_graphics::geometry::Point::new(i32::from(center.x), i32::from(center.y)),
        2 * u32::from(radius) + 1,
    )
}

impl<D> DrawSurface for DotSurface<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Error = D::Error;

    fn clear(&mut self, color: Color) -> Result<(), Self::Error> {
        self.target.clear(to_binary(color))
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = to_binary(color);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = to_binary(color);
    }

    fn fill_circle(&mut self, center: Point, radius: u8) -> Result<(), Self::Error> {
        dot(center, radius)
            .into_styled(PrimitiveStyle::with_fill(self.fill))
            .draw(&mut *self.target)
    }

    fn draw_circle(&mut self, center: Point, radius: u8) -> Result<(), Self::Error> {
        dot(center, radius)
            .into_styled(PrimitiveStyle::with_stroke(self.stroke, 1))
            .draw(&mut *self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FrameBuffer;
    use bitface_core::animation::AnimationPhase;
    use bitface_core::config::Theme;
    use bitface_core::render::compose_frame;
    use bitface_core::state::{ChargeState, ClockReading};

    fn painted(theme: Theme) -> FrameBuffer {
        let mut fb = FrameBuffer::new();
        let frame = compose_frame(
            &ClockReading::new(12, 34, 56).unwrap(),
            &ChargeState::discharging(42),
            AnimationPhase::default(),
            theme,
        );
        let mut surface = DotSurface::new(&mut fb);
        frame.paint(&mut surface).unwrap();
        fb
    }

    fn lit(fb: &FrameBuffer, x: i16, y: i16) -> bool {
        fb.pixel(x as usize, y as usize).unwrap()
    }

    #[test]
    fn test_filled_and_hollow_centres() {
        let fb = painted(Theme::Dark);

        // Second units = 6 = 0b0110, bit 0 at the bottom
        assert!(!lit(&fb, 132, 146));
        assert!(lit(&fb, 132, 121));
        assert!(lit(&fb, 132, 96));
        assert!(!lit(&fb, 132, 71));

        // Hour tens = 1
        assert!(lit(&fb, 12, 146));
        assert!(!lit(&fb, 12, 121));

        // Battery 42 = 0b0101010 running leftward from x = 132
        assert!(!lit(&fb, 132, 20));
        assert!(lit(&fb, 112, 20));
        assert!(!lit(&fb, 92, 20));
        assert!(lit(&fb, 72, 20));
    }

    #[test]
    fn test_hollow_dot_has_outline() {
        let fb = painted(Theme::Dark);

        let ring = (120..crate::protocol::WIDTH as i16)
            .filter(|&x| lit(&fb, x, 146))
            .count();

        // Same row of a lone time-sized outline
        let expected = dot(Point::new(132, 146), 10)
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .pixels()
            .filter(|p| p.0.y == 146 && p.1 == BinaryColor::On)
            .count();

        assert_eq!(ring, expected);
        assert!(ring >= 2);
        assert!(!lit(&fb, 132, 146));
    }

    #[test]
    fn test_light_theme_inverts() {
        let fb = painted(Theme::Light);

        assert!(lit(&fb, 132, 146));
        assert!(!lit(&fb, 132, 121));
        assert!(lit(&fb, 0, 0));
    }

    #[test]
    fn test_background_between_dots() {
        let fb = painted(Theme::Dark);

        assert!(!lit(&fb, 0, 0));
        assert!(!lit(&fb, 24, 146));
    }
}
