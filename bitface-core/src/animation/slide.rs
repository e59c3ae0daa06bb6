//! Slide animation description
//!
//! The charging indicator loops a short slide of the battery strip. The
//! host runs the slide; hosts that have no animation engine of their own can
//! use [`SlideAnimation::frame_at`] to interpolate it.

use crate::config::FaceConfig;
use crate::render::{Rect, SCREEN_WIDTH};

/// Height of the battery strip that slides
pub const STRIP_HEIGHT: i16 = 20;

/// Progress resolution used by the easing curves
const PERMILLE: u32 = 1000;

/// Timing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Curve {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Curve {
    /// Map linear progress to eased progress, both in permille
    pub fn apply(&self, t: u32) -> u32 {
        let t = t.min(PERMILLE);
        let rest = PERMILLE - t;

        match self {
            Curve::Linear => t,
            Curve::EaseIn => t * t / PERMILLE,
            Curve::EaseOut => PERMILLE - rest * rest / PERMILLE,
            Curve::EaseInOut => {
                if t < PERMILLE / 2 {
                    2 * t * t / PERMILLE
                } else {
                    PERMILLE - 2 * rest * rest / PERMILLE
                }
            }
        }
    }
}

/// One cycle of the battery strip slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlideAnimation {
    pub from: Rect,
    pub to: Rect,
    pub duration_ms: u16,
    pub delay_ms: u16,
    pub curve: Curve,
}

impl SlideAnimation {
    /// Slide of the battery strip to the left by `offset` pixels
    ///
    /// Extreme offsets saturate instead of overflowing.
    pub const fn battery_strip(duration_ms: u16, offset: i16) -> Self {
        Self {
            from: Rect::new(0, 0, SCREEN_WIDTH, STRIP_HEIGHT),
            to: Rect::new(
                offset.saturating_neg(),
                0,
                SCREEN_WIDTH.saturating_sub(offset),
                STRIP_HEIGHT,
            ),
            duration_ms,
            delay_ms: 0,
            curve: Curve::EaseInOut,
        }
    }

    /// Slide configured for this face
    pub fn from_config(config: &FaceConfig) -> Self {
        Self::battery_strip(config.slide_duration_ms, config.slide_offset_px)
    }

    /// Total time from scheduling to completion
    pub fn total_ms(&self) -> u32 {
        u32::from(self.delay_ms) + u32::from(self.duration_ms)
    }

    /// Check if the slide is over at `elapsed_ms` after scheduling
    pub fn is_complete(&self, elapsed_ms: u32) -> bool {
        elapsed_ms >= self.total_ms()
    }

    /// Strip position at `elapsed_ms` after scheduling
    pub fn frame_at(&self, elapsed_ms: u32) -> Rect {
        let delay = u32::from(self.delay_ms);
        if elapsed_ms <= delay {
            return self.from;
        }

        let duration = u32::from(self.duration_ms);
        let linear = if duration == 0 {
            PERMILLE
        } else {
            let into = (elapsed_ms - delay).min(duration);
            into * PERMILLE / duration
        };
        let p = self.curve.apply(linear) as i32;

        let lerp = |a: i16, b: i16| -> i16 {
            let a = i32::from(a);
            let b = i32::from(b);
            (a + (b - a) * p / PERMILLE as i32) as i16
        };

        Rect::new(
            lerp(self.from.x, self.to.x),
            lerp(self.from.y, self.to.y),
            lerp(self.from.width, self.to.width),
            lerp(self.from.height, self.to.height),
        )
    }
}

impl Default for SlideAnimation {
    fn default() -> Self {
        Self::from_config(&FaceConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slide() {
        let slide = SlideAnimation::default();
        assert_eq!(slide.from, Rect::new(0, 0, 144, 20));
        assert_eq!(slide.to, Rect::new(-10, 0, 134, 20));
        assert_eq!(slide.duration_ms, 250);
        assert_eq!(slide.delay_ms, 0);
        assert_eq!(slide.curve, Curve::EaseInOut);
    }

    #[test]
    fn test_curve_endpoints() {
        for curve in [Curve::Linear, Curve::EaseIn, Curve::EaseOut, Curve::EaseInOut] {
            assert_eq!(curve.apply(0), 0);
            assert_eq!(curve.apply(1000), 1000);
            assert_eq!(curve.apply(5000), 1000);
        }
        assert_eq!(Curve::EaseInOut.apply(500), 500);
        assert!(Curve::EaseInOut.apply(250) < 250);
        assert!(Curve::EaseInOut.apply(750) > 750);
    }

    #[test]
    fn test_curves_monotonic() {
        for curve in [Curve::Linear, Curve::EaseIn, Curve::EaseOut, Curve::EaseInOut] {
            let mut last = 0;
            for t in (0..=1000).step_by(10) {
                let v = curve.apply(t);
                assert!(v >= last);
                last = v;
            }
        }
    }

    #[test]
    fn test_frame_interpolation() {
        let slide = SlideAnimation::default();
        assert_eq!(slide.frame_at(0), slide.from);
        assert_eq!(slide.frame_at(125), Rect::new(-5, 0, 139, 20));
        assert_eq!(slide.frame_at(250), slide.to);
        assert_eq!(slide.frame_at(1000), slide.to);
    }

    #[test]
    fn test_frame_long_after_completion() {
        let slide = SlideAnimation::default();
        assert_eq!(slide.frame_at(5_000_000), slide.to);
        assert_eq!(slide.frame_at(u32::MAX), slide.to);
    }

    #[test]
    fn test_extreme_offset_saturates() {
        let slide = SlideAnimation::battery_strip(250, i16::MIN);
        assert_eq!(slide.to.x, i16::MAX);
        assert_eq!(slide.to.width, i16::MAX);

        let slide = SlideAnimation::battery_strip(250, i16::MAX);
        assert_eq!(slide.to.x, -i16::MAX);
        assert_eq!(slide.to.width, SCREEN_WIDTH - i16::MAX);
    }

    #[test]
    fn test_completion() {
        let slide = SlideAnimation::default();
        assert!(!slide.is_complete(249));
        assert!(slide.is_complete(250));
    }
}
