//! Test doubles for the host traits

use core::convert::Infallible;

use crate::animation::SlideAnimation;
use crate::render::{Color, Point};
use crate::state::{ChargeState, ClockReading};
use crate::traits::{AnimationHost, BatteryMonitor, ClockSource, DrawSurface, RedrawRequest};

/// Host that counts every call made into it
///
/// Animation handles are sequence numbers starting at 1.
#[derive(Debug)]
pub struct MockHost {
    pub clock: ClockReading,
    pub battery: ChargeState,
    pub scheduled: u32,
    pub destroyed: u32,
    pub cancel_requests: u32,
    pub redraws: u32,
    pub peeks: u32,
    pub last_slide: Option<SlideAnimation>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            clock: ClockReading::MIDNIGHT,
            battery: ChargeState::discharging(100),
            scheduled: 0,
            destroyed: 0,
            cancel_requests: 0,
            redraws: 0,
            peeks: 0,
            last_slide: None,
        }
    }

    /// Animations scheduled and not yet destroyed
    pub fn live_animations(&self) -> u32 {
        self.scheduled - self.destroyed
    }
}

impl ClockSource for MockHost {
    fn now(&mut self) -> ClockReading {
        self.clock
    }
}

impl BatteryMonitor for MockHost {
    fn peek(&mut self) -> ChargeState {
        self.peeks += 1;
        self.battery
    }
}

impl AnimationHost for MockHost {
    type Handle = u32;

    fn schedule(&mut self, slide: &SlideAnimation) -> u32 {
        self.scheduled += 1;
        self.last_slide = Some(*slide);
        self.scheduled
    }

    fn destroy(&mut self, handle: u32) {
        assert!(handle >= 1 && handle <= self.scheduled, "unknown handle {handle}");
        self.destroyed += 1;
    }

    fn cancel(&mut self) {
        self.cancel_requests += 1;
    }
}

impl RedrawRequest for MockHost {
    fn mark_dirty(&mut self) {
        self.redraws += 1;
    }
}

/// Surface that records what was painted
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub cleared: u32,
    pub background: Option<Color>,
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    pub filled: u32,
    pub outlined: u32,
    pub circles: Vec<(Point, u8, bool)>,
}

impl DrawSurface for RecordingSurface {
    type Error = Infallible;

    fn clear(&mut self, color: Color) -> Result<(), Infallible> {
        self.cleared += 1;
        self.background = Some(color);
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = Some(color);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = Some(color);
    }

    fn fill_circle(&mut self, center: Point, radius: u8) -> Result<(), Infallible> {
        self.filled += 1;
        self.circles.push((center, radius, true));
        Ok(())
    }

    fn draw_circle(&mut self, center: Point, radius: u8) -> Result<(), Infallible> {
        self.outlined += 1;
        self.circles.push((center, radius, false));
        Ok(())
    }
}
