//! Face host on the RP2040
//!
//! Binds the face's host traits to the RTC, the battery task's latest
//! sample and an embassy-time driven slide.

use defmt::*;
use embassy_rp::peripherals::RTC;
use embassy_rp::rtc::Rtc;
use embassy_time::Instant;

use bitface_core::animation::SlideAnimation;
use bitface_core::render::Point;
use bitface_core::state::{ChargeState, ClockReading, ReadingError};
use bitface_core::traits::{AnimationHost, BatteryMonitor, ClockSource, RedrawRequest};

use crate::channels::latest_charge;

/// Handle of one scheduled slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub struct SlideHandle(u32);

/// Where the current slide stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum SlideStatus {
    /// No slide scheduled
    Idle,
    /// Slide in progress
    Moving,
    /// Slide over, waiting to be released
    Stopped { finished: bool },
}

struct RunningSlide {
    handle: SlideHandle,
    animation: SlideAnimation,
    started: Instant,
    cancelled: bool,
}

impl RunningSlide {
    fn elapsed_ms(&self) -> u32 {
        self.started.elapsed().as_millis().min(u64::from(u32::MAX)) as u32
    }
}

pub struct FirmwareHost {
    rtc: Rtc<'static, RTC>,
    last_reading: ClockReading,
    dirty: bool,
    slide: Option<RunningSlide>,
    next_handle: u32,
}

impl FirmwareHost {
    pub fn new(rtc: Rtc<'static, RTC>, initial: ClockReading) -> Self {
        Self {
            rtc,
            last_reading: initial,
            dirty: false,
            slide: None,
            next_handle: 1,
        }
    }

    /// Consume a pending redraw request
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }

    pub fn slide_scheduled(&self) -> bool {
        self.slide.is_some()
    }

    /// Step the slide, requesting a redraw while it moves
    pub fn poll_slide(&mut self) -> SlideStatus {
        let Some(slide) = &self.slide else {
            return SlideStatus::Idle;
        };

        if slide.cancelled {
            return SlideStatus::Stopped { finished: false };
        }

        if slide.animation.is_complete(slide.elapsed_ms()) {
            return SlideStatus::Stopped { finished: true };
        }

        self.dirty = true;
        SlideStatus::Moving
    }

    /// Top-left corner of the battery strip right now
    pub fn strip_origin(&self) -> Point {
        match &self.slide {
            Some(slide) => {
                let rect = slide.animation.frame_at(slide.elapsed_ms());
                Point::new(rect.x, rect.y)
            }
            None => Point::new(0, 0),
        }
    }
}

impl ClockSource for FirmwareHost {
    fn now(&mut self) -> ClockReading {
        let reading = self
            .rtc
            .now()
            .map_err(|e| {
                warn!("RTC read failed: {:?}", Debug2Format(&e));
                ReadingError::Unavailable
            })
            .and_then(|dt| ClockReading::new(dt.hour, dt.minute, dt.second));

        // Keep showing the last good time rather than a bogus one
        match reading {
            Ok(reading) => self.last_reading = reading,
            Err(e) => debug!("Keeping last clock reading: {}", e),
        }
        self.last_reading
    }
}

impl BatteryMonitor for FirmwareHost {
    fn peek(&mut self) -> ChargeState {
        latest_charge().unwrap_or_default()
    }
}

impl AnimationHost for FirmwareHost {
    type Handle = SlideHandle;

    fn schedule(&mut self, slide: &SlideAnimation) -> SlideHandle {
        let handle = SlideHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);

        if let Some(old) = self.slide.replace(RunningSlide {
            handle,
            animation: *slide,
            started: Instant::now(),
            cancelled: false,
        }) {
            warn!("Slide {} replaced before release", old.handle);
        }

        trace!("Slide {} scheduled", handle);
        handle
    }

    fn destroy(&mut self, handle: SlideHandle) {
        match &self.slide {
            Some(slide) if slide.handle == handle => {
                self.slide = None;
                trace!("Slide {} released", handle);
            }
            _ => warn!("Release of unknown slide {}", handle),
        }
    }

    fn cancel(&mut self) {
        if let Some(slide) = &mut self.slide {
            slide.cancelled = true;
        }
    }
}

impl RedrawRequest for FirmwareHost {
    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
