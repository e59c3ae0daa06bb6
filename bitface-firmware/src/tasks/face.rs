//! Face task
//!
//! Owns the update scheduler, the host bindings, the LCD and the
//! framebuffer. Ticks, charge changes and slide frames are handled one at
//! a time, so the scheduler needs no locking.

use defmt::*;
use embassy_futures::select::{select3, Either3};
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::{RTC, SPI0};
use embassy_rp::rtc::Rtc;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::{Delay, Timer};

use bitface_core::config::FaceConfig;
use bitface_core::scheduler::UpdateScheduler;
use bitface_core::state::ClockReading;
use bitface_display::{DotSurface, FrameBuffer, Ls013};

use crate::channels::CHARGE_SIGNAL;
use crate::host::{FirmwareHost, SlideHandle, SlideStatus};
use crate::tasks::tick::TICK_SIGNAL;

/// Slide frame interval in milliseconds
pub const FRAME_INTERVAL_MS: u64 = 25;

/// The board's memory LCD
pub type Lcd = Ls013<Spi<'static, SPI0, Blocking>, Output<'static>, Output<'static>, Output<'static>, Delay>;

#[embassy_executor::task]
pub async fn face_task(
    mut lcd: Lcd,
    rtc: Rtc<'static, RTC>,
    framebuffer: &'static mut FrameBuffer,
    config: FaceConfig,
    initial_time: ClockReading,
) {
    info!("Face task started");

    if let Err(e) = lcd.init() {
        error!("LCD init failed: {:?}", Debug2Format(&e));
    }

    let mut host = FirmwareHost::new(rtc, initial_time);
    let mut scheduler: UpdateScheduler<SlideHandle> = UpdateScheduler::new(config);
    scheduler.start(&mut host);

    loop {
        if host.take_dirty() {
            render(&scheduler, &mut host, &mut lcd, framebuffer);
        }

        match select3(
            TICK_SIGNAL.wait(),
            CHARGE_SIGNAL.wait(),
            next_slide_frame(host.slide_scheduled()),
        )
        .await
        {
            Either3::First(()) => {
                scheduler.on_tick(&mut host);

                if let Err(e) = lcd.toggle_extcomin() {
                    warn!("EXTCOMIN toggle failed: {:?}", Debug2Format(&e));
                }
            }

            Either3::Second(state) => {
                scheduler.on_charge_state_changed(&mut host, state);
            }

            Either3::Third(()) => match host.poll_slide() {
                SlideStatus::Stopped { finished } => {
                    let outcome = scheduler.on_animation_stopped(&mut host, finished);
                    trace!("Slide stopped: {}", outcome);
                    // Frame with the strip back at rest
                    host.mark_dirty();
                }
                SlideStatus::Moving | SlideStatus::Idle => {}
            },
        }
    }
}

/// Wait for the next slide frame, or forever when nothing slides
async fn next_slide_frame(scheduled: bool) {
    if scheduled {
        Timer::after_millis(FRAME_INTERVAL_MS).await;
    } else {
        core::future::pending::<()>().await;
    }
}

/// Compose, paint and flush one frame
///
/// A failed flush leaves the changed lines marked, so the next frame
/// retries them.
fn render(
    scheduler: &UpdateScheduler<SlideHandle>,
    host: &mut FirmwareHost,
    lcd: &mut Lcd,
    framebuffer: &mut FrameBuffer,
) {
    let frame = scheduler.compose(host);
    let strip = host.strip_origin();

    {
        let mut surface = DotSurface::new(framebuffer);
        frame
            .paint_with_strip(&mut surface, strip)
            .unwrap_or_else(|never| match never {});
    }

    match lcd.flush(framebuffer) {
        Ok(lines) => trace!("Flushed {} lines", lines),
        Err(e) => warn!("LCD flush failed: {:?}", Debug2Format(&e)),
    }
}
