//! Bitface - Binary Dot Watchface Firmware
//!
//! Main firmware binary for an RP2040 (Raspberry Pi Pico) driving a Sharp
//! LS013B7DH05 memory LCD. Hours, minutes and seconds are drawn as columns
//! of dots, one per bit, with the battery charge as a dot row on top.
//!
//! Pin assignments (Pico):
//! - SPI0 SCK GPIO18, MOSI GPIO19, LCD CS GPIO17
//! - LCD DISP GPIO20, EXTCOMIN GPIO21
//! - VSYS/3 on GPIO29 (ADC3), VBUS sense on GPIO24

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::rtc::{DateTime, DayOfWeek, Rtc};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use bitface_core::config::{parse_config, WatchConfig};
use bitface_display::{Config as LcdConfig, FrameBuffer, Ls013};

/// Embedded face configuration (compiled into firmware)
/// Edit face.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../face.toml");

mod channels;
mod host;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

// Framebuffer lives for the whole program and is too large for the task arena
static FRAMEBUFFER: StaticCell<FrameBuffer> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Bitface firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    info!(
        "Face config: charge_animation={}, theme={}",
        config.face.charge_animation, config.face.theme
    );

    // RTC starts from the configured time; there is no backup domain
    let mut rtc = Rtc::new(p.RTC);
    let start = DateTime {
        year: 2024,
        month: 1,
        day: 1,
        day_of_week: DayOfWeek::Monday,
        hour: config.initial_time.hour(),
        minute: config.initial_time.minute(),
        second: config.initial_time.second(),
    };
    if let Err(e) = rtc.set_datetime(start) {
        error!("RTC set failed: {:?}", Debug2Format(&e));
    }

    info!("RTC initialized");

    // Memory LCD on SPI0, mode 0, CS active high
    let lcd_config = LcdConfig::default();
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = lcd_config.spi_hz;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);

    let lcd = Ls013::new(
        spi,
        Output::new(p.PIN_17, Level::Low),
        Output::new(p.PIN_20, Level::Low),
        Output::new(p.PIN_21, Level::Low),
        Delay,
        lcd_config,
    );
    let framebuffer = FRAMEBUFFER.init(FrameBuffer::new());

    info!("LCD initialized");

    // Battery sensing
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let vsys = Channel::new_pin(p.PIN_29, Pull::None);
    let vbus = Input::new(p.PIN_24, Pull::None);

    info!("ADC initialized");

    // Spawn tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner
        .spawn(tasks::battery_task(adc, vsys, vbus, tasks::BatteryConfig::default()))
        .unwrap();
    spawner
        .spawn(tasks::face_task(
            lcd,
            rtc,
            framebuffer,
            config.face,
            config.initial_time,
        ))
        .unwrap();

    info!("All tasks spawned, firmware running");
}

/// Parse the embedded face.toml
///
/// build.rs already validated it, so failure means the two parsers
/// disagree. Fall back to defaults rather than refuse to boot.
fn load_config() -> WatchConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {}", e);
            error!("Using default configuration");
            WatchConfig::default()
        }
    }
}
